//! Client configuration: where the two backend services live and which
//! gallery variant to run.
//!
//! Defaults come from the build environment (`API_BASE_URL`,
//! `PICTURES_BASE_URL`). A page can override them by defining
//! `window.characterClientConfig` before the wasm module loads; see
//! [`load_from_window`].

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::constants::{ALL_CHARACTERS_PATH, CONFIG_GLOBAL, DEFAULT_API_BASE_URL, DEFAULT_PICTURES_BASE_URL};
use crate::utils::normalize_base_url;

thread_local! {
    static CLIENT_CONFIG: RefCell<ClientConfig> = RefCell::new(ClientConfig::default());
}

/// API route configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiConfig {
    /// Auth + character CRUD service.
    api_base_url: String,
    /// Service serving `/api/characters/pictures`.
    pictures_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(
            option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL),
            option_env!("PICTURES_BASE_URL").unwrap_or(DEFAULT_PICTURES_BASE_URL),
        )
    }
}

impl ApiConfig {
    pub fn new(api_base_url: &str, pictures_base_url: &str) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url),
            pictures_base_url: normalize_base_url(pictures_base_url),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn pictures_base_url(&self) -> &str {
        &self.pictures_base_url
    }

    /// Full URL on the main API for a path starting with `/`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    pub fn pictures_url(&self, path: &str) -> String {
        format!("{}{}", self.pictures_base_url, path)
    }

    fn normalized(self) -> Self {
        Self::new(&self.api_base_url, &self.pictures_base_url)
    }
}

/// How picture entries are matched with detail records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinPolicy {
    /// Match on `id` when both entries carry one, otherwise on `name`.
    #[default]
    PreferId,
    /// Match on exact `name` equality only.
    NameOnly,
}

/// Switches between the two observed gallery behaviours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryOptions {
    /// Show "Unknown" for missing details instead of `undefined`.
    pub show_fallback_text: bool,
    /// Render edit / delete actions on each card.
    pub allow_mutations: bool,
    /// Path of the authenticated details listing.
    pub details_path: String,
    pub join_policy: JoinPolicy,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            show_fallback_text: true,
            allow_mutations: true,
            details_path: ALL_CHARACTERS_PATH.to_string(),
            join_policy: JoinPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub gallery: GalleryOptions,
}

impl ClientConfig {
    fn normalized(mut self) -> Self {
        self.api = self.api.normalized();
        if !self.gallery.details_path.starts_with('/') {
            self.gallery.details_path = format!("/{}", self.gallery.details_path);
        }
        self
    }
}

/// Replace the active configuration.
pub fn install(config: ClientConfig) {
    let config = config.normalized();
    tracing::debug!(?config, "client config installed");
    CLIENT_CONFIG.with(|cell| *cell.borrow_mut() = config);
}

/// Snapshot of the active configuration.
pub fn current() -> ClientConfig {
    CLIENT_CONFIG.with(|cell| cell.borrow().clone())
}

/// Install the configuration object found at `window.characterClientConfig`,
/// e.g. `{ api: { apiBaseUrl: "..." }, gallery: { allowMutations: false } }`.
/// Missing keys keep their defaults; no object keeps the build defaults.
pub fn load_from_window() -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))?;
    if value.is_undefined() || value.is_null() {
        tracing::debug!("no runtime client config, using build defaults");
        return Ok(());
    }

    let config: ClientConfig = serde_wasm_bindgen::from_value(value)?;
    install(config);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_gallery_is_the_full_featured_variant() {
        let options = GalleryOptions::default();
        assert!(options.show_fallback_text);
        assert!(options.allow_mutations);
        assert_eq!(options.details_path, "/api/all_characters");
        assert_eq!(options.join_policy, JoinPolicy::PreferId);
    }

    #[test]
    fn urls_are_joined_without_double_slashes() {
        let api = ApiConfig::new("https://api.example.com/", "https://img.example.com");
        assert_eq!(api.api_url("/api/login"), "https://api.example.com/api/login");
        assert_eq!(
            api.pictures_url("/api/characters/pictures"),
            "https://img.example.com/api/characters/pictures"
        );
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: ClientConfig = serde_json::from_value(json!({
            "gallery": { "showFallbackText": false, "allowMutations": false, "joinPolicy": "name_only" }
        }))
        .unwrap();

        assert!(!config.gallery.show_fallback_text);
        assert!(!config.gallery.allow_mutations);
        assert_eq!(config.gallery.join_policy, JoinPolicy::NameOnly);
        assert_eq!(config.gallery.details_path, "/api/all_characters");
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn installed_config_is_normalized() {
        let config: ClientConfig = serde_json::from_value(json!({
            "api": { "apiBaseUrl": "http://backend:5000/", "picturesBaseUrl": "http://pictures:5001/" },
            "gallery": { "detailsPath": "api/characters" }
        }))
        .unwrap();
        install(config);

        let active = current();
        assert_eq!(active.api.api_base_url(), "http://backend:5000");
        assert_eq!(active.api.pictures_base_url(), "http://pictures:5001");
        assert_eq!(active.gallery.details_path, "/api/characters");

        install(ClientConfig::default());
    }
}
