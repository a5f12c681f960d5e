// Endpoint paths - these are the single source of truth for the backend contract
pub const LOGIN_PATH: &str = "/api/login";
pub const REGISTER_PATH: &str = "/api/register";
pub const CHARACTERS_PATH: &str = "/api/characters";
pub const ALL_CHARACTERS_PATH: &str = "/api/all_characters";
pub const PICTURES_PATH: &str = "/api/characters/pictures";

// Default service locations for local development
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_PICTURES_BASE_URL: &str = "http://localhost:5001";

// Global JS object read at start-up for runtime configuration
pub const CONFIG_GLOBAL: &str = "characterClientConfig";

// Navigation targets
pub const LOGIN_PAGE: &str = "/";
pub const GALLERY_PAGE: &str = "/characters";

// Local storage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

// Registration is only considered successful on this exact server message
pub const REGISTER_SUCCESS_MESSAGE: &str = "User registered successfully.";
pub const REGISTER_REDIRECT_DELAY_MS: u32 = 2000;

// Gallery display defaults
pub const FALLBACK_TEXT: &str = "Unknown";
pub const MISSING_VALUE_TEXT: &str = "undefined";
pub const DEFAULT_IMAGE_URL: &str = "static/default.jpg";

// User-facing messages
pub const MSG_REGISTER_SUCCESS: &str = "Registration successful! Redirecting to login...";
pub const MSG_REGISTER_FAILED: &str = "Registration failed. Please try again.";
pub const MSG_CHARACTER_ADDED: &str = "Character added successfully!";
pub const MSG_GALLERY_LOAD_ERROR: &str = "Error loading characters. Please try again later.";
pub const MSG_UPDATE_FAILED: &str = "Failed to update character. Please try again.";
pub const MSG_DELETE_FAILED: &str = "Failed to delete character. Please try again.";
pub const MSG_CONFIRM_DELETE: &str = "Are you sure you want to delete this character?";
pub const MSG_LOGIN_FAILED: &str = "Login failed.";
