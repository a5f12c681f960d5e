//! Gallery view model: one [`CharacterCard`] per picture entry, with display
//! fields joined in from the details listing.

use std::collections::HashMap;

use crate::config::JoinPolicy;
use crate::constants::{DEFAULT_IMAGE_URL, FALLBACK_TEXT, MISSING_VALUE_TEXT};
use crate::models::{CharacterPicture, CharacterRecord, CharacterUpdate};

/// What a card shows for a field the details listing did not provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFallback {
    /// "Unknown"
    Placeholder,
    /// Literal `undefined`, the raw rendering of a missing value.
    Undefined,
}

impl FieldFallback {
    pub fn from_show_fallback_text(show: bool) -> Self {
        if show {
            Self::Placeholder
        } else {
            Self::Undefined
        }
    }

    fn text(self) -> &'static str {
        match self {
            Self::Placeholder => FALLBACK_TEXT,
            Self::Undefined => MISSING_VALUE_TEXT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterCard {
    /// Identity of the matched details record; `None` when nothing matched.
    pub id: Option<u64>,
    pub name: String,
    pub image_url: Option<String>,
    pub age: Option<i64>,
    pub role: Option<String>,
    pub house: Option<String>,
}

impl CharacterCard {
    pub fn image_src(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_IMAGE_URL)
    }

    pub fn image_alt(&self) -> String {
        format!("{}'s Image", self.name)
    }

    pub fn age_text(&self, fallback: FieldFallback) -> String {
        display(self.age.map(|age| age.to_string()).as_deref(), fallback)
    }

    pub fn role_text(&self, fallback: FieldFallback) -> String {
        display(self.role.as_deref(), fallback)
    }

    pub fn house_text(&self, fallback: FieldFallback) -> String {
        display(self.house.as_deref(), fallback)
    }

    /// Apply a successful update so the card shows what the server now holds.
    pub fn apply_update(&mut self, update: &CharacterUpdate) {
        self.name = update.name.clone();
        self.age = update.age;
        self.role = update.role.clone();
        self.house = update.house.clone();
    }
}

fn display(value: Option<&str>, fallback: FieldFallback) -> String {
    match (value, fallback) {
        (Some(v), FieldFallback::Placeholder) if !v.is_empty() => v.to_string(),
        (Some(v), FieldFallback::Undefined) => v.to_string(),
        _ => fallback.text().to_string(),
    }
}

/// Join the two listings. Later details entries win on duplicate keys.
pub fn merge_cards(
    pictures: Vec<CharacterPicture>,
    details: Vec<CharacterRecord>,
    policy: JoinPolicy,
) -> Vec<CharacterCard> {
    let mut by_name: HashMap<&str, &CharacterRecord> = HashMap::new();
    let mut by_id: HashMap<u64, &CharacterRecord> = HashMap::new();
    for record in &details {
        if let Some(name) = record.name.as_deref() {
            by_name.insert(name, record);
        }
        if let Some(id) = record.id {
            by_id.insert(id, record);
        }
    }

    pictures
        .into_iter()
        .map(|picture| {
            let name = picture.name.unwrap_or_default();
            let by_identity = match policy {
                JoinPolicy::PreferId => picture.id.and_then(|id| by_id.get(&id).copied()),
                JoinPolicy::NameOnly => None,
            };
            let matched = by_identity.or_else(|| by_name.get(name.as_str()).copied());

            CharacterCard {
                id: matched.and_then(|r| r.id),
                image_url: picture.image_url,
                age: matched.and_then(|r| r.age),
                role: matched.and_then(|r| r.role.clone()),
                house: matched.and_then(|r| r.house.clone()),
                name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picture(name: &str, image: &str) -> CharacterPicture {
        CharacterPicture {
            id: None,
            name: Some(name.into()),
            image_url: Some(image.into()),
        }
    }

    fn record(id: u64, name: &str, age: Option<i64>, role: &str, house: &str) -> CharacterRecord {
        CharacterRecord {
            id: Some(id),
            name: Some(name.into()),
            age,
            role: Some(role.into()),
            house: Some(house.into()),
            ..Default::default()
        }
    }

    #[test]
    fn matching_name_fills_in_details() {
        let cards = merge_cards(
            vec![picture("A", "x")],
            vec![record(1, "A", Some(30), "Seeker", "Gryffindor")],
            JoinPolicy::PreferId,
        );
        let card = &cards[0];
        let fallback = FieldFallback::Placeholder;
        assert_eq!(card.id, Some(1));
        assert_eq!(card.image_src(), "x");
        assert_eq!(card.age_text(fallback), "30");
        assert_eq!(card.role_text(fallback), "Seeker");
        assert_eq!(card.house_text(fallback), "Gryffindor");
    }

    #[test]
    fn unmatched_picture_uses_fallback_text() {
        let cards = merge_cards(vec![picture("B", "y")], vec![], JoinPolicy::PreferId);
        let card = &cards[0];
        assert_eq!(card.id, None);
        assert_eq!(card.age_text(FieldFallback::Placeholder), "Unknown");
        assert_eq!(card.role_text(FieldFallback::Placeholder), "Unknown");
        assert_eq!(card.house_text(FieldFallback::Undefined), "undefined");
    }

    #[test]
    fn one_card_per_picture_in_picture_order() {
        let cards = merge_cards(
            vec![picture("C", "c"), picture("A", "a"), picture("B", "b")],
            vec![record(1, "A", None, "r", "h")],
            JoinPolicy::NameOnly,
        );
        let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn duplicate_names_resolve_to_the_last_record() {
        let cards = merge_cards(
            vec![picture("Jon", "j")],
            vec![
                record(1, "Jon", Some(17), "Steward", "Stark"),
                record(2, "Jon", Some(23), "King", "Targaryen"),
            ],
            JoinPolicy::NameOnly,
        );
        assert_eq!(cards[0].id, Some(2));
        assert_eq!(cards[0].house.as_deref(), Some("Targaryen"));
    }

    #[test]
    fn id_join_wins_over_a_renamed_entry() {
        let mut renamed = picture("Daenerys Targaryen", "d");
        renamed.id = Some(5);
        let details = vec![
            record(5, "Daenerys Stormborn", Some(16), "Queen", "Targaryen"),
            record(9, "Daenerys Targaryen", Some(99), "Impostor", "None"),
        ];

        let preferred = merge_cards(vec![renamed.clone()], details.clone(), JoinPolicy::PreferId);
        assert_eq!(preferred[0].id, Some(5));

        let by_name = merge_cards(vec![renamed], details, JoinPolicy::NameOnly);
        assert_eq!(by_name[0].id, Some(9));
    }

    #[test]
    fn missing_image_uses_default() {
        let mut card = CharacterCard::default();
        assert_eq!(card.image_src(), "static/default.jpg");
        card.image_url = Some(String::new());
        assert_eq!(card.image_src(), "static/default.jpg");
    }

    #[test]
    fn age_zero_is_a_real_age() {
        let card = CharacterCard {
            age: Some(0),
            ..Default::default()
        };
        assert_eq!(card.age_text(FieldFallback::Placeholder), "0");
    }

    #[test]
    fn empty_strings_count_as_missing_only_with_placeholder() {
        let card = CharacterCard {
            role: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(card.role_text(FieldFallback::Placeholder), "Unknown");
        assert_eq!(card.role_text(FieldFallback::Undefined), "");
    }

    #[test]
    fn apply_update_replaces_display_fields() {
        let mut card = CharacterCard {
            id: Some(3),
            name: "Sam".into(),
            age: Some(20),
            ..Default::default()
        };
        card.apply_update(&CharacterUpdate {
            name: "Samwell".into(),
            age: Some(21),
            role: Some("Maester".into()),
            house: Some("Tarly".into()),
        });
        assert_eq!(card.name, "Samwell");
        assert_eq!(card.age, Some(21));
        assert_eq!(card.role.as_deref(), Some("Maester"));
        assert_eq!(card.id, Some(3));
    }
}
