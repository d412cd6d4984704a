use std::fmt;

use serde::Deserialize;

/// Image variants Scryfall publishes for a card or card face
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
    pub png: Option<String>,
    pub art_crop: Option<String>,
    pub border_crop: Option<String>,
}

impl ImageUris {
    /// Variants in the order the horde prefers them
    pub fn by_preference(&self) -> [Option<&str>; 6] {
        [
            self.small.as_deref(),
            self.normal.as_deref(),
            self.png.as_deref(),
            self.large.as_deref(),
            self.art_crop.as_deref(),
            self.border_crop.as_deref(),
        ]
    }
}

/// One printed face of a multi-faced card
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CardFace {
    #[serde(default)]
    pub name: String,
    pub type_line: Option<String>,
    pub mana_cost: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub image_uris: Option<ImageUris>,
}

/// A card record as returned by the card-search API.
///
/// Only the fields the horde displays are kept; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub type_line: Option<String>,
    pub mana_cost: Option<String>,
    pub oracle_text: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub image_uris: Option<ImageUris>,
    pub card_faces: Option<Vec<CardFace>>,
}

impl Card {
    pub fn faces(&self) -> &[CardFace] {
        self.card_faces.as_deref().unwrap_or_default()
    }

    /// Power/toughness as printed, falling back to the first face that has one
    pub fn power_toughness(&self) -> Option<String> {
        if let (Some(p), Some(t)) = (&self.power, &self.toughness) {
            return Some(format!("{}/{}", p, t));
        }
        self.faces().iter().find_map(|face| match (&face.power, &face.toughness) {
            (Some(p), Some(t)) => Some(format!("{}/{}", p, t)),
            _ => None,
        })
    }

    /// Type line, falling back to the faces joined the way the API joins them
    pub fn type_line(&self) -> Option<String> {
        if let Some(line) = &self.type_line {
            return Some(line.clone());
        }
        let lines: Vec<&str> = self
            .faces()
            .iter()
            .filter_map(|face| face.type_line.as_deref())
            .collect();
        if lines.is_empty() {
            None
        } else {
            Some(lines.join(" // "))
        }
    }

    pub fn is_token(&self) -> bool {
        self.type_line()
            .map(|line| line.contains("Token"))
            .unwrap_or(false)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "Unknown card")
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Paged list envelope returned by the search endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardList {
    #[serde(default)]
    pub data: Vec<Card>,
    #[serde(default)]
    pub has_more: bool,
    pub total_cards: Option<u32>,
}

/// Error object the API returns instead of a card or list
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub status: u16,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_card_ignores_unknown_fields() {
        let json = r#"{
            "object": "card",
            "id": "a1",
            "name": "Gravecrawler",
            "type_line": "Creature — Zombie",
            "power": "2",
            "toughness": "1",
            "legalities": {"vintage": "legal"},
            "image_uris": {"small": "https://img/s.jpg", "normal": "https://img/n.jpg"}
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.name, "Gravecrawler");
        assert_eq!(card.power_toughness().as_deref(), Some("2/1"));
        assert_eq!(
            card.image_uris.unwrap().small.as_deref(),
            Some("https://img/s.jpg")
        );
    }

    #[test]
    fn test_faces_fill_missing_fields() {
        let json = r#"{
            "name": "Delver of Secrets // Insectile Aberration",
            "card_faces": [
                {"name": "Delver of Secrets", "type_line": "Creature — Human Wizard", "power": "1", "toughness": "1"},
                {"name": "Insectile Aberration", "type_line": "Creature — Human Insect", "power": "3", "toughness": "2"}
            ]
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.faces().len(), 2);
        assert_eq!(card.power_toughness().as_deref(), Some("1/1"));
        assert_eq!(
            card.type_line().as_deref(),
            Some("Creature — Human Wizard // Creature — Human Insect")
        );
    }

    #[test]
    fn test_token_detection() {
        let token = Card {
            type_line: Some("Token Creature — Zombie".into()),
            ..Card::default()
        };
        let zombie = Card {
            type_line: Some("Creature — Zombie".into()),
            ..Card::default()
        };
        assert!(token.is_token());
        assert!(!zombie.is_token());
        assert!(!Card::default().is_token());
    }

    #[test]
    fn test_list_envelope() {
        let json = r#"{"object": "list", "total_cards": 2, "has_more": false,
            "data": [{"name": "Zombie"}, {"name": "Zombie Army"}]}"#;
        let list: CardList = serde_json::from_str(json).unwrap();

        assert_eq!(list.data.len(), 2);
        assert_eq!(list.total_cards, Some(2));
        assert_eq!(list.data[1].to_string(), "Zombie Army");
    }
}
