//! Static menu catalogue rendered as menu cards.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single card in the menu section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCard {
    pub name: String,
    /// Unit price in rupiah.
    pub price: u64,
    pub image: String,
    #[serde(default)]
    pub description: String,
}

/// Complete menu data structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub cards: Vec<MenuCard>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate menu card: {0}")]
    Duplicate(String),
}

impl Menu {
    /// Parse the menu from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or two cards share a name,
    /// since card names double as cart line keys.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let menu: Self = serde_json::from_str(json)?;
        for (idx, card) in menu.cards.iter().enumerate() {
            if menu.cards[..idx].iter().any(|other| other.name == card.name) {
                return Err(CatalogError::Duplicate(card.name.clone()));
            }
        }
        Ok(menu)
    }

    /// Find a card by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&MenuCard> {
        self.cards.iter().find(|card| card.name == name)
    }

    /// Card titles in display order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(|card| card.name.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cards_with_optional_description() {
        let menu = Menu::from_json(
            r#"{"cards":[{"name":"Red Velvet","price":90000,"image":"img/rv.jpg"}]}"#,
        )
        .unwrap();
        assert_eq!(menu.cards.len(), 1);
        assert!(menu.cards[0].description.is_empty());
        assert_eq!(menu.find("Red Velvet").map(|c| c.price), Some(90_000));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = Menu::from_json(
            r#"{"cards":[
                {"name":"A","price":1,"image":"a"},
                {"name":"A","price":2,"image":"b"}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Duplicate(name) if name == "A"));
    }

    #[test]
    fn rejects_negative_prices() {
        assert!(
            Menu::from_json(r#"{"cards":[{"name":"A","price":-5,"image":"a"}]}"#).is_err()
        );
    }
}
