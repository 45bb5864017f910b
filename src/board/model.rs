/**
 * Board Data Model
 *
 * This module defines the nested board document structure: a board owns an
 * ordered sequence of lists, each list owns an ordered sequence of cards.
 *
 * # Wire Format
 *
 * All types serialize with camelCase field names to match the client
 * contract (`subTitle`, `userId`). Optional card fields are omitted from
 * the JSON when unset so a card that never had a description round-trips
 * without one.
 *
 * # Identity
 *
 * Boards and users are identified by server-generated UUIDs. List and
 * card IDs are caller-assigned strings: the client creates cards locally
 * and ships the whole list sequence back on update, so the server never
 * generates a card ID. Card IDs are assumed (not enforced) to be unique
 * across a board.
 */

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Card difficulty rating
///
/// The only accepted values are `easy`, `medium` and `hard`; anything else
/// is rejected by `FromStr` and the card update carrying it is aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Error returned when parsing an unrecognized difficulty value
#[derive(Debug, Error)]
#[error("invalid difficulty: {0}")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(ParseDifficultyError(other.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(s)
    }
}

/// A single task card
///
/// Cards live inside exactly one list inside exactly one board; there is
/// no cross-board card reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Client-assigned card ID
    pub id: String,
    /// Card title
    pub title: String,
    /// Optional sub-title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional difficulty rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

/// A named stage/column holding an ordered sequence of cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardList {
    /// List ID, unique within its board (not globally)
    pub id: String,
    /// List title, also the key in the progress report
    pub title: String,
    /// Ordered cards
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// A user's top-level task container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Server-generated board ID
    pub id: Uuid,
    /// Owning user ID
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Favorite/pin flag
    pub starred: bool,
    /// Ordered lists
    pub lists: Vec<BoardList>,
}

impl Board {
    /// Create a new board with the canonical empty-list template
    ///
    /// Every board starts with the three stage lists `To Do`,
    /// `In Progress` and `Done`, each with an empty card sequence.
    pub fn new(user_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            starred: false,
            lists: default_lists(),
        }
    }
}

/// The canonical three-list template for a fresh board
pub fn default_lists() -> Vec<BoardList> {
    vec![
        BoardList {
            id: "list1".to_string(),
            title: "To Do".to_string(),
            cards: Vec::new(),
        },
        BoardList {
            id: "list2".to_string(),
            title: "In Progress".to_string(),
            cards: Vec::new(),
        },
        BoardList {
            id: "list3".to_string(),
            title: "Done".to_string(),
            cards: Vec::new(),
        },
    ]
}

/// An `{id, name}` projection of a board, used by the starred and search
/// listings where the nested lists are not needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub id: Uuid,
    pub name: String,
}

/// Completion progress over one board
///
/// `done_cards` counts cards in every list whose title contains the
/// case-insensitive substring "done". The field names are snake_case on
/// the wire; this matches the report contract the client renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Total cards across all lists
    pub total_cards: usize,
    /// Cards sitting in a "done" list
    pub done_cards: usize,
    /// `done_cards / total_cards * 100`, 0 when the board is empty
    pub progress_percentage: f64,
    /// Card count per list title
    pub list_report: HashMap<String, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_difficulty_parses_allowed_values() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_rejects_unknown_values() {
        assert!("extreme".parse::<Difficulty>().is_err());
        assert!("EASY".parse::<Difficulty>().is_err());
        assert!("".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn test_new_board_uses_template() {
        let user_id = Uuid::new_v4();
        let board = Board::new(user_id, "My First Board");

        assert_eq!(board.user_id, user_id);
        assert_eq!(board.name, "My First Board");
        assert!(!board.starred);
        let titles: Vec<&str> = board.lists.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["To Do", "In Progress", "Done"]);
        assert!(board.lists.iter().all(|l| l.cards.is_empty()));
    }

    #[test]
    fn test_card_wire_format() {
        let card = Card {
            id: "card-1".to_string(),
            title: "Read chapter 3".to_string(),
            sub_title: Some("Linear algebra".to_string()),
            description: None,
            difficulty: Some(Difficulty::Hard),
        };

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "card-1",
                "title": "Read chapter 3",
                "subTitle": "Linear algebra",
                "difficulty": "hard",
            })
        );
    }

    #[test]
    fn test_card_deserializes_missing_optionals() {
        let card: Card =
            serde_json::from_str(r#"{"id": "c1", "title": "Revise notes"}"#).unwrap();
        assert_eq!(card.sub_title, None);
        assert_eq!(card.description, None);
        assert_eq!(card.difficulty, None);
    }
}
