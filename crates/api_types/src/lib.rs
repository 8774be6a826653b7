use serde::{Deserialize, Serialize};

pub mod item {
    use std::fmt;

    use super::*;

    /// Server-assigned identifier of an item.
    ///
    /// JSON resource servers disagree on the representation: some emit
    /// numbers, others strings. Both are accepted and kept verbatim so the
    /// identifier can be echoed back in `/items/{id}`.
    #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum ItemId {
        Number(u64),
        Text(String),
    }

    impl fmt::Display for ItemId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Number(id) => write!(f, "{id}"),
                Self::Text(id) => f.write_str(id),
            }
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Item {
        pub id: ItemId,
        pub name: String,
        pub description: String,
    }

    impl Item {
        /// Returns the editable content of the item.
        pub fn draft(&self) -> ItemDraft {
            ItemDraft {
                name: self.name.clone(),
                description: self.description.clone(),
            }
        }
    }

    /// Item content without identity, used as request body for create and
    /// replace.
    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ItemDraft {
        pub name: String,
        pub description: String,
    }

    impl ItemDraft {
        /// Both fields present.
        ///
        /// Only the empty string counts as missing: whitespace is not
        /// trimmed, so `"   "` is accepted.
        pub fn is_complete(&self) -> bool {
            !self.name.is_empty() && !self.description.is_empty()
        }
    }
}

/// Error body returned by the resource server on failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::item::*;

    #[test]
    fn numeric_and_string_ids_are_both_accepted() {
        let numeric: Item =
            serde_json::from_str(r#"{"id":1,"name":"A","description":"a"}"#).unwrap();
        assert_eq!(numeric.id, ItemId::Number(1));

        let text: Item =
            serde_json::from_str(r#"{"id":"3f2a","name":"B","description":"b"}"#).unwrap();
        assert_eq!(text.id, ItemId::Text("3f2a".to_string()));
    }

    #[test]
    fn unknown_fields_from_server_are_ignored() {
        let item: Item = serde_json::from_str(
            r#"{"id":7,"name":"A","description":"a","createdAt":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(item.name, "A");
    }

    #[test]
    fn id_serializes_in_its_original_form() {
        assert_eq!(serde_json::to_string(&ItemId::Number(2)).unwrap(), "2");
        assert_eq!(
            serde_json::to_string(&ItemId::Text("x".to_string())).unwrap(),
            "\"x\""
        );
    }

    #[test]
    fn id_renders_as_path_segment() {
        assert_eq!(ItemId::Number(42).to_string(), "42");
        assert_eq!(ItemId::Text("abc".to_string()).to_string(), "abc");
    }

    #[test]
    fn draft_presence_check_does_not_trim() {
        let empty = ItemDraft {
            name: String::new(),
            description: "d".to_string(),
        };
        assert!(!empty.is_complete());

        let spaces = ItemDraft {
            name: "   ".to_string(),
            description: " ".to_string(),
        };
        assert!(spaces.is_complete());
    }
}
