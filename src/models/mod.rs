use serde::{Deserialize, Serialize};

/// A child entry: one key/value row inside a section.
///
/// Fields carry no stable identity. During a drag gesture a field is named by
/// its `"<sectionIndex>-<fieldIndex>"` position at gesture start; that string
/// is recomputed on every render and never cached across mutations.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub(crate) struct Field {
    pub key: String,
    pub value: String,
}

impl Field {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// A parent entry: a keyed group holding an ordered list of fields.
///
/// `token` is assigned once at creation and survives reorders (identity is
/// independent of position). Seed documents may omit it; the loader assigns
/// fresh tokens for missing ones.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub(crate) struct Section {
    #[serde(default)]
    pub token: String,

    pub key: String,

    #[serde(default)]
    pub value: String,

    /// Missing in input JSON means an empty section.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Section {
    pub fn new(token: String, key: &str, value: &str, fields: Vec<Field>) -> Self {
        Self {
            token,
            key: key.to_string(),
            value: value.to_string(),
            fields,
        }
    }
}

/// Total field count across all sections.
///
/// Every drag-move operation must preserve this number; the resolver asserts
/// it after each move.
pub(crate) fn total_field_count(sections: &[Section]) -> usize {
    sections.iter().map(|s| s.fields.len()).sum()
}

/// Structurally independent copy of a snapshot.
///
/// `Section` owns all of its data, so a clone shares no mutable substructure
/// with the original. The sidebar mirror is rebuilt through this on every
/// store write.
pub(crate) fn deep_copy_sections(sections: &[Section]) -> Vec<Section> {
    sections.to_vec()
}

pub(crate) fn section_index_of_token(sections: &[Section], token: &str) -> Option<usize> {
    sections.iter().position(|s| s.token == token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_deserialize_without_fields() {
        let json = r#"{"key": "server", "value": "prod"}"#;
        let s: Section = serde_json::from_str(json).expect("section should parse");
        assert_eq!(s.key, "server");
        assert_eq!(s.value, "prod");
        assert!(s.fields.is_empty());
        assert!(s.token.is_empty());
    }

    #[test]
    fn test_deep_copy_is_structurally_independent() {
        let original = vec![Section::new(
            "t1".to_string(),
            "a",
            "",
            vec![Field::new("k", "v")],
        )];

        let mut copy = deep_copy_sections(&original);
        copy[0].fields[0].value = "changed".to_string();

        assert_eq!(original[0].fields[0].value, "v");
    }

    #[test]
    fn test_total_field_count() {
        let sections = vec![
            Section::new("a".to_string(), "a", "", vec![Field::new("x", "1")]),
            Section::new("b".to_string(), "b", "", vec![]),
            Section::new(
                "c".to_string(),
                "c",
                "",
                vec![Field::new("y", "2"), Field::new("z", "3")],
            ),
        ];
        assert_eq!(total_field_count(&sections), 3);
    }

    #[test]
    fn test_section_index_of_token() {
        let sections = vec![
            Section::new("alpha".to_string(), "a", "", vec![]),
            Section::new("beta".to_string(), "b", "", vec![]),
        ];
        assert_eq!(section_index_of_token(&sections, "beta"), Some(1));
        assert_eq!(section_index_of_token(&sections, "gamma"), None);
    }
}
