use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::types::NoteType;

/// Parsed YAML frontmatter for a note
///
/// quern reads vaults it does not own, so every field is optional and the
/// shapes people actually write must all deserialize: `aliases` and `tags`
/// may be a single string or a list, and an unrecognized `type` value means
/// untyped rather than unreadable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteFrontmatter {
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_note_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub note_type: Option<NoteType>,

    #[serde(
        default,
        deserialize_with = "lenient_string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,

    #[serde(
        default,
        deserialize_with = "lenient_string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub aliases: Vec<String>,

    #[serde(
        default,
        deserialize_with = "lenient_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,

    #[serde(
        default,
        deserialize_with = "lenient_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated: Option<DateTime<Utc>>,
}

impl NoteFrontmatter {
    pub fn with_type(mut self, note_type: NoteType) -> Self {
        self.note_type = Some(note_type);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }
}

/// Accept a bare string or a list of strings; anything else is not
/// alias/tag data and deserializes to empty rather than failing the note.
fn lenient_string_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_yaml::Value::String(s) => vec![s],
        serde_yaml::Value::Sequence(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_yaml::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Unknown or non-string `type` values mean the note is untyped
fn lenient_note_type<'de, D>(deserializer: D) -> std::result::Result<Option<NoteType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_yaml::Value::String(s) => s.parse::<NoteType>().ok(),
        _ => None,
    })
}

/// Dates come in whatever shape the authoring tool wrote; an unparseable
/// one degrades to absent instead of failing the note.
fn lenient_datetime<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(serde_yaml::from_value::<DateTime<Utc>>(value).ok())
}
