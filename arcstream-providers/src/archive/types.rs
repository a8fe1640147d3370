//! Internet Archive API Types
//!
//! Wire types for the advancedsearch and metadata JSON endpoints. The
//! archive's metadata is user-submitted and loosely shaped: list fields
//! arrive as scalars for single-value items, descriptions arrive as either a
//! string or a list of paragraphs, and numeric fields are sometimes strings.
//! The custom deserializers below absorb those shapes so one record type
//! covers all of them.

use serde::{Deserialize, Deserializer};

/// Response envelope of `advancedsearch.php?output=json`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub response: SearchBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchBody {
    #[serde(default)]
    pub docs: Vec<SearchDoc>,
    #[serde(default, rename = "numFound")]
    pub num_found: u64,
}

/// One search hit. Title is optional; callers fall back to the identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchDoc {
    pub identifier: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub mediatype: Option<String>,
}

/// Response of `GET /metadata/{identifier}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataResult {
    pub metadata: ItemMetadata,
    #[serde(default)]
    pub files: Vec<ArchiveFile>,
    pub dir: String,
    pub server: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemMetadata {
    pub identifier: String,
    #[serde(default)]
    pub mediatype: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub subject: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub creator: Vec<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// One file belonging to an item.
///
/// `original` links derivative files (thumbnails, transcodes) back to the
/// source file they were generated from.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveFile {
    pub name: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub length: Option<String>,
}

/// Accept either a scalar string or a list of strings.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
    })
}

/// Accept either a string or a list of paragraphs, joined with newlines.
fn string_or_list<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<StringOrList>::deserialize(deserializer)? {
        None => None,
        Some(StringOrList::One(value)) => Some(value),
        Some(StringOrList::Many(values)) => Some(values.join("\n")),
    })
}

/// Accept a string, an integer or a float, normalized to a string.
fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => None,
        Some(StringOrNumber::Text(value)) => Some(value),
        Some(StringOrNumber::Int(value)) => Some(value.to_string()),
        Some(StringOrNumber::Float(value)) => Some(value.to_string()),
    })
}
