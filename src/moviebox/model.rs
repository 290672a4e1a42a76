use crate::error::{MovieboxError, Result};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque handle the store assigns to a saved movie.
///
/// For the file store this is the document's file stem. It is never part of
/// the movie's JSON and never leaves the store through an export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// A fresh random identity. Random rather than sequential, since there is
    /// no central counter shared between writers.
    pub fn generate() -> Self {
        Self(format!("movie-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MovieId {
    type Err = MovieboxError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        // Accept a pasted file name as well as the bare stem
        let stem = trimmed.strip_suffix(".json").unwrap_or(trimmed);
        if stem.is_empty() {
            return Err(MovieboxError::Api("Movie id cannot be empty".to_string()));
        }
        Ok(Self(stem.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub director: String,
    pub year: i64,
    pub genre: String,
    pub duration: i64,
    pub rating: f64,
    #[serde(default, deserialize_with = "free_text")]
    pub description: String,
    #[serde(default, deserialize_with = "free_text")]
    pub cast: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub created_at: Option<String>,
}

/// Text form of a loosely typed JSON value. Strings are taken as they are,
/// anything else as its compact JSON.
fn text_of(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn free_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn optional_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(Value::deserialize(deserializer)?))
}

fn optional_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

impl MovieRecord {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        year: i64,
        genre: impl Into<String>,
        duration: i64,
        rating: f64,
    ) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            year,
            genre: genre.into(),
            duration,
            rating,
            description: String::new(),
            cast: String::new(),
            image_url: None,
            created_at: None,
        }
    }

    /// Key used to recognise the same movie across imports.
    pub fn dedup_key(&self) -> (&str, &str, i64) {
        (&self.title, &self.director, self.year)
    }

    pub fn has_poster(&self) -> bool {
        self.image_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// Sort key for listings. A missing timestamp is the empty string, which
    /// sorts below every real timestamp.
    pub fn created_at_key(&self) -> &str {
        self.created_at.as_deref().unwrap_or("")
    }

    /// Parses `created_at` for display. Accepts RFC 3339 and naive ISO-8601
    /// timestamps (read as UTC).
    pub fn created_at_time(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// A record together with the identity it is stored under.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredMovie {
    pub id: MovieId,
    pub record: MovieRecord,
}

/// Current time in the stored timestamp format.
///
/// Fixed-width UTC with microseconds, so lexical order is chronological.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Serializes one record as a stored document: a single-element array.
pub fn encode_document(record: &MovieRecord) -> Result<String> {
    serde_json::to_string_pretty(std::slice::from_ref(record)).map_err(MovieboxError::Serialization)
}

/// Decodes a stored document, which must hold exactly one record.
pub fn decode_document(text: &str) -> Result<MovieRecord> {
    let mut records: Vec<MovieRecord> = serde_json::from_str(text).map_err(MovieboxError::Parse)?;
    if records.len() != 1 {
        return Err(MovieboxError::Store(format!(
            "expected exactly one movie per document, found {}",
            records.len()
        )));
    }
    Ok(records.remove(0))
}

/// Serializes a combined export document.
pub fn encode_export(records: &[MovieRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(MovieboxError::Serialization)
}
