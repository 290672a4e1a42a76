//! Validation of movie data before it reaches the store.
//!
//! Two entry points:
//! - [`validate_batch`] checks an untyped JSON upload (an array of movie
//!   objects) and is all-or-nothing: one bad element rejects the batch.
//! - [`validate_record`] checks a typed [`MovieRecord`] coming from the
//!   add/edit path, with the extra length and URL limits of that path.
//!
//! Batch rules, checked in order and stopping at the first failure:
//! - the top level is an array, and it is not empty
//! - every element is an object
//! - `title`, `director`, `year`, `genre`, `duration`, `rating` are present
//! - `title`, `director`, `genre` are non-empty after trimming
//! - `year` is an integer in 1895..=2030
//! - `duration` is a positive integer
//! - `rating` is a number in 0..=10
//!
//! Other keys are not checked. Optional fields are coerced to text when the
//! batch is decoded, see [`crate::model::MovieRecord`].

use crate::error::{MovieboxError, Result};
use crate::model::MovieRecord;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const MIN_YEAR: i64 = 1895;
pub const MAX_YEAR: i64 = 2030;
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_DIRECTOR_CHARS: usize = 100;
pub const MAX_GENRE_CHARS: usize = 100;

pub const VALID_MESSAGE: &str = "file is valid";

pub const REQUIRED_FIELDS: [&str; 6] = ["title", "director", "year", "genre", "duration", "rating"];
const TEXT_FIELDS: [&str; 3] = ["title", "director", "genre"];

/// Why an uploaded batch was rejected. Movie numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("must be an array of objects")]
    NotAnArray,

    #[error("file is empty")]
    Empty,

    #[error("element {index} must be an object")]
    NotAnObject { index: usize },

    #[error("missing required field '{field}' in movie {index}")]
    MissingField { field: &'static str, index: usize },

    #[error("field '{field}' in movie {index} must be non-empty text")]
    BlankText { field: &'static str, index: usize },

    #[error("field 'year' in movie {index} must be an integer between 1895 and 2030")]
    InvalidYear { index: usize },

    #[error("field 'duration' in movie {index} must be a positive integer")]
    InvalidDuration { index: usize },

    #[error("field 'rating' in movie {index} must be a number between 0 and 10")]
    InvalidRating { index: usize },
}

/// Why a single typed record was rejected on the add/edit path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("{0} must not be empty")]
    Blank(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("year must be between 1895 and 2030")]
    YearOutOfRange,

    #[error("duration must be positive")]
    NonPositiveDuration,

    #[error("rating must be between 0 and 10")]
    RatingOutOfRange,

    #[error("image_url must be an http(s) URL")]
    InvalidImageUrl,
}

/// Checks a whole candidate batch.
pub fn validate_batch(value: &Value) -> std::result::Result<(), ValidationError> {
    let items = value.as_array().ok_or(ValidationError::NotAnArray)?;
    if items.is_empty() {
        return Err(ValidationError::Empty);
    }

    for (i, item) in items.iter().enumerate() {
        let index = i + 1;
        let movie = item
            .as_object()
            .ok_or(ValidationError::NotAnObject { index })?;
        validate_candidate(movie, index)?;
    }

    Ok(())
}

fn validate_candidate(
    movie: &Map<String, Value>,
    index: usize,
) -> std::result::Result<(), ValidationError> {
    for field in REQUIRED_FIELDS {
        if !movie.contains_key(field) {
            return Err(ValidationError::MissingField { field, index });
        }
    }

    for field in TEXT_FIELDS {
        let non_blank = movie[field]
            .as_str()
            .is_some_and(|text| !text.trim().is_empty());
        if !non_blank {
            return Err(ValidationError::BlankText { field, index });
        }
    }

    // `as_i64` is None for floats (2021.0) and for booleans
    let year_ok = movie["year"]
        .as_i64()
        .is_some_and(|year| (MIN_YEAR..=MAX_YEAR).contains(&year));
    if !year_ok {
        return Err(ValidationError::InvalidYear { index });
    }

    if !movie["duration"].as_i64().is_some_and(|d| d > 0) {
        return Err(ValidationError::InvalidDuration { index });
    }

    let rating_ok = movie["rating"]
        .as_f64()
        .is_some_and(|r| (MIN_RATING..=MAX_RATING).contains(&r));
    if !rating_ok {
        return Err(ValidationError::InvalidRating { index });
    }

    Ok(())
}

/// `(ok, message)` form of [`validate_batch`].
pub fn validate(value: &Value) -> (bool, String) {
    match validate_batch(value) {
        Ok(()) => (true, VALID_MESSAGE.to_string()),
        Err(e) => (false, e.to_string()),
    }
}

/// Parses and validates JSON text, returning the parsed batch.
pub fn check_source(text: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(text).map_err(MovieboxError::Parse)?;
    validate_batch(&value)?;
    Ok(value)
}

/// Reads, parses and validates a JSON file, returning the parsed batch.
pub fn check_file(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(MovieboxError::Io)?;
    check_source(&text)
}

/// `(ok, message)` form of [`check_file`].
///
/// Read failures and malformed JSON get their own messages, both carrying the
/// underlying diagnostic.
pub fn validate_file(path: &Path) -> (bool, String) {
    match check_file(path) {
        Ok(_) => (true, VALID_MESSAGE.to_string()),
        Err(MovieboxError::Validation(e)) => (false, e.to_string()),
        Err(MovieboxError::Parse(e)) => (false, format!("invalid JSON: {}", e)),
        Err(MovieboxError::Io(e)) => (false, format!("could not read file: {}", e)),
        Err(e) => (false, e.to_string()),
    }
}

/// Checks a typed record before it is added or saved over an edit.
pub fn validate_record(record: &MovieRecord) -> std::result::Result<(), RecordError> {
    check_text("title", &record.title, MAX_TITLE_CHARS)?;
    check_text("director", &record.director, MAX_DIRECTOR_CHARS)?;
    check_text("genre", &record.genre, MAX_GENRE_CHARS)?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&record.year) {
        return Err(RecordError::YearOutOfRange);
    }
    if record.duration <= 0 {
        return Err(RecordError::NonPositiveDuration);
    }
    if !(MIN_RATING..=MAX_RATING).contains(&record.rating) {
        return Err(RecordError::RatingOutOfRange);
    }

    if let Some(image_url) = record.image_url.as_deref().filter(|u| !u.is_empty()) {
        let is_web_url = url::Url::parse(image_url)
            .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
            .unwrap_or(false);
        if !is_web_url {
            return Err(RecordError::InvalidImageUrl);
        }
    }

    Ok(())
}

fn check_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> std::result::Result<(), RecordError> {
    if value.trim().is_empty() {
        return Err(RecordError::Blank(field));
    }
    if value.chars().count() > max {
        return Err(RecordError::TooLong { field, max });
    }
    Ok(())
}
