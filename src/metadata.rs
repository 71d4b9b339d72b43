//! Label extraction from embedded title markers.

use serde::Serialize;

use crate::patterns::{PARALLEL_MARKER, USER_STORY_MARKER};
use crate::sanitize::sanitize_title;

/// Labels recovered from a title's markers, plus the sanitized title.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedMetadata {
    pub title: String,
    pub labels: Vec<String>,
}

/// Pull structured labels out of a title's markers.
///
/// A `[P]` marker anywhere yields the `parallelizable` label once; every
/// `[US#]` occurrence yields its own label with the brackets stripped,
/// preserving the matched text. The returned title is the sanitized one.
///
/// ```
/// use taskcheck::metadata::extract_metadata;
///
/// let meta = extract_metadata("[P] [US1] Add feature");
/// assert_eq!(meta.title, "Add feature");
/// assert_eq!(meta.labels, vec!["parallelizable", "US1"]);
/// ```
pub fn extract_metadata(title: &str) -> ExtractedMetadata {
    let mut labels = Vec::new();

    if PARALLEL_MARKER.is_match(title) {
        labels.push("parallelizable".to_string());
    }

    for m in USER_STORY_MARKER.find_iter(title) {
        labels.push(m.as_str().trim_matches(['[', ']']).to_string());
    }

    ExtractedMetadata {
        title: sanitize_title(title),
        labels,
    }
}
