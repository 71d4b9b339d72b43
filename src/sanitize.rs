//! Title sanitization.

use crate::patterns::MARKER_PATTERNS;

/// Strip every known marker pattern from a title and trim the result.
///
/// Removals run in table order, each over the output of the previous one:
/// `[P]` markers, `[US#]` markers, a leading `T###` prefix, then any
/// remaining leading bracketed chunk. Total over all inputs; an empty or
/// marker-only title sanitizes to the empty string.
///
/// ```
/// use taskcheck::sanitize::sanitize_title;
///
/// assert_eq!(sanitize_title("[P] [US1] Add feature"), "Add feature");
/// assert_eq!(sanitize_title("T001 Setup project"), "Setup project");
/// ```
pub fn sanitize_title(title: &str) -> String {
    let mut out = title.to_string();
    for marker in MARKER_PATTERNS.iter() {
        out = marker
            .pattern
            .replace_all(&out, marker.replacement)
            .into_owned();
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_parallel_and_user_story_markers() {
        assert_eq!(sanitize_title("[P] [US1] Add feature"), "Add feature");
        assert_eq!(sanitize_title("[p] fix [us42] bug"), "fix  bug");
    }

    #[test]
    fn strips_task_number_prefix_only_at_start() {
        assert_eq!(sanitize_title("T001 Setup project"), "Setup project");
        assert_eq!(sanitize_title("t042 lowercase prefix"), "lowercase prefix");
        assert_eq!(sanitize_title("see T001 later"), "see T001 later");
    }

    #[test]
    fn strips_leading_bracket_after_prefix_removal() {
        assert_eq!(sanitize_title("T001 [x] do it"), "do it");
        assert_eq!(sanitize_title("[misc] do it"), "do it");
    }

    #[test]
    fn leading_bracket_removed_at_most_once() {
        assert_eq!(sanitize_title("[a] [b] rest"), "[b] rest");
        assert_eq!(sanitize_title("[a][b] rest"), "[b] rest");
    }

    #[test]
    fn untouched_titles_are_only_trimmed() {
        assert_eq!(sanitize_title("  plain title  "), "plain title");
        assert_eq!(sanitize_title("plain title"), "plain title");
    }

    #[test]
    fn empty_and_marker_only_titles_sanitize_to_empty() {
        assert_eq!(sanitize_title(""), "");
        assert_eq!(sanitize_title("[P]"), "");
        assert_eq!(sanitize_title("[P] [US3]"), "");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for title in [
            "[P] [US1] Add feature",
            "T001 [x] y",
            "T001 Setup project",
            "  spaced  ",
            "plain",
            "",
        ] {
            let once = sanitize_title(title);
            assert_eq!(sanitize_title(&once), once);
        }
    }
}
