//! Helpers for slash-delimited ISO 19115 paths.

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '/';

/// Split a path into its non-empty segments.
///
/// Leading, trailing and doubled separators are skipped rather than producing
/// empty-named segments, so `"a//b/"` yields `["a", "b"]`.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split(PATH_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Append `segment` to `prefix`. An empty prefix is the tree root.
pub fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}{}{}", prefix, PATH_SEPARATOR, segment)
    }
}

/// Canonical form of a path: its non-empty segments joined by single separators.
pub fn normalize_path(path: &str) -> String {
    split_path(path).join(&PATH_SEPARATOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_skips_empty_segments() {
        assert_eq!(split_path("a/b/c"), vec!["a", "b", "c"]);
        assert_eq!(split_path("/a//b/"), vec!["a", "b"]);
        assert!(split_path("").is_empty());
        assert!(split_path("///").is_empty());
    }

    #[test]
    fn join_from_root() {
        assert_eq!(join_path("", "identificationInfo"), "identificationInfo");
        assert_eq!(
            join_path("identificationInfo", "MD_DataIdentification"),
            "identificationInfo/MD_DataIdentification"
        );
    }

    #[test]
    fn normalize_collapses_separators() {
        assert_eq!(normalize_path("a//b/"), "a/b");
        assert_eq!(normalize_path("a/b"), "a/b");
        assert_eq!(normalize_path("//"), "");
    }
}
