use crate::path::{PathError, PathResult};
use memchr::memmem;

/// Collapses repeated separators, guarantees a leading `/` and strips the
/// trailing separator. The root path stays `/`.
#[inline]
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn normalize_path(path: &str) -> PathResult<String> {
    if let Some(&byte) = path
        .as_bytes()
        .iter()
        .find(|&&byte| byte <= 0x20 || byte == 0x7f)
    {
        return Err(PathError::ControlOrWhitespace {
            input: path.to_string(),
            byte,
        });
    }

    let mut output = String::with_capacity(path.len() + 1);
    output.push('/');
    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        if output.len() > 1 {
            output.push('/');
        }
        output.push_str(segment);
    }

    Ok(output)
}

/// Path of a location as it is matched against route templates. A missing
/// leading separator is added and one trailing separator is stripped;
/// nothing else is rewritten, so malformed locations simply fail to match.
pub fn location_path(path: &str) -> String {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Joins path fragments with a single separator and normalizes the result.
pub fn join_paths<'a, I>(parts: I) -> PathResult<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut joined = String::new();
    for part in parts {
        joined.push('/');
        joined.push_str(part);
    }
    normalize_path(&joined)
}

/// Validates and normalizes a configured global prefix. An empty prefix
/// means "no prefix" and normalizes to the empty string.
pub fn normalize_prefix(prefix: &str) -> PathResult<String> {
    if prefix.is_empty() {
        return Ok(String::new());
    }
    if !prefix.starts_with('/') {
        return Err(PathError::InvalidPrefix {
            prefix: prefix.to_string(),
        });
    }
    let normalized = normalize_path(prefix)?;
    if normalized == "/" {
        return Err(PathError::InvalidPrefix {
            prefix: prefix.to_string(),
        });
    }
    Ok(normalized)
}

/// Removes the first segment-aligned occurrence of `prefix` from `path`.
///
/// `prefix` must already be normalized. Returns the input unchanged when the
/// prefix is empty or does not occur on segment boundaries.
pub fn strip_prefix_occurrence(path: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return path.to_string();
    }

    let bytes = path.as_bytes();
    for start in memmem::find_iter(bytes, prefix.as_bytes()) {
        let end = start + prefix.len();
        let starts_on_boundary = start == 0 || bytes[start - 1] == b'/' || bytes[start] == b'/';
        let ends_on_boundary = end == bytes.len() || bytes[end] == b'/';
        if starts_on_boundary && ends_on_boundary {
            let mut stripped = String::with_capacity(path.len() - prefix.len());
            stripped.push_str(&path[..start]);
            stripped.push_str(&path[end..]);
            return stripped;
        }
    }

    path.to_string()
}

/// Puts `path` under `prefix` unless it already lives there.
pub fn apply_prefix(prefix: &str, path: &str) -> PathResult<String> {
    let normalized = normalize_path(path)?;
    if prefix.is_empty() {
        return Ok(normalized);
    }
    if normalized == prefix
        || normalized
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
    {
        return Ok(normalized);
    }
    join_paths([prefix, normalized.as_str()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_duplicates_and_trims_trailing_slash() {
        assert_eq!(normalize_path("//foo//bar///").unwrap(), "/foo/bar");
    }

    #[test]
    fn empty_and_bare_slashes_normalize_to_root() {
        assert_eq!(normalize_path("").unwrap(), "/");
        assert_eq!(normalize_path("///").unwrap(), "/");
    }

    #[test]
    fn adds_missing_leading_slash() {
        assert_eq!(normalize_path("users/:id").unwrap(), "/users/:id");
    }

    #[test]
    fn keeps_unicode_segments() {
        assert_eq!(normalize_path("/café/こんにちは/").unwrap(), "/café/こんにちは");
    }

    #[test]
    fn rejects_whitespace() {
        let err = normalize_path("/foo bar").unwrap_err();
        assert_eq!(
            err,
            PathError::ControlOrWhitespace {
                input: "/foo bar".to_string(),
                byte: b' ',
            }
        );
    }

    #[test]
    fn location_path_strips_one_trailing_separator_only() {
        assert_eq!(location_path("/a/1/"), "/a/1");
        assert_eq!(location_path("/a//"), "/a/");
        assert_eq!(location_path("/a//b"), "/a//b");
        assert_eq!(location_path("/"), "/");
        assert_eq!(location_path(""), "/");
        assert_eq!(location_path("/foo bar"), "/foo bar");
    }

    #[test]
    fn join_inserts_single_separators() {
        assert_eq!(join_paths(["/app/", "/users", "settings/"]).unwrap(), "/app/users/settings");
        assert_eq!(join_paths(["", "/", ""]).unwrap(), "/");
    }

    #[test]
    fn prefix_must_be_rooted() {
        assert!(normalize_prefix("app").is_err());
        assert!(normalize_prefix("/").is_err());
        assert_eq!(normalize_prefix("/app//").unwrap(), "/app");
        assert_eq!(normalize_prefix("").unwrap(), "");
    }

    #[test]
    fn strips_only_segment_aligned_prefix() {
        assert_eq!(strip_prefix_occurrence("/app/users", "/app"), "/users");
        assert_eq!(strip_prefix_occurrence("/apple/users", "/app"), "/apple/users");
        assert_eq!(strip_prefix_occurrence("/admin/app/users", "/app"), "/admin/users");
        assert_eq!(strip_prefix_occurrence("/app", "/app"), "");
    }

    #[test]
    fn apply_prefix_is_idempotent() {
        assert_eq!(apply_prefix("/app", "/users").unwrap(), "/app/users");
        assert_eq!(apply_prefix("/app", "/app/users").unwrap(), "/app/users");
        assert_eq!(apply_prefix("/app", "/").unwrap(), "/app");
        assert_eq!(apply_prefix("", "users/").unwrap(), "/users");
    }
}
