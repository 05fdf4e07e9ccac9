//! Glob-style matching for cache keys.

/// Checks if a cache key matches a glob pattern.
///
/// `*` matches any sequence of characters, including the empty one;
/// everything else matches literally.
///
/// # Examples
///
/// ```
/// use thyk_core::cache::pattern_matches;
///
/// assert!(pattern_matches("/api/tasks", "/api/tasks"));
/// assert!(pattern_matches("/api/tasks*", "/api/tasks/timeframe/daily"));
/// assert!(!pattern_matches("/api/tasks*", "/api/categories"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    match pattern.split_once('*') {
        // No wildcard left: the remainder must match literally.
        None => pattern == key,
        Some((prefix, rest)) => {
            let Some(remaining) = key.strip_prefix(prefix) else {
                return false;
            };
            if rest.is_empty() {
                return true;
            }
            // Let the wildcard absorb zero or more characters and try
            // the rest of the pattern at every later position.
            (0..=remaining.len())
                .filter(|&i| remaining.is_char_boundary(i))
                .any(|i| pattern_matches(rest, &remaining[i..]))
        }
    }
}
