//! Endpoint template expansion
//!
//! Handles `:name` placeholder substitution in endpoint URLs, e.g.
//! `https://api.twitter.com/2/users/:id/following`.
//!
//! Substitution is literal string replacement, not URL escaping; callers
//! supply values that are already safe in a query string. Placeholders with
//! no matching pair are left verbatim and rejected by the server downstream.

/// Expand every `:name` placeholder in `base` with its paired value.
///
/// Pairs are processed in order; when a name repeats, the last-supplied
/// value wins.
pub fn expand(base: &str, pairs: &[(&str, &str)]) -> String {
    let mut resolved: Vec<(&str, &str)> = Vec::with_capacity(pairs.len());
    for &(name, value) in pairs {
        if let Some(entry) = resolved.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            resolved.push((name, value));
        }
    }

    let mut url = base.to_string();
    for (name, value) in resolved {
        url = url.replace(&format!(":{name}"), value);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_placeholder() {
        let url = expand("https://x/users/:id/following", &[("id", "42")]);
        assert_eq!(url, "https://x/users/42/following");
    }

    #[test]
    fn test_multiple_placeholders() {
        let url = expand("https://x/:id?cursor=:next", &[("id", "42"), ("next", "")]);
        assert_eq!(url, "https://x/42?cursor=");
    }

    #[test]
    fn test_repeated_occurrences_all_replaced() {
        let url = expand("https://x/:id/friends/:id", &[("id", "7")]);
        assert_eq!(url, "https://x/7/friends/7");
    }

    #[test]
    fn test_repeated_name_last_write_wins() {
        let url = expand("https://x/:id", &[("id", "first"), ("id", "second")]);
        assert_eq!(url, "https://x/second");
    }

    #[test]
    fn test_unmatched_placeholder_left_verbatim() {
        let url = expand("https://x/:id?cursor=:next", &[("id", "42")]);
        assert_eq!(url, "https://x/42?cursor=:next");
    }

    #[test]
    fn test_no_placeholders() {
        let url = expand("https://x/plain", &[("id", "42")]);
        assert_eq!(url, "https://x/plain");
    }

    #[test]
    fn test_substitution_is_literal() {
        // Values are not URL-escaped; the caller owns safety.
        let url = expand("https://x/?q=:q", &[("q", "a&b")]);
        assert_eq!(url, "https://x/?q=a&b");
    }
}
