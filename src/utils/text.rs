//! Text utilities shared by the parsers.

/// Characters that separate tokens in release names.
pub const SEPARATORS: &[char] = &['.', ' ', '_', '-'];

/// Collapse whitespace runs to a single space and trim.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trim release-name separators from both ends.
pub fn trim_separators(s: &str) -> &str {
    s.trim_matches(|c| SEPARATORS.contains(&c))
}

/// Trim release-name separators from the end.
pub fn trim_trailing_separators(s: &str) -> &str {
    s.trim_end_matches(|c| SEPARATORS.contains(&c))
}

/// Replace dots and underscores with spaces and collapse whitespace.
pub fn dots_to_spaces(s: &str) -> String {
    collapse_whitespace(&s.replace(['.', '_'], " "))
}

/// Check whether a string is a four-digit year between 1800 and 2099.
pub fn is_year(s: &str) -> bool {
    s.len() == 4
        && s.chars().all(|c| c.is_ascii_digit())
        && (s.starts_with("18") || s.starts_with("19") || s.starts_with("20"))
}

/// Find all years not adjacent to other digits, as `(start, year)`.
pub fn standalone_years(s: &str) -> Vec<(usize, &str)> {
    let mut years = Vec::new();
    if let Ok(re) = regex::Regex::new(r"\d+") {
        for m in re.find_iter(s) {
            if is_year(m.as_str()) {
                years.push((m.start(), m.as_str()));
            }
        }
    }
    years
}

/// Find the first year not adjacent to other digits.
pub fn first_year(s: &str) -> Option<(usize, &str)> {
    standalone_years(s).into_iter().next()
}

/// Remove every whole-token occurrence of `token` (case-insensitive).
///
/// A token is whole when bounded by separators or the string ends.
pub fn remove_token(s: &str, token: &str) -> String {
    // Words inside a token may be joined by any separator.
    let escaped = regex::escape(token).replace(' ', r"[\s._\-]+");
    let pattern = format!(r"(?i)(^|[\s._\-]){}([\s._\-]|$)", escaped);
    let re = match regex::Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return s.to_string(),
    };

    // Adjacent occurrences share a separator, so repeat until stable.
    let mut current = s.to_string();
    loop {
        let next = re.replace_all(&current, "$1 $2").to_string();
        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a   b \t c "), "a b c");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_trim_separators() {
        assert_eq!(trim_separators(".-Title_ "), "Title");
        assert_eq!(trim_trailing_separators("Title.(2019."), "Title.(2019");
    }

    #[test]
    fn test_standalone_years() {
        assert_eq!(first_year("Movie.2019.1080p"), Some((6, "2019")));
        assert_eq!(first_year("Movie.12019.x"), None);
        assert_eq!(first_year("Movie.1080p"), None);
        assert_eq!(first_year("Nosferatu 1922"), Some((10, "1922")));
        assert_eq!(standalone_years("2001.2019").len(), 2);
    }

    #[test]
    fn test_remove_token() {
        assert_eq!(dots_to_spaces(&remove_token("Title.DVD.R1", "DVD")), "Title R1");
        assert_eq!(
            collapse_whitespace(&remove_token("Alien Director's Cut", "director's cut")),
            "Alien"
        );
        assert_eq!(dots_to_spaces(&remove_token("Alien.Directors.Cut", "Directors Cut")), "Alien");
        // Not a whole token
        assert_eq!(remove_token("DVDTitle", "DVD"), "DVDTitle");
        assert_eq!(collapse_whitespace(&remove_token("R1 R1 Title", "R1")), "Title");
    }
}
