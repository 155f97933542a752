//! Slugs

/// Derive a URL slug from a display name.
///
/// Lowercases the name, collapses every run of characters outside `[a-z0-9]` into a single `-`
/// and trims dashes from both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }

            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation_and_spaces() {
        assert_eq!(slugify("Oversized Tee — Black!"), "oversized-tee-black");
    }

    #[test]
    fn slugify_trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  --Cargo Pants--  "), "cargo-pants");
    }

    #[test]
    fn slugify_keeps_digits() {
        assert_eq!(slugify("Air Max 90"), "air-max-90");
    }

    #[test]
    fn slugify_of_symbols_only_is_empty() {
        assert_eq!(slugify("!!!"), "");
    }
}
