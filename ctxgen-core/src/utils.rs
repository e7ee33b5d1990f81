//! Shared string utilities for code generation.

/// Split a display name into its words.
///
/// Word boundaries are runs of non-alphanumeric characters (spaces, dashes,
/// underscores), a lowercase-or-digit to uppercase transition
/// (`"userProfile"` -> `["user", "Profile"]`), and the end of an acronym
/// (`"HTTPServer"` -> `["HTTP", "Server"]`).
pub fn split_words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut start: Option<usize> = None;

    for (i, &(offset, c)) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if let Some(begin) = start.take() {
                words.push(&s[begin..offset]);
            }
            continue;
        }

        match start {
            None => start = Some(offset),
            Some(begin) => {
                // A separator resets `start`, so the previous char is part
                // of the current word here.
                let prev = chars[i - 1].1;
                let hump = (prev.is_lowercase() || prev.is_ascii_digit()) && c.is_uppercase();
                let acronym_end = prev.is_uppercase()
                    && c.is_uppercase()
                    && chars.get(i + 1).is_some_and(|&(_, next)| next.is_lowercase());
                if hump || acronym_end {
                    words.push(&s[begin..offset]);
                    start = Some(offset);
                }
            }
        }
    }

    if let Some(begin) = start {
        words.push(&s[begin..]);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
    }
}

/// Convert a display name to PascalCase (e.g., "user profile" -> "UserProfile")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert a display name to camelCase (e.g., "user profile" -> "userProfile")
pub fn to_camel_case(s: &str) -> String {
    let words = split_words(s);
    let mut result = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            result.extend(word.chars().flat_map(|c| c.to_lowercase()));
        } else {
            result.push_str(&capitalize(word));
        }
    }
    result
}

/// Convert an identifier to lowercase words (e.g., "displayName" -> "display name")
pub fn to_words(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("user profile"), vec!["user", "profile"]);
        assert_eq!(split_words("userProfile"), vec!["user", "Profile"]);
        assert_eq!(split_words("foo_bar-baz"), vec!["foo", "bar", "baz"]);
        assert_eq!(split_words("HTTPServer"), vec!["HTTP", "Server"]);
        assert_eq!(split_words("user2Profile"), vec!["user2", "Profile"]);
        assert_eq!(split_words(""), Vec::<&str>::new());
        assert_eq!(split_words("---"), Vec::<&str>::new());
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("user profile"), "UserProfile");
        assert_eq!(to_pascal_case("camelCase"), "CamelCase");
        assert_eq!(to_pascal_case("PascalCase"), "PascalCase");
        assert_eq!(to_pascal_case("HTTPServer"), "HttpServer");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("user profile"), "userProfile");
        assert_eq!(to_camel_case("camelCase"), "camelCase");
        assert_eq!(to_camel_case("PascalCase"), "pascalCase");
        assert_eq!(to_camel_case("app"), "app");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_words() {
        assert_eq!(to_words("Oneword"), "oneword");
        assert_eq!(to_words("twoWords"), "two words");
        assert_eq!(to_words("ABC"), "abc");
        assert_eq!(to_words("displayNameSetEventHandler"), "display name set event handler");
    }

    #[test]
    fn test_pascal_of_camel_is_pascal() {
        for name in ["displayName", "user profile", "Theme", "a"] {
            assert_eq!(to_pascal_case(&to_camel_case(name)), to_pascal_case(name));
        }
    }
}
