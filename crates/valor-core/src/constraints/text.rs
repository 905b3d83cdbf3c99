//! Constraints for string-like values
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use crate::validation::Property;
use crate::value::{ToValue, Value};
use regex::Regex;
use std::sync::OnceLock;

unit_constraints! {
    /// Empty or whitespace only
    Blank,
    /// At least one non-whitespace character
    NotBlank,
    /// Letters only
    Letters,
    /// Numeric characters only
    Digits,
    /// An e-mail address
    Email,
    /// An http(s) website address
    Website,
}

value_constraints! {
    EqualsIgnoringCase { value },
    Contains { value },
    NotContain { value },
    ContainsAll { values },
    ContainsAny { values },
    /// Whole value matches the pattern
    Matches { regex },
    NotMatch { regex },
    StartsWith { prefix },
    EndsWith { suffix },
}

static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static WEBSITE_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn email_regex() -> Option<&'static Regex> {
    EMAIL_REGEX
        .get_or_init(|| {
            Regex::new(
                r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
            )
            .ok()
        })
        .as_ref()
}

fn website_regex() -> Option<&'static Regex> {
    WEBSITE_REGEX
        .get_or_init(|| {
            Regex::new(r"^(?i)(https?://)?([a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,}(:\d{1,5})?(/\S*)?$").ok()
        })
        .as_ref()
}

/// Anchored copy of `regex`, so `Matches { regex: "a+" }` rejects `"baa"`
fn anchored(regex: &Regex) -> Option<Regex> {
    Regex::new(&format!(r"^(?:{})$", regex.as_str())).ok()
}

fn string_list<I, S>(items: I) -> (Vec<String>, Value)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items: Vec<String> = items.into_iter().map(|s| s.as_ref().to_string()).collect();
    let value = items.to_value();
    (items, value)
}

impl<'a, V: AsRef<str> + ToValue> Property<'a, V> {
    pub fn is_blank(self) -> Self {
        self.validate_present(Blank, |value| value.as_ref().trim().is_empty())
    }

    /// Passes on absent values; combine with `is_not_null` to require presence
    pub fn is_not_blank(self) -> Self {
        self.validate_present(NotBlank, |value| !value.as_ref().trim().is_empty())
    }

    pub fn is_equal_to_ignoring_case(self, expected: &str) -> Self {
        let constraint = EqualsIgnoringCase {
            value: expected.to_value(),
        };
        self.validate_present(constraint, |value| {
            value.as_ref().to_lowercase() == expected.to_lowercase()
        })
    }

    pub fn contains(self, needle: &str) -> Self {
        let constraint = Contains {
            value: needle.to_value(),
        };
        self.validate_present(constraint, |value| value.as_ref().contains(needle))
    }

    pub fn does_not_contain(self, needle: &str) -> Self {
        let constraint = NotContain {
            value: needle.to_value(),
        };
        self.validate_present(constraint, |value| !value.as_ref().contains(needle))
    }

    pub fn contains_all<I, S>(self, needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (needles, values) = string_list(needles);
        self.validate_present(ContainsAll { values }, |value| {
            needles.iter().all(|n| value.as_ref().contains(n.as_str()))
        })
    }

    pub fn contains_any<I, S>(self, needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (needles, values) = string_list(needles);
        self.validate_present(ContainsAny { values }, |value| {
            needles.iter().any(|n| value.as_ref().contains(n.as_str()))
        })
    }

    /// The whole value must match `regex`
    pub fn matches(self, regex: &Regex) -> Self {
        let constraint = Matches {
            regex: regex.as_str().to_value(),
        };
        let whole = anchored(regex);
        self.validate_present(constraint, |value| {
            whole.as_ref().map_or(false, |re| re.is_match(value.as_ref()))
        })
    }

    pub fn does_not_match(self, regex: &Regex) -> Self {
        let constraint = NotMatch {
            regex: regex.as_str().to_value(),
        };
        let whole = anchored(regex);
        self.validate_present(constraint, |value| {
            whole.as_ref().map_or(true, |re| !re.is_match(value.as_ref()))
        })
    }

    pub fn starts_with(self, prefix: &str) -> Self {
        let constraint = StartsWith {
            prefix: prefix.to_value(),
        };
        self.validate_present(constraint, |value| value.as_ref().starts_with(prefix))
    }

    pub fn ends_with(self, suffix: &str) -> Self {
        let constraint = EndsWith {
            suffix: suffix.to_value(),
        };
        self.validate_present(constraint, |value| value.as_ref().ends_with(suffix))
    }

    pub fn has_only_letters(self) -> Self {
        self.validate_present(Letters, |value| value.as_ref().chars().all(char::is_alphabetic))
    }

    pub fn has_only_digits(self) -> Self {
        self.validate_present(Digits, |value| value.as_ref().chars().all(char::is_numeric))
    }

    pub fn is_email(self) -> Self {
        self.validate_present(Email, |value| {
            email_regex().map_or(false, |regex| regex.is_match(value.as_ref()))
        })
    }

    pub fn is_website(self) -> Self {
        self.validate_present(Website, |value| {
            website_regex().map_or(false, |regex| regex.is_match(value.as_ref()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_patterns_compile() {
        assert!(email_regex().is_some());
        assert!(website_regex().is_some());
    }

    #[test]
    fn test_email_pattern() {
        let regex = email_regex().unwrap();
        assert!(regex.is_match("john.doe@company.com"));
        assert!(regex.is_match("a+tag@sub.example.org"));
        assert!(!regex.is_match("aaa"));
        assert!(!regex.is_match("john@localhost"));
        assert!(!regex.is_match("@example.com"));
    }

    #[test]
    fn test_website_pattern() {
        let regex = website_regex().unwrap();
        assert!(regex.is_match("https://www.rust-lang.org"));
        assert!(regex.is_match("example.com/path?q=1"));
        assert!(regex.is_match("HTTP://EXAMPLE.COM:8080"));
        assert!(!regex.is_match("not a site"));
        assert!(!regex.is_match("ftp://example.com"));
    }

    #[test]
    fn test_anchored_copy_matches_whole_text() {
        let regex = anchored(&Regex::new("a+").unwrap()).unwrap();
        assert_eq!(regex.as_str(), "^(?:a+)$");
        assert!(regex.is_match("aaa"));
        assert!(!regex.is_match("baa"));
        assert!(!regex.is_match("aab"));

        let alternation = anchored(&Regex::new("a|ab").unwrap()).unwrap();
        assert!(alternation.is_match("ab"));
    }
}
