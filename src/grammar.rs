use once_cell::sync::Lazy;
use regex::Regex;

pub const SEPARATOR: &str = ".";

// Both patterns are anchored at both ends.
static PATH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+(\.[A-Za-z0-9_]+)*$").unwrap());
static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

pub fn is_valid_path(value: &str) -> bool {
    !value.is_empty() && PATH_PATTERN.is_match(value)
}

pub fn is_valid_label(label: &str) -> bool {
    !label.contains(SEPARATOR) && LABEL_PATTERN.is_match(label)
}
