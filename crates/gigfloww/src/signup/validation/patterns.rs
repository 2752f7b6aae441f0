use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)?(?:[A-Za-z0-9_-]+\.)+[A-Za-z0-9_]{2,}(?:/\S*)?$")
        .expect("url pattern compiles")
});

// Optional `+` and 1-3 digit country code, then 3-3-(4..6) digits with optional
// parens around the area code and `-`, space or `.` between groups.
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?(?:\d{1,3}[-\s.]?)?\(?\d{3}\)?[-\s.]?\d{3}[-\s.]?\d{4,6}$")
        .expect("phone pattern compiles")
});

/// `local@domain.tld` with no whitespace and at least one dot after the `@`.
pub fn validate_email(text: &str) -> bool {
    EMAIL.is_match(text)
}

/// Optional `http(s)://`, a dotted host ending in a 2+ character label, optional path.
pub fn validate_url(text: &str) -> bool {
    URL.is_match(text)
}

pub fn validate_phone(text: &str) -> bool {
    PHONE.is_match(text)
}
