//! Credential input validation used by the signup form.

use std::sync::LazyLock;

use regex::Regex;

static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^[A-Za-z0-9_]{3,72}$").unwrap()
});

/// Minimum password length in UTF-16 code units.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Returns true if `username` is 3 to 72 ASCII letters, digits or underscores.
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_RE.is_match(username)
}

/// Returns true if `password` has at least eight characters, one lowercase
/// ASCII letter and one ASCII digit.
///
/// Length is counted in UTF-16 code units, so a character outside the Basic
/// Multilingual Plane counts twice. Line terminators are rejected anywhere in
/// the password.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    if password.chars().any(is_line_terminator) {
        return false;
    }

    password.encode_utf16().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

const fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
