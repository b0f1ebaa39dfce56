//! Cell values as read from delimited files.

/// A single cell, classified once when it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// Non-empty and made of ASCII digits only.
    Digits(String),
    /// Anything else, including the empty string.
    Text(String),
}

impl CellValue {
    pub fn parse(raw: &str) -> Self {
        if is_digits(raw) {
            Self::Digits(raw.to_string())
        } else {
            Self::Text(raw.to_string())
        }
    }

    pub fn is_digits(&self) -> bool {
        matches!(self, Self::Digits(_))
    }
}

/// True when `value` is non-empty and every character is an ASCII digit.
pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}
