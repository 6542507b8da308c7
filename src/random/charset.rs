use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use anyhow::Error;

/// Lowercase letters, uppercase letters and digits, in that order.
pub const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Punctuation that survives unquoted in a POSIX shell word.
pub const SHELLSAFE_CHARS: &[u8] = b"+%/@=?_.,:";

/// Punctuation only the default set draws from.
pub const SPECIAL_CHARS: &[u8] = b"*()&![]{}-";

/// `ALPHANUMERIC` followed by `SHELLSAFE_CHARS`.
pub const SHELLSAFE: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789+%/@=?_.,:";

/// `SHELLSAFE` followed by `SPECIAL_CHARS`.
pub const CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789+%/@=?_.,:*()&![]{}-";

/// Named character set a random string is drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Charset {
    /// Letters, digits, shell-safe and special punctuation (82 chars).
    #[default]
    Default,
    /// Letters and digits (62 chars).
    Alphanumeric,
    /// Letters, digits and shell-safe punctuation (72 chars).
    Shellsafe,
}

impl Charset {
    pub const ALL: [Charset; 3] = [Charset::Default, Charset::Alphanumeric, Charset::Shellsafe];

    /// Resolve a charset name, falling back to [`Charset::Default`] for anything unknown.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::debug!("unknown charset '{}', using default", name);
            Charset::Default
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Charset::Default => "default",
            Charset::Alphanumeric => "alphanumeric",
            Charset::Shellsafe => "shellsafe",
        }
    }

    /// The characters of this set, in table order.
    pub fn chars(self) -> &'static [u8] {
        match self {
            Charset::Default => CHARS,
            Charset::Alphanumeric => ALPHANUMERIC,
            Charset::Shellsafe => SHELLSAFE,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }
}

impl FromStr for Charset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Charset::ALL
            .into_iter()
            .find(|charset| charset.name() == s)
            .ok_or_else(|| Error::msg(format!("unknown charset '{}'", s)))
    }
}

impl Display for Charset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
