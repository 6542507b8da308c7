//! Random passwords and salts drawn from fixed character sets.

use anyhow::{Context, Result};
use rand::{rngs::OsRng, CryptoRng, RngCore};

pub use self::charset::{Charset, ALPHANUMERIC, CHARS, SHELLSAFE, SHELLSAFE_CHARS, SPECIAL_CHARS};
pub use self::salt::{salt, salt_with, DEFAULT_SALT_LENGTH};

mod charset;
pub mod salt;

pub const DEFAULT_LENGTH: usize = 12;

/// Random bytes requested from the source per refill.
const CHUNK: usize = 64;

/// Generate a random string of `length` characters from the charset called `charset`.
///
/// Unknown charset names fall back to `"default"`. Characters come from the
/// operating system's secure random source; if it cannot be read, the error is returned
/// as is and nothing is retried.
pub fn random_str(length: usize, charset: &str) -> Result<String> {
    random_str_with(&mut OsRng, length, Charset::from_name(charset))
}

/// Like [`random_str`], drawing from `rng` instead of the OS source.
pub fn random_str_with<R>(rng: &mut R, length: usize, charset: Charset) -> Result<String>
where
    R: RngCore + CryptoRng,
{
    draw(rng, charset.chars(), length)
}

/// Draw `length` characters from `table` uniformly and with replacement.
///
/// Bytes at or above the largest multiple of the table size are rejected, so
/// every index is equally likely.
pub(crate) fn draw<R>(rng: &mut R, table: &[u8], length: usize) -> Result<String>
where
    R: RngCore + CryptoRng,
{
    let n = table.len();
    debug_assert!(n > 0 && n <= 256);
    let zone = 256 - 256 % n;

    let mut out = String::with_capacity(length);
    let mut buf = [0u8; CHUNK];
    while out.len() < length {
        let want = (length - out.len()).min(CHUNK);
        rng.try_fill_bytes(&mut buf[..want])
            .context("secure random source unavailable")?;
        for &b in &buf[..want] {
            if (b as usize) < zone {
                out.push(table[b as usize % n] as char);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An entropy source that always fails.
    struct Broken;

    impl CryptoRng for Broken {}

    impl RngCore for Broken {
        fn next_u32(&mut self) -> u32 {
            unimplemented!()
        }

        fn next_u64(&mut self) -> u64 {
            unimplemented!()
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unimplemented!()
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy exhausted"))
        }
    }

    fn names() -> impl Iterator<Item = &'static str> {
        Charset::ALL.into_iter().map(Charset::name)
    }

    #[test]
    fn zero_length_is_empty() {
        for name in names() {
            assert_eq!(random_str(0, name).unwrap(), "");
        }
        assert_eq!(random_str_with(&mut Broken, 0, Charset::Default).unwrap(), "");
    }

    #[test]
    fn length_and_membership() {
        for charset in Charset::ALL {
            for length in [1, 2, 12, 63, 64, 65, 500] {
                let s = random_str(length, charset.name()).unwrap();
                assert_eq!(s.chars().count(), length);
                assert!(s.chars().all(|c| charset.contains(c)), "{}: {}", charset, s);
            }
        }
    }

    #[test]
    fn alphanumeric_has_no_punctuation() {
        let s = random_str(2000, "alphanumeric").unwrap();
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn shellsafe_has_no_special_chars() {
        let s = random_str(2000, "shellsafe").unwrap();
        assert!(!s.bytes().any(|b| SPECIAL_CHARS.contains(&b)));
    }

    #[test]
    fn default_covers_the_whole_alphabet() {
        // 82 * 100 draws; a missing character here is astronomically unlikely.
        let s = random_str(8200, "default").unwrap();
        assert!(s.bytes().all(|b| CHARS.contains(&b)));
        for c in CHARS {
            assert!(s.bytes().any(|b| b == *c), "never drew '{}'", *c as char);
        }
    }

    #[test]
    fn unknown_name_uses_default() {
        let s = random_str(8200, "unknown-name").unwrap();
        assert!(s.chars().all(|c| Charset::Default.contains(c)));
        assert!(s.bytes().any(|b| SPECIAL_CHARS.contains(&b)));
    }

    #[test]
    fn uniform_distribution() {
        const DRAWS: usize = 100_000;
        let s = random_str_with(&mut OsRng, DRAWS, Charset::Alphanumeric).unwrap();

        let mut counts = [0usize; 256];
        for b in s.bytes() {
            counts[b as usize] += 1;
        }
        let expected = DRAWS as f64 / ALPHANUMERIC.len() as f64;
        let chi_square: f64 = ALPHANUMERIC
            .iter()
            .map(|&c| {
                let d = counts[c as usize] as f64 - expected;
                d * d / expected
            })
            .sum();
        // 61 degrees of freedom: mean 61, standard deviation ~11.
        assert!(chi_square < 130.0, "chi-square {}", chi_square);
    }

    #[test]
    fn consecutive_calls_differ() {
        let a = random_str(DEFAULT_LENGTH, "default").unwrap();
        let b = random_str(DEFAULT_LENGTH, "default").unwrap();
        assert_eq!(a.len(), 12);
        assert_ne!(a, b);
    }

    #[test]
    fn broken_source_is_an_error() {
        let err = random_str_with(&mut Broken, 12, Charset::Default).unwrap_err();
        assert!(err.to_string().contains("secure random source"));
        assert!(format!("{:#}", err).contains("entropy exhausted"));
    }
}
