use anyhow::Result;
use rand::{rngs::OsRng, CryptoRng, RngCore};

use super::{charset::ALPHANUMERIC, draw};

pub const DEFAULT_SALT_LENGTH: usize = 8;

/// Generate an alphanumeric salt of `length` characters from the OS random source.
pub fn salt(length: usize) -> Result<String> {
    salt_with(&mut OsRng, length)
}

pub fn salt_with<R>(rng: &mut R, length: usize) -> Result<String>
where
    R: RngCore + CryptoRng,
{
    draw(rng, ALPHANUMERIC, length)
}
