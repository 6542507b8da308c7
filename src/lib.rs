//! Random password and salt generation for secrets storage.
//!
//! ```
//! let password = randstr::random_str(12, "shellsafe")?;
//! assert_eq!(password.len(), 12);
//!
//! let salt = randstr::salt(randstr::DEFAULT_SALT_LENGTH)?;
//! assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod random;

pub use random::{
    random_str, random_str_with, salt, salt_with, Charset, DEFAULT_LENGTH, DEFAULT_SALT_LENGTH,
};
