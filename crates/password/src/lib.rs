//! Pronounceable password generation.
//!
//! Passwords are assembled from a fixed table of phonetic fragments
//! (vowels, consonants and diphthongs) that alternate so the result
//! can be spoken aloud. Uppercase letters, digits and symbols may be
//! mixed in and visually ambiguous characters may be excluded.
//!
//! ```
//! use pwgen_password::{generate_phonetic_password, PasswordFlags};
//!
//! let password = generate_phonetic_password(
//!     12,
//!     PasswordFlags::UPPERCASE | PasswordFlags::DIGITS,
//! )
//! .unwrap();
//! assert_eq!(password.len(), 12);
//! ```
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

mod attempt;
mod config;
mod error;
pub mod fragment;
pub mod generator;

pub use attempt::attempt;
pub use config::GeneratorConfig;
pub use error::Error;
pub use fragment::{lookup, Fragment, FragmentFlags, FRAGMENTS};
pub use generator::{
    generate_phonetic_password, generate_phonetic_password_with_rng,
    measure_entropy, minimum_length, PasswordResult, PhoneticGen,
};

pub use zxcvbn;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Default cryptographically secure RNG.
pub fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Characters that are easily confused with another character
/// when displayed.
pub const AMBIGUOUS: &str = "B8G6I1l0OQDS5Z2";

/// Symbol characters that may be inserted into a password.
pub const SYMBOLS: &[char] =
    &['!', '@', '#', '$', '%', '^', '&', '*', '(', ')'];

/// Numerical digits.
pub const DIGITS: &[char] =
    &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Determine if a character is in the ambiguous set.
pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS.contains(c)
}

bitflags! {
    /// Features requested for a generated password.
    #[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
    #[serde(transparent)]
    pub struct PasswordFlags: u8 {
        /// Never emit characters from the ambiguous set.
        const AVOID_AMBIGUOUS   =        0b00000001;
        /// Include at least one uppercase letter.
        const UPPERCASE         =        0b00000010;
        /// Include at least one digit.
        const DIGITS            =        0b00000100;
        /// Include at least one symbol.
        const SYMBOLS           =        0b00001000;
        /// Feature classes that must appear in the output
        /// when requested.
        const REQUIRED          =        Self::UPPERCASE.bits()
                                       | Self::DIGITS.bits()
                                       | Self::SYMBOLS.bits();
    }
}

impl PasswordFlags {
    /// Determine if ambiguous characters should be avoided.
    pub fn avoid_ambiguous(&self) -> bool {
        self.contains(PasswordFlags::AVOID_AMBIGUOUS)
    }

    /// Determine if uppercase letters are requested.
    pub fn uppercase(&self) -> bool {
        self.contains(PasswordFlags::UPPERCASE)
    }

    /// Determine if digits are requested.
    pub fn digits(&self) -> bool {
        self.contains(PasswordFlags::DIGITS)
    }

    /// Determine if symbols are requested.
    pub fn symbols(&self) -> bool {
        self.contains(PasswordFlags::SYMBOLS)
    }
}
