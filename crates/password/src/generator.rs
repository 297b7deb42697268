//! Utility for generating pronounceable passwords.
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use zxcvbn::{zxcvbn, Entropy};

use crate::{attempt, csprng, Error, PasswordFlags, Result};

/// Default limit on whole attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Shortest password that can contain the requested features.
///
/// Digits and symbols are only inserted after a fragment that
/// does not open the password (or open the syllable following a
/// digit) so each one needs two fragments in front of it.
pub fn minimum_length(features: PasswordFlags) -> usize {
    match (features.digits(), features.symbols()) {
        (false, false) => 1,
        (true, false) | (false, true) => 3,
        (true, true) => 5,
    }
}

/// Generate a pronounceable password using the default RNG.
///
/// Every requested feature class (uppercase, digits, symbols)
/// appears at least once in the returned password.
pub fn generate_phonetic_password(
    length: usize,
    features: PasswordFlags,
) -> Result<String> {
    generate_phonetic_password_with_rng(
        &mut csprng(),
        length,
        features,
        DEFAULT_MAX_ATTEMPTS,
    )
}

/// Generate a pronounceable password using the given RNG.
///
/// Attempts are repeated until every requested feature class is
/// present, up to `max_attempts` times.
pub fn generate_phonetic_password_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    features: PasswordFlags,
    max_attempts: usize,
) -> Result<String> {
    if length == 0 {
        return Err(Error::InvalidLength(length));
    }

    if length < minimum_length(features) {
        return Err(Error::UnsatisfiableRequest {
            length,
            features,
            attempts: 0,
        });
    }

    for attempts in 1..=max_attempts {
        let (password, unsatisfied) = attempt(rng, length, features)?;
        if unsatisfied.is_empty() {
            tracing::debug!(
                length = %length,
                attempts = %attempts,
                "phonetic_password"
            );
            return Ok(password);
        }
        tracing::trace!(
            attempt = %attempts,
            unsatisfied = ?unsatisfied,
            "phonetic_password::retry"
        );
    }

    tracing::warn!(
        length = %length,
        features = ?features,
        max_attempts = %max_attempts,
        "phonetic_password::unsatisfied"
    );

    Err(Error::UnsatisfiableRequest {
        length,
        features,
        attempts: max_attempts,
    })
}

/// Measure the entropy in a password.
pub fn measure_entropy(password: &str, user_inputs: &[&str]) -> Entropy {
    zxcvbn(password, user_inputs)
}

/// Generated password result.
#[derive(Debug, Clone)]
pub struct PasswordResult {
    /// The generated password.
    pub password: SecretString,
    /// The computed entropy for the password.
    pub entropy: Entropy,
}

/// Options for phonetic password generation.
#[derive(Debug, Clone)]
pub struct PhoneticGen {
    length: usize,
    features: PasswordFlags,
    max_attempts: usize,
}

impl PhoneticGen {
    /// Create a new password generator.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            features: PasswordFlags::empty(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Create with uppercase letters and digits.
    pub fn new_alpha_numeric(length: usize) -> Self {
        Self::new(length).upper().numeric()
    }

    /// Create with uppercase letters, digits and symbols
    /// avoiding ambiguous characters.
    pub fn new_strong(length: usize) -> Self {
        Self::new(length)
            .upper()
            .numeric()
            .symbols()
            .avoid_ambiguous()
    }

    /// Create with the given feature flags.
    pub fn with_features(length: usize, features: PasswordFlags) -> Self {
        Self {
            length,
            features,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Length of the generated password.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Determine if this generator is zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Requested features.
    pub fn features(&self) -> PasswordFlags {
        self.features
    }

    /// Include uppercase letters.
    pub fn upper(mut self) -> Self {
        self.features.insert(PasswordFlags::UPPERCASE);
        self
    }

    /// Include numeric digits.
    pub fn numeric(mut self) -> Self {
        self.features.insert(PasswordFlags::DIGITS);
        self
    }

    /// Include symbol characters.
    pub fn symbols(mut self) -> Self {
        self.features.insert(PasswordFlags::SYMBOLS);
        self
    }

    /// Exclude visually ambiguous characters.
    pub fn avoid_ambiguous(mut self) -> Self {
        self.features.insert(PasswordFlags::AVOID_AMBIGUOUS);
        self
    }

    /// Limit the number of attempts made to satisfy
    /// the requested features.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Generate a password using the given RNG.
    pub fn one_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<PasswordResult> {
        let password = generate_phonetic_password_with_rng(
            rng,
            self.length,
            self.features,
            self.max_attempts,
        )?;
        let password: SecretString = password.into();
        let entropy = measure_entropy(password.expose_secret(), &[]);
        Ok(PasswordResult { password, entropy })
    }

    /// Generate a random password.
    pub fn one(&self) -> Result<PasswordResult> {
        self.one_with_rng(&mut csprng())
    }

    /// Generate multiple passwords.
    pub fn many(&self, count: usize) -> Result<Vec<PasswordResult>> {
        let rng = &mut csprng();
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.one_with_rng(rng)?);
        }
        Ok(results)
    }
}
