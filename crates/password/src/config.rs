//! Generator configuration.
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    generator::{PhoneticGen, DEFAULT_MAX_ATTEMPTS},
    Error, PasswordFlags, Result,
};

/// Configuration for phonetic password generation.
///
/// ```toml
/// length = 16
/// uppercase = true
/// digits = true
/// avoid_ambiguous = true
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Length of generated passwords.
    pub length: usize,
    /// Exclude visually ambiguous characters.
    pub avoid_ambiguous: bool,
    /// Include uppercase letters.
    pub uppercase: bool,
    /// Include digits.
    pub digits: bool,
    /// Include symbols.
    pub symbols: bool,
    /// Maximum number of attempts to satisfy the
    /// requested features.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 12,
            avoid_ambiguous: false,
            uppercase: false,
            digits: false,
            symbols: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    /// Load a config from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().is_file() {
            return Err(Error::NotFile(path.as_ref().to_path_buf()));
        }
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&contents)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: GeneratorConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(Error::InvalidConfig(
                "length must be greater than zero".to_owned(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig(
                "max_attempts must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }

    /// Feature flags for this config.
    pub fn features(&self) -> PasswordFlags {
        let mut features = PasswordFlags::empty();
        features.set(PasswordFlags::AVOID_AMBIGUOUS, self.avoid_ambiguous);
        features.set(PasswordFlags::UPPERCASE, self.uppercase);
        features.set(PasswordFlags::DIGITS, self.digits);
        features.set(PasswordFlags::SYMBOLS, self.symbols);
        features
    }

    /// Password generator for this config.
    pub fn generator(&self) -> PhoneticGen {
        PhoneticGen::with_features(self.length, self.features())
            .max_attempts(self.max_attempts)
    }
}
