use anyhow::Result;
use pretty_assertions::assert_eq;
use pwgen_password::{Error, GeneratorConfig, PasswordFlags};
use pwgen_unit_tests::{is_phonetic, uses_alphabet};
use secrecy::ExposeSecret;

#[test]
fn generator_config_load() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("pwgen.toml");
    std::fs::write(
        &path,
        r#"
length = 20
avoid_ambiguous = true
uppercase = true
digits = true
max_attempts = 500
"#,
    )?;

    let config = GeneratorConfig::load(&path)?;
    assert_eq!(
        GeneratorConfig {
            length: 20,
            avoid_ambiguous: true,
            uppercase: true,
            digits: true,
            symbols: false,
            max_attempts: 500,
        },
        config
    );

    let features = config.features();
    assert_eq!(
        PasswordFlags::AVOID_AMBIGUOUS
            | PasswordFlags::UPPERCASE
            | PasswordFlags::DIGITS,
        features
    );

    let generator = config.generator();
    for result in generator.many(10)? {
        let password = result.password.expose_secret();
        assert_eq!(20, password.len());
        assert!(uses_alphabet(password, features));
        assert!(is_phonetic(password));
    }
    Ok(())
}

#[test]
fn generator_config_not_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing.toml");
    assert!(matches!(
        GeneratorConfig::load(&path),
        Err(Error::NotFile(_))
    ));
    Ok(())
}
