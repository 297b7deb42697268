//! Helpers shared by the unit tests.
use pwgen_password::{
    fragment::Sound, FragmentFlags, PasswordFlags, AMBIGUOUS, FRAGMENTS,
    SYMBOLS,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a log subscriber controlled by `RUST_LOG`.
///
/// Safe to call from every test, only the first call
/// installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "pwgen_password=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().without_time())
        .try_init();
}

/// Determine if a password only contains characters that the
/// generator may emit for the requested features.
pub fn uses_alphabet(password: &str, features: PasswordFlags) -> bool {
    password.chars().all(|c| {
        let allowed = c.is_ascii_lowercase()
            || (features.uppercase() && c.is_ascii_uppercase())
            || (features.digits() && c.is_ascii_digit())
            || (features.symbols() && SYMBOLS.contains(&c));
        allowed && !(features.avoid_ambiguous() && AMBIGUOUS.contains(c))
    })
}

/// Determine if a password can be decomposed into fragments
/// that obey the alternation rules.
///
/// Digits restart the phonetic state, symbols are transparent.
pub fn is_phonetic(password: &str) -> bool {
    if password
        .chars()
        .next()
        .map(|c| !c.is_ascii_alphabetic())
        .unwrap_or(false)
    {
        return false;
    }

    password.split(|c: char| c.is_ascii_digit()).all(|segment| {
        let letters: String = segment
            .chars()
            .filter(|c| !SYMBOLS.contains(c))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        walk(&letters, None, None)
    })
}

fn walk(
    rest: &str,
    previous: Option<FragmentFlags>,
    expected: Option<Sound>,
) -> bool {
    if rest.is_empty() {
        return true;
    }

    let previous_vowel = previous
        .map(|flags| flags.contains(FragmentFlags::VOWEL))
        .unwrap_or(false);

    for fragment in FRAGMENTS.iter() {
        if !rest.starts_with(fragment.text()) {
            continue;
        }
        if expected.map(|e| e != fragment.sound()).unwrap_or(false) {
            continue;
        }
        if previous.is_none() && fragment.is_not_first() {
            continue;
        }
        if previous_vowel && fragment.is_vowel() && fragment.is_diphthong() {
            continue;
        }

        let next = if fragment.is_consonant() {
            Some(Sound::Vowel)
        } else if previous_vowel || fragment.is_diphthong() {
            Some(Sound::Consonant)
        } else {
            None
        };

        if walk(&rest[fragment.text().len()..], Some(fragment.flags()), next)
        {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn phonetic_accepts() {
        assert!(is_phonetic("bacon"));
        assert!(is_phonetic("Chee7ga!b"));
        assert!(is_phonetic(""));
    }

    #[test]
    fn phonetic_rejects() {
        // Opens with a fragment that may not be first
        assert!(!is_phonetic("ngab"));
        assert!(!is_phonetic("ba3ghe"));
        // Vowel followed by a vowel diphthong
        assert!(!is_phonetic("baee"));
        // Consonant followed by a consonant
        assert!(!is_phonetic("bcd"));
        assert!(!is_phonetic("7ab"));
    }

    #[test]
    fn alphabet() {
        assert!(uses_alphabet("abc", PasswordFlags::empty()));
        assert!(!uses_alphabet("aBc", PasswordFlags::empty()));
        assert!(uses_alphabet("aBc", PasswordFlags::UPPERCASE));
        assert!(!uses_alphabet(
            "aBc",
            PasswordFlags::UPPERCASE | PasswordFlags::AVOID_AMBIGUOUS
        ));
        assert!(uses_alphabet("a7!", PasswordFlags::REQUIRED));
    }
}
