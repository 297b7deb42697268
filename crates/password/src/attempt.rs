//! Single pass construction of a candidate password.
use crate::{
    fragment::{lookup, Fragment, FragmentFlags, Sound, FRAGMENTS},
    is_ambiguous, Error, PasswordFlags, Result, DIGITS, SYMBOLS,
};
use rand::Rng;

/// Chance out of ten that a fragment is capitalized.
const UPPERCASE_CHANCE: u32 = 2;
/// Chance out of ten that a digit follows a fragment.
const DIGIT_CHANCE: u32 = 3;
/// Chance out of ten that a symbol follows a fragment.
const SYMBOL_CHANCE: u32 = 2;
/// Chance out of ten that a single vowel is followed by a consonant.
const CONSONANT_AFTER_VOWEL_CHANCE: u32 = 6;

/// Mutable state for one attempt.
struct Attempt<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    length: usize,
    requested: PasswordFlags,
    unsatisfied: PasswordFlags,
    buffer: String,
    previous: Option<FragmentFlags>,
    expected: Sound,
    first: bool,
}

impl<'a, R: Rng + ?Sized> Attempt<'a, R> {
    fn new(rng: &'a mut R, length: usize, requested: PasswordFlags) -> Self {
        let expected = random_sound(&mut *rng);
        Self {
            rng,
            length,
            requested,
            unsatisfied: requested & PasswordFlags::REQUIRED,
            buffer: String::with_capacity(length),
            previous: None,
            expected,
            first: true,
        }
    }

    fn remaining(&self) -> usize {
        self.length - self.buffer.len()
    }

    fn chance(&mut self, tenths: u32) -> bool {
        self.rng.gen_range(0..10) < tenths
    }

    /// Determine if a fragment may be placed in the next slot.
    fn admits(&self, fragment: &Fragment) -> bool {
        if !fragment.flags().contains(self.expected.flag()) {
            return false;
        }

        if self.first && fragment.is_not_first() {
            return false;
        }

        // Vowel followed by a vowel diphthong is unpronounceable
        let previous_vowel = self
            .previous
            .map(|flags| flags.contains(FragmentFlags::VOWEL))
            .unwrap_or(false);
        if previous_vowel && fragment.is_vowel() && fragment.is_diphthong() {
            return false;
        }

        if fragment.text().len() > self.remaining() {
            return false;
        }

        if self.requested.avoid_ambiguous()
            && fragment.text().chars().any(is_ambiguous)
        {
            return false;
        }

        true
    }

    /// Draw fragments until one is admitted for the next slot.
    fn draw(&mut self) -> Result<&'static Fragment> {
        if !FRAGMENTS.iter().any(|f| self.admits(f)) {
            return Err(Error::InvalidLength(self.length));
        }

        loop {
            let fragment = lookup(self.rng.gen_range(0..FRAGMENTS.len()));
            if self.admits(fragment) {
                return Ok(fragment);
            }
        }
    }

    /// Draw a character from a set, skipping ambiguous
    /// characters when requested.
    fn draw_char(&mut self, set: &[char]) -> Result<char> {
        let avoid = self.requested.avoid_ambiguous();
        if avoid && set.iter().all(|c| is_ambiguous(*c)) {
            return Err(Error::InvalidLength(self.length));
        }

        loop {
            let c = set[self.rng.gen_range(0..set.len())];
            if !(avoid && is_ambiguous(c)) {
                return Ok(c);
            }
        }
    }

    /// Capitalize the first letter of the fragment that starts
    /// at the given byte offset.
    fn capitalize(&mut self, offset: usize) {
        let Some(c) = self.buffer[offset..].chars().next() else {
            return;
        };
        if self.requested.avoid_ambiguous()
            && is_ambiguous(c.to_ascii_uppercase())
        {
            return;
        }
        self.buffer[offset..offset + c.len_utf8()].make_ascii_uppercase();
        self.unsatisfied.remove(PasswordFlags::UPPERCASE);
    }

    fn reset(&mut self) {
        self.first = true;
        self.previous = None;
        self.expected = random_sound(&mut *self.rng);
    }

    fn run(mut self) -> Result<(String, PasswordFlags)> {
        while self.buffer.len() < self.length {
            let fragment = self.draw()?;

            let offset = self.buffer.len();
            self.buffer.push_str(fragment.text());

            if self.requested.uppercase()
                && (self.first || fragment.is_consonant())
                && self.chance(UPPERCASE_CHANCE)
            {
                self.capitalize(offset);
            }

            if self.buffer.len() >= self.length {
                break;
            }

            if self.requested.digits()
                && !self.first
                && self.chance(DIGIT_CHANCE)
            {
                let digit = self.draw_char(DIGITS)?;
                self.buffer.push(digit);
                self.unsatisfied.remove(PasswordFlags::DIGITS);
                // Digits break the syllable so start over
                self.reset();
                continue;
            }

            if self.requested.symbols()
                && !self.first
                && self.chance(SYMBOL_CHANCE)
            {
                let symbol = self.draw_char(SYMBOLS)?;
                self.buffer.push(symbol);
                self.unsatisfied.remove(PasswordFlags::SYMBOLS);
            }

            self.expected = match self.expected {
                Sound::Consonant => Sound::Vowel,
                Sound::Vowel => {
                    let previous_vowel = self
                        .previous
                        .map(|flags| flags.contains(FragmentFlags::VOWEL))
                        .unwrap_or(false);
                    if previous_vowel
                        || fragment.is_diphthong()
                        || self.chance(CONSONANT_AFTER_VOWEL_CHANCE)
                    {
                        Sound::Consonant
                    } else {
                        Sound::Vowel
                    }
                }
            };

            self.previous = Some(fragment.flags());
            self.first = false;
        }

        Ok((self.buffer, self.unsatisfied))
    }
}

fn random_sound<R: Rng + ?Sized>(rng: &mut R) -> Sound {
    if rng.gen_bool(0.5) {
        Sound::Vowel
    } else {
        Sound::Consonant
    }
}

/// Build one candidate password of exactly `length` characters.
///
/// Returns the candidate and the requested feature classes
/// (uppercase, digits or symbols) that did not appear in it.
pub fn attempt<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    features: PasswordFlags,
) -> Result<(String, PasswordFlags)> {
    if length == 0 {
        return Err(Error::InvalidLength(length));
    }
    Attempt::new(rng, length, features).run()
}
