//! Table of phonetic fragments used to assemble passwords.
use bitflags::bitflags;

bitflags! {
    /// Classification of a phonetic fragment.
    ///
    /// Every fragment is exactly one of `VOWEL` or `CONSONANT`.
    #[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
    pub struct FragmentFlags: u8 {
        /// Vowel sound.
        const VOWEL             =        0b00000001;
        /// Consonant sound.
        const CONSONANT         =        0b00000010;
        /// Two or more letters merged into a single sound.
        const DIPHTHONG         =        0b00000100;
        /// Fragment must never open a password.
        const NOT_FIRST         =        0b00001000;
    }
}

/// Sound class a fragment must belong to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Sound {
    /// Vowel sound.
    Vowel,
    /// Consonant sound.
    Consonant,
}

impl Sound {
    /// Flag for this sound class.
    pub fn flag(&self) -> FragmentFlags {
        match self {
            Self::Vowel => FragmentFlags::VOWEL,
            Self::Consonant => FragmentFlags::CONSONANT,
        }
    }
}

/// Phonetic fragment of a password.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Fragment {
    text: &'static str,
    flags: FragmentFlags,
}

impl Fragment {
    const fn new(text: &'static str, flags: FragmentFlags) -> Self {
        Self { text, flags }
    }

    /// Lowercase text of the fragment.
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Classification flags.
    pub fn flags(&self) -> FragmentFlags {
        self.flags
    }

    /// Sound class of the fragment.
    pub fn sound(&self) -> Sound {
        if self.is_vowel() {
            Sound::Vowel
        } else {
            Sound::Consonant
        }
    }

    /// Determine if this fragment is a vowel.
    pub fn is_vowel(&self) -> bool {
        self.flags.contains(FragmentFlags::VOWEL)
    }

    /// Determine if this fragment is a consonant.
    pub fn is_consonant(&self) -> bool {
        self.flags.contains(FragmentFlags::CONSONANT)
    }

    /// Determine if this fragment is a diphthong.
    pub fn is_diphthong(&self) -> bool {
        self.flags.contains(FragmentFlags::DIPHTHONG)
    }

    /// Determine if this fragment may not open a password.
    pub fn is_not_first(&self) -> bool {
        self.flags.contains(FragmentFlags::NOT_FIRST)
    }
}

const V: FragmentFlags = FragmentFlags::VOWEL;
const C: FragmentFlags = FragmentFlags::CONSONANT;
const VD: FragmentFlags = V.union(FragmentFlags::DIPHTHONG);
const CD: FragmentFlags = C.union(FragmentFlags::DIPHTHONG);
const CDN: FragmentFlags = CD.union(FragmentFlags::NOT_FIRST);

/// All phonetic fragments in table order.
pub static FRAGMENTS: [Fragment; 40] = [
    Fragment::new("a", V),
    Fragment::new("ae", VD),
    Fragment::new("ah", VD),
    Fragment::new("ai", VD),
    Fragment::new("b", C),
    Fragment::new("c", C),
    Fragment::new("ch", CD),
    Fragment::new("d", C),
    Fragment::new("e", V),
    Fragment::new("ee", VD),
    Fragment::new("ei", VD),
    Fragment::new("f", C),
    Fragment::new("g", C),
    Fragment::new("gh", CDN),
    Fragment::new("h", C),
    Fragment::new("i", V),
    Fragment::new("ie", VD),
    Fragment::new("j", C),
    Fragment::new("k", C),
    Fragment::new("l", C),
    Fragment::new("m", C),
    Fragment::new("n", C),
    Fragment::new("ng", CDN),
    Fragment::new("o", V),
    Fragment::new("oh", VD),
    Fragment::new("oo", VD),
    Fragment::new("p", C),
    Fragment::new("ph", CD),
    Fragment::new("qu", CD),
    Fragment::new("r", C),
    Fragment::new("s", C),
    Fragment::new("sh", CD),
    Fragment::new("t", C),
    Fragment::new("th", CD),
    Fragment::new("u", V),
    Fragment::new("v", C),
    Fragment::new("w", C),
    Fragment::new("x", C),
    Fragment::new("y", C),
    Fragment::new("z", C),
];

/// Fragment at an index into the table.
///
/// The index wraps so any random integer may be used.
pub fn lookup(index: usize) -> &'static Fragment {
    &FRAGMENTS[index % FRAGMENTS.len()]
}
