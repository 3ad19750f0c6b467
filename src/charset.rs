pub use crate::error::{Error, Result};

pub const LOWER_A_TO_Z: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPER_A_TO_Z: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS_0_TO_9: &str = "0123456789";
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Identifies which standard pool a class was built from. Bookkeeping only,
/// the generation algorithm never looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassKind {
    Lower,
    Upper,
    Digits,
    Symbols,
    Custom,
}

/// A pool of characters together with a quota on how many of them may appear
/// in one password: at least `min_count`, at most `max_count`. A `max_count`
/// of `None` means unbounded, such a class acts as the filler that absorbs
/// whatever length remains after the other classes' quotas are met.
#[derive(Clone, Debug)]
pub struct CharClass {
    pool: Vec<char>,
    kind: ClassKind,
    min_count: usize,
    max_count: Option<usize>,
}

impl CharClass {
    /// A filler class: no minimum, no cap.
    pub fn filler(pool: &str, kind: ClassKind) -> Self {
        Self::new(pool, kind, 0, None)
    }

    /// A class with an explicit finite quota.
    pub fn with_quota(pool: &str, kind: ClassKind, min_count: usize, max_count: usize) -> Self {
        Self::new(pool, kind, min_count, Some(max_count))
    }

    pub fn new(pool: &str, kind: ClassKind, min_count: usize, max_count: Option<usize>) -> Self {
        Self {
            pool: dedup_preserving_order(pool),
            kind,
            min_count,
            max_count,
        }
    }

    pub fn pool(&self) -> &[char] {
        &self.pool
    }

    pub const fn kind(&self) -> ClassKind {
        self.kind
    }

    pub const fn min_count(&self) -> usize {
        self.min_count
    }

    pub const fn max_count(&self) -> Option<usize> {
        self.max_count
    }

    /// Checks the class invariants: `min_count <= max_count`, and an empty
    /// pool only with a quota of exactly `[0, 0]`. A malformed class is a
    /// contract violation on the caller's side and is reported, never
    /// silently coerced.
    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.max_count {
            if self.min_count > max {
                return Err(Error::InvalidQuota {
                    min: self.min_count,
                    max,
                });
            }
        }
        if self.pool.is_empty() && (self.min_count != 0 || self.max_count != Some(0)) {
            return Err(Error::EmptyPool);
        }
        Ok(())
    }
}

fn dedup_preserving_order(pool: &str) -> Vec<char> {
    let mut chars: Vec<char> = Vec::with_capacity(pool.len());
    for c in pool.chars() {
        if !chars.contains(&c) {
            chars.push(c);
        }
    }
    chars
}

/// The standard class combinations a caller can pick from. A closed set, the
/// surrounding tool presents these as a fixed list of choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Lowercase filler plus required uppercase, digits and symbols.
    All,
    /// Lowercase filler plus required uppercase and digits.
    LettersDigits,
    /// Lowercase filler plus required uppercase.
    Letters,
    /// Lowercase filler plus required digits.
    LowerDigits,
    /// Digits only.
    Digits,
}

/// Builds the default class list for a selection.
///
/// One class per combination is the unbounded filler, so that generated
/// passwords always reach the requested length; every other class requires at
/// least one character but is capped at a few, which keeps passwords mostly
/// filler characters sprinkled with the required specials.
pub fn classes_for(selection: Selection) -> Vec<CharClass> {
    let lower = CharClass::filler(LOWER_A_TO_Z, ClassKind::Lower);
    let upper = CharClass::with_quota(UPPER_A_TO_Z, ClassKind::Upper, 1, 3);
    let digits = CharClass::with_quota(DIGITS_0_TO_9, ClassKind::Digits, 1, 2);
    let symbols = CharClass::with_quota(SYMBOLS, ClassKind::Symbols, 1, 2);

    match selection {
        Selection::All => vec![lower, upper, digits, symbols],
        Selection::LettersDigits => vec![lower, upper, digits],
        Selection::Letters => vec![lower, upper],
        Selection::LowerDigits => vec![lower, digits],
        Selection::Digits => vec![CharClass::filler(DIGITS_0_TO_9, ClassKind::Digits)],
    }
}

#[cfg(test)]
#[path = "tests/charset.rs"]
mod charset;
