pub use crate::error::{Error, Result};

use zeroize::Zeroize;

use crate::charset::CharClass;
use crate::random::RandomSource;

/// One generation call's worth of input: the character classes to draw from,
/// the requested password length and how many passwords to produce.
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    pub classes: Vec<CharClass>,
    pub length: usize,
    pub count: usize,
}

impl GenerationRequest {
    pub fn new(classes: Vec<CharClass>, length: usize, count: usize) -> Self {
        Self {
            classes,
            length,
            count,
        }
    }

    pub fn generate(&self, rng: &mut impl RandomSource) -> Result<Vec<String>> {
        generate_passwords(&self.classes, self.length, self.count, rng)
    }
}

/// Generates `count` independent passwords of `length` characters from the
/// given classes, honoring every class's `[min_count, max_count]` quota.
///
/// When every class has a finite `max_count` and the caps together cannot
/// fill `length`, each password is cut down to the achievable length instead.
/// When the minimums together exceed `length`, the minimums win and the
/// password comes out longer than requested.
///
/// An empty class list, a zero length or a zero count yields an empty vector.
/// A malformed class is reported as an error before anything is generated.
pub fn generate_passwords(
    classes: &[CharClass],
    length: usize,
    count: usize,
    rng: &mut impl RandomSource,
) -> Result<Vec<String>> {
    for class in classes {
        class.validate()?;
    }

    if classes.is_empty() || length == 0 || count == 0 {
        return Ok(Vec::new());
    }

    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        passwords.push(generate_one(classes, length, rng));
    }
    Ok(passwords)
}

fn generate_one(classes: &[CharClass], length: usize, rng: &mut impl RandomSource) -> String {
    let target_len = achievable_length(classes, length);

    let mut buf: Vec<char> = Vec::with_capacity(target_len);
    let mut drawn = vec![0_usize; classes.len()];

    // Seed every class's minimum first, so each required class is represented
    // no matter what the fill loop picks.
    for (i, class) in classes.iter().enumerate() {
        for _ in 0..class.min_count() {
            buf.push(rng.next_char(class.pool()));
        }
        drawn[i] = class.min_count();
    }

    // Fill the remaining slots one character at a time, choosing uniformly
    // among the classes still below their cap. `target_len <= sum(max)` from
    // achievable_length, so eligible classes exist until remaining hits zero;
    // the empty check is a defensive termination condition.
    let mut remaining = target_len.saturating_sub(buf.len());
    let mut eligible: Vec<usize> = Vec::with_capacity(classes.len());
    while remaining > 0 {
        eligible.clear();
        for (i, class) in classes.iter().enumerate() {
            let below_cap = match class.max_count() {
                Some(max) => drawn[i] < max,
                None => true,
            };
            if below_cap && !class.pool().is_empty() {
                eligible.push(i);
            }
        }
        if eligible.is_empty() {
            break;
        }

        let i = eligible[rng.next_index(eligible.len())];
        buf.push(rng.next_char(classes[i].pool()));
        drawn[i] += 1;
        remaining -= 1;
    }

    // Shuffle so class membership is not positionally inferable.
    rng.shuffle_chars(&mut buf);

    let password: String = buf.iter().collect();
    buf.zeroize();
    password
}

/// The largest password length the class caps can satisfy, clamped to the
/// requested length. Any unbounded class absorbs the whole remainder, so its
/// presence makes the requested length achievable.
fn achievable_length(classes: &[CharClass], length: usize) -> usize {
    let mut total_max = 0_usize;
    for class in classes {
        match class.max_count() {
            None => return length,
            Some(max) => total_max = total_max.saturating_add(max),
        }
    }
    total_max.min(length)
}

#[cfg(test)]
#[path = "tests/generator.rs"]
mod generator;
