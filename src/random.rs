use rand::{seq::SliceRandom, CryptoRng, Rng};

/// A uniform random-integer and random-character provider. Password assembly
/// draws every character and every shuffle swap through this trait, so the
/// caller decides where the randomness comes from: `rand::thread_rng()` or
/// `OsRng` in production, a seeded `StdRng` in tests.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `[0, bound)`.
    ///
    /// Panics if `bound` is zero.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Returns a uniformly distributed character from `pool`.
    ///
    /// Panics if `pool` is empty. Drawing from an empty pool is a contract
    /// violation on the caller's side and must never be papered over with a
    /// default character.
    fn next_char(&mut self, pool: &[char]) -> char;

    /// Applies a uniform random permutation (Fisher-Yates) to `buf`.
    fn shuffle_chars(&mut self, buf: &mut [char]) {
        for i in (1..buf.len()).rev() {
            let j = self.next_index(i + 1);
            buf.swap(i, j);
        }
    }
}

/// Any cryptographically strong rand generator is a valid source.
///
/// Note that `rand`'s uniform sampler re-samples when a draw falls outside a
/// multiple of the range, so neither `gen_range` nor `choose` exhibits modulo
/// bias.
impl<R: Rng + CryptoRng> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "next_index called with a zero bound");
        self.gen_range(0..bound)
    }

    fn next_char(&mut self, pool: &[char]) -> char {
        *pool
            .choose(self)
            .expect("next_char called with an empty character pool")
    }
}

#[cfg(test)]
#[path = "tests/random.rs"]
mod random;
