use rand::Rng;

/// LCG multiplier.
const LCG_MULTIPLIER: u32 = 1_103_515_245;
/// LCG increment.
const LCG_INCREMENT: u32 = 12_345;
/// The state is kept to 31 bits.
const LCG_MASK: u32 = 0x7fff_ffff;
/// 2^31.
const LCG_MODULUS: f64 = 2_147_483_648.0;

/// A source of uniform floats in `[0, 1)` used for every table draw.
pub trait Draw {
    /// The next float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Pick `pool[floor(r * len)]`. Returns `None` for an empty pool.
    fn pick<'a, T>(&mut self, pool: &'a [T]) -> Option<&'a T> {
        if pool.is_empty() {
            return None;
        }
        let idx = (self.next_f64() * pool.len() as f64) as usize;
        pool.get(idx.min(pool.len() - 1))
    }
}

/// Reproducible stream of floats from a string seed.
///
/// The seed's UTF-16 code units are folded with `hash = hash * 31 + unit` in wrapping 32-bit
/// arithmetic. The result seeds a linear congruential generator
/// `state = (state * 1103515245 + 12345) mod 2^31` that emits `state / 2^31`.
///
/// ```
/// use browser_identity::prng::{Draw, SeededRandom};
///
/// let mut a = SeededRandom::new("session-123");
/// let mut b = SeededRandom::new("session-123");
/// assert_eq!(a.next_f64(), b.next_f64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Create the generator from a seed string.
    pub fn new(seed: &str) -> Self {
        Self {
            state: string_hash(seed) as u32,
        }
    }

    /// The current raw state.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Draw for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
            & LCG_MASK;
        self.state as f64 / LCG_MODULUS
    }
}

/// The standard `hash * 31 + code_unit` string hash with 32-bit wraparound.
pub fn string_hash(seed: &str) -> i32 {
    seed.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Non deterministic draws backed by a `rand` generator.
#[derive(Debug)]
pub struct EntropyDraw<R: Rng>(pub R);

impl EntropyDraw<rand::rngs::ThreadRng> {
    /// Draws from the thread local generator.
    pub fn thread() -> Self {
        EntropyDraw(rand::rng())
    }
}

impl<R: Rng> Draw for EntropyDraw<R> {
    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_hash_matches_known_values() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("ab"), 97 * 31 + 98);
        // wraps past i32::MAX
        assert_eq!(string_hash("session-123"), -23_692_677);
    }

    #[test]
    fn first_draw_follows_the_recurrence() {
        let mut rng = SeededRandom::new("a");
        let expected = (97u64 * 1_103_515_245 + 12_345) % (1u64 << 31);
        let value = rng.next_f64();
        assert_eq!(rng.state() as u64, expected);
        assert_eq!(value, expected as f64 / 2_147_483_648.0);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = SeededRandom::new("session-123");
        let mut b = SeededRandom::new("session-123");
        for _ in 0..1000 {
            let x = a.next_f64();
            assert_eq!(x, b.next_f64());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededRandom::new("alpha");
        let mut b = SeededRandom::new("beta");
        let left: Vec<f64> = (0..8).map(|_| a.next_f64()).collect();
        let right: Vec<f64> = (0..8).map(|_| b.next_f64()).collect();
        assert_ne!(left, right);
    }

    #[test]
    fn pick_stays_in_bounds() {
        let pool = [1, 2, 3];
        let mut rng = EntropyDraw::thread();
        for _ in 0..500 {
            assert!(pool.contains(rng.pick(&pool).unwrap()));
        }
        let empty: [u8; 0] = [];
        assert!(rng.pick(&empty).is_none());
    }
}
