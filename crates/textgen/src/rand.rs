use rand::{Rng, RngCore};

/// A trait for the random sources that drive text generation.
///
/// This abstraction allows you to plug in a real pseudo-random generator or a
/// scripted random source in tests. Every [`rand::RngCore`] implements it, so
/// seeded generators such as [`rand::rngs::SmallRng`] work out of the box.
///
/// # Example
/// ```
/// use textgen::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn below(&mut self, _bound: usize) -> usize {
///         0
///     }
///     fn chance(&mut self, _p: f64) -> bool {
///         false
///     }
/// }
///
/// let mut rng = FixedRand;
/// assert_eq!(rng.below(26), 0);
/// assert!(!rng.chance(0.5));
/// ```
pub trait RandSource {
    /// Returns a value uniformly distributed in `0..bound`. `bound` is never
    /// zero.
    fn below(&mut self, bound: usize) -> usize;

    /// Returns `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool;

    /// Overwrites `dest` with uniformly distributed bytes.
    fn fill_raw(&mut self, dest: &mut [u8]) {
        for byte in dest {
            *byte = self.below(256) as u8;
        }
    }
}

impl<R: RngCore> RandSource for R {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }

    #[inline]
    fn chance(&mut self, p: f64) -> bool {
        self.random_bool(p)
    }

    fn fill_raw(&mut self, dest: &mut [u8]) {
        self.fill_bytes(dest);
    }
}
