//! Seeded random source.
//!
//! Mulberry32: a 32-bit additive counter passed through an xorshift-multiply
//! mix. Integer-only, so the sequence is bit-exact on every platform; the
//! image is a pure function of it.

use rand::{RngCore, SeedableRng};

/// Weyl increment added to the state on every draw.
const INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32 as f64, maps a `u32` draw onto `[0, 1)`.
const U32_RANGE: f64 = 4_294_967_296.0;

/// Deterministic number stream owned by a single generation call.
///
/// Two instances built from the same seed yield the same sequence for the
/// same sequence of calls; nothing is shared between instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Build from a wide seed. Only the low 32 bits are kept.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self::new((seed & 0xFFFF_FFFF) as u32)
    }

    /// Advance and return the raw 32-bit output.
    #[inline]
    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Float in `[0, 1)`.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        self.step() as f64 / U32_RANGE
    }

    /// Float in `[lo, hi)`, computed as `lo + next() * (hi - lo)`.
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next() * (hi - lo)
    }

    /// Integer in `[lo, hi]`, inclusive on both ends. Consumes exactly one draw.
    ///
    /// # Panics
    /// Panics if `lo > hi`, the same way `rand::Rng::gen_range` does for an
    /// empty range.
    pub fn randint(&mut self, lo: u32, hi: u32) -> u32 {
        assert!(lo <= hi, "randint: empty range {lo}..={hi}");
        let span = (hi - lo) as f64 + 1.0;
        lo + (self.next() * span).floor() as u32
    }
}

impl RngCore for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.step() as u64;
        let hi = self.step() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SeededRandom {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::from_seed_u64(state)
    }
}
