//! Byte-wide linear-congruential keystream generator.
//!
//! Implements the recurrence `curr = (A * curr + C) mod 256` with the
//! classic glibc constants A = 1103515245, C = 12345. The modulus is
//! deliberately byte-width: after the first draw the entire state space
//! collapses to a single byte, so the generator's period is at most 256.
//! That is far too weak for cryptography and exactly strong enough for a
//! deterministic, seed-reproducible obfuscation keystream.

/// Multiplier of the linear-congruential recurrence.
const MULTIPLIER: u64 = 1_103_515_245;

/// Increment of the linear-congruential recurrence.
const INCREMENT: u64 = 12_345;

/// Modulus of the recurrence. Byte-width: the state is a byte, not the
/// full 64-bit accumulator.
const MODULUS: u64 = 256;

/// Deterministic pseudo-random byte sequence from a 64-bit seed.
///
/// One instance is constructed per file transform and owned exclusively by
/// it; encrypt and decrypt advance the generator by exactly one 16-byte
/// draw per block, so both directions observe the same sequence.
pub struct LcGen {
    /// Current value in the sequence.
    curr: u64,
}

impl LcGen {
    /// Creates a generator with its state set to `seed`.
    pub fn new(seed: u64) -> Self {
        LcGen { curr: seed }
    }

    /// Advances the recurrence one step and returns the new state.
    ///
    /// The multiply wraps mod 2^64 before the byte modulus is applied;
    /// the low eight bits are unaffected by the wrap, so this matches
    /// plain unsigned-overflow arithmetic on any seed.
    pub fn next_byte(&mut self) -> u8 {
        self.curr = MULTIPLIER
            .wrapping_mul(self.curr)
            .wrapping_add(INCREMENT)
            % MODULUS;
        self.curr as u8
    }

    /// Fills `buf` with the next `buf.len()` bytes of the sequence.
    pub fn fill(&mut self, buf: &mut [u8]) {
        for slot in buf.iter_mut() {
            *slot = self.next_byte();
        }
    }

    /// Returns the next `n` bytes of the sequence, in draw order.
    pub fn next_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.fill(&mut out);
        out
    }
}
