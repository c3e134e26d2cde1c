//! Process-level seeding of the duel's random source.

use duel_core::PcgRng;

/// A fresh seed from the operating system's entropy source.
pub fn entropy_seed() -> u64 {
    rand::random()
}

/// Builds the session generator, drawing a seed from entropy when none is
/// given. Returns the seed so callers can log it.
pub fn seeded_rng(seed: Option<u64>) -> (PcgRng, u64) {
    let seed = seed.unwrap_or_else(entropy_seed);
    (PcgRng::seeded(seed), seed)
}
