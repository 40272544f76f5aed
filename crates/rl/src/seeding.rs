//! Seeded random sources for environment resets.

/// Build a generator from `seed`, drawing a fresh seed from entropy when none
/// is given. Returns the generator together with the seed it was built from so
/// the run can be replayed.
#[must_use]
pub fn np_random(seed: Option<u64>) -> (fastrand::Rng, u64) {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    (fastrand::Rng::with_seed(seed), seed)
}
