// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmaudio

//! Keyed pseudorandom frame placement.
//!
//! Randomized embedding rotates the frame visit order by an offset drawn
//! from a ChaCha20 PRNG seeded with the sum of the key's byte values. The
//! embedder and the extractor each derive the offset independently, so the
//! generator must be fully deterministic: a fresh, explicitly seeded
//! instance per call, never a process-global generator.
//!
//! # Cross-platform portability
//!
//! `gen_range` is called on `u32` bounds (not `usize`) so the draw
//! consumes the same amount of PRNG entropy on 32-bit and 64-bit targets
//! and yields identical offsets everywhere.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Draw the deterministic placement offset for `key` in `[lower, upper]`.
///
/// The same key and bounds always produce the same offset. An empty key
/// seeds with zero and is as valid as any other key.
pub fn placement_offset(key: &str, lower: u32, upper: u32) -> u32 {
    debug_assert!(lower <= upper, "placement bounds inverted");
    let seed: u64 = key.bytes().map(u64::from).sum();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    rng.gen_range(lower..=upper)
}
