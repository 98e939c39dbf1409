// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmaudio

//! Embedding capacity model.
//!
//! Capacity is counted over the usable payload region of each frame — the
//! bytes past the 4-byte header and the optional 2-byte CRC. Each usable
//! byte carries `n_lsb` payload bits. Frames whose declared size does not
//! cover header and CRC contribute zero, never an error.

use crate::mpeg::FrameDescriptor;

/// Total number of usable payload bytes across all frames.
pub fn usable_bytes(frames: &[FrameDescriptor]) -> usize {
    frames.iter().map(FrameDescriptor::usable_len).sum()
}

/// Total embeddable bit capacity at the given LSB depth.
///
/// This value also sizes the length field of the embedded header: the
/// field is wide enough to express any payload bit count the cover could
/// hold at this depth.
pub fn capacity_bits(frames: &[FrameDescriptor], n_lsb: u8) -> u64 {
    usable_bytes(frames) as u64 * n_lsb as u64
}
