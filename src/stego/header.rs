// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmaudio

//! Embedded metadata header codec.
//!
//! The header makes a stego stream self-describing: extraction recovers
//! the LSB depth, the flags, and the payload bit length from the stream
//! alone. Layout, starting at the first usable byte of the stream:
//!
//! ```text
//! [low nibble of byte 0]  n_lsb - 1 (2 bits), is_encrypted, is_randomized
//! [bit 0 of next bytes ]  payload bit length, MSB first,
//!                         capacity_bits(frames, n_lsb).bit_length() bits wide
//! ```
//!
//! The prefix nibble and the length field are always written at this fixed
//! density regardless of the payload's `n_lsb`, which is what lets the
//! reader learn `n_lsb` before it knows anything else. The length field
//! width depends on the capacity at the *recovered* depth, so the reader
//! recomputes capacity right after parsing the prefix. The header may span
//! frames; skipped header/CRC bytes do not count against its bit count.

use crate::mpeg::FrameDescriptor;
use crate::stego::capacity::capacity_bits;
use crate::stego::cursor::{Cursor, UsableWalk};
use crate::stego::error::StegoError;

/// Highest LSB depth the 2-bit prefix field can express.
pub const MAX_LSB: u8 = 4;

/// Number of bits in the fixed header prefix.
pub const PREFIX_BITS: u32 = 4;

/// Self-describing embedding parameters carried in front of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StegoHeader {
    /// Payload embedding depth in bits per usable byte (1–4).
    pub n_lsb: u8,
    /// Whether the payload was passed through the autokey cipher.
    pub encrypted: bool,
    /// Whether the payload frames are visited in keyed pseudorandom order.
    pub randomized: bool,
    /// Payload length in bits.
    pub payload_bits: u64,
}

impl StegoHeader {
    /// Pack depth and flags into the 4-bit prefix.
    pub fn prefix_nibble(&self) -> u8 {
        ((self.n_lsb - 1) & 0b11) << 2 | (self.encrypted as u8) << 1 | self.randomized as u8
    }

    /// Unpack depth and flags from the 4-bit prefix.
    pub fn parse_prefix(nibble: u8) -> (u8, bool, bool) {
        let n_lsb = ((nibble >> 2) & 0b11) + 1;
        let encrypted = nibble >> 1 & 1 == 1;
        let randomized = nibble & 1 == 1;
        (n_lsb, encrypted, randomized)
    }
}

/// Bit width of the header's length field for the given capacity.
pub fn length_width(capacity_bits: u64) -> u32 {
    u64::BITS - capacity_bits.leading_zeros()
}

/// Write the header into the stream's usable bytes.
///
/// Returns the cursor one past the last header byte, where the payload
/// region begins. Fails with [`StegoError::PayloadTooLarge`] when the
/// stream's usable bytes are exhausted before the header is complete.
pub fn write_header(
    stego: &mut [u8],
    frames: &[FrameDescriptor],
    header: &StegoHeader,
) -> Result<Cursor, StegoError> {
    let width = length_width(capacity_bits(frames, header.n_lsb));
    let mut walk = UsableWalk::new(frames);

    let first = walk.next().ok_or(StegoError::PayloadTooLarge)?;
    stego[first] = stego[first] & 0xF0 | header.prefix_nibble();

    for j in (0..width).rev() {
        let offset = walk.next().ok_or(StegoError::PayloadTooLarge)?;
        let bit = (header.payload_bits >> j & 1) as u8;
        stego[offset] = stego[offset] & !1 | bit;
    }

    Ok(walk.position())
}

/// Read the header back from a stego stream.
///
/// Parses the prefix from the first usable byte, recomputes the capacity
/// at the recovered depth to learn the length field width, then collects
/// the length bits. Returns the header and the cursor where the payload
/// region begins.
pub fn read_header(
    stego: &[u8],
    frames: &[FrameDescriptor],
) -> Result<(StegoHeader, Cursor), StegoError> {
    let mut walk = UsableWalk::new(frames);

    let first = walk.next().ok_or(StegoError::InsufficientData)?;
    let (n_lsb, encrypted, randomized) = StegoHeader::parse_prefix(stego[first] & 0x0F);

    let width = length_width(capacity_bits(frames, n_lsb));
    let mut payload_bits = 0u64;
    for _ in 0..width {
        let offset = walk.next().ok_or(StegoError::InsufficientData)?;
        payload_bits = payload_bits << 1 | (stego[offset] & 1) as u64;
    }

    let header = StegoHeader { n_lsb, encrypted, randomized, payload_bits };
    Ok((header, walk.position()))
}
