// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmaudio

//! Embed / extract pipelines over the compressed MPEG bitstream.
//!
//! Embedding rewrites the low-order bits of frame payload bytes in a
//! private copy of the cover audio:
//!
//! 1. Scan the cover into frame descriptors and check the byte budget:
//!    the header occupies one prefix byte plus one byte per length bit,
//!    the payload `ceil(bits / n_lsb)` bytes.
//! 2. Write the self-describing header (see [`crate::stego::header`]).
//! 3. Walk the remaining usable bytes and write payload bits into the low
//!    `n_lsb` bits of each, most significant window bit first. With
//!    randomized placement the frames after the header are visited in a
//!    keyed cyclic rotation instead of stream order.
//!
//! Extraction mirrors the sequence exactly; the two sides agree because
//! they share the scanner, the cursor walk, the placement draw, and the
//! header codec. Frame headers and CRC bytes are never touched, so the
//! stego stream stays frame-synchronized and playable.

use crate::mpeg::{scan_frames, FrameDescriptor};
use crate::stego::capacity::{capacity_bits, usable_bytes};
use crate::stego::cipher;
use crate::stego::cursor::Cursor;
use crate::stego::error::StegoError;
use crate::stego::header::{length_width, read_header, write_header, StegoHeader, MAX_LSB};
use crate::stego::mime;
use crate::stego::placement::placement_offset;

/// Result of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPayload {
    /// The recovered payload bytes.
    pub data: Vec<u8>,
    /// Sniffed MIME type of the payload (cosmetic, for naming).
    pub mime_type: &'static str,
    /// File extension matching `mime_type`, dot included.
    pub extension: &'static str,
    /// LSB depth recovered from the embedded header.
    pub n_lsb: u8,
    /// Whether the payload was encrypted.
    pub encrypted: bool,
    /// Whether randomized placement was used.
    pub randomized: bool,
}

/// Hide `payload` inside a copy of `audio`.
///
/// The cover buffer is never mutated; the returned stego buffer differs
/// from it only in the low-order bits of frame payload bytes.
///
/// # Errors
/// - [`StegoError::InvalidLsbDepth`] if `n_lsb` is not in 1–4.
/// - [`StegoError::NoSyncFrames`] if `audio` holds no MPEG frames.
/// - [`StegoError::PayloadTooLarge`] if header plus payload exceed the
///   capacity at `n_lsb`.
pub fn embed(
    audio: &[u8],
    payload: &[u8],
    n_lsb: u8,
    encrypt: bool,
    randomize: bool,
    key: &str,
) -> Result<Vec<u8>, StegoError> {
    if n_lsb == 0 || n_lsb > MAX_LSB {
        return Err(StegoError::InvalidLsbDepth(n_lsb));
    }
    let frames = scan_frames(audio);
    if frames.is_empty() {
        return Err(StegoError::NoSyncFrames);
    }

    // The cipher keeps the length; only bit values change.
    let body = if encrypt { cipher::encrypt(payload, key) } else { payload.to_vec() };
    let payload_bits = body.len() as u64 * 8;

    let width = length_width(capacity_bits(&frames, n_lsb)) as u64;
    let header_bytes = 1 + width;
    let payload_bytes = (payload_bits + n_lsb as u64 - 1) / n_lsb as u64;
    if header_bytes + payload_bytes > usable_bytes(&frames) as u64 {
        return Err(StegoError::PayloadTooLarge);
    }

    let mut stego = audio.to_vec();
    let header = StegoHeader { n_lsb, encrypted: encrypt, randomized: randomize, payload_bits };
    let cursor = write_header(&mut stego, &frames, &header)?;

    if payload_bits > 0 {
        let offset = start_offset(randomize, key, cursor.frame, frames.len());
        let bits = bytes_to_bits(&body);
        write_payload(&mut stego, &frames, cursor, &bits, n_lsb, offset)?;
    }

    Ok(stego)
}

/// Recover a payload from a stego stream.
///
/// Self-describing: depth, flags, and length all come from the embedded
/// header, so only the stream and the key are needed.
///
/// # Errors
/// - [`StegoError::NoSyncFrames`] if `stego` holds no MPEG frames.
/// - [`StegoError::InsufficientData`] if the stream ends before the
///   declared header or payload bits are collected.
pub fn extract(stego: &[u8], key: &str) -> Result<ExtractedPayload, StegoError> {
    let frames = scan_frames(stego);
    if frames.is_empty() {
        return Err(StegoError::NoSyncFrames);
    }

    let (header, cursor) = read_header(stego, &frames)?;
    let offset = start_offset(header.randomized, key, cursor.frame, frames.len());
    let bits = read_payload(stego, &frames, cursor, header.n_lsb, header.payload_bits, offset)?;

    let mut data = bits_to_bytes(&bits);
    if header.encrypted {
        data = cipher::decrypt(&data, key);
    }

    let mime_type = mime::sniff(&data);
    Ok(ExtractedPayload {
        data,
        mime_type,
        extension: mime::extension_for(mime_type),
        n_lsb: header.n_lsb,
        encrypted: header.encrypted,
        randomized: header.randomized,
    })
}

/// Rotation applied to the frame visit order after the header.
///
/// The generator is only consulted when randomized placement is on; both
/// pipeline directions derive the identical offset from the identical
/// bounds.
fn start_offset(randomized: bool, key: &str, start_frame: usize, total_frames: usize) -> usize {
    if randomized {
        placement_offset(key, start_frame as u32, total_frames as u32) as usize
    } else {
        0
    }
}

/// Write payload bits into the low `n_lsb` bits of the usable bytes after
/// `cursor`, visiting frames in cyclic order starting `offset` frames in.
fn write_payload(
    stego: &mut [u8],
    frames: &[FrameDescriptor],
    cursor: Cursor,
    bits: &[u8],
    n_lsb: u8,
    offset: usize,
) -> Result<(), StegoError> {
    let remaining = frames.len() - cursor.frame;
    if remaining == 0 {
        return Err(StegoError::PayloadTooLarge);
    }

    let mut i = 0usize;
    for k in 0..remaining {
        let fi = (k + offset) % remaining + cursor.frame;
        let frame = &frames[fi];
        // The header frame is entered at the header's end, every other
        // frame at its first usable byte.
        let mut b = if fi == cursor.frame { cursor.byte } else { frame.data_start() };
        let end = frame.data_end();

        while b < end {
            for w in (0..n_lsb).rev() {
                if i == bits.len() {
                    break;
                }
                let mask = 1u8 << w;
                if bits[i] == 0 {
                    stego[b] &= !mask;
                } else {
                    stego[b] |= mask;
                }
                i += 1;
            }
            b += 1;
            if i == bits.len() {
                return Ok(());
            }
        }
    }

    Err(StegoError::PayloadTooLarge)
}

/// Collect `want` payload bits from the usable bytes after `cursor`,
/// mirroring [`write_payload`]'s visit order.
fn read_payload(
    stego: &[u8],
    frames: &[FrameDescriptor],
    cursor: Cursor,
    n_lsb: u8,
    want: u64,
    offset: usize,
) -> Result<Vec<u8>, StegoError> {
    if want == 0 {
        return Ok(Vec::new());
    }
    let want = usize::try_from(want).map_err(|_| StegoError::InsufficientData)?;

    let remaining = frames.len() - cursor.frame;
    if remaining == 0 {
        return Err(StegoError::InsufficientData);
    }

    let mut bits = Vec::with_capacity(want + n_lsb as usize);
    'frames: for k in 0..remaining {
        let fi = (k + offset) % remaining + cursor.frame;
        let frame = &frames[fi];
        let mut b = if fi == cursor.frame { cursor.byte } else { frame.data_start() };
        let end = frame.data_end();

        while b < end {
            for w in (0..n_lsb).rev() {
                bits.push(stego[b] >> w & 1);
            }
            b += 1;
            if bits.len() >= want {
                break 'frames;
            }
        }
    }

    if bits.len() < want {
        return Err(StegoError::InsufficientData);
    }
    bits.truncate(want);
    Ok(bits)
}

/// Expand bytes to a bit vector, MSB first within each byte.
fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for pos in (0..8).rev() {
            bits.push(byte >> pos & 1);
        }
    }
    bits
}

/// Pack a bit vector (MSB first) back to bytes. A trailing group shorter
/// than 8 bits carries no payload byte and is dropped.
fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &b| acc << 1 | b))
        .collect()
}
