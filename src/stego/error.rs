// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmaudio

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from container scanning through
//! embedding, extraction, and quality evaluation. Every error is terminal
//! for the call: the pipeline never truncates or retries.

use core::fmt;

/// Errors that can occur during steganographic embedding or extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum StegoError {
    /// No synchronized MPEG audio frames found in the input.
    NoSyncFrames,
    /// The requested LSB depth is outside the representable range (1–4).
    InvalidLsbDepth(u8),
    /// Header plus payload exceed the cover's embedding capacity.
    PayloadTooLarge,
    /// The stream ended before the embedded header or payload could be
    /// recovered (wrong key, corrupted stego data, or no embedded data).
    InsufficientData,
    /// Decoded PCM has a sample width other than 16 bits.
    UnsupportedSampleWidth(u32),
    /// The audio decode collaborator failed to produce PCM samples.
    DecodeFailed(String),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSyncFrames => write!(f, "no valid MPEG audio frames found"),
            Self::InvalidLsbDepth(n) => write!(f, "LSB depth {n} out of range (1-4)"),
            Self::PayloadTooLarge => write!(f, "payload exceeds the audio's embedding capacity"),
            Self::InsufficientData => write!(f, "stream ended before the embedded data was recovered"),
            Self::UnsupportedSampleWidth(w) => write!(f, "unsupported sample width: {w}-bit (only 16-bit PCM)"),
            Self::DecodeFailed(msg) => write!(f, "audio decode failed: {msg}"),
        }
    }
}

impl std::error::Error for StegoError {}
