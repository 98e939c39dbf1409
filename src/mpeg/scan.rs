// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmaudio

//! Frame-synchronizing scanner over a raw MPEG audio byte stream.
//!
//! The scanner walks the buffer byte by byte, resynchronizing on every
//! candidate sync pattern (0xFF followed by three set bits). A candidate
//! whose header fields resolve to a valid bitrate and sampling rate yields
//! a [`FrameDescriptor`] and the scan jumps to the end of that frame;
//! anything else advances a single byte. Frame payload bytes are never
//! inspected, so sync-like patterns inside a frame cannot split it.

use super::header::{FrameHeader, CRC_LEN, HEADER_LEN};

/// Descriptor of one synchronized frame within the scanned stream.
///
/// Descriptors are ordered by stream position. Because the scanner
/// resynchronizes after an invalid candidate, `start + size` of frame *i*
/// need not equal `start` of frame *i + 1*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDescriptor {
    /// Byte offset of the frame header in the stream.
    pub start: usize,
    /// Total frame length in bytes, header included.
    pub size: usize,
    /// Whether a 2-byte CRC follows the 4-byte header.
    pub has_crc: bool,
}

impl FrameDescriptor {
    /// First byte of the usable payload region (past header and CRC).
    pub fn data_start(&self) -> usize {
        self.start + HEADER_LEN + if self.has_crc { CRC_LEN } else { 0 }
    }

    /// One past the last byte of the frame.
    pub fn data_end(&self) -> usize {
        self.start + self.size
    }

    /// Length of the usable payload region. Zero when the declared frame
    /// size does not even cover header and CRC.
    pub fn usable_len(&self) -> usize {
        self.data_end().saturating_sub(self.data_start())
    }
}

/// Scan a byte buffer for synchronized MPEG audio frames.
///
/// Returns the ordered frame list; an empty result means the buffer is not
/// a valid MPEG audio container and callers must reject it.
///
/// A single accumulated frame is discarded again when the scan encounters
/// a non-sync byte afterwards: a lone sync match inside arbitrary data is
/// far more likely to be noise than a one-frame stream, and real streams
/// keep chaining frame after frame.
pub fn scan_frames(audio: &[u8]) -> Vec<FrameDescriptor> {
    let mut frames = Vec::new();
    let mut i = 0usize;

    while i + HEADER_LEN <= audio.len() {
        if audio[i] == 0xFF && audio[i + 1] & 0xE0 == 0xE0 {
            let header: [u8; 4] = audio[i..i + HEADER_LEN].try_into().unwrap();
            match FrameHeader::parse(&header) {
                Some(h) => {
                    let size = h.frame_size();
                    frames.push(FrameDescriptor {
                        start: i,
                        size,
                        has_crc: h.has_crc(),
                    });
                    i += size;
                }
                None => i += 1,
            }
        } else {
            if frames.len() == 1 {
                frames.clear();
            }
            i += 1;
        }
    }

    frames
}
