// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmaudio

//! MPEG audio (MP3) container parsing, std-only.
//!
//! This module locates compressed frames in a raw byte stream without
//! decoding any audio: header parsing ([`header`]) and frame-synchronizing
//! scanning ([`scan`]). It is the foundation for steganographic embedding,
//! which operates entirely on the compressed bitstream.

pub mod header;
pub mod scan;

pub use header::{FrameHeader, CRC_LEN, HEADER_LEN};
pub use scan::{scan_frames, FrameDescriptor};
