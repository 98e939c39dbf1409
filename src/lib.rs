// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmaudio

//! # phasm-audio
//!
//! Pure-Rust steganography engine for hiding arbitrary payloads (files or
//! messages) in MPEG audio (MP3) files. Embedding rewrites the low-order
//! bits of compressed-frame payload bytes directly in the bitstream — no
//! decode/re-encode — so the stego file stays playable, frame-synchronized,
//! and byte-for-byte identical to the cover outside the touched bits.
//!
//! A self-describing header in the first frames carries the LSB depth
//! (1–4 bits per byte), the cipher and placement flags, and the payload
//! bit length: extraction needs only the stego bytes and the key. The
//! optional autokey cipher is a pedagogical stream cipher (not a security
//! primitive); keyed pseudorandom placement scatters the payload across
//! frames in an order only the key holder can reproduce.
//!
//! The MPEG container layer (`mpeg` module) is zero-dependency (std only).
//! The steganography layer (`stego` module) uses ChaCha20 for deterministic
//! placement and zeroizes key material. The sample layer (`pcm` module)
//! scores imperceptibility as PSNR over decoded audio (feature `decode`).
//!
//! # Quick start
//!
//! ```rust,ignore
//! use phasm_audio::{embed, extract};
//!
//! let cover = std::fs::read("song.mp3").unwrap();
//! let stego = embed(&cover, b"meet at dawn", 2, true, true, "passphrase").unwrap();
//! let out = extract(&stego, "passphrase").unwrap();
//! assert_eq!(out.data, b"meet at dawn");
//! ```

pub mod mpeg;
pub mod pcm;
pub mod stego;

pub use mpeg::{scan_frames, FrameDescriptor, FrameHeader};
pub use stego::capacity::{capacity_bits, usable_bytes};
pub use stego::{embed, extract, ExtractedPayload, StegoError, StegoHeader, MAX_LSB};
pub use pcm::{psnr, PcmAudio};
#[cfg(feature = "decode")]
pub use pcm::{decode_mpeg, quality};
