// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmaudio

//! MP3 decode collaborator and the quality entry point.
//!
//! Decoding goes through `minimp3`, which emits interleaved 16-bit PCM
//! frame by frame — the one sample width the quality evaluator accepts.
//! With the `parallel` feature, `quality` decodes cover and stego
//! concurrently via `rayon::join`; the two decodes are independent.

use std::io::Cursor;

use minimp3::{Decoder, Error as Mp3Error, Frame};

use super::{psnr, PcmAudio};
use crate::stego::error::StegoError;

/// Decode an MPEG audio stream to interleaved 16-bit PCM.
///
/// Stream metadata (channels, rate) is taken from the first decoded
/// frame.
///
/// # Errors
/// [`StegoError::DecodeFailed`] when the decoder reports an error or the
/// stream contains no decodable frames.
pub fn decode_mpeg(bytes: &[u8]) -> Result<PcmAudio, StegoError> {
    let mut decoder = Decoder::new(Cursor::new(bytes));
    let mut samples: Vec<i16> = Vec::new();
    let mut channels = 0u16;
    let mut sample_rate = 0u32;

    loop {
        match decoder.next_frame() {
            Ok(Frame { data, sample_rate: rate, channels: ch, .. }) => {
                if channels == 0 {
                    channels = ch as u16;
                    sample_rate = rate as u32;
                }
                samples.extend_from_slice(&data);
            }
            Err(Mp3Error::Eof) => break,
            Err(Mp3Error::SkippedData) => continue,
            Err(e) => return Err(StegoError::DecodeFailed(format!("{e:?}"))),
        }
    }

    if samples.is_empty() {
        return Err(StegoError::DecodeFailed("no decodable audio frames".into()));
    }

    Ok(PcmAudio { samples, channels, sample_rate, bits_per_sample: 16 })
}

/// PSNR between a cover stream and its stego counterpart, in dB.
///
/// Decodes both streams to PCM, enforces the 16-bit sample width, and
/// compares element-wise. Identical decodes yield `+inf`.
pub fn quality(cover: &[u8], stego: &[u8]) -> Result<f64, StegoError> {
    #[cfg(feature = "parallel")]
    let (cover_pcm, stego_pcm) = rayon::join(|| decode_mpeg(cover), || decode_mpeg(stego));
    #[cfg(not(feature = "parallel"))]
    let (cover_pcm, stego_pcm) = (decode_mpeg(cover), decode_mpeg(stego));

    let cover_pcm = cover_pcm?;
    let stego_pcm = stego_pcm?;
    cover_pcm.ensure_16_bit()?;
    stego_pcm.ensure_16_bit()?;

    Ok(psnr(&cover_pcm.samples, &stego_pcm.samples))
}
