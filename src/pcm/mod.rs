// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmaudio

//! PCM sample domain: decoded audio and the PSNR quality metric.
//!
//! Embedding flips bits in the compressed stream, so the only objective
//! way to judge imperceptibility is to decode cover and stego to samples
//! and compare them. PSNR is that comparison; the decode itself is the
//! job of an external collaborator (see [`decode`], feature `decode`).

use crate::stego::error::StegoError;

#[cfg(feature = "decode")]
mod decode;
#[cfg(feature = "decode")]
pub use decode::{decode_mpeg, quality};

/// Peak amplitude of a 16-bit PCM sample.
pub const PEAK_16_BIT: f64 = i16::MAX as f64;

/// Decoded interleaved PCM audio with its stream metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmAudio {
    /// Interleaved 16-bit samples.
    pub samples: Vec<i16>,
    /// Channel count (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sampling rate in Hz.
    pub sample_rate: u32,
    /// Sample width in bits. Anything but 16 is rejected.
    pub bits_per_sample: u32,
}

impl PcmAudio {
    /// Reject any sample width other than 16 bits.
    pub fn ensure_16_bit(&self) -> Result<(), StegoError> {
        if self.bits_per_sample != 16 {
            return Err(StegoError::UnsupportedSampleWidth(self.bits_per_sample));
        }
        Ok(())
    }
}

/// Peak signal-to-noise ratio between two sample sequences, in dB.
///
/// `20 * log10(32767 / sqrt(mse))` over element-wise differences;
/// `+inf` when the sequences are identical. Pure function, no state.
pub fn psnr(original: &[i16], modified: &[i16]) -> f64 {
    let n = original.len().min(modified.len());
    if n == 0 {
        return f64::INFINITY;
    }

    let mut acc = 0.0f64;
    for i in 0..n {
        let d = original[i] as f64 - modified[i] as f64;
        acc += d * d;
    }
    let mse = acc / n as f64;

    if mse == 0.0 {
        f64::INFINITY
    } else {
        20.0 * (PEAK_16_BIT / mse.sqrt()).log10()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_sequences_are_infinite() {
        let samples: Vec<i16> = (0..1000).map(|k| (k * 13 % 1789) as i16).collect();
        assert_eq!(psnr(&samples, &samples), f64::INFINITY);
    }

    #[test]
    fn psnr_decreases_with_error_magnitude() {
        let original: Vec<i16> = vec![1000; 4096];
        let off_by_1: Vec<i16> = vec![1001; 4096];
        let off_by_4: Vec<i16> = vec![1004; 4096];
        let off_by_64: Vec<i16> = vec![1064; 4096];

        let p1 = psnr(&original, &off_by_1);
        let p4 = psnr(&original, &off_by_4);
        let p64 = psnr(&original, &off_by_64);
        assert!(p1 > p4 && p4 > p64, "{p1} > {p4} > {p64} expected");
        assert!(p1.is_finite());
    }

    #[test]
    fn known_value_for_unit_error() {
        // mse = 1 -> 20 * log10(32767) ~= 90.31 dB
        let a = vec![0i16; 100];
        let b = vec![1i16; 100];
        let p = psnr(&a, &b);
        assert!((p - 20.0 * 32767f64.log10()).abs() < 1e-9);
    }

    #[test]
    fn empty_input_is_infinite() {
        assert_eq!(psnr(&[], &[]), f64::INFINITY);
    }

    #[test]
    fn sample_width_check() {
        let pcm = PcmAudio { samples: vec![0; 4], channels: 1, sample_rate: 44_100, bits_per_sample: 16 };
        assert!(pcm.ensure_16_bit().is_ok());

        let wide = PcmAudio { bits_per_sample: 24, ..pcm };
        assert_eq!(wide.ensure_16_bit(), Err(StegoError::UnsupportedSampleWidth(24)));
    }
}
