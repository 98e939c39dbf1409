// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmaudio

//! Round-trip integration tests for embed/extract over synthesized covers.

use phasm_audio::{capacity_bits, embed, extract, scan_frames, StegoError};

/// Synthesize a cover of identical MPEG1 Layer III frames:
/// 128 kbps, 44.1 kHz, no padding -> 417 bytes per frame.
fn synth_cover(frame_count: usize, with_crc: bool) -> Vec<u8> {
    let header: [u8; 4] = if with_crc {
        [0xFF, 0xFA, 0x90, 0x00]
    } else {
        [0xFF, 0xFB, 0x90, 0x00]
    };
    let mut audio = Vec::with_capacity(frame_count * 417);
    for k in 0..frame_count {
        let mut frame = header.to_vec();
        frame.resize(417, (k as u8).wrapping_mul(37) ^ 0x6C);
        audio.extend_from_slice(&frame);
    }
    audio
}

#[test]
fn roundtrip_all_depths_and_flags() {
    let cover = synth_cover(12, false);
    // Payload with every byte value, including sync-like 0xFF runs.
    let payload: Vec<u8> = (0..=255u8).cycle().take(600).collect();

    for n_lsb in 1..=4u8 {
        for encrypt in [false, true] {
            for randomize in [false, true] {
                let stego = embed(&cover, &payload, n_lsb, encrypt, randomize, "stego-key")
                    .unwrap_or_else(|e| panic!("embed failed for n_lsb={n_lsb} enc={encrypt} rnd={randomize}: {e}"));
                let out = extract(&stego, "stego-key").unwrap();
                assert_eq!(out.data, payload, "n_lsb={n_lsb} enc={encrypt} rnd={randomize}");
                // Header self-description: extract is told nothing but the key.
                assert_eq!(out.n_lsb, n_lsb);
                assert_eq!(out.encrypted, encrypt);
                assert_eq!(out.randomized, randomize);
            }
        }
    }
}

#[test]
fn reference_scenario_100_frames() {
    // 100 frames x 417 bytes, no CRC, n_lsb=2: 100 * 413 * 2 = 82,600 bits
    // of capacity, far beyond the ~21-bit header plus 24-bit payload.
    let cover = synth_cover(100, false);
    let frames = scan_frames(&cover);
    assert_eq!(frames.len(), 100);
    assert_eq!(capacity_bits(&frames, 2), 82_600);

    let stego = embed(&cover, b"hey", 2, false, false, "").unwrap();
    let out = extract(&stego, "").unwrap();
    assert_eq!(out.data, b"hey");
    assert_eq!(out.mime_type, "text/plain");
    assert_eq!(out.extension, ".txt");
}

#[test]
fn length_field_width_recomputed_at_recovered_depth() {
    // At n_lsb=3 the capacity, and with it the length-field width, differs
    // from the n_lsb=1 value; extraction only round-trips because it
    // recomputes the width from the depth it just recovered.
    let cover = synth_cover(8, false);
    let frames = scan_frames(&cover);
    assert_ne!(
        64 - capacity_bits(&frames, 1).leading_zeros(),
        64 - capacity_bits(&frames, 3).leading_zeros(),
    );

    let payload = b"width check payload".to_vec();
    let stego = embed(&cover, &payload, 3, false, false, "").unwrap();
    let out = extract(&stego, "").unwrap();
    assert_eq!(out.data, payload);
    assert_eq!(out.n_lsb, 3);
}

#[test]
fn capacity_boundary_exact_fit() {
    // 4 frames: 1,652 usable bytes; capacity at n_lsb=1 is 1,652 bits so
    // the length field is 11 bits and the header consumes 12 bytes. The
    // remaining 1,640 bytes hold exactly 205 payload bytes at 1 bit/byte.
    let cover = synth_cover(4, false);
    let exact = vec![0x3Cu8; 205];
    let stego = embed(&cover, &exact, 1, false, false, "").unwrap();
    assert_eq!(extract(&stego, "").unwrap().data, exact);

    let over = vec![0x3Cu8; 206];
    assert_eq!(
        embed(&cover, &over, 1, false, false, ""),
        Err(StegoError::PayloadTooLarge)
    );
}

#[test]
fn crc_frames_roundtrip_and_crc_bytes_untouched() {
    let cover = synth_cover(10, true);
    let payload = b"crc-aware cursor".to_vec();
    let stego = embed(&cover, &payload, 2, true, false, "k3y").unwrap();

    // Frame headers and CRC fields must never be rewritten.
    for f in scan_frames(&cover) {
        assert_eq!(stego[f.start..f.start + 6], cover[f.start..f.start + 6]);
    }
    assert_eq!(extract(&stego, "k3y").unwrap().data, payload);
}

#[test]
fn wrong_key_yields_wrong_bytes_not_an_error() {
    // The autokey cipher has no integrity check: a wrong key produces
    // garbage of the right length, never a failure.
    let cover = synth_cover(8, false);
    let payload = b"only for the right key".to_vec();
    let stego = embed(&cover, &payload, 2, true, true, "alpha").unwrap();

    let wrong = extract(&stego, "omega").unwrap();
    assert_eq!(wrong.data.len(), payload.len());
    assert_ne!(wrong.data, payload);

    let right = extract(&stego, "alpha").unwrap();
    assert_eq!(right.data, payload);
}

#[test]
fn key_presence_does_not_imply_encryption() {
    // Flags, not key presence, decide whether the cipher and the placement
    // rotation run. With both flags off the key is never consulted.
    let cover = synth_cover(6, false);
    let payload = b"plain as embedded".to_vec();
    let stego = embed(&cover, &payload, 1, false, false, "ignored-key").unwrap();
    let out = extract(&stego, "a-different-key").unwrap();
    assert_eq!(out.data, payload);
    assert!(!out.encrypted);
    assert!(!out.randomized);
}

#[test]
fn randomized_placement_spans_many_frames() {
    let cover = synth_cover(40, false);
    // Large enough to wrap through most of the cyclic frame order.
    let payload: Vec<u8> = (0..4000u32).map(|k| (k % 251) as u8).collect();
    let stego = embed(&cover, &payload, 4, true, true, "rotor").unwrap();
    assert_eq!(extract(&stego, "rotor").unwrap().data, payload);
}

#[test]
fn non_container_inputs_rejected() {
    assert_eq!(
        embed(&[0u8; 1000], b"x", 1, false, false, ""),
        Err(StegoError::NoSyncFrames)
    );
    assert_eq!(extract(&[0u8; 1000], "").unwrap_err(), StegoError::NoSyncFrames);
    assert_eq!(extract(&[], "").unwrap_err(), StegoError::NoSyncFrames);
}

#[test]
fn mime_detection_of_extracted_payloads() {
    let cover = synth_cover(30, false);

    let png_payload = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3];
    let stego = embed(&cover, &png_payload, 2, false, false, "").unwrap();
    let out = extract(&stego, "").unwrap();
    assert_eq!(out.mime_type, "image/png");
    assert_eq!(out.extension, ".png");

    let json_payload = br#"{"channel": 7}"#;
    let stego = embed(&cover, json_payload, 2, true, false, "k").unwrap();
    let out = extract(&stego, "k").unwrap();
    assert_eq!(out.mime_type, "application/json");
    assert_eq!(out.extension, ".json");
}

#[cfg(feature = "decode")]
#[test]
#[ignore = "needs a real MP3 at test-vectors/cover.mp3"]
fn quality_of_real_stego_file() {
    use phasm_audio::quality;

    let cover = std::fs::read("test-vectors/cover.mp3").unwrap();
    let stego = embed(&cover, b"imperceptibility probe", 1, true, true, "pass").unwrap();

    // Flipping only the lowest bit of payload bytes should leave the
    // decoded audio close to the original.
    let db = quality(&cover, &stego).unwrap();
    assert!(db > 40.0, "PSNR {db} dB suspiciously low for 1-bit embedding");
    assert_eq!(quality(&cover, &cover).unwrap(), f64::INFINITY);
}
