// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmaudio

//! Autokey stream cipher over raw byte values.
//!
//! A pedagogical substitution cipher, not a security-grade primitive: each
//! byte is shifted by the matching keystream byte modulo 256. When the key
//! is shorter than the message, the keystream is extended with the
//! plaintext itself (the autokey property), so decryption must rebuild the
//! keystream incrementally from the bytes it has already recovered.
//!
//! All arithmetic is over byte values 0–255 — the key contributes its
//! UTF-8 bytes, never code points — so any payload content round-trips.
//! An empty key makes both directions the identity.

use zeroize::Zeroizing;

/// Encrypt `plaintext` under `key`. Identity when the key is empty.
pub fn encrypt(plaintext: &[u8], key: &str) -> Vec<u8> {
    if key.is_empty() {
        return plaintext.to_vec();
    }

    // Keystream = key bytes, then as much plaintext as needed to cover the
    // message length. The buffer holds key and plaintext material, so it
    // is wiped on drop.
    let mut keystream = Zeroizing::new(key.as_bytes().to_vec());
    if keystream.len() < plaintext.len() {
        let need = plaintext.len() - keystream.len();
        keystream.extend_from_slice(&plaintext[..need]);
    }

    plaintext
        .iter()
        .zip(keystream.iter())
        .map(|(&p, &k)| p.wrapping_add(k))
        .collect()
}

/// Decrypt `ciphertext` under `key`. Identity when the key is empty.
///
/// The keystream beyond the literal key is plaintext the decryptor has
/// not seen yet, so each recovered byte is appended to the keystream
/// before the next byte is processed.
pub fn decrypt(ciphertext: &[u8], key: &str) -> Vec<u8> {
    if key.is_empty() {
        return ciphertext.to_vec();
    }

    let mut keystream = Zeroizing::new(key.as_bytes().to_vec());
    keystream.reserve(ciphertext.len());

    let mut plaintext = Vec::with_capacity(ciphertext.len());
    for (i, &c) in ciphertext.iter().enumerate() {
        let p = c.wrapping_sub(keystream[i]);
        plaintext.push(p);
        keystream.push(p);
    }
    plaintext
}
