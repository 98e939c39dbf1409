// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmaudio

//! Payload content sniffing and extension mapping.
//!
//! Classifies extracted payload bytes by magic-byte signatures, falling
//! back to text heuristics for UTF-8 content. The result only names the
//! recovered file for the caller; it plays no part in the codec's
//! correctness, and a misclassification costs nothing but a filename.

/// Sniff the MIME type of a payload from its leading bytes.
pub fn sniff(data: &[u8]) -> &'static str {
    if data.is_empty() {
        return "application/octet-stream";
    }
    if data.starts_with(b"ID3") || matches!(data, [0xFF, b, ..] if b & 0xE0 == 0xE0) {
        return "audio/mpeg";
    }
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return "image/jpeg";
    }
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return "image/png";
    }
    if data.starts_with(b"%PDF-") {
        return "application/pdf";
    }
    if data.starts_with(&[0x50, 0x4B, 0x03, 0x04]) {
        return "application/zip";
    }
    // Compound File Binary (legacy Office)
    if data.starts_with(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]) {
        return "application/msword";
    }
    // ISO base media: size box followed by "ftyp"
    if data.len() >= 12 && &data[4..8] == b"ftyp" {
        return "video/mp4";
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let trimmed = text.trim_start();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            return "application/json";
        }
        if trimmed.starts_with("<?xml") {
            return "application/xml";
        }
        let lower = trimmed.get(..15).unwrap_or(trimmed).to_ascii_lowercase();
        if lower.starts_with("<!doctype html") || lower.starts_with("<html") {
            return "text/html";
        }
        return "text/plain";
    }

    "application/octet-stream"
}

/// Map a MIME type to a file extension, dot included.
pub fn extension_for(mime_type: &str) -> &'static str {
    match mime_type {
        "audio/mpeg" => ".mp3",
        "image/jpeg" => ".jpg",
        "image/png" => ".png",
        "application/pdf" => ".pdf",
        "application/zip" => ".zip",
        "application/msword" => ".doc",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => ".docx",
        "text/plain" => ".txt",
        "text/html" => ".html",
        "application/json" => ".json",
        "application/xml" => ".xml",
        "video/mp4" => ".mp4",
        _ => ".bin",
    }
}
