//! Per-file character encoding sniffing.
//!
//! Order of preference: byte-order mark, BOM-less UTF-16 (judged by where NUL
//! bytes fall), valid UTF-8, and finally windows-1252, which decodes any input.
//! Detection therefore never fails.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};

/// Number of leading bytes inspected for the UTF-16 NUL heuristic.
const SNIFF_LEN: usize = 4096;

pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    if let Some(encoding) = sniff_utf16(bytes) {
        return encoding;
    }
    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }
    WINDOWS_1252
}

/// ASCII-heavy UTF-16 text has a NUL in every other byte.
fn sniff_utf16(bytes: &[u8]) -> Option<&'static Encoding> {
    let sample = &bytes[..bytes.len().min(SNIFF_LEN)];
    if sample.len() < 2 || sample.len() % 2 != 0 {
        return None;
    }

    let pairs = sample.len() / 2;
    let even_nuls = sample.iter().step_by(2).filter(|b| **b == 0).count();
    let odd_nuls = sample.iter().skip(1).step_by(2).filter(|b| **b == 0).count();

    if odd_nuls * 10 >= pairs * 9 && even_nuls == 0 {
        Some(UTF_16LE)
    } else if even_nuls * 10 >= pairs * 9 && odd_nuls == 0 {
        Some(UTF_16BE)
    } else {
        None
    }
}

/// Decodes `bytes` with the detected encoding, stripping any BOM. Malformed
/// sequences become U+FFFD rather than failing.
pub fn decode_bytes(bytes: &[u8]) -> (String, &'static Encoding) {
    let encoding = detect_encoding(bytes);
    let (text, actual, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::debug!("Replaced malformed {} sequences", actual.name());
    }
    (text.into_owned(), actual)
}
