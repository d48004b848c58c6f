// ============================================================================
// Hex Codec
// Hex string <-> byte buffer conversion at the library boundary
// ============================================================================

use crate::engine::NumeralEngine;
use crate::numeric::{NumeralError, NumeralResult};

const HEX_BASE: u32 = 16;

/// Decode a hex string into bytes.
///
/// Whitespace anywhere and a leading `0x`/`0X` are ignored. An odd number of
/// digits is read as if a leading `0` were present. Upper- and lower-case
/// digits are both accepted.
///
/// # Errors
/// Returns `InvalidHex` if anything other than hex digits remains.
///
/// # Example
/// ```
/// use numstr::codec::decode_hex;
///
/// assert_eq!(decode_hex("0xDE AD be ef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
/// assert_eq!(decode_hex("fff").unwrap(), vec![0x0f, 0xff]);
/// ```
pub fn decode_hex(s: &str) -> NumeralResult<Vec<u8>> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let payload = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);

    if payload.is_empty() {
        return Ok(Vec::new());
    }

    // Validated against the default alphabet; a custom global alphabet
    // does not change what counts as hex
    let engine = NumeralEngine::default();
    if payload.starts_with('-') || !engine.is_num_str(payload, HEX_BASE, false)? {
        tracing::debug!(input = s, "rejected hex payload");
        return Err(NumeralError::InvalidHex);
    }

    let padded;
    let even = if payload.len() % 2 == 1 {
        padded = format!("0{}", payload);
        padded.as_str()
    } else {
        payload
    };

    ::hex::decode(even).map_err(|_| NumeralError::InvalidHex)
}

/// Encode bytes as lowercase hex, optionally prefixed with `0x`.
///
/// # Example
/// ```
/// use numstr::codec::encode_hex;
///
/// assert_eq!(encode_hex(&[0x0a, 0xff], true), "0x0aff");
/// assert_eq!(encode_hex(&[], false), "");
/// ```
pub fn encode_hex(bytes: &[u8], with_prefix: bool) -> String {
    let digits = ::hex::encode(bytes);
    if with_prefix {
        format!("0x{}", digits)
    } else {
        digits
    }
}
