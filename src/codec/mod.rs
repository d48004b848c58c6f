// ============================================================================
// Codec Module
// Conversions between numeral strings and byte buffers
// ============================================================================

mod hex_codec;

pub use hex_codec::{decode_hex, encode_hex};
