//! HPACK string literals and prefixed integers (RFC 7541 Section 5).
//!
//! A string literal is a Huffman flag bit, a length encoded as a prefixed
//! integer, and the payload octets. Encoding picks the Huffman form only
//! when it is strictly shorter than the raw octets, so output never
//! expands past `len + length-prefix` bytes.

use crate::bits::{BitInputStream, BitOutputStream};
use crate::code::hpack_huffman_table;
use crate::error::LiteralError;

/// Huffman flag bit of a string literal's length octet.
const HUFFMAN_FLAG: u8 = 0x80;

/// Encode `value` as a prefixed integer (RFC 7541 Section 5.1), OR-ing
/// `pattern` into the bits above the `prefix_bits`-bit prefix.
pub fn encode_int(buf: &mut Vec<u8>, value: u64, prefix_bits: u8, pattern: u8) {
    let max = (1u64 << prefix_bits) - 1;
    if value < max {
        buf.push(pattern | value as u8);
    } else {
        buf.push(pattern | max as u8);
        let mut remaining = value - max;
        while remaining >= 128 {
            buf.push(0x80 | (remaining & 0x7f) as u8);
            remaining >>= 7;
        }
        buf.push(remaining as u8);
    }
}

/// Decode a prefixed integer; returns the value and the octets consumed.
pub fn decode_int(buf: &[u8], prefix_bits: u8) -> Result<(u64, usize), LiteralError> {
    let Some(&first) = buf.first() else {
        return Err(LiteralError::Incomplete);
    };
    let max = (1u64 << prefix_bits) - 1;
    let value = u64::from(first) & max;
    if value < max {
        return Ok((value, 1));
    }
    let mut value = max;
    let mut shift = 0u32;
    for (i, &b) in buf[1..].iter().enumerate() {
        value += u64::from(b & 0x7f) << shift;
        shift += 7;
        if b & 0x80 == 0 {
            return Ok((value, i + 2));
        }
        if shift > 56 {
            return Err(LiteralError::IntegerOverflow);
        }
    }
    Err(LiteralError::Incomplete)
}

/// Encode `data` as a string literal, Huffman-compressed when shorter.
pub fn encode(buf: &mut Vec<u8>, data: &[u8]) {
    let table = hpack_huffman_table();
    let huffman_len = table.encoded_size(data);
    if huffman_len < data.len() {
        encode_int(buf, huffman_len as u64, 7, HUFFMAN_FLAG);
        let mut bits = BitOutputStream::new();
        table.encode_string(data, &mut bits);
        buf.extend_from_slice(&bits.take_bytes());
    } else {
        encode_int(buf, data.len() as u64, 7, 0x00);
        buf.extend_from_slice(data);
    }
}

/// Decode one string literal; returns the octets and the total consumed.
pub fn decode(buf: &[u8]) -> Result<(Vec<u8>, usize), LiteralError> {
    let Some(&first) = buf.first() else {
        return Err(LiteralError::Incomplete);
    };
    let huffman = first & HUFFMAN_FLAG != 0;
    let (len, consumed) = decode_int(buf, 7)?;
    let len = len as usize;
    let total = consumed + len;
    if buf.len() < total {
        return Err(LiteralError::Incomplete);
    }
    let payload = &buf[consumed..total];
    if !huffman {
        return Ok((payload.to_vec(), total));
    }
    // No HPACK codeword is shorter than five bits, so `len` octets can
    // decode to at most `len * 8 / 5` symbols.
    let mut input = BitInputStream::new(u32::MAX, payload);
    let mut decoded = Vec::new();
    hpack_huffman_table().decode_string(&mut input, len * 8 / 5, &mut decoded)?;
    Ok((decoded, total))
}
