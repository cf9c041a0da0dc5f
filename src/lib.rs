//! Canonical Huffman codec for HPACK, the HTTP/2 header-compression
//! format (RFC 7541).
//!
//! The static HPACK code assigns one codeword to every byte value 0-255
//! plus an end-of-string marker. [`HuffmanTable`] validates such a code
//! and builds multi-level lookup tables for decoding. Encoded output is
//! padded with the leading bits of the EOS codeword; decoding rejects any
//! input whose trailing bits are not exactly that padding.
//!
//! # Example
//!
//! ```
//! use hpack_huffman::{BitInputStream, BitOutputStream, hpack_huffman_table};
//!
//! let table = hpack_huffman_table();
//!
//! let mut bits = BitOutputStream::new();
//! table.encode_string(b"www.example.com", &mut bits);
//! let encoded = bits.take_bytes();
//! assert_eq!(encoded.len(), table.encoded_size(b"www.example.com"));
//!
//! let mut input = BitInputStream::new(u32::MAX, &encoded);
//! let mut decoded = Vec::new();
//! table.decode_string(&mut input, 15, &mut decoded).unwrap();
//! assert_eq!(decoded, b"www.example.com");
//! ```
//!
//! Custom canonical codes can be validated and used directly:
//!
//! ```
//! use hpack_huffman::{HuffmanSymbol, HuffmanTable, hpack_huffman_code};
//!
//! let table = HuffmanTable::new(&hpack_huffman_code()).unwrap();
//! assert_eq!(table.encoded_size(b"no-cache"), 6);
//! ```

mod bits;
mod code;
mod error;
mod huffman;
pub mod literal;

pub use bits::{BitInputStream, BitOutputStream};
pub use code::{hpack_huffman_code, hpack_huffman_table};
pub use error::{DecodeError, InitializeError, LiteralError};
pub use huffman::{HuffmanSymbol, HuffmanTable};
