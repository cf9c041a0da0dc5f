//! Round-trip tests over the RFC 7541 Huffman fixtures.
//!
//! Every fixture must decode to the expected string and, re-encoded,
//! reproduce the expected octets bit for bit.

use hpack_huffman::{
    BitInputStream, BitOutputStream, DecodeError, HuffmanTable, hpack_huffman_table,
};

/// Fixture pairs from RFC 7541 Appendix C: decoded string, encoded hex.
const FIXTURES: &[(&[u8], &str)] = &[
    (b"www.example.com", "f1e3c2e5f23a6ba0ab90f4ff"),
    (b"no-cache", "a8eb10649cbf"),
    (b"custom-key", "25a849e95ba97d7f"),
    (b"custom-value", "25a849e95bb8e8b4bf"),
    (b"302", "6402"),
    (b"private", "aec3771a4b"),
    (
        b"Mon, 21 Oct 2013 20:13:21 GMT",
        "d07abe941054d444a8200595040b8166e082a62d1bff",
    ),
    (b"https://www.example.com", "9d29ad171863c78f0b97c8e9ae82ae43d3"),
    (
        b"foo=ASDJKHQKBZXOQWEOPIUAXQWEOIU; max-age=3600; version=1",
        "94e7821dd7f2e6c7b335dfdfcd5b3960d5af27087f3672c1ab270fb5291f9587316065c003ed4ee5b1063d5007",
    ),
];

fn unhex(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect()
}

fn encode(table: &HuffmanTable, input: &[u8]) -> Vec<u8> {
    let mut bits = BitOutputStream::new();
    table.encode_string(input, &mut bits);
    let encoded = bits.take_bytes();
    // encoded_size() must agree with encode_string().
    assert_eq!(encoded.len(), table.encoded_size(input));
    encoded
}

fn decode(table: &HuffmanTable, input: &[u8], max_output_len: usize) -> Vec<u8> {
    let mut stream = BitInputStream::new(u32::MAX, input);
    let mut out = Vec::new();
    table
        .decode_string(&mut stream, max_output_len, &mut out)
        .unwrap();
    out
}

#[test]
fn rfc7541_fixtures_round_trip() {
    let table = hpack_huffman_table();
    for &(decoded, encoded_hex) in FIXTURES {
        let encoded = unhex(encoded_hex);
        assert_eq!(
            decode(table, &encoded, decoded.len()),
            decoded,
            "decode mismatch for {:?}",
            std::str::from_utf8(decoded)
        );
        assert_eq!(
            encode(table, decoded),
            encoded,
            "encode mismatch for {:?}",
            std::str::from_utf8(decoded)
        );
    }
}

#[test]
fn individual_symbols_round_trip() {
    let table = hpack_huffman_table();
    for byte in 0..=255u8 {
        let input = [byte; 3];
        let encoded = encode(table, &input);
        assert_eq!(decode(table, &encoded, input.len()), input, "byte {byte}");
    }
}

#[test]
fn symbol_sequence_round_trips() {
    let table = hpack_huffman_table();
    let mut input = [0u8; 512];
    for i in 0..256 {
        input[i] = i as u8;
        input[511 - i] = i as u8;
    }
    let encoded = encode(table, &input);
    assert_eq!(decode(table, &encoded, input.len()), input);
}

#[test]
fn encoded_size_agrees_with_encode_string() {
    let table = hpack_huffman_table();
    let mut all_codes = [0u8; 256];
    for i in 0..256 {
        all_codes[i] = i as u8;
    }
    let cases: &[&[u8]] = &[
        b"",
        b"Mon, 21 Oct 2013 20:13:21 GMT",
        b"https://www.example.com",
        b"foo=ASDJKHQKBZXOQWEOPIUAXQWEOIU; max-age=3600; version=1",
        b"\x00",
        b"foo\x00bar",
        &all_codes,
    ];
    for &case in cases {
        // encode() asserts the agreement internally.
        encode(table, case);
    }
}

#[test]
fn empty_input_round_trips() {
    let table = hpack_huffman_table();
    assert_eq!(encode(table, b""), Vec::<u8>::new());
    assert_eq!(decode(table, b"", 0), Vec::<u8>::new());
}

#[test]
fn output_overflow_leaves_exactly_the_cap() {
    let table = hpack_huffman_table();
    let encoded = unhex("f1e3c2e5f23a6ba0ab90f4ff");
    let mut stream = BitInputStream::new(u32::MAX, &encoded);
    let mut out = Vec::new();
    assert_eq!(
        table.decode_string(&mut stream, 3, &mut out),
        Err(DecodeError::OutputOverflow)
    );
    assert_eq!(out, b"www");
}

#[test]
fn eight_or_more_pad_bits_are_trailing_garbage() {
    let table = hpack_huffman_table();
    let mut out = Vec::new();

    // Exactly eight pad bits: rejected.
    let mut stream = BitInputStream::new(u32::MAX, &[0xff]);
    assert_eq!(
        table.decode_string(&mut stream, 16, &mut out),
        Err(DecodeError::TrailingGarbage)
    );

    // Sixteen bits of EOS prefix: rejected.
    let mut stream = BitInputStream::new(u32::MAX, &[0xff, 0xff]);
    assert_eq!(
        table.decode_string(&mut stream, 16, &mut out),
        Err(DecodeError::TrailingGarbage)
    );

    // A valid encoding followed by a full byte of padding: rejected.
    let mut encoded = encode(table, b"302");
    encoded.push(0xff);
    let mut stream = BitInputStream::new(u32::MAX, &encoded);
    assert_eq!(
        table.decode_string(&mut stream, 16, &mut out),
        Err(DecodeError::TrailingGarbage)
    );
}

#[test]
fn pad_bits_must_match_the_eos_prefix() {
    let table = hpack_huffman_table();
    // '3' is 011001; completing the byte with zeros instead of ones
    // leaves two trailing bits that are not an EOS prefix.
    let mut stream = BitInputStream::new(u32::MAX, &[0b0110_0100]);
    let mut out = Vec::new();
    assert_eq!(
        table.decode_string(&mut stream, 16, &mut out),
        Err(DecodeError::TrailingGarbage)
    );
    assert_eq!(out, b"3");
}

#[test]
fn max_total_bits_limits_decoding() {
    let table = hpack_huffman_table();
    // "3" padded: 011001 11. A cap of eight bits hides the second byte.
    let mut stream = BitInputStream::new(8, &[0b0110_0111, 0xaa]);
    let mut out = Vec::new();
    table.decode_string(&mut stream, 16, &mut out).unwrap();
    assert_eq!(out, b"3");
}

#[test]
fn up_to_seven_pad_bits_are_accepted() {
    let table = hpack_huffman_table();
    // 'o' is 00111; the three pad bits completing its byte match the EOS
    // prefix.
    assert_eq!(decode(table, &[0b0011_1111], 1), b"o");
    // "033" spans 17 bits, leaving the maximum seven pad bits.
    assert_eq!(decode(table, &[0x03, 0x2c, 0xff], 3), b"033");
}
