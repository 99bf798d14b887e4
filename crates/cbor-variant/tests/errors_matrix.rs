use cbor_variant::{decode, encode, CborDecoder, CborError, DecoderConfig, Value};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn text(s: &str) -> Value {
    Value::Text(s.to_owned())
}

fn samples() -> Vec<Value> {
    vec![
        Value::from(24),
        Value::from(-70_000),
        Value::from(u64::MAX),
        Value::Float(1.1),
        text("smeg"),
        Value::Bytes(vec![1, 2, 3, 4, 5]),
        Value::Array(vec![Value::from(1), text("pie"), Value::Float(1.1)]),
        Value::Map(vec![
            (text("one"), Value::from(1)),
            (text("two"), Value::Array(vec![Value::Null, Value::Bool(true)])),
        ]),
    ]
}

#[test]
fn every_strict_prefix_is_unexpected_end() {
    init_logger();
    for value in samples() {
        let bytes = encode(&value);
        assert!(bytes.len() > 1);
        for cut in 0..bytes.len() {
            let err = decode(&bytes[..cut]).unwrap_err();
            assert!(
                matches!(err, CborError::UnexpectedEndOfInput { .. }),
                "prefix {cut} of {value}: {err:?}"
            );
        }
    }
}

#[test]
fn empty_input_offset_is_zero() {
    assert_eq!(
        decode(&[]),
        Err(CborError::UnexpectedEndOfInput { offset: 0 })
    );
}

#[test]
fn truncated_nested_item_reports_its_offset() {
    // [1, "abc"] with the text cut short.
    let bytes = [0x82, 0x01, 0x63, b'a', b'b'];
    assert_eq!(
        decode(&bytes),
        Err(CborError::UnexpectedEndOfInput { offset: 2 })
    );
}

#[test]
fn invalid_utf8_with_valid_framing() {
    let bytes = [0x63, 0x61, 0xff, 0x62];
    assert_eq!(decode(&bytes), Err(CborError::InvalidUtf8 { offset: 0 }));

    // Same payload as a byte string is fine.
    assert_eq!(
        decode(&[0x43, 0x61, 0xff, 0x62]),
        Ok(Value::Bytes(vec![0x61, 0xff, 0x62]))
    );

    // Inside a map value.
    let nested = [0xa1, 0x61, b'k', 0x62, 0xc3, 0x28];
    assert_eq!(decode(&nested), Err(CborError::InvalidUtf8 { offset: 3 }));
}

#[test]
fn reserved_and_indefinite_codes_are_invalid() {
    for major in 0u8..=5 {
        for minor in [28u8, 29, 30, 31] {
            let byte = (major << 5) | minor;
            assert_eq!(
                decode(&[byte, 0x00, 0x00]),
                Err(CborError::InvalidTag { byte, offset: 0 }),
                "initial byte {byte:#04x}"
            );
        }
    }
}

#[test]
fn unsupported_major_seven_codes_are_invalid() {
    // simple values 0..19, undefined, one-byte simple, reserved, break
    let mut bytes: Vec<u8> = (0xe0..=0xf3).collect();
    bytes.extend([0xf7, 0xf8, 0xfc, 0xfd, 0xfe, 0xff]);
    for byte in bytes {
        assert_eq!(
            decode(&[byte, 0x00]),
            Err(CborError::InvalidTag { byte, offset: 0 })
        );
    }
}

#[test]
fn semantic_tags_are_invalid() {
    // tag 1 (epoch time) wrapping an integer
    assert_eq!(
        decode(&[0xc1, 0x01]),
        Err(CborError::InvalidTag {
            byte: 0xc1,
            offset: 0
        })
    );
    // nested inside an array
    assert_eq!(
        decode(&[0x82, 0x01, 0xd8, 0x20, 0x01]),
        Err(CborError::InvalidTag {
            byte: 0xd8,
            offset: 2
        })
    );
}

#[test]
fn huge_declared_length_fails_without_allocating() {
    // array claiming u32::MAX elements followed by one element
    assert!(matches!(
        decode(&[0x9a, 0xff, 0xff, 0xff, 0xff, 0x01]),
        Err(CborError::UnexpectedEndOfInput { .. })
    ));
    // map claiming u64::MAX pairs
    let err = decode(&[0xbb, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]).unwrap_err();
    assert!(matches!(
        err,
        CborError::UnexpectedEndOfInput { .. } | CborError::IntegerOverflow(_)
    ));
    // byte string claiming more than the buffer
    assert_eq!(
        decode(&[0x5a, 0x00, 0x01, 0x00, 0x00, 0x00]),
        Err(CborError::UnexpectedEndOfInput { offset: 0 })
    );
}

fn nested_arrays(depth: usize) -> Vec<u8> {
    let mut bytes = vec![0x81; depth];
    bytes.push(0x01);
    bytes
}

#[test]
fn depth_guard_limits_nesting() {
    init_logger();
    let decoder = CborDecoder::with_config(DecoderConfig::new().with_max_depth(3));
    assert!(decoder.decode(&nested_arrays(3)).is_ok());
    assert_eq!(
        decoder.decode(&nested_arrays(4)),
        Err(CborError::DepthExceeded { max_depth: 3 })
    );
    // maps count towards the same limit
    assert_eq!(
        decoder.decode(&[0x81, 0x81, 0xa1, 0x01, 0x81, 0x01]),
        Err(CborError::DepthExceeded { max_depth: 3 })
    );
    // scalars are never limited
    let flat = CborDecoder::with_config(DecoderConfig::new().with_max_depth(0));
    assert_eq!(flat.decode(&[0x01]), Ok(Value::from(1)));
    assert!(flat.decode(&[0x80]).is_err());
}

#[test]
fn default_depth_guard_stops_hostile_nesting() {
    let decoder = CborDecoder::new();
    assert_eq!(decoder.config().max_depth, 256);
    assert!(decoder.decode(&nested_arrays(256)).is_ok());
    assert_eq!(
        decoder.decode(&nested_arrays(100_000)),
        Err(CborError::DepthExceeded { max_depth: 256 })
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        CborError::InvalidTag {
            byte: 0xff,
            offset: 3
        }
        .to_string(),
        "invalid initial byte 0xff at offset 3"
    );
    assert_eq!(
        CborError::DepthExceeded { max_depth: 8 }.to_string(),
        "nesting deeper than 8 levels"
    );
}
