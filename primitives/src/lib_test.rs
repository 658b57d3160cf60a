use super::*;

fn circle(x: f64) -> Message {
    Message::Circle {
        p: Point::new(x, 0.0),
        r: 1.0,
        color: Color::RED,
        fill: false,
    }
}

#[test]
fn protocol_constants_match_latest_revision() {
    assert_eq!(PROTOCOL_VERSION, 2);
    assert_eq!(DEFAULT_PORT, 9111);
    assert_eq!(LEGACY_PORT, 7000);
    assert_eq!(DEFAULT_HOST, "127.0.0.1");
}

#[test]
fn layer_range_is_inclusive() {
    assert!(!layer_in_range(0));
    assert!(layer_in_range(LAYER_MIN));
    assert!(layer_in_range(DEFAULT_LAYER));
    assert!(layer_in_range(LAYER_MAX));
    assert!(!layer_in_range(LAYER_MAX + 1));
}

#[test]
fn encode_is_compact_without_trailing_delimiter() {
    let bytes = encode(&Message::End).expect("encode");
    assert_eq!(bytes, br#"{"type":"end"}"#);
    assert_ne!(bytes.last(), Some(&b'\n'));
}

#[test]
fn encode_writes_non_finite_coordinates_as_null() {
    let bytes = encode(&circle(f64::NAN)).expect("encode");
    let text = String::from_utf8(bytes).expect("utf-8");
    assert!(text.contains(r#""p":[null,0.0]"#));
}

#[test]
fn decode_stream_splits_concatenated_objects() {
    let mut bytes = encode(&circle(1.0)).expect("encode");
    bytes.extend(encode(&Message::End).expect("encode"));
    bytes.extend(encode(&circle(2.0)).expect("encode"));

    let messages = decode_stream(&bytes).expect("decode");
    assert_eq!(messages, vec![circle(1.0), Message::End, circle(2.0)]);
}

#[test]
fn decode_stream_tolerates_newline_separated_objects() {
    let messages = decode_stream(b"{\"type\":\"end\"}\n{\"type\":\"end\"}\n").expect("decode");
    assert_eq!(messages.len(), 2);
}

#[test]
fn decode_stream_rejects_odd_coordinate_lists() {
    let err = decode_stream(br#"{"type":"polyline","points":[1,2,3],"color":0}"#)
        .expect_err("odd coordinates");
    assert!(matches!(err, CodecError::Decode(_)));
    assert!(err.to_string().contains("odd number of coordinates"));
}

#[test]
fn decode_stream_rejects_unknown_enum_codes() {
    let err = decode_stream(br#"{"type":"area","x":0,"y":0,"area_type":42}"#).expect_err("bad code");
    assert!(err.to_string().contains("unknown area_type code: 42"));
}

#[test]
fn decode_stream_reports_truncated_tail() {
    let err = decode_stream(br#"{"type":"end"}{"type":"ci"#).expect_err("truncated");
    assert!(matches!(err, CodecError::Decode(_)));
}

#[test]
fn stream_decoder_reassembles_split_objects() {
    let bytes = {
        let mut bytes = encode(&circle(7.0)).expect("encode");
        bytes.extend(encode(&Message::End).expect("encode"));
        bytes
    };
    let (head, tail) = bytes.split_at(10);

    let mut decoder = StreamDecoder::new();
    assert!(decoder.push(head).expect("head").is_empty());
    assert!(decoder.pending() > 0);

    let messages = decoder.push(tail).expect("tail");
    assert_eq!(messages, vec![circle(7.0), Message::End]);
    assert_eq!(decoder.pending(), 0);
}

#[test]
fn stream_decoder_yields_each_object_once() {
    let mut decoder = StreamDecoder::new();
    let first = decoder.push(br#"{"type":"end"}{"type":"layer","#).expect("first");
    assert_eq!(first, vec![Message::End]);

    let second = decoder.push(br#""value":2}"#).expect("second");
    assert_eq!(second, vec![Message::Layer { value: 2 }]);
}

#[test]
fn stream_decoder_discards_buffer_after_malformed_object() {
    let mut decoder = StreamDecoder::new();
    let err = decoder.push(br#"{"type":"nope"}"#).expect_err("malformed");
    assert!(matches!(err, CodecError::Decode(_)));
    assert_eq!(decoder.pending(), 0);

    let messages = decoder.push(br#"{"type":"end"}"#).expect("recovers");
    assert_eq!(messages, vec![Message::End]);
}

#[test]
fn stream_decoder_delivers_good_prefix_before_malformed_object() {
    let mut decoder = StreamDecoder::new();
    let messages = decoder
        .push(br#"{"type":"end"}{"type":"layer","value":2}{"type":"bogus"}"#)
        .expect("prefix");
    assert_eq!(messages, vec![Message::End, Message::Layer { value: 2 }]);
    assert!(decoder.pending() > 0);

    let err = decoder.push(b"").expect_err("malformed object reported next");
    assert!(err.to_string().contains("bogus"));
    assert_eq!(decoder.pending(), 0);

    let messages = decoder.push(br#"{"type":"end"}"#).expect("recovers");
    assert_eq!(messages, vec![Message::End]);
}

#[test]
fn stream_decoder_keeps_partial_tail_after_complete_objects() {
    let mut decoder = StreamDecoder::new();
    let messages = decoder.push(b"{\"type\":\"end\"}\n  {\"type\":").expect("prefix");
    assert_eq!(messages, vec![Message::End]);

    let messages = decoder.push(br#""end"}"#).expect("tail");
    assert_eq!(messages, vec![Message::End]);
    assert_eq!(decoder.pending(), 0);
}
