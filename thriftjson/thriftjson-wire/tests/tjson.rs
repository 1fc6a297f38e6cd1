
use thriftjson_core::{FieldSpec, FieldType, Record, StructSpec, TType, Value};
use thriftjson_wire::{
    MemoryBuffer, OutputProtocol, ProtocolFactory, TJsonOutputProtocol, TJsonProtocolFactory,
    WireError, write_record, write_record_to,
};
use test_helpers::*;

fn tjson_text(record: &Record) -> String {
    let bytes = write_record_to(record, &TJsonProtocolFactory).unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[test]
fn simple_struct_is_keyed_by_field_id() {
    assert_eq!(
        tjson_text(&simple_sample()),
        r#"{"1":{"str":"Ada"},"2":{"i32":3}}"#
    );
}

#[test]
fn default_record_writes_non_null_defaults() {
    assert_eq!(
        tjson_text(&Record::new(sample_spec())),
        r#"{"1":{"str":""},"2":{"i32":0}}"#
    );
}

#[test]
fn every_container_kind_is_written() {
    assert_eq!(
        tjson_text(&full_sample()),
        concat!(
            r#"{"1":{"str":"Ada"},"2":{"i32":3},"3":{"dbl":1.5},"4":{"tf":1},"#,
            r#""5":{"lst":["str",2,"a","b"]},"6":{"set":["i16",1,7]},"#,
            r#""7":{"map":["i32","dbl",1,{"1":0.5}]},"8":{"rec":{"1":{"str":"x"}}}}"#
        )
    );
}

#[test]
fn output_is_valid_json() {
    let text = tjson_text(&full_sample());
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["7"]["map"][3]["1"], serde_json::json!(0.5));
}

#[test]
fn strings_are_escaped() {
    let record = Record::new(sample_spec())
        .with("name", "a\"b\\c\n\u{1}é")
        .unwrap();
    let text = tjson_text(&record);
    assert!(text.contains(r#""a\"b\\c\n\u0001é""#));
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["1"]["str"], "a\"b\\c\n\u{1}é");
}

#[test]
fn string_map_keys_are_escaped_between_separators() {
    let mut buffer = MemoryBuffer::new();
    {
        let mut protocol = TJsonOutputProtocol::new(&mut buffer);
        protocol
            .write_map_begin(TType::String, TType::String, 2)
            .unwrap();
        protocol.write_string("tab\t").unwrap();
        protocol.write_string("\u{7f}\u{1f}").unwrap();
        protocol.write_string("q\"").unwrap();
        protocol.write_string("\u{2028}").unwrap();
        protocol.write_map_end().unwrap();
    }
    let text = String::from_utf8(buffer.value().to_vec()).unwrap();
    assert_eq!(
        text,
        "[\"str\",\"str\",2,{\"tab\\t\":\"\u{7f}\\u001f\",\"q\\\"\":\"\u{2028}\"}]"
    );
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed[3]["tab\t"], "\u{7f}\u{1f}");
    assert_eq!(parsed[3]["q\""], "\u{2028}");
}

#[test]
fn non_finite_doubles_are_quoted() {
    let record = Record::new(sample_spec())
        .with("ratio", f64::NEG_INFINITY)
        .unwrap();
    assert!(tjson_text(&record).contains(r#""3":{"dbl":"-Infinity"}"#));

    let record = Record::new(sample_spec()).with("ratio", f64::NAN).unwrap();
    assert!(tjson_text(&record).contains(r#""3":{"dbl":"NaN"}"#));
}

#[test]
fn value_type_mismatch_reports_path() {
    let record = Record::new(sample_spec())
        .with("count", Value::I64(3))
        .unwrap();
    let err = write_record_to(&record, &TJsonProtocolFactory).unwrap_err();
    assert_eq!(
        err,
        WireError::TypeMismatch {
            path: "Sample.count".to_string(),
            expected: "i32",
            found: "I64",
        }
    );
}

#[test]
fn null_inside_container_is_a_mismatch() {
    let record = Record::new(sample_spec())
        .with("tags", Value::List(vec![Value::Null]))
        .unwrap();
    let err = write_record_to(&record, &TJsonProtocolFactory).unwrap_err();
    assert!(matches!(err, WireError::TypeMismatch { ref path, .. } if path == "Sample.tags[0]"));
}

#[test]
fn unsupported_field_type_fails() {
    let spec = StructSpec::from_fields(
        "Odd",
        vec![FieldSpec::new(1, "v", FieldType::Unsupported(1))],
    )
    .into_arc();
    let record = Record::new(spec).with("v", "anything").unwrap();
    let err = write_record_to(&record, &TJsonProtocolFactory).unwrap_err();
    assert_eq!(
        err,
        WireError::UnsupportedType {
            code: 1,
            path: "Odd.v".to_string(),
        }
    );
}

#[test]
fn unsupported_field_with_string_code_is_not_written_as_string() {
    let spec = StructSpec::from_fields(
        "Odd",
        vec![FieldSpec::new(1, "v", FieldType::Unsupported(11))],
    )
    .into_arc();
    let record = Record::new(spec).with("v", "text").unwrap();
    let err = write_record_to(&record, &TJsonProtocolFactory).unwrap_err();
    assert_eq!(
        err,
        WireError::UnsupportedType {
            code: 11,
            path: "Odd.v".to_string(),
        }
    );
}

#[test]
fn protocol_rejects_types_without_tjson_name() {
    let mut buffer = MemoryBuffer::new();
    let mut protocol = TJsonOutputProtocol::new(&mut buffer);
    let err = protocol.write_field_begin("x", TType::Void, 1).unwrap_err();
    assert_eq!(
        err,
        WireError::UnsupportedTType {
            ttype: TType::Void,
            protocol: "tjson",
        }
    );
}

#[test]
fn write_record_fills_caller_buffer() {
    let mut buffer = MemoryBuffer::with_capacity(64);
    {
        let factory = TJsonProtocolFactory;
        assert_eq!(factory.name(), "tjson");
        let mut protocol = factory.output_protocol(&mut buffer);
        write_record(&simple_sample(), protocol.as_mut()).unwrap();
    }
    assert!(!buffer.is_empty());
    assert_eq!(buffer.value(), br#"{"1":{"str":"Ada"},"2":{"i32":3}}"#);
}
