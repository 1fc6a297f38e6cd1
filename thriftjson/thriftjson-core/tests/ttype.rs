use thriftjson_core::{FieldType, TType, UnknownTypeCode};

#[test]
fn ttype_codes_match_thrift_table() {
    assert_eq!(TType::Bool.code(), 2);
    assert_eq!(TType::Double.code(), 4);
    assert_eq!(TType::I32.code(), 8);
    assert_eq!(TType::String.code(), 11);
    assert_eq!(TType::Struct.code(), 12);
    assert_eq!(TType::List.code(), 15);
}

#[test]
fn ttype_try_from_round_trips_every_known_code() {
    for code in 0u8..=17 {
        match TType::try_from(code) {
            Ok(t) => assert_eq!(t.code(), code),
            Err(UnknownTypeCode(c)) => assert!(matches!(c, 5 | 7 | 9)),
        }
    }
}

#[test]
fn ttype_unknown_code_is_rejected() {
    assert_eq!(TType::try_from(42), Err(UnknownTypeCode(42)));
}

#[test]
fn ttype_display_matches_name() {
    assert_eq!(TType::I64.to_string(), "i64");
    assert_eq!(TType::Map.to_string(), TType::Map.name());
}

#[test]
fn field_type_reports_tag_and_code() {
    assert_eq!(FieldType::list(FieldType::I16).ttype(), Some(TType::List));
    assert_eq!(
        FieldType::map(FieldType::String, FieldType::Double).code(),
        13
    );
    assert_eq!(FieldType::Unsupported(99).ttype(), None);
    assert_eq!(FieldType::Unsupported(99).code(), 99);
    assert_eq!(FieldType::Unsupported(99).type_name(), "unsupported");
}

#[test]
fn unsupported_field_type_has_no_tag_even_for_known_codes() {
    for code in [1, 11, 12, 15] {
        let field_type = FieldType::Unsupported(code);
        assert_eq!(field_type.ttype(), None);
        assert_eq!(field_type.code(), code);
        assert_eq!(field_type.type_name(), "unsupported");
    }
}
