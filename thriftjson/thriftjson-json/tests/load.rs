
use std::{fs, path::PathBuf};

use serde_json::json;
use tempfile::{TempDir, tempdir};
use thriftjson_core::Value;
use thriftjson_json::{
    BoolPolicy, DecodeError, JsonDecoder, LoadError, load_json, load_json_to,
    load_json_to_record, load_json_to_record_with,
};
use test_helpers::*;

fn write_fixture(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fixture.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn load_json_returns_parsed_tree() -> Result<(), LoadError> {
    let (_dir, path) = write_fixture(r#"{"name": "Ada", "list": [1, 2]}"#);
    assert_eq!(load_json(&path)?, json!({"name": "Ada", "list": [1, 2]}));
    Ok(())
}

#[test]
fn load_json_accepts_non_object_documents() -> Result<(), LoadError> {
    let (_dir, path) = write_fixture("[true, null, 1.5]");
    assert_eq!(load_json(&path)?, json!([true, null, 1.5]));
    Ok(())
}

#[test]
fn load_json_to_record_decodes_document() -> Result<(), LoadError> {
    let (_dir, path) = write_fixture(r#"{"name": "Ada", "ignored": 1}"#);
    let record = load_json_to_record(&path, &name_spec())?;
    assert_eq!(record.get("name"), Some(&Value::string("Ada")));
    Ok(())
}

#[test]
fn load_json_to_record_with_uses_decoder_policy() -> Result<(), LoadError> {
    let (_dir, path) = write_fixture(r#"{"active": "no"}"#);
    let decoder = JsonDecoder::new_with_bool_policy(BoolPolicy::Truthy);
    let record = load_json_to_record_with(&path, &employee_spec(), &decoder)?;
    assert_eq!(record.get("active"), Some(&Value::Bool(true)));
    Ok(())
}

#[test]
fn load_json_to_typed_struct() -> Result<(), LoadError> {
    let (_dir, path) = write_fixture(r#"{"name": "Grace", "age": 85}"#);
    let person: Person = load_json_to(&path)?;
    assert_eq!(person.age, Some(85));
    Ok(())
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");
    match load_json(&path).unwrap_err() {
        LoadError::Io { path: p, source } => {
            assert_eq!(p, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn invalid_json_is_parse_error() {
    let (_dir, path) = write_fixture("{not json");
    let err = load_json_to_record(&path, &name_spec()).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.to_string().contains("fixture.json"));
}

#[test]
fn schema_mismatch_is_decode_error() {
    let (_dir, path) = write_fixture(r#"{"age": "forty"}"#);
    let err = load_json_to_record(&path, &employee_spec()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Decode(DecodeError::NumericConversion { .. })
    ));
}
