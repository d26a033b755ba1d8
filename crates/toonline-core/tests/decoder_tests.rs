use toonline_core::{decode, ToonError};

/// Helper: compare decoded output against expected JSON, ignoring formatting.
fn assert_json_eq(actual: &str, expected: &str) {
    let va: serde_json::Value = serde_json::from_str(actual).unwrap();
    let vb: serde_json::Value = serde_json::from_str(expected).unwrap();
    assert_eq!(va, vb, "JSON mismatch:\n  actual:   {actual}\n  expected: {expected}");
}

// ============================================================================
// Boundary cases
// ============================================================================

#[test]
fn decode_empty_input_is_empty_object() {
    assert_eq!(decode("").unwrap(), "{}");
    assert_eq!(decode("   \n  \n").unwrap(), "{}");
}

#[test]
fn decode_bare_primitive_is_a_valid_document() {
    assert_json_eq(&decode("STR=hi").unwrap(), r#""hi""#);
    assert_json_eq(&decode("NUM=42").unwrap(), "42");
    assert_json_eq(&decode("BOOL=true").unwrap(), "true");
    assert_json_eq(&decode("NULL").unwrap(), "null");
}

#[test]
fn decode_output_is_pretty_printed() {
    let json = decode("OBJ_START\nKEY=a\nNUM=1\nOBJ_END").unwrap();
    assert_eq!(json, "{\n  \"a\": 1\n}");
}

// ============================================================================
// Objects and arrays
// ============================================================================

#[test]
fn decode_flat_object() {
    let json = decode("OBJ_START\nKEY=name\nSTR=test\nKEY=value\nNUM=123\nOBJ_END").unwrap();
    assert_json_eq(&json, r#"{"name":"test","value":123}"#);
}

#[test]
fn decode_preserves_key_order() {
    let json = decode("OBJ_START\nKEY=z\nNUM=1\nKEY=a\nNUM=2\nOBJ_END").unwrap();
    // preserve_order keeps insertion order through pretty-printing
    let z = json.find("\"z\"").unwrap();
    let a = json.find("\"a\"").unwrap();
    assert!(z < a, "key order not preserved: {json}");
}

#[test]
fn decode_nested_containers() {
    let toon = "OBJ_START\nKEY=items\nARR_START\nNUM=1\nSTR=two\nBOOL=true\nNULL\nARR_END\nOBJ_END";
    let json = decode(toon).unwrap();
    assert_json_eq(&json, r#"{"items":[1,"two",true,null]}"#);
}

#[test]
fn decode_empty_containers() {
    assert_json_eq(&decode("OBJ_START\nOBJ_END").unwrap(), "{}");
    assert_json_eq(&decode("ARR_START\nARR_END").unwrap(), "[]");
}

#[test]
fn decode_array_of_objects() {
    let toon = "ARR_START\nOBJ_START\nKEY=id\nNUM=1\nOBJ_END\nOBJ_START\nKEY=id\nNUM=2\nOBJ_END\nARR_END";
    assert_json_eq(&decode(toon).unwrap(), r#"[{"id":1},{"id":2}]"#);
}

#[test]
fn decode_duplicate_keys_last_wins() {
    let json = decode("OBJ_START\nKEY=a\nNUM=1\nKEY=a\nNUM=2\nOBJ_END").unwrap();
    assert_json_eq(&json, r#"{"a":2}"#);
}

#[test]
fn decode_unescapes_keys_and_strings() {
    let json = decode("OBJ_START\nKEY=a\\=b\nSTR=line1\\nline2\nOBJ_END").unwrap();
    assert_json_eq(&json, r#"{"a=b":"line1\nline2"}"#);
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn decode_number_payloads() {
    assert_json_eq(&decode("NUM=0").unwrap(), "0");
    assert_json_eq(&decode("NUM=-15").unwrap(), "-15");
    assert_json_eq(&decode("NUM=3.5").unwrap(), "3.5");
    assert_json_eq(&decode("NUM=9223372036854775807").unwrap(), "9223372036854775807");
    assert_json_eq(&decode("NUM=18446744073709551615").unwrap(), "18446744073709551615");
}

#[test]
fn decode_rejects_non_numeric_payload() {
    let err = decode("NUM=abc").unwrap_err();
    assert_eq!(err.to_string(), "Invalid number: abc");
    assert!(matches!(err, ToonError::Value(_)));
}

#[test]
fn decode_rejects_nan_and_infinity_payloads() {
    assert!(decode("NUM=NaN").is_err());
    assert!(decode("NUM=inf").is_err());
    assert!(decode("NUM=Infinity").is_err());
}

// ============================================================================
// Booleans
// ============================================================================

#[test]
fn decode_rejects_non_literal_bool_payload() {
    let err = decode("BOOL=yes").unwrap_err();
    assert_eq!(err.to_string(), "Invalid boolean value: yes");
    let err = decode("BOOL=True").unwrap_err();
    assert_eq!(err.to_string(), "Invalid boolean value: True");
}

// ============================================================================
// Structural errors
// ============================================================================

#[test]
fn decode_unterminated_object() {
    let err = decode("OBJ_START\nKEY=test\nSTR=value").unwrap_err();
    assert_eq!(err.to_string(), "Unterminated object");
}

#[test]
fn decode_unterminated_array() {
    let err = decode("ARR_START\nNUM=1").unwrap_err();
    assert_eq!(err.to_string(), "Unterminated array");
}

#[test]
fn decode_key_position_requires_key_token() {
    let err = decode("OBJ_START\nSTR=oops\nOBJ_END").unwrap_err();
    assert_eq!(err.to_string(), "Expected KEY token, got: STR");
}

#[test]
fn decode_key_must_be_followed_by_a_value() {
    let err = decode("OBJ_START\nKEY=dangling").unwrap_err();
    assert_eq!(err.to_string(), "Unexpected end of TOON input after KEY");
}

#[test]
fn decode_value_position_rejects_key_and_end_tokens() {
    assert_eq!(
        decode("KEY=a").unwrap_err().to_string(),
        "Unexpected token type: KEY"
    );
    assert_eq!(
        decode("OBJ_END").unwrap_err().to_string(),
        "Unexpected token type: OBJ_END"
    );
    assert_eq!(
        decode("ARR_END").unwrap_err().to_string(),
        "Unexpected token type: ARR_END"
    );
}

#[test]
fn decode_rejects_sibling_top_level_values() {
    let err = decode("STR=a\nSTR=b").unwrap_err();
    assert_eq!(err.to_string(), "Extra tokens after complete parse");
    assert!(matches!(err, ToonError::Root(_)));

    let err = decode("OBJ_START\nOBJ_END\nOBJ_START\nOBJ_END").unwrap_err();
    assert_eq!(err.to_string(), "Extra tokens after complete parse");
}

#[test]
fn decode_propagates_tokenizer_errors() {
    let err = decode("OBJ_START\nINVALID_TOKEN\nOBJ_END").unwrap_err();
    assert_eq!(err.to_string(), "Invalid TOON token: INVALID_TOKEN");
}

#[test]
fn decode_caps_nesting_depth() {
    let deep = "ARR_START\n".repeat(200) + &"ARR_END\n".repeat(200);
    let err = decode(&deep).unwrap_err();
    assert_eq!(err.to_string(), "Maximum nesting depth exceeded");

    // Well inside the limit still parses
    let ok = "ARR_START\n".repeat(100) + "NUM=1\n" + &"ARR_END\n".repeat(100);
    assert!(decode(&ok).is_ok());
}
