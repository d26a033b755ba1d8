use toonline_core::{decode, validate_json, validate_toon, ToonError};

// ============================================================================
// TOON validation — empty input
// ============================================================================

#[test]
fn empty_toon_is_invalid() {
    let err = validate_toon("").unwrap_err();
    assert!(matches!(err, ToonError::EmptyInput));
    assert_eq!(err.to_string(), "empty input");
}

#[test]
fn whitespace_only_toon_is_invalid() {
    assert!(matches!(validate_toon("  \n \t \n"), Err(ToonError::EmptyInput)));
}

// ============================================================================
// TOON validation — well-formed documents
// ============================================================================

#[test]
fn accepts_balanced_object() {
    validate_toon("OBJ_START\nKEY=name\nSTR=test\nOBJ_END").unwrap();
}

#[test]
fn accepts_nested_containers() {
    validate_toon(
        "OBJ_START\nKEY=items\nARR_START\nNUM=1\nOBJ_START\nKEY=x\nNULL\nOBJ_END\nARR_END\nOBJ_END",
    )
    .unwrap();
}

#[test]
fn accepts_bare_primitive_tokens() {
    validate_toon("STR=hi").unwrap();
    validate_toon("NULL").unwrap();
    validate_toon("NUM=42").unwrap();
}

#[test]
fn payload_content_is_not_checked_here() {
    // NUM/BOOL payload grammar belongs to the decoder, not the validator
    validate_toon("NUM=not-a-number").unwrap();
    validate_toon("BOOL=maybe").unwrap();
}

#[test]
fn token_sequencing_is_not_checked_here() {
    // Two KEYs in a row pass validation; the decoder rejects the sequence.
    // Deliberate layering: validation is bracket balance only.
    let toon = "OBJ_START\nKEY=a\nKEY=b\nSTR=x\nOBJ_END";
    validate_toon(toon).unwrap();
    assert!(decode(toon).is_err());
}

// ============================================================================
// TOON validation — balance errors
// ============================================================================

#[test]
fn unbalanced_object_structure() {
    let err = validate_toon("OBJ_START\nKEY=test\nSTR=value").unwrap_err();
    assert_eq!(err.to_string(), "Unbalanced object structure");
}

#[test]
fn unbalanced_array_structure() {
    let err = validate_toon("ARR_START\nNUM=1").unwrap_err();
    assert_eq!(err.to_string(), "Unbalanced array structure");
}

#[test]
fn object_imbalance_reported_before_array_imbalance() {
    let err = validate_toon("OBJ_START\nKEY=a\nARR_START").unwrap_err();
    assert_eq!(err.to_string(), "Unbalanced object structure");
}

#[test]
fn premature_obj_end_fails_immediately() {
    let err = validate_toon("OBJ_END").unwrap_err();
    assert_eq!(err.to_string(), "Unbalanced OBJ_END token");
    // Short-circuits before the final balance check
    let err = validate_toon("OBJ_END\nOBJ_START").unwrap_err();
    assert_eq!(err.to_string(), "Unbalanced OBJ_END token");
}

#[test]
fn premature_arr_end_fails_immediately() {
    let err = validate_toon("ARR_END").unwrap_err();
    assert_eq!(err.to_string(), "Unbalanced ARR_END token");
}

#[test]
fn counters_are_independent_per_bracket_kind() {
    // OBJ_START cannot satisfy ARR_END
    let err = validate_toon("OBJ_START\nARR_END").unwrap_err();
    assert_eq!(err.to_string(), "Unbalanced ARR_END token");
}

#[test]
fn invalid_token_line_is_named_verbatim() {
    let err = validate_toon("OBJ_START\nINVALID_TOKEN\nOBJ_END").unwrap_err();
    assert_eq!(err.to_string(), "Invalid TOON token: INVALID_TOKEN");
}

// ============================================================================
// JSON validation
// ============================================================================

#[test]
fn empty_json_is_invalid() {
    assert!(matches!(validate_json(""), Err(ToonError::EmptyInput)));
    assert!(matches!(validate_json("   "), Err(ToonError::EmptyInput)));
}

#[test]
fn accepts_objects_and_arrays() {
    validate_json(r#"{"a":1}"#).unwrap();
    validate_json("[1,2,3]").unwrap();
    validate_json("{}").unwrap();
    validate_json("[]").unwrap();
}

#[test]
fn rejects_bare_primitives_at_top_level() {
    let err = validate_json("42").unwrap_err();
    assert_eq!(err.to_string(), "JSON must be an object or array");
    assert!(validate_json("\"text\"").is_err());
    assert!(validate_json("null").is_err());
}

#[test]
fn rejects_malformed_json() {
    assert!(matches!(validate_json("{oops"), Err(ToonError::JsonParse(_))));
}

#[test]
fn rejects_nan_and_infinity_literals() {
    assert!(matches!(validate_json(r#"{"x":NaN}"#), Err(ToonError::JsonParse(_))));
    assert!(matches!(
        validate_json(r#"{"x":Infinity}"#),
        Err(ToonError::JsonParse(_))
    ));
}
