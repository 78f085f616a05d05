//! Integration tests for schema validation.
//!
//! Expected results are written as JSON so they read the same as the
//! serialized output callers see.

use rstest::rstest;
use serde_json::{json, Value};
use vetter_engine::{validate, ErrorDescriptor, Schema, ValidationResult};

/// Validate and return the serialized result tree.
async fn check(schema: &Schema, data: Value) -> Value {
    let result = validate(Some(schema), &data).await;
    serde_json::to_value(result).expect("result should serialize")
}

fn required_error() -> Value {
    json!({"error": "isRequired", "message": "The field is required"})
}

fn regex_error() -> Value {
    json!({"error": "regex", "message": "The field value is invalid"})
}

// ============================================================================
// Vacuous schemas
// ============================================================================

#[rstest]
#[case::object(json!({}))]
#[case::null(json!(null))]
#[case::string(json!("abc"))]
#[case::array(json!([1, 2]))]
#[tokio::test]
async fn absent_schema_is_empty(#[case] data: Value) {
    assert_eq!(validate(None, &data).await, ValidationResult::new());
}

#[tokio::test]
async fn empty_schema_is_empty() {
    let schema = Schema::from_json("{}").unwrap();
    assert_eq!(check(&schema, json!({})).await, json!({}));
}

#[tokio::test]
async fn schema_without_type_ignores_constraints() {
    let schema = Schema::from_json(r#"{"isRequired": true, "minLength": 3}"#).unwrap();
    assert_eq!(check(&schema, json!(null)).await, json!({}));
}

// ============================================================================
// Type and required checks
// ============================================================================

#[tokio::test]
async fn array_against_object_is_invalid_type() {
    let schema = Schema::object();
    assert_eq!(
        check(&schema, json!([])).await,
        json!({"errors": [{"error": "invalidType", "message": "Invalid data type"}]})
    );
}

#[tokio::test]
async fn invalid_type_uses_custom_message() {
    let schema = Schema::from_json(
        r#"{"type": "object", "messages": {"invalidType": "Tipo de dato inválido"}}"#,
    )
    .unwrap();
    assert_eq!(
        check(&schema, json!([])).await,
        json!({"errors": [{"error": "invalidType", "message": "Tipo de dato inválido"}]})
    );
}

#[rstest]
#[case::empty_string(json!(""))]
#[case::null(json!(null))]
#[tokio::test]
async fn falsy_required_string_is_only_required_error(#[case] data: Value) {
    let schema = Schema::string().required();
    assert_eq!(check(&schema, data).await, json!({"errors": [required_error()]}));
}

#[tokio::test]
async fn provided_required_value_is_valid() {
    let schema = Schema::string().required();
    assert_eq!(check(&schema, json!("abc")).await, json!({}));
}

#[tokio::test]
async fn array_like_object_is_an_array() {
    let schema = Schema::array();
    assert_eq!(check(&schema, json!({"length": 2, "0": "a"})).await, json!({}));

    let schema = Schema::object();
    let result = check(&schema, json!({"length": "2"})).await;
    assert_eq!(result["errors"][0]["error"], "invalidType");
}

#[tokio::test]
async fn unknown_type_is_checked_by_name_only() {
    let schema = Schema::of_type("boolean").required();
    assert_eq!(check(&schema, json!(true)).await, json!({}));
    assert_eq!(check(&schema, json!(false)).await, json!({"errors": [required_error()]}));
    assert_eq!(
        check(&schema, json!("yes")).await["errors"][0]["error"],
        "invalidType"
    );
}

#[tokio::test]
async fn number_has_no_further_checks() {
    let schema = Schema::number().min_length(100).max_length(0);
    assert_eq!(check(&schema, json!(12345)).await, json!({}));
}

// ============================================================================
// Object recursion
// ============================================================================

#[tokio::test]
async fn required_object_field_not_provided() {
    let schema = Schema::object()
        .field("fieldName", Schema::string().required())
        .field("fieldName2", Schema::string());
    assert_eq!(
        check(&schema, json!({"fieldName": "", "fieldName2": ""})).await,
        json!({"fields": {
            "fieldName": {"errors": [required_error()]},
            "fieldName2": {}
        }})
    );
}

#[tokio::test]
async fn required_object_field_provided() {
    let schema = Schema::object().field("name", Schema::string().required());
    assert_eq!(
        check(&schema, json!({"name": "abc"})).await,
        json!({"fields": {"name": {}}})
    );
}

#[tokio::test]
async fn errors_for_each_missing_field() {
    let schema = Schema::object()
        .field("numberField", Schema::number().required())
        .field("textField", Schema::string().required());
    assert_eq!(
        check(&schema, json!({})).await,
        json!({"fields": {
            "numberField": {"errors": [required_error()]},
            "textField": {"errors": [required_error()]}
        }})
    );
}

#[tokio::test]
async fn errors_on_one_of_several_fields() {
    let schema = Schema::object()
        .field("numberField", Schema::number().required())
        .field("textField", Schema::string().required());
    assert_eq!(
        check(&schema, json!({"textField": "123"})).await,
        json!({"fields": {
            "numberField": {"errors": [required_error()]},
            "textField": {}
        }})
    );
}

#[tokio::test]
async fn parent_errors_sit_beside_fields() {
    let schema = Schema::object()
        .field("0", Schema::string().required())
        .field("1", Schema::string().required());
    let result = validate(Some(&schema), &json!(["first"])).await;

    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].error.as_str(), "invalidType");
    assert!(result.field("0").unwrap().is_empty());
    assert_eq!(result.field("1").unwrap().errors()[0].error.as_str(), "isRequired");
}

#[tokio::test]
async fn nested_objects_keep_errors_at_their_level() {
    let schema = Schema::object().required().field(
        "address",
        Schema::object()
            .field("city", Schema::string().required())
            .field("zip", Schema::string().pattern("^[0-9]{5}$").unwrap()),
    );
    let result = validate(Some(&schema), &json!({"address": {"zip": "1234"}})).await;

    assert!(result.errors().is_empty());
    let address = result.field("address").unwrap();
    assert!(address.errors().is_empty());
    assert_eq!(address.field("city").unwrap().errors()[0].error.as_str(), "isRequired");
    assert_eq!(address.field("zip").unwrap().errors()[0].error.as_str(), "regex");
    assert_eq!(result.error_count(), 2);

    let paths: Vec<_> = result.flatten().keys().cloned().collect();
    assert_eq!(paths, vec!["address.city", "address.zip"]);
}

// ============================================================================
// String constraints
// ============================================================================

#[tokio::test]
async fn min_length_error() {
    let schema = Schema::string().min_length(5);
    assert_eq!(
        check(&schema, json!("abcd")).await,
        json!({"errors": [{"error": "minLength", "message": "This field must be larger"}]})
    );
}

#[rstest]
#[case::empty_string(json!(""))]
#[case::null(json!(null))]
#[tokio::test]
async fn min_length_skips_empty_data(#[case] data: Value) {
    let schema = Schema::string().min_length(5);
    assert_eq!(check(&schema, data).await, json!({}));
}

#[tokio::test]
async fn max_length_error() {
    let schema = Schema::string().max_length(10);
    assert_eq!(
        check(&schema, json!("abcde-abcde")).await,
        json!({"errors": [{"error": "maxLength", "message": "This field must be shorter"}]})
    );
    assert_eq!(check(&schema, json!("abcde-abcd")).await, json!({}));
}

#[tokio::test]
async fn lengths_count_utf16_units() {
    let schema = Schema::string().max_length(4);
    assert_eq!(check(&schema, json!("ñÑñÑ")).await, json!({}));

    let one = Schema::string().max_length(1);
    assert_eq!(
        check(&one, json!("😀")).await["errors"][0]["error"],
        "maxLength"
    );

    let three = Schema::string().min_length(3);
    assert_eq!(check(&three, json!("😀😀")).await, json!({}));
}

#[tokio::test]
async fn array_like_object_has_a_length() {
    let schema = Schema::string().max_length(10);
    let result = validate(Some(&schema), &json!({"length": 50})).await;
    let kinds: Vec<_> = result.errors().iter().map(|e| e.error.as_str()).collect();
    assert_eq!(kinds, vec!["invalidType", "maxLength"]);
}

#[tokio::test]
async fn zero_max_length_is_a_real_bound() {
    let schema = Schema::string().max_length(0);
    assert_eq!(
        check(&schema, json!("a")).await["errors"][0]["error"],
        "maxLength"
    );
    assert_eq!(check(&schema, json!("")).await, json!({}));
}

#[tokio::test]
async fn regex_constraint() {
    let schema = Schema::from_json(
        r#"{
            "type": "object",
            "fields": {
                "correctChars": {"type": "string", "regex": "^[a-zA-ZñÑ ]+$"},
                "incorrectChars": {"type": "string", "regex": "^[a-zA-ZñÑ ]+$"},
                "correctNum": {"type": "string", "regex": "^[0-9]+$"},
                "incorrectNum": {"type": "string", "regex": "^[0-9]+$"}
            }
        }"#,
    )
    .unwrap();
    let data = json!({
        "correctChars": "abcñ Ñ ABC",
        "incorrectChars": "@abc",
        "correctNum": "123",
        "incorrectNum": "123a"
    });
    assert_eq!(
        check(&schema, data).await,
        json!({"fields": {
            "correctChars": {},
            "incorrectChars": {"errors": [regex_error()]},
            "correctNum": {},
            "incorrectNum": {"errors": [regex_error()]}
        }})
    );
}

#[tokio::test]
async fn regex_skips_absent_value() {
    let schema = Schema::string().pattern("^[0-9]+$").unwrap();
    assert_eq!(check(&schema, json!(null)).await, json!({}));
}

#[rstest]
#[case::number(json!(12))]
#[case::boolean(json!(true))]
#[tokio::test]
async fn regex_skips_non_string_value(#[case] data: Value) {
    let schema = Schema::string().pattern("^[a-z]+$").unwrap();
    let result = validate(Some(&schema), &data).await;
    let kinds: Vec<_> = result.errors().iter().map(|e| e.error.as_str()).collect();
    assert_eq!(kinds, vec!["invalidType"]);
}

#[tokio::test]
async fn string_checks_do_not_short_circuit() {
    let schema = Schema::string()
        .max_length(3)
        .pattern("^[0-9]+$")
        .unwrap()
        .message("maxLength", "Too long");
    assert_eq!(
        check(&schema, json!("abcdef")).await,
        json!({"errors": [
            {"error": "maxLength", "message": "Too long"},
            regex_error()
        ]})
    );
}

// ============================================================================
// Purity
// ============================================================================

#[tokio::test]
async fn validation_is_idempotent_and_leaves_schema_untouched() {
    let schema = Schema::object()
        .field("name", Schema::string().required().min_length(3))
        .field("age", Schema::number().required());
    let before = serde_json::to_value(&schema).unwrap();
    let data = json!({"name": "ab", "age": "old"});

    let first = validate(Some(&schema), &data).await;
    let second = validate(Some(&schema), &data).await;

    assert_eq!(first, second);
    assert_eq!(serde_json::to_value(&schema).unwrap(), before);
}

#[tokio::test]
async fn result_round_trips_through_json() {
    let schema = Schema::string().required();
    let result = validate(Some(&schema), &json!("")).await;
    let text = serde_json::to_string(&result).unwrap();
    let back: ValidationResult = serde_json::from_str(&text).unwrap();
    assert_eq!(back, result);
    assert_eq!(
        back.errors(),
        &[ErrorDescriptor::new("isRequired", "The field is required")]
    );
}
