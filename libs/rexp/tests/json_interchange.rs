use serde_json::json;

use rengine_rexp::{
    rexp_from_json, rexp_from_str, rexp_to_json, Error, ExpressionValue, ListVector, Rexp,
    ToJson, NA_INTEGER,
};

#[test]
fn test_decode_double_with_na_and_infinities() {
    let value = rexp_from_json(&json!({
        "type": "double",
        "values": [1.5, null, "Inf", "-Inf"]
    }))
    .unwrap();

    let doubles = value.as_double_vector().expect("double vector").values();
    assert_eq!(doubles[0], 1.5);
    assert!(doubles[1].is_nan());
    assert_eq!(doubles[2], f64::INFINITY);
    assert_eq!(doubles[3], f64::NEG_INFINITY);
    assert_eq!(value.is_na(), vec![false, true, false, false]);
}

#[test]
fn test_round_trip_keeps_attribute_order() {
    let input = json!({
        "type": "integer",
        "values": [1, 2, 3, 4, null, 6],
        "attributes": {
            "dim": {"type": "integer", "values": [2, 3]},
            "class": {"type": "string", "values": ["matrix", null]}
        }
    });

    let value = rexp_from_json(&input).unwrap();
    assert_eq!(value.as_integers().unwrap()[4], NA_INTEGER);

    let names: Vec<&str> = value.attributes().unwrap().names().collect();
    assert_eq!(names, vec!["dim", "class"]);

    assert_eq!(rexp_to_json(&value), input);
}

#[test]
fn test_named_list() {
    let value = rexp_from_str(
        r#"{
            "type": "list",
            "values": [
                {"type": "double", "values": [0.25]},
                {"type": "logical", "values": [true, null]},
                {"type": "null"}
            ],
            "attributes": {
                "names": {"type": "string", "values": ["p", "flags", "nothing"]}
            }
        }"#,
    )
    .unwrap();

    let list = ListVector::try_from(value).unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(
        list.get_named("flags").map(|v| v.is_na()),
        Some(vec![false, true])
    );
    assert!(list.get_named("nothing").map(Rexp::is_null).unwrap_or(false));
}

#[test]
fn test_encode_uses_null_for_na() {
    let value = Rexp::from(vec![f64::NAN, 2.0]);
    assert_eq!(
        value.to_json(),
        json!({"type": "double", "values": [null, 2.0]})
    );
}

#[test]
fn test_malformed_text_is_json_error() {
    let err = rexp_from_str("{\"type\": ").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_bad_attribute_is_reported_by_name() {
    let err = rexp_from_json(&json!({
        "type": "double",
        "values": [],
        "attributes": {"dim": {"type": "integer", "values": ["two"]}}
    }))
    .unwrap_err();
    assert!(err.to_string().contains("attribute 'dim'"));
}
