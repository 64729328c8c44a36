use super::*;
use serde_json::json;

fn shout(s: &str) -> String {
    s.to_uppercase()
}

#[test]
fn test_strings_transformed_at_every_depth() {
    let input = json!({"a": "x", "b": ["y", {"c": "z"}], "d": [[["deep"]]]});
    let output = walk(&input, &shout);
    assert_eq!(output, json!({"a": "X", "b": ["Y", {"c": "Z"}], "d": [[["DEEP"]]]}));
}

#[test]
fn test_keys_untouched_and_order_preserved() {
    let input: Value = serde_json::from_str(r#"{"zeta": "a", "alpha": "b", "mid": "c"}"#).unwrap();
    let output = walk(&input, &shout);

    let keys: Vec<&String> = output.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    assert_eq!(
        serde_json::to_string(&output).unwrap(),
        r#"{"zeta":"A","alpha":"B","mid":"C"}"#
    );
}

#[test]
fn test_non_string_leaves_unchanged() {
    let input = json!([1, 2.5, -3, true, false, null, {"n": 1e10}]);
    let output = walk(&input, &shout);
    assert_eq!(
        serde_json::to_string(&output).unwrap(),
        serde_json::to_string(&input).unwrap()
    );
}

#[test]
fn test_array_length_and_order_preserved() {
    let input = json!(["c", "b", "a", 1, "b"]);
    assert_eq!(walk(&input, &shout), json!(["C", "B", "A", 1, "B"]));
}

#[test]
fn test_input_is_not_mutated() {
    let input = json!({"k": ["v"]});
    let before = input.clone();
    let _ = walk(&input, &shout);
    assert_eq!(input, before);
}

#[test]
fn test_scalar_roots() {
    assert_eq!(walk(&json!("hi"), &shout), json!("HI"));
    assert_eq!(walk(&json!(7), &shout), json!(7));
    assert_eq!(walk(&Value::Null, &shout), Value::Null);
}
