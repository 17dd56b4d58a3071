use zenboard::ai::{parse_order_response, AiError};

#[test]
fn parses_a_plain_json_array() {
    let ids = parse_order_response(r#"["a", "b", "c"]"#).unwrap();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn parses_an_array_wrapped_in_markdown_fences() {
    let text = "```json\n[\"t2\", \"t1\"]\n```";
    let ids = parse_order_response(text).unwrap();
    assert_eq!(ids, ["t2", "t1"]);
}

#[test]
fn parses_an_array_surrounded_by_prose() {
    let text = "Here is the suggested order:\n[\"x\", \"y\"]\nLet me know!";
    let ids = parse_order_response(text).unwrap();
    assert_eq!(ids, ["x", "y"]);
}

#[test]
fn empty_array_is_valid() {
    let ids = parse_order_response("[]").unwrap();
    assert!(ids.is_empty());
}

#[test]
fn rejects_output_without_an_array() {
    let result = parse_order_response("I would sort them by urgency.");
    assert!(matches!(result, Err(AiError::Malformed(_))));
}

#[test]
fn rejects_an_array_of_non_strings() {
    let result = parse_order_response("[1, 2, 3]");
    assert!(matches!(result, Err(AiError::Malformed(_))));
}

#[test]
fn rejects_empty_output() {
    let result = parse_order_response("");
    assert!(matches!(result, Err(AiError::Malformed(_))));
}
