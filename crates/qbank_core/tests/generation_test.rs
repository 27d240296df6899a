use qbank_core::{
    ErrorDetail, FALLBACK_TABLE, GenerateQuestionRequest, GeneratedQuestion, QuestionType,
    SAMPLE_TOPIC_ID,
};
use serde_json::json;

#[test]
fn sample_request_matches_wire_shape() {
    let request = GenerateQuestionRequest::new(SAMPLE_TOPIC_ID, QuestionType::Sub);
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({
            "topic_id": "7c583ed3-64bf-4fa0-bf20-058ac4b40737",
            "question_type": "SUB",
            "part_id": null,
            "slot_id": null
        })
    );
}

#[test]
fn part_and_slot_are_sent_when_set() {
    let request = GenerateQuestionRequest::new("t", QuestionType::Mcq)
        .with_part_id("part-a")
        .with_slot_id("slot-3");
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["part_id"], "part-a");
    assert_eq!(value["slot_id"], "slot-3");
}

#[test]
fn generated_question_reads_fields_and_table_marker() {
    let body = json!({
        "id": 42,
        "question_type": "SUB",
        "question_statement": "Explain osmosis.",
        "difficulty_level": null,
        "_saved_to_table": FALLBACK_TABLE
    })
    .to_string();

    let question = GeneratedQuestion::from_body(&body).unwrap();
    assert_eq!(question.field("id").as_deref(), Some("42"));
    assert_eq!(question.field("question_statement").as_deref(), Some("Explain osmosis."));
    assert_eq!(question.field("difficulty_level"), None);
    assert_eq!(question.field("answer"), None);
    assert_eq!(question.saved_to_table(), FALLBACK_TABLE);
}

#[test]
fn generated_question_rejects_non_objects() {
    assert!(GeneratedQuestion::from_body("[1, 2]").is_err());
    assert!(GeneratedQuestion::from_body("<html>502</html>").is_err());
}

#[test]
fn error_detail_handles_string_list_and_missing() {
    let detail = ErrorDetail::from_body(r#"{"detail": "quota exceeded"}"#).unwrap();
    assert_eq!(detail.as_str(), "quota exceeded");

    let detail = ErrorDetail::from_body(r#"{"detail": [{"loc": ["body"]}]}"#).unwrap();
    assert_eq!(detail.as_str(), r#"[{"loc":["body"]}]"#);

    let detail = ErrorDetail::from_body(r#"{"error": "boom"}"#).unwrap();
    assert_eq!(detail.as_str(), ErrorDetail::MISSING);

    assert!(ErrorDetail::from_body("Internal Server Error").is_err());
}

#[test]
fn error_detail_requires_an_object_body() {
    for body in [r#"["boom"]"#, r#""plain string""#, "null", "42"] {
        let err = ErrorDetail::from_body(body).unwrap_err();
        assert!(err.message.starts_with("expected a JSON object"), "{}", body);
    }
}
