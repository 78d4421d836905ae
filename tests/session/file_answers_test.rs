use std::io::Cursor;

use heart_risk::input::{JsonAnswerSource, PromptSource, collect_answers};
use heart_risk::{FieldValue, FormConfig, FormError, Session, heart_disease_schema};

use crate::utils::{SAMPLE_ANSWERS_JSON, ScriptedScorer, fixed_today, sample_answers};

#[test]
fn test_answers_file_matches_collected_answers() {
    let schema = heart_disease_schema().unwrap();
    let mut source =
        JsonAnswerSource::from_json_str(SAMPLE_ANSWERS_JSON, &FormConfig::default(), fixed_today())
            .unwrap();

    let answers = collect_answers(&schema, &mut source).unwrap();
    assert_eq!(answers, sample_answers());
}

#[test]
fn test_answers_file_from_disk() {
    let path = std::env::temp_dir().join(format!("heart-risk-answers-{}.json", std::process::id()));
    std::fs::write(&path, SAMPLE_ANSWERS_JSON).unwrap();

    let result = JsonAnswerSource::from_path(&path, &FormConfig::default(), fixed_today());
    std::fs::remove_file(&path).unwrap();

    let mut source = result.unwrap();
    let schema = heart_disease_schema().unwrap();
    let mut session = Session::default();
    let mut scorer = ScriptedScorer::new(vec![64]);

    let answers = collect_answers(&schema, &mut source).unwrap();
    let evaluation = session
        .evaluate(&schema, &answers, &mut scorer, fixed_today())
        .unwrap();
    assert_eq!(evaluation.score.value(), 64);
    assert_eq!(evaluation.features.get("age"), Some(&FieldValue::Code(55)));
}

#[test]
fn test_answers_file_missing_field() {
    let schema = heart_disease_schema().unwrap();
    let json = r#"{"date": "1970-01-01", "gender": "male"}"#;
    let mut source =
        JsonAnswerSource::from_json_str(json, &FormConfig::default(), fixed_today()).unwrap();

    let err = collect_answers(&schema, &mut source).unwrap_err();
    assert!(matches!(err, FormError::MissingField(ref k) if k == "cp"));
}

#[test]
fn test_prompted_cycle_end_to_end() {
    // One line per field in schema order; blank lines take defaults
    let input = [
        "1970-01-01", // date
        "2",          // gender -> female
        "atypical angina",
        "130",
        "250",
        "119",
        "2", // restecg
        "187",
        "2", // exang -> No
        "3.5",
        "3", // slope
        "",  // ca -> first option "0"
        "reversible defect",
    ]
    .join("\n")
        + "\n";

    let schema = heart_disease_schema().unwrap();
    let mut prompts = PromptSource::new(
        Cursor::new(input.into_bytes()),
        Vec::new(),
        &FormConfig::default(),
        fixed_today(),
    );

    let answers = collect_answers(&schema, &mut prompts).unwrap();
    assert_eq!(answers, sample_answers());

    let (_, output) = prompts.into_inner();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Date of birth (1900-01-01 to 2024-01-01) [1970-01-01]: "));
    assert!(output.contains("  2) female"));
}
