use std::num::NonZeroU32;

use heart_risk::schema::keys;
use heart_risk::{
    FieldValue, FormError, PipelineConfig, build_feature_vector, convert_field,
    heart_disease_schema,
};

use crate::utils::{fixed_today, sample_answers, ymd};

#[test]
fn test_mapping_fields_convert_every_declared_label() {
    let schema = heart_disease_schema().unwrap();
    for (key, field) in schema.iter() {
        for option in field.options() {
            assert_eq!(
                convert_field(field, &FieldValue::from(option.label.as_str())),
                FieldValue::Code(option.code),
                "{key}: {}",
                option.label
            );
        }
    }
}

#[test]
fn test_unknown_labels_pass_through() {
    let schema = heart_disease_schema().unwrap();
    let gender = schema.describe(keys::GENDER).unwrap();

    assert_eq!(convert_field(gender, &"female".into()), FieldValue::Code(1));
    assert_eq!(convert_field(gender, &"other".into()), FieldValue::from("other"));
    // Labels are matched exactly
    assert_eq!(convert_field(gender, &"Female".into()), FieldValue::from("Female"));
    // Values that are not labels are left alone
    assert_eq!(convert_field(gender, &FieldValue::Code(5)), FieldValue::Code(5));
}

#[test]
fn test_full_feature_vector() {
    let schema = heart_disease_schema().unwrap();
    let features =
        build_feature_vector(&schema, &sample_answers(), fixed_today(), &PipelineConfig::default())
            .unwrap();

    let expected = [
        ("age", FieldValue::Code(55)),
        ("gender", FieldValue::Code(1)),
        ("cp", FieldValue::Code(2)),
        ("restbps", FieldValue::Number(130.0)),
        ("chol", FieldValue::Number(250.0)),
        ("fbs", FieldValue::Code(0)),
        ("restecg", FieldValue::Code(1)),
        ("thalach", FieldValue::Number(187.0)),
        ("exang", FieldValue::Code(0)),
        ("oldpeak", FieldValue::Number(3.5)),
        ("slope", FieldValue::Code(3)),
        ("ca", FieldValue::Code(0)),
        ("thal", FieldValue::Code(7)),
    ];

    assert_eq!(features.len(), expected.len());
    assert!(!features.contains_key("date"));
    for (key, value) in expected {
        assert_eq!(features.get(key), Some(&value), "feature {key}");
    }
}

#[test]
fn test_fbs_threshold_boundary() {
    let schema = heart_disease_schema().unwrap();
    let config = PipelineConfig::default();

    for (raw, expected) in [(119.0, 0), (120.0, 1), (0.0, 0), (400.0, 1)] {
        let answers = sample_answers().with(keys::FBS, raw);
        let features = build_feature_vector(&schema, &answers, fixed_today(), &config).unwrap();
        assert_eq!(features.get(keys::FBS), Some(&FieldValue::Code(expected)), "fbs {raw}");
    }

    // Integer codes are accepted as readings too
    let answers = sample_answers().with(keys::FBS, 120_i64);
    let features = build_feature_vector(&schema, &answers, fixed_today(), &config).unwrap();
    assert_eq!(features.get(keys::FBS), Some(&FieldValue::Code(1)));
}

#[test]
fn test_age_divisor_is_configurable() {
    let schema = heart_disease_schema().unwrap();
    let calendar = PipelineConfig {
        days_per_year: NonZeroU32::new(365).unwrap(),
        ..PipelineConfig::default()
    };

    let features =
        build_feature_vector(&schema, &sample_answers(), fixed_today(), &calendar).unwrap();
    assert_eq!(features.get(keys::AGE), Some(&FieldValue::Code(54)));

    let answers = sample_answers().with(keys::DATE, ymd(2000, 6, 15));
    let features =
        build_feature_vector(&schema, &answers, fixed_today(), &PipelineConfig::default())
            .unwrap();
    // 8600 days / 356
    assert_eq!(features.get(keys::AGE), Some(&FieldValue::Code(24)));
}

#[test]
fn test_wrong_value_kinds() {
    let schema = heart_disease_schema().unwrap();
    let config = PipelineConfig::default();

    let answers = sample_answers().with(keys::DATE, "1970-01-01");
    let err = build_feature_vector(&schema, &answers, fixed_today(), &config).unwrap_err();
    assert!(matches!(
        err,
        FormError::TypeMismatch { ref field, expected: "date", found: "label" } if field == "date"
    ));

    let answers = sample_answers().with(keys::FBS, "high");
    let err = build_feature_vector(&schema, &answers, fixed_today(), &config).unwrap_err();
    assert!(matches!(err, FormError::TypeMismatch { ref field, .. } if field == "fbs"));
}

#[test]
fn test_feature_vector_json() {
    let schema = heart_disease_schema().unwrap();
    let answers = sample_answers().with(keys::GENDER, "other");
    let features =
        build_feature_vector(&schema, &answers, fixed_today(), &PipelineConfig::default())
            .unwrap();

    let json: serde_json::Value = serde_json::from_str(&features.to_json_pretty().unwrap()).unwrap();
    assert_eq!(json["age"], 55);
    assert_eq!(json["gender"], "other");
    assert_eq!(json["oldpeak"], 3.5);
    assert!(json.get("date").is_none());
}
