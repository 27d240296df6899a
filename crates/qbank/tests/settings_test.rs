use qbank::{QbankErrorKind, QuestionType, Settings};
use std::collections::HashMap;
use std::io::Write;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn bundled_defaults_describe_the_question_table() {
    let settings = Settings::load_isolated(None, &env(&[])).unwrap();

    assert_eq!(settings.database.table, "new_questions");
    assert_eq!(settings.database.sql_function, "execute_sql");
    assert_eq!(
        settings.database.allowed_types,
        vec![
            QuestionType::Mcq,
            QuestionType::Msq,
            QuestionType::Nat,
            QuestionType::Sub
        ]
    );
    assert_eq!(settings.probe.question_type, QuestionType::Sub);
    assert_eq!(settings.probe.topic_id, qbank::SAMPLE_TOPIC_ID);
    assert_eq!(settings.api.timeout_secs, 60);

    let spec = settings.constraint_spec();
    assert_eq!(spec, qbank::ConstraintSpec::default());
}

#[test]
fn missing_credentials_fail_only_when_database_is_needed() {
    let settings = Settings::load_isolated(None, &env(&[])).unwrap();

    let err = settings.database_config().unwrap_err();
    match err.kind() {
        QbankErrorKind::Config(e) => assert!(e.message.contains("SUPABASE_URL")),
        other => panic!("expected config error, got {:?}", other),
    }

    // The smoke test needs no database credentials.
    assert!(settings.api_config().generate_url().ends_with("/api/generate-question"));
}

#[test]
fn environment_supplies_credentials_and_base_url() {
    let settings = Settings::load_isolated(
        None,
        &env(&[
            ("SUPABASE_URL", "https://proj.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("QBANK_API_BASE_URL", "http://localhost:8001"),
        ]),
    )
    .unwrap();

    let db = settings.database_config().unwrap();
    assert_eq!(db.url, "https://proj.supabase.co");
    assert_eq!(db.api_key, "anon");
    assert_eq!(db.sql_function, "execute_sql");
    assert_eq!(settings.api.base_url, "http://localhost:8001");
}

#[test]
fn empty_environment_values_are_ignored() {
    let settings = Settings::load_isolated(None, &env(&[("QBANK_API_BASE_URL", "")])).unwrap();
    assert!(settings.api.base_url.starts_with("https://"));
}

#[test]
fn explicit_file_overrides_defaults_but_not_environment() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[database]
url = "https://from-file.supabase.co"
anon_key = "file-key"
table = "staging_questions"
constraint = "staging_questions_question_type_check"

[api]
timeout_secs = 15

[probe]
question_type = "NAT"
"#
    )
    .unwrap();

    let settings = Settings::load_isolated(
        Some(file.path()),
        &env(&[("SUPABASE_URL", "https://from-env.supabase.co")]),
    )
    .unwrap();

    assert_eq!(settings.database.url, "https://from-env.supabase.co");
    assert_eq!(settings.database.anon_key, "file-key");
    assert_eq!(settings.api.timeout_secs, 15);
    assert_eq!(settings.probe.question_type, QuestionType::Nat);

    let spec = settings.constraint_spec();
    assert_eq!(
        spec.drop_sql(),
        "ALTER TABLE staging_questions DROP CONSTRAINT IF EXISTS staging_questions_question_type_check;"
    );
    assert_eq!(
        settings.api_config().timeout,
        std::time::Duration::from_secs(15)
    );
}

#[test]
fn missing_explicit_file_is_an_error() {
    let result = Settings::load_isolated(
        Some(std::path::Path::new("/nonexistent/qbank-settings.toml")),
        &env(&[]),
    );
    assert!(result.is_err());
}
