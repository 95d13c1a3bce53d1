//! End-to-end tests for `ReportGenerator` against a wiremock completion
//! service: generated path, retry exhaustion into the fallback template,
//! and total failure for a record with nothing to report on.

use chrono::NaiveDate;
use insightflow_core::WeeklyMetricRecord;
use insightflow_report::{ReportConfig, ReportGenerator, ReportOutcome, SECTION_LABELS};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test config with back-off zeroed so exhaustion runs instantly.
fn test_config(base_url: &str) -> ReportConfig {
    ReportConfig {
        api_key: "test-key".to_string(),
        model: "mistralai/mistral-7b-instruct".to_string(),
        base_url: base_url.to_string(),
        timeout_secs: 5,
        temperature: 0.7,
        max_attempts: 3,
        backoff_min_secs: 0,
        backoff_max_secs: 0,
    }
}

fn generator(base_url: &str) -> ReportGenerator {
    ReportGenerator::new(&test_config(base_url)).expect("generator construction should not fail")
}

/// The worked example record: 1000 -> 1050 followers, growth +50.
fn example_record() -> WeeklyMetricRecord {
    WeeklyMetricRecord {
        date: NaiveDate::from_ymd_opt(2025, 8, 3).unwrap(),
        followers_start: Some(1000),
        followers_end: Some(1050),
        profile_visits: Some(200),
        reach: Some(5000),
        impressions: Some(8000),
        top_reel_label: Some("Clip A".to_string()),
        top_reel_shares: Some(30),
        top_reel_saves: Some(12),
        story_views_average: Some(450.0),
    }
}

fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "gen-123",
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

#[tokio::test]
async fn successful_completion_is_returned_verbatim_modulo_sanitization() {
    let server = MockServer::start().await;

    let content = "Weekly Overview — strong week.\n\
        Key Metrics Analysis: “solid”.\n\
        Content Performance…\n\
        Growth Insights\n\
        Recommendations";

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({
            "model": "mistralai/mistral-7b-instruct"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = generator(&server.uri()).generate(&example_record()).await;

    let ReportOutcome::Generated(text) = outcome else {
        panic!("expected Generated, got: {outcome:?}");
    };
    assert_eq!(
        text,
        "Weekly Overview - strong week.\n\
         Key Metrics Analysis: \"solid\".\n\
         Content Performance...\n\
         Growth Insights\n\
         Recommendations"
    );
    for label in SECTION_LABELS {
        assert!(text.contains(label));
    }
}

#[tokio::test]
async fn retry_exhaustion_falls_back_after_exactly_three_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let outcome = generator(&server.uri()).generate(&example_record()).await;

    let ReportOutcome::Fallback(text) = outcome else {
        panic!("expected Fallback, got: {outcome:?}");
    };
    // The worked example: growth +50 and every literal metric value.
    assert!(text.contains("+50"), "growth framing missing: {text}");
    for value in ["1000", "1050", "200", "5000", "8000"] {
        assert!(text.contains(value), "literal {value} missing");
    }
    for label in SECTION_LABELS {
        assert!(text.contains(label), "section {label} missing");
    }
    // MockServer verifies expect(3) on drop; no 4th attempt happened.
}

#[tokio::test]
async fn auth_rejection_skips_retries_and_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": { "message": "invalid api key" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = generator(&server.uri()).generate(&example_record()).await;
    assert!(outcome.is_fallback(), "expected Fallback, got: {outcome:?}");
}

#[tokio::test]
async fn malformed_body_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(3)
        .mount(&server)
        .await;

    let outcome = generator(&server.uri()).generate(&example_record()).await;
    assert!(outcome.is_fallback(), "expected Fallback, got: {outcome:?}");
}

#[tokio::test]
async fn empty_choices_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": []
        })))
        .mount(&server)
        .await;

    let outcome = generator(&server.uri()).generate(&example_record()).await;
    assert!(outcome.is_fallback(), "expected Fallback, got: {outcome:?}");
}

#[tokio::test]
async fn record_missing_a_field_still_reports_with_placeholder() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut record = example_record();
    record.followers_start = None;

    let outcome = generator(&server.uri()).generate(&record).await;
    let ReportOutcome::Fallback(text) = outcome else {
        panic!("expected Fallback, got: {outcome:?}");
    };
    assert!(!text.is_empty());
    assert!(text.contains("not available"));
}

#[tokio::test]
async fn structurally_empty_record_yields_failed_outcome() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let record = WeeklyMetricRecord::empty(NaiveDate::from_ymd_opt(2025, 8, 3).unwrap());
    let outcome = generator(&server.uri()).generate(&record).await;

    let ReportOutcome::Failed(text) = outcome else {
        panic!("expected Failed, got: {outcome:?}");
    };
    assert!(!text.is_empty());
    assert!(text.contains("2025-08-03"));
}

#[tokio::test]
async fn prompt_sent_to_service_embeds_record_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("report text")))
        .mount(&server)
        .await;

    let outcome = generator(&server.uri()).generate(&example_record()).await;
    assert!(matches!(outcome, ReportOutcome::Generated(_)));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = body["messages"][0]["content"].as_str().unwrap();
    for value in ["2025-08-03", "1050", "Clip A"] {
        assert!(prompt.contains(value), "prompt missing {value}");
    }
    assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-9);
}
