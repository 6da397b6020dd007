use pretty_assertions::assert_eq;
use scm_client::{PullRequest, PullRequestInput, Signature};

fn input(title: &str) -> PullRequestInput {
    PullRequestInput {
        title: title.to_string(),
        body: "Automated update".to_string(),
        source: "feature".to_string(),
        target: "main".to_string(),
    }
}

#[test]
fn test_pull_request_input_structural_equality() {
    assert_eq!(input("Bump"), input("Bump"));
    assert_ne!(input("Bump"), input("Other"));

    let mut retargeted = input("Bump");
    retargeted.target = "develop".to_string();
    assert_ne!(input("Bump"), retargeted);
}

#[test]
fn test_pull_request_input_body_defaults_when_missing() {
    let json = r#"{"title":"Bump","source":"feature","target":"main"}"#;
    let parsed: PullRequestInput = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.body, "");
    assert_eq!(parsed.title, "Bump");
}

#[test]
fn test_signature_without_date_omits_field() {
    let sig = Signature::new("Bot", "bot@example.com");
    let json = serde_json::to_string(&sig).unwrap();
    assert_eq!(json, r#"{"name":"Bot","email":"bot@example.com"}"#);
}

#[test]
fn test_pull_request_serializes_number_and_link() {
    let pr = PullRequest {
        number: 3,
        link: "https://example.com/pull-request/3".to_string(),
    };
    let value = serde_json::to_value(&pr).unwrap();
    assert_eq!(value["number"], 3);
    assert_eq!(value["link"], "https://example.com/pull-request/3");
}
