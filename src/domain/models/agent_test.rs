use anyhow::Result;
use serde_json::json;

use super::AgentAction;
use super::AgentError;
use super::AgentRequest;
use super::AgentResponse;
use super::Language;

#[test]
fn it_serializes_requests_with_the_flat_wire_shape() -> Result<()> {
    let request = AgentRequest {
        input: "apple, run".to_string(),
        action: AgentAction::SetWords,
        language: Language::Spanish,
        words: vec![],
        context: serde_json::Map::new(),
    };

    let value = serde_json::to_value(&request)?;
    assert_eq!(
        value,
        json!({
            "input": "apple, run",
            "action": "SET_WORDS",
            "language": "Spanish",
            "words": [],
            "context": {}
        })
    );

    return Ok(());
}

#[test]
fn it_serializes_training_action_tags() -> Result<()> {
    assert_eq!(
        serde_json::to_string(&AgentAction::TrainForward)?,
        "\"TRAIN_FORWARD\""
    );
    assert_eq!(
        serde_json::to_string(&AgentAction::TrainReverse)?,
        "\"TRAIN_REVERSE\""
    );
    assert_eq!(serde_json::to_string(&AgentAction::Feedback)?, "\"FEEDBACK\"");

    return Ok(());
}

#[test]
fn it_deserializes_responses_with_optional_fields() -> Result<()> {
    let response: AgentResponse = serde_json::from_str(r#"{"output": "hi"}"#)?;
    assert_eq!(response.output, "hi");
    assert_eq!(response.words, None);
    assert_eq!(response.context, None);
    assert!(!response.is_done);

    let response: AgentResponse =
        serde_json::from_str(r#"{"output": "bye", "words": ["a"], "isDone": true}"#)?;
    assert_eq!(response.words, Some(vec!["a".to_string()]));
    assert!(response.is_done);

    return Ok(());
}

#[test]
fn it_rejects_responses_without_output() {
    let res = serde_json::from_str::<AgentResponse>(r#"{"words": ["a"]}"#);
    assert!(res.is_err());
}

#[test]
fn it_classifies_transport_errors() {
    assert!(AgentError::Transport("refused".to_string()).is_transport());
    assert!(!AgentError::Contract("bad".to_string()).is_transport());

    let err = AgentError::Server {
        status: 500,
        message: "words missing".to_string(),
    };
    assert!(!err.is_transport());
    assert_eq!(err.to_string(), "words missing");
}
