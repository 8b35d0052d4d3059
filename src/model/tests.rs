use super::provider::to_genai_request;
use super::*;
use std::time::Duration;

fn user_request(text: &str) -> ChatRequest {
    ChatRequest::new(vec![ChatMessage::User(text.to_string())])
}

#[test]
fn test_chat_reply_trimmed_text() {
    assert_eq!(ChatReply::text("  0.8 \n").trimmed_text(), Some("0.8"));
    assert_eq!(ChatReply::text("   ").trimmed_text(), None);
    assert_eq!(ChatReply::empty().trimmed_text(), None);
}

#[test]
fn test_chat_request_last_user_text() {
    let request = ChatRequest::new(vec![
        ChatMessage::User("first".to_string()),
        ChatMessage::Assistant("reply".to_string()),
        ChatMessage::User("second".to_string()),
    ]);
    assert_eq!(request.last_user_text(), Some("second"));
    assert_eq!(ChatRequest::default().last_user_text(), None);
}

#[test]
fn test_to_genai_request_carries_system_messages_and_tools() {
    let request = user_request("rank these")
        .with_system("you rank projects")
        .with_tools(vec![ToolSpec {
            name: "assessProjectRelevance".to_string(),
            description: "scores a project".to_string(),
            schema: serde_json::json!({"type": "object"}),
        }]);

    let genai_req = to_genai_request(request);

    assert_eq!(genai_req.system.as_deref(), Some("you rank projects"));
    assert_eq!(genai_req.messages.len(), 1);
    assert_eq!(genai_req.tools.as_ref().map(|t| t.len()), Some(1));
}

#[test]
fn test_to_genai_request_without_tools() {
    let genai_req = to_genai_request(user_request("score this"));
    assert!(genai_req.system.is_none());
    assert!(genai_req.tools.is_none());
}

#[test]
fn test_genai_model_debug_hides_client() {
    let model = GenaiChatModel::new("gemini-2.0-flash");
    assert_eq!(model.model(), "gemini-2.0-flash");
    let debug_str = format!("{:?}", model);
    assert!(debug_str.contains("gemini-2.0-flash"));
}

#[tokio::test]
async fn test_mock_replying_counts_calls() {
    let model = MockChatModel::replying("0.5");

    let reply = model.complete(user_request("a")).await.unwrap();
    model.complete(user_request("b")).await.unwrap();

    assert_eq!(reply.trimmed_text(), Some("0.5"));
    assert_eq!(model.call_count(), 2);
    assert_eq!(model.requests()[1].last_user_text(), Some("b"));
}

#[tokio::test]
async fn test_mock_script_exhausts() {
    let model = MockChatModel::scripted(vec![Ok(ChatReply::text("first"))]);

    assert!(model.complete(user_request("a")).await.is_ok());
    let err = model.complete(user_request("b")).await.unwrap_err();
    assert!(matches!(err, ModelError::ScriptExhausted { calls: 1 }));
}

#[tokio::test]
async fn test_mock_failing() {
    let model = MockChatModel::failing("quota exceeded");
    let err = model.complete(user_request("a")).await.unwrap_err();
    assert!(err.to_string().contains("quota exceeded"));
}

#[tokio::test(start_paused = true)]
async fn test_mock_hanging_never_resolves() {
    let model = MockChatModel::hanging();
    let outcome = tokio::time::timeout(Duration::from_secs(60), model.complete(user_request("a"))).await;
    assert!(outcome.is_err());
    assert_eq!(model.call_count(), 1);
}

#[tokio::test]
async fn test_arc_model_delegates() {
    let model = std::sync::Arc::new(MockChatModel::replying("ok"));
    let reply = model.complete(user_request("a")).await.unwrap();
    assert_eq!(reply.trimmed_text(), Some("ok"));
    assert_eq!(ChatModel::name(&model), "mock");
}
