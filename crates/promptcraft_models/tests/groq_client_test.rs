// HTTP contract tests for GroqClient against a local canned server.

mod test_utils;

use promptcraft_core::{CompletionRequest, ImageInput, Input, Message, Role};
use promptcraft_error::{CompletionErrorKind, PromptcraftErrorKind};
use promptcraft_interface::{CompletionDriver, Vision};
use test_utils::{client_for, serve_once, serve_silence};

fn completion_kind(err: &promptcraft_error::PromptcraftError) -> CompletionErrorKind {
    match err.kind() {
        PromptcraftErrorKind::Completion(e) => e.kind.clone(),
        other => panic!("expected completion error, got {}", other),
    }
}

#[tokio::test]
async fn test_rate_limited_surfaces_service_message() -> anyhow::Result<()> {
    let server = serve_once(429, r#"{"error":{"message":"rate limited"}}"#).await;
    let client = client_for(&server.url, 5);

    let err = client
        .complete(&CompletionRequest::text("sys", "a cat", 0.7, 64))
        .await
        .unwrap_err();

    assert_eq!(
        completion_kind(&err),
        CompletionErrorKind::RemoteService {
            status: 429,
            message: "rate limited".to_string()
        }
    );
    assert_eq!(err.user_message(), "rate limited");
    server.request.await?;
    Ok(())
}

#[tokio::test]
async fn test_empty_choices_is_empty_response() -> anyhow::Result<()> {
    let server = serve_once(200, r#"{"choices":[]}"#).await;
    let client = client_for(&server.url, 5);

    let err = client
        .complete(&CompletionRequest::text("sys", "a cat", 0.7, 64))
        .await
        .unwrap_err();

    assert!(matches!(
        completion_kind(&err),
        CompletionErrorKind::EmptyResponse(_)
    ));
    server.request.await?;
    Ok(())
}

#[tokio::test]
async fn test_success_sends_bearer_and_openai_body() -> anyhow::Result<()> {
    let server = serve_once(
        200,
        r#"{"choices":[{"message":{"role":"assistant","content":"  a luminous cat  "}}]}"#,
    )
    .await;
    let client = client_for(&server.url, 5);

    let text = client
        .complete(&CompletionRequest::text("be vivid", "a cat", 0.7, 512))
        .await?;
    assert_eq!(text, "a luminous cat");

    let raw = server.request.await?;
    let lower = raw.to_ascii_lowercase();
    assert!(raw.starts_with("POST /openai/v1/chat/completions"));
    assert!(lower.contains("authorization: bearer test-key"));

    let body = &raw[raw.find("\r\n\r\n").unwrap() + 4..];
    let json: serde_json::Value = serde_json::from_str(body)?;
    assert_eq!(json["model"], "llama3-70b-8192");
    assert_eq!(json["messages"][0]["role"], "system");
    assert_eq!(json["messages"][0]["content"], "be vivid");
    assert_eq!(json["messages"][1]["content"], "a cat");
    assert_eq!(json["max_tokens"], 512);
    Ok(())
}

#[tokio::test]
async fn test_unparseable_error_body_gets_generic_message() -> anyhow::Result<()> {
    let server = serve_once(503, "upstream unavailable").await;
    let client = client_for(&server.url, 5);

    let err = client
        .complete(&CompletionRequest::text("sys", "a cat", 0.7, 64))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Groq error: 503");
    server.request.await?;
    Ok(())
}

#[tokio::test]
async fn test_vision_uses_vision_model_and_parts() -> anyhow::Result<()> {
    let server = serve_once(
        200,
        r#"{"choices":[{"message":{"content":"a red bicycle ||| blurry"}}]}"#,
    )
    .await;
    let client = client_for(&server.url, 5);

    let request = CompletionRequest::builder()
        .messages(vec![
            Message::system("reverse engineer"),
            Message {
                role: Role::User,
                content: vec![
                    Input::Text("vintage".to_string()),
                    Input::Image(ImageInput::new("image/jpeg", "QUJD")),
                ],
            },
        ])
        .build()?;

    let text = client.complete_vision(&request).await?;
    assert_eq!(text, "a red bicycle ||| blurry");

    let raw = server.request.await?;
    let body = &raw[raw.find("\r\n\r\n").unwrap() + 4..];
    let json: serde_json::Value = serde_json::from_str(body)?;
    assert_eq!(json["model"], client.vision_model_name());
    assert_eq!(json["messages"][1]["content"][1]["type"], "image_url");
    Ok(())
}

#[tokio::test]
async fn test_deadline_turns_into_transport_error() {
    let (url, _server) = serve_silence().await;
    let client = client_for(&url, 1);

    let err = client
        .complete(&CompletionRequest::text("sys", "a cat", 0.7, 64))
        .await
        .unwrap_err();

    match completion_kind(&err) {
        CompletionErrorKind::Transport(message) => assert!(message.contains("timed out")),
        other => panic!("expected transport error, got {}", other),
    }
}
