//! Orchestrator behaviour against a scripted driver.

mod test_utils;

use promptcraft_core::{
    DEFAULT_NEGATIVE, GenerationMode, GenerationOptions, ImageInput, Input, SubModel, VariantKey,
};
use promptcraft_error::{CompletionErrorKind, GenerationErrorKind, PromptcraftErrorKind};
use promptcraft_prompt::{
    CLOSING_DIRECTIVE, LEGACY_SYSTEM_PROMPT, PromptOrchestrator, VISION_UNAVAILABLE_MESSAGE,
    VisionOutcome,
};
use std::sync::Arc;
use test_utils::{MockDriver, MockResponse, variants_json};
use tokio::sync::Notify;

fn first_text(input: &Input) -> &str {
    match input {
        Input::Text(text) => text,
        Input::Image(_) => panic!("expected text part"),
    }
}

#[tokio::test]
async fn generate_sends_instruction_and_parses_variants() -> anyhow::Result<()> {
    let driver = MockDriver::new_success(variants_json("fox", "fox astronaut", "fox, ukiyo-e"));
    let orchestrator = PromptOrchestrator::new(driver);
    let options = GenerationOptions::builder()
        .idea("a fox")
        .sub_model(SubModel::Midjourney)
        .build()?;

    let result = orchestrator.generate(&options).await?;
    assert_eq!(result.get(VariantKey::Creative).positive(), "fox astronaut");

    let requests = orchestrator.driver().requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(*request.temperature(), 0.8);
    assert_eq!(*request.max_tokens(), 1024);
    let system = first_text(&request.messages()[0].content[0]);
    assert!(system.contains("--ar 1:1 --v 6.1"));
    assert!(system.ends_with(CLOSING_DIRECTIVE));
    assert_eq!(first_text(&request.messages()[1].content[0]), "Idea: \"a fox\"");
    Ok(())
}

#[tokio::test]
async fn unparseable_completion_degrades_instead_of_failing() -> anyhow::Result<()> {
    let orchestrator = PromptOrchestrator::new(MockDriver::new_success("not json at all"));
    let result = orchestrator
        .generate(&GenerationOptions::for_idea("anything")?)
        .await?;

    assert_eq!(result.balanced().positive(), "not json at all");
    assert_eq!(result.balanced(), result.creative());
    assert_eq!(result.creative(), result.artistic());
    Ok(())
}

#[tokio::test]
async fn remote_error_propagates_with_service_message() -> anyhow::Result<()> {
    let orchestrator = PromptOrchestrator::new(MockDriver::new_error(
        CompletionErrorKind::RemoteService {
            status: 429,
            message: "rate limited".to_string(),
        },
    ));

    let err = orchestrator
        .generate(&GenerationOptions::for_idea("a fox")?)
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), PromptcraftErrorKind::Completion(_)));
    assert_eq!(err.user_message(), "rate limited");
    Ok(())
}

#[tokio::test]
async fn configuration_error_surfaces_unchanged() -> anyhow::Result<()> {
    let orchestrator = PromptOrchestrator::new(MockDriver::new_sequence(vec![
        MockResponse::Config("GROQ API key is not configured".to_string()),
    ]));
    let err = orchestrator.enhance("a fox").await.unwrap_err();
    assert!(matches!(err.kind(), PromptcraftErrorKind::Config(_)));
    Ok(())
}

#[tokio::test]
async fn blank_idea_never_reaches_the_driver() {
    let orchestrator = PromptOrchestrator::new(MockDriver::new_success("unused"));
    let err = orchestrator.enhance("   ").await.unwrap_err();
    match err.kind() {
        PromptcraftErrorKind::Generation(e) => assert_eq!(e.kind, GenerationErrorKind::EmptyIdea),
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(orchestrator.driver().call_count(), 0);
}

#[tokio::test]
async fn enhance_uses_legacy_prompt_and_delimiter() -> anyhow::Result<()> {
    let orchestrator =
        PromptOrchestrator::new(MockDriver::new_success("misty harbor at dawn, 35mm"));
    let variant = orchestrator.enhance("  harbor ").await?;

    assert_eq!(variant.positive(), "misty harbor at dawn, 35mm");
    assert_eq!(variant.negative(), DEFAULT_NEGATIVE);

    let request = &orchestrator.driver().requests()[0];
    assert_eq!(first_text(&request.messages()[0].content[0]), LEGACY_SYSTEM_PROMPT);
    assert_eq!(first_text(&request.messages()[1].content[0]), "harbor");
    assert_eq!(*request.temperature(), 0.7);
    assert_eq!(*request.max_tokens(), 512);
    Ok(())
}

#[tokio::test]
async fn stale_response_is_superseded_by_newer_request() -> anyhow::Result<()> {
    let gate = Arc::new(Notify::new());
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Success(variants_json("old", "old", "old")),
        MockResponse::Success(variants_json("new", "new", "new")),
    ])
    .gated_first(gate.clone());
    let orchestrator = Arc::new(PromptOrchestrator::new(driver));

    let first = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move {
            let options = GenerationOptions::for_idea("first idea")?;
            orchestrator.generate(&options).await.map_err(anyhow::Error::from)
        }
    });
    while orchestrator.driver().call_count() == 0 {
        tokio::task::yield_now().await;
    }

    let second = orchestrator
        .generate(&GenerationOptions::for_idea("second idea")?)
        .await?;
    assert_eq!(second.balanced().positive(), "new");

    gate.notify_one();
    let err = first.await?.unwrap_err();
    let err = err.downcast::<promptcraft_error::PromptcraftError>()?;
    match err.kind() {
        PromptcraftErrorKind::Generation(e) => assert_eq!(
            e.kind,
            GenerationErrorKind::Superseded {
                ticket: 1,
                latest: 2
            }
        ),
        other => panic!("unexpected error: {}", other),
    }
    Ok(())
}

#[tokio::test]
async fn video_options_reach_the_driver() -> anyhow::Result<()> {
    let orchestrator = PromptOrchestrator::new(MockDriver::new_success(variants_json("a", "b", "c")));
    let options = GenerationOptions::builder()
        .idea("waves at night")
        .mode(GenerationMode::Video)
        .sub_model(SubModel::Kling)
        .build()?;
    orchestrator.generate(&options).await?;

    let request = &orchestrator.driver().requests()[0];
    let system = first_text(&request.messages()[0].content[0]);
    assert!(system.contains("Target video model: Kling"));
    Ok(())
}

#[tokio::test]
async fn describe_image_duplicates_single_prompt() -> anyhow::Result<()> {
    let orchestrator =
        PromptOrchestrator::new(MockDriver::new_success("red barn in snow ||| people"));
    let image = ImageInput::from_bytes("image/png", b"\x89PNG\r\n");

    let outcome = orchestrator.describe_image(&image, Some("the lighting")).await?;
    let VisionOutcome::Described(result) = outcome else {
        panic!("expected a description");
    };
    assert_eq!(result.artistic().positive(), "red barn in snow");
    assert_eq!(result.balanced().negative(), "people");

    let request = &orchestrator.driver().requests()[0];
    assert!(request.is_multimodal());
    assert!(first_text(&request.messages()[1].content[0]).contains("Focus on: the lighting"));
    Ok(())
}

#[tokio::test]
async fn retired_vision_model_is_reported_as_unavailable() -> anyhow::Result<()> {
    let orchestrator = PromptOrchestrator::new(MockDriver::new_error(
        CompletionErrorKind::RemoteService {
            status: 404,
            message: "The model `llama-3.2-11b-vision-preview` has been decommissioned".to_string(),
        },
    ));
    let image = ImageInput::from_bytes("image/jpeg", b"\xFF\xD8\xFF");

    let outcome = orchestrator.describe_image(&image, None).await?;
    assert_eq!(
        outcome,
        VisionOutcome::Unavailable(VISION_UNAVAILABLE_MESSAGE.to_string())
    );
    Ok(())
}

#[tokio::test]
async fn other_vision_failures_stay_errors() {
    let orchestrator = PromptOrchestrator::new(MockDriver::new_error(
        CompletionErrorKind::RemoteService {
            status: 429,
            message: "rate limited".to_string(),
        },
    ));
    let image = ImageInput::from_bytes("image/png", b"\x89PNG");
    let err = orchestrator.describe_image(&image, None).await.unwrap_err();
    assert_eq!(err.user_message(), "rate limited");
}

#[tokio::test]
async fn malformed_vision_request_stays_an_error() {
    let orchestrator = PromptOrchestrator::new(MockDriver::new_error(
        CompletionErrorKind::RemoteService {
            status: 400,
            message: "'messages.1.content.1.image_url' is invalid".to_string(),
        },
    ));
    let image = ImageInput::from_bytes("image/png", b"\x89PNG");
    let err = orchestrator.describe_image(&image, None).await.unwrap_err();
    assert_eq!(err.user_message(), "'messages.1.content.1.image_url' is invalid");
}

#[tokio::test]
async fn unsupported_image_format_is_rejected_locally() {
    let orchestrator = PromptOrchestrator::new(MockDriver::new_success("unused"));
    let image = ImageInput::from_bytes("image/tiff", b"II*\0");
    let err = orchestrator.describe_image(&image, None).await.unwrap_err();
    assert!(err.user_message().contains("image/tiff"));
    assert_eq!(orchestrator.driver().call_count(), 0);
}
