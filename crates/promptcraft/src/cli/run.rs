//! Command handlers.

use super::commands::{Commands, GenerateArgs, HistoryCommands};
use promptcraft::{
    AppConfig, CameraMovement, DetailLevel, GenerationError, GenerationErrorKind, GenerationMode,
    GenerationOptions, GenerationResult, GroqClient, HistoryTarget, ImageInput, JsonError, PromptVariant,
    PromptcraftResult, StylePreset, SubModel, VisionOutcome, Workbench, apply_preset,
};
use std::path::Path;

/// Run one command against the configured workbench.
pub async fn execute(command: Commands) -> PromptcraftResult<()> {
    let config = AppConfig::load()?;
    let workbench = Workbench::from_config(&config)?;

    match command {
        Commands::Generate(args) => generate(&workbench, args).await,
        Commands::Enhance { idea } => {
            let variant = workbench.enhance(&idea, &HistoryTarget::Local).await?;
            print_variant(&variant);
            Ok(())
        }
        Commands::Describe { image, hint } => describe(&workbench, &image, hint.as_deref()).await,
        Commands::History(HistoryCommands::List { limit }) => {
            let records = workbench.history(&HistoryTarget::Local, limit).await?;
            if records.is_empty() {
                println!("No saved prompts yet.");
            }
            for record in &records {
                println!(
                    "[{}] {}",
                    record.created_at().format("%Y-%m-%d %H:%M"),
                    record.original_idea()
                );
                println!("  {}", record.result().positive());
                println!("  id: {}", record.id());
            }
            Ok(())
        }
        Commands::History(HistoryCommands::Delete { id }) => {
            if workbench.delete_history_entry(&HistoryTarget::Local, &id).await? {
                println!("Deleted {}.", id);
            } else {
                println!("No saved prompt with id {}.", id);
            }
            Ok(())
        }
        Commands::History(HistoryCommands::Clear) => {
            workbench.clear_history(&HistoryTarget::Local).await?;
            println!("History cleared.");
            Ok(())
        }
    }
}

/// Turn parsed arguments into validated generation options.
pub fn build_options(args: &GenerateArgs) -> PromptcraftResult<GenerationOptions> {
    let idea = match &args.preset {
        Some(label) => {
            let preset = StylePreset::find(label).ok_or_else(|| {
                let known: Vec<&str> = StylePreset::ALL.iter().map(|p| p.label).collect();
                GenerationError::new(GenerationErrorKind::InvalidOptions(format!(
                    "Unknown preset '{}'. Choose one of: {}",
                    label,
                    known.join(", ")
                )))
            })?;
            apply_preset(&args.idea, preset)
        }
        None => args.idea.clone(),
    };

    let mode = GenerationMode::from(args.mode);
    let mut builder = GenerationOptions::builder();
    builder
        .idea(idea)
        .mode(mode)
        .detail(DetailLevel::from(args.detail));

    if let Some(model) = &args.model {
        builder.sub_model(SubModel::from(model.clone()));
    }
    if let Some(style) = &args.style {
        builder.style(style.clone());
    }
    if let Some(mood) = &args.mood {
        builder.mood(mood.clone());
    }
    if let Some(aspect) = args.aspect {
        builder.aspect_ratio(aspect);
    }
    if let Some(camera) = &args.camera {
        builder.camera(CameraMovement::from(camera.clone()));
    }

    Ok(builder.build()?)
}

async fn generate(
    workbench: &Workbench<GroqClient>,
    args: GenerateArgs,
) -> PromptcraftResult<()> {
    let options = build_options(&args)?;
    let result = workbench.generate(&options, &HistoryTarget::Local).await?;

    if args.json {
        print_json(&result)?;
    } else {
        for (key, variant) in result.iter() {
            println!("== {} ==", key);
            print_variant(variant);
            println!();
        }
    }
    Ok(())
}

async fn describe(
    workbench: &Workbench<GroqClient>,
    path: &Path,
    hint: Option<&str>,
) -> PromptcraftResult<()> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        GenerationError::new(GenerationErrorKind::InvalidOptions(format!(
            "Cannot read {}: {}",
            path.display(),
            e
        )))
    })?;
    let image = ImageInput::from_bytes(mime_for(path), &bytes);

    match workbench.describe(&image, hint).await? {
        VisionOutcome::Described(result) => print_variant(result.balanced()),
        VisionOutcome::Unavailable(message) => eprintln!("{}", message),
    }
    Ok(())
}

fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

fn print_variant(variant: &PromptVariant) {
    println!("Positive: {}", variant.positive());
    println!("Negative: {}", variant.negative());
}

fn print_json(result: &GenerationResult) -> PromptcraftResult<()> {
    let json = serde_json::to_string_pretty(result).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
