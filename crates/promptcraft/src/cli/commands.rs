//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use promptcraft::{AspectRatio, DetailLevel, GenerationMode, RecordId};
use std::path::PathBuf;

/// PromptCraft - turn short ideas into tailored image and video prompts
#[derive(Parser, Debug)]
#[command(name = "promptcraft")]
#[command(about = "Turn short ideas into tailored image and video prompts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate balanced, creative and artistic prompt variants
    Generate(GenerateArgs),

    /// Expand an idea into a single prompt
    Enhance {
        /// The idea to expand
        idea: String,
    },

    /// Reverse-engineer an image into a prompt
    Describe {
        /// Path to a PNG, JPEG, WebP or GIF image
        image: PathBuf,

        /// What the description should focus on
        #[arg(long)]
        hint: Option<String>,
    },

    /// Local history commands
    #[command(subcommand)]
    History(HistoryCommands),
}

/// Options for `generate`
#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// The idea to turn into prompts
    pub idea: String,

    /// Image or video prompts
    #[arg(long, value_enum, default_value = "image")]
    pub mode: ModeArg,

    /// Target model (e.g. "Midjourney", "DALL-E 3", "Runway Gen-3")
    #[arg(long)]
    pub model: Option<String>,

    /// Visual style label
    #[arg(long)]
    pub style: Option<String>,

    /// Quick style preset appended to the idea (e.g. "Cyberpunk", "Macro")
    #[arg(long)]
    pub preset: Option<String>,

    /// Emotional tone
    #[arg(long)]
    pub mood: Option<String>,

    /// Aspect ratio such as 16:9 (image mode)
    #[arg(long)]
    pub aspect: Option<AspectRatio>,

    /// Camera movement such as "Pan Left" or free text (video mode)
    #[arg(long)]
    pub camera: Option<String>,

    /// Output length
    #[arg(long, value_enum, default_value = "balanced")]
    pub detail: DetailArg,

    /// Print the variants as JSON
    #[arg(long)]
    pub json: bool,
}

/// Local history subcommands
#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// Show saved prompts, newest first
    List {
        /// Maximum number of records to display
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Delete one saved prompt by id
    Delete {
        /// Record id, as printed by `history list`
        id: RecordId,
    },

    /// Delete all saved prompts
    Clear,
}

/// Generation mode argument
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ModeArg {
    /// Still images
    Image,
    /// Video clips
    Video,
}

impl From<ModeArg> for GenerationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Image => GenerationMode::Image,
            ModeArg::Video => GenerationMode::Video,
        }
    }
}

/// Detail level argument
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DetailArg {
    /// 1-2 sentences
    Concise,
    /// 3-4 sentences
    Balanced,
    /// 5-7 sentences
    Detailed,
}

impl From<DetailArg> for DetailLevel {
    fn from(detail: DetailArg) -> Self {
        match detail {
            DetailArg::Concise => DetailLevel::Concise,
            DetailArg::Balanced => DetailLevel::Balanced,
            DetailArg::Detailed => DetailLevel::Detailed,
        }
    }
}
