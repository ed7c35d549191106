use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::imagen::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::schema::Shape;
use crate::store::DEFAULT_DB_PATH;
use crate::synth::SYNTHESIZED_START_ID;

#[derive(Parser, Debug)]
#[command(
    name = "dnakit",
    version,
    about = "Design DNA template database migration and normalization tooling"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Migrate(MigrateArgs),
    Merge(MergeArgs),
    Dedup(DbArgs),
    Normalize(NormalizeArgs),
    Clean(DbArgs),
    Localize(DbArgs),
    Synthesize(SynthesizeArgs),
    ExtractReport(ExtractReportArgs),
    Scan(DbArgs),
    Headers(DbArgs),
    Status(DbArgs),
    Gallery(GalleryArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum MigrateTarget {
    V1,
    V2,
}

impl MigrateTarget {
    pub fn shape(self) -> Shape {
        match self {
            Self::V1 => Shape::V1Keyed,
            Self::V2 => Shape::V2Keyed,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DbArgs,

    #[arg(long, value_enum, default_value_t = MigrateTarget::V2)]
    pub to: MigrateTarget,
}

#[derive(Args, Debug, Clone)]
pub struct MergeArgs {
    #[command(flatten)]
    pub db: DbArgs,

    #[arg(long, default_value = "templates.backup.json")]
    pub source: PathBuf,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum DictionaryChoice {
    JaEn,
    JaKo,
}

impl DictionaryChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JaEn => "ja-en",
            Self::JaKo => "ja-ko",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub db: DbArgs,

    #[arg(long, value_enum, default_value_t = DictionaryChoice::JaKo)]
    pub dictionary: DictionaryChoice,

    #[arg(long)]
    pub dictionary_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SynthesizeArgs {
    #[command(flatten)]
    pub db: DbArgs,

    #[arg(long, default_value_t = SYNTHESIZED_START_ID)]
    pub start_id: i64,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractReportArgs {
    #[command(flatten)]
    pub db: DbArgs,

    #[arg(long, value_enum, default_value_t = DictionaryChoice::JaEn)]
    pub dictionary: DictionaryChoice,
}

#[derive(Args, Debug, Clone)]
pub struct GalleryArgs {
    #[command(flatten)]
    pub db: DbArgs,

    #[arg(long, default_value = "assets/thumbnails")]
    pub output_dir: PathBuf,

    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = "16:9")]
    pub aspect_ratio: String,

    #[arg(long, default_value_t = 4)]
    pub delay_secs: u64,

    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,
}
