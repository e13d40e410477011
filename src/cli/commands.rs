// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Four subcommands: `list`, `stats`, `show` and `export`.
// The loading flags are shared through DataArgs and flattened
// into each command that reads annotations.

use clap::{Args, Subcommand};

use crate::application::config::{DataConfig, ExportConfig};
use crate::data::filter::LengthFilter;
use crate::domain::conversation::SamplingConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the registered checking datasets
    List,

    /// Print record and label counts of a dataset after filtering
    Stats(StatsArgs),

    /// Print one training example as JSON
    Show(ShowArgs),

    /// Build every example of one or more datasets and write them as JSONL
    Export(ExportArgs),
}

/// Where annotations live and which records to keep.
/// A negative bound disables that bound.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Directory the registered annotation paths are relative to
    #[arg(long, default_value = ".")]
    pub data_root: String,

    /// Drop queries with fewer words
    #[arg(long, allow_negative_numbers = true)]
    pub min_num_words: Option<i64>,

    /// Drop queries with more words
    #[arg(long, allow_negative_numbers = true)]
    pub max_num_words: Option<i64>,

    /// Drop videos shorter than this many seconds
    #[arg(long, allow_negative_numbers = true)]
    pub min_video_len: Option<f64>,

    /// Drop videos longer than this many seconds
    #[arg(long, allow_negative_numbers = true)]
    pub max_video_len: Option<f64>,
}

impl From<DataArgs> for DataConfig {
    fn from(a: DataArgs) -> Self {
        DataConfig {
            data_root: a.data_root,
            filter:    LengthFilter {
                min_num_words: a.min_num_words,
                max_num_words: a.max_num_words,
                min_video_len: a.min_video_len,
                max_video_len: a.max_video_len,
            },
            sampling:  SamplingConfig::default(),
        }
    }
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Registered dataset name (see `list`)
    #[arg(long)]
    pub dataset: String,

    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Registered dataset name (see `list`)
    #[arg(long)]
    pub dataset: String,

    /// Position in the filtered record list
    #[arg(long, default_value_t = 0)]
    pub index: usize,

    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Registered dataset names; repeat the flag for several
    #[arg(long = "dataset", required = true)]
    pub datasets: Vec<String>,

    /// Directory receiving <dataset>.jsonl, export_config.json and stats.csv
    #[arg(long, default_value = "exports")]
    pub output_dir: String,

    #[command(flatten)]
    pub data: DataArgs,
}

impl From<ExportArgs> for ExportConfig {
    fn from(a: ExportArgs) -> Self {
        ExportConfig {
            datasets:   a.datasets,
            output_dir: a.output_dir,
            data:       a.data.into(),
        }
    }
}
