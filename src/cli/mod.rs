// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes each subcommand to a
// use case in Layer 2. Printing happens here and nowhere else.
//
//   list    — registered datasets and their annotation paths
//   stats   — counts for one dataset after filtering
//   show    — one training example, pretty-printed JSON
//   export  — every example of the given datasets, as JSONL

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ExportArgs, ShowArgs, StatsArgs};

use crate::data::registry::DatasetRegistry;

#[derive(Parser, Debug)]
#[command(
    name = "vtg-checking",
    version,
    about = "Build checker training examples for video temporal grounding."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::List         => Self::run_list(),
            Commands::Stats(args)  => Self::run_stats(args),
            Commands::Show(args)   => Self::run_show(args),
            Commands::Export(args) => Self::run_export(args),
        }
    }

    fn run_list() -> Result<()> {
        for spec in DatasetRegistry::builtin().iter() {
            println!("{:<24} {}", spec.name, spec.anno_path);
        }
        Ok(())
    }

    fn run_stats(args: StatsArgs) -> Result<()> {
        use crate::application::inspect_use_case::InspectUseCase;

        let stats = InspectUseCase::new(args.data.into()).stats(&args.dataset)?;

        println!("source:      {}", stats.source);
        println!("raw records: {}", stats.raw_records);
        println!("kept:        {}", stats.kept);
        println!("positives:   {}", stats.positives);
        println!("negatives:   {}", stats.negatives);
        Ok(())
    }

    fn run_show(args: ShowArgs) -> Result<()> {
        use crate::application::inspect_use_case::InspectUseCase;

        let example = InspectUseCase::new(args.data.into()).show(&args.dataset, args.index)?;
        println!("{}", serde_json::to_string_pretty(&example)?);
        Ok(())
    }

    fn run_export(args: ExportArgs) -> Result<()> {
        use crate::application::export_use_case::ExportUseCase;

        tracing::info!("Exporting {} dataset(s) to '{}'", args.datasets.len(), args.output_dir);

        let all_stats = ExportUseCase::new(args.into()).execute()?;
        for s in &all_stats {
            println!("{}: {} written, {} skipped", s.source, s.written, s.skipped);
        }
        Ok(())
    }
}
