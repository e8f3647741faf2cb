//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_expenses_csv, export_snapshot_json, export_snapshot_yaml};
use crate::store::ExpenseStore;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expense rows only)
    Csv,
    /// JSON format (full snapshot)
    Json,
    /// YAML format (full snapshot, human-readable)
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension, if it is a known one
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format (defaults to the file extension, then JSON)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(
    settings: &Settings,
    store: &ExpenseStore,
    args: ExportArgs,
) -> BudgetResult<()> {
    let format = args
        .format
        .or_else(|| ExportFormat::from_path(&args.output))
        .unwrap_or(ExportFormat::Json);

    let file = File::create(&args.output).map_err(|e| {
        BudgetError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            export_expenses_csv(store.expenses(), &mut writer)?;
            println!("Expenses exported to: {}", args.output.display());
        }
        ExportFormat::Json => {
            export_snapshot_json(store, settings, &mut writer, args.pretty)?;
            println!("Budget data exported to: {}", args.output.display());
        }
        ExportFormat::Yaml => {
            export_snapshot_yaml(store, settings, &mut writer)?;
            println!("Budget data exported to: {}", args.output.display());
        }
    }

    writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
