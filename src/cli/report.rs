//! CLI commands for reports
//!
//! Each report prints to the terminal, or writes CSV when `--output` is given.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_category_breakdown, format_monthly_breakdown, format_summary};
use crate::error::{BudgetError, BudgetResult};
use crate::reports::{export_category_csv, export_monthly_csv, Aggregator, MonthOrder};
use crate::store::ExpenseStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Budget, total spent, remaining and usage
    Summary {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending by category
    #[command(alias = "categories")]
    Category {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending by month
    #[command(alias = "months")]
    Monthly {
        /// Month ordering (defaults to the configured one)
        #[arg(long, value_enum)]
        order: Option<MonthOrder>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    settings: &Settings,
    store: &ExpenseStore,
    cmd: ReportCommands,
) -> BudgetResult<()> {
    let aggregator = Aggregator::new(store)
        .with_month_order(settings.month_order)
        .with_warning_threshold(settings.warning_threshold_percent);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary { output } => {
            let summary = aggregator.summary();
            match output {
                Some(path) => {
                    summary.export_csv(create_output(&path)?)?;
                    println!("Summary exported to: {}", path.display());
                }
                None => print!("{}", format_summary(&summary, symbol)),
            }
        }

        ReportCommands::Category { output } => {
            let rows = aggregator.by_category();
            match output {
                Some(path) => {
                    export_category_csv(&rows, create_output(&path)?)?;
                    println!("Category report exported to: {}", path.display());
                }
                None => print!("{}", format_category_breakdown(&rows, symbol)),
            }
        }

        ReportCommands::Monthly { order, output } => {
            let rows = aggregator.by_month_ordered(order.unwrap_or(settings.month_order));
            match output {
                Some(path) => {
                    export_monthly_csv(&rows, create_output(&path)?)?;
                    println!("Monthly report exported to: {}", path.display());
                }
                None => print!("{}", format_monthly_breakdown(&rows, symbol)),
            }
        }
    }

    Ok(())
}

fn create_output(path: &Path) -> BudgetResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
