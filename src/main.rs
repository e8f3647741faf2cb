use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use project_budget::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, handle_history_command,
    handle_report_command, BudgetCommands, ExpenseCommands, ExportArgs, ReportCommands,
};
use project_budget::config::{paths::BudgetPaths, settings::Settings};
use project_budget::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Terminal budget tracker for creative projects and campaigns",
    long_about = "Track the expenses of a project or campaign against a single budget. \
                  Expenses are grouped into fixed creative-industry categories and \
                  summarized by category and by month, from the command line or an \
                  interactive dashboard."
)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Summaries and breakdowns
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export expenses, budget and summaries to a file
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "project_budget={},{}={}",
            level,
            env!("CARGO_CRATE_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(log_level(cli.verbose));

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "paths resolved");

    let storage = Storage::new(paths.clone())?;
    let mut store = storage.load();

    match cli.command {
        Some(Commands::Tui) => {
            project_budget::tui::run_tui(&storage, &settings, store)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Initialized project budget at: {}", paths.base_dir().display());
            println!();
            println!("Next steps:");
            println!("  budget budget set 5000");
            println!("  budget expense add \"Camera rental\" 250 -c \"Equipment Rental\"");
            println!("  budget tui");
        }
        Some(Commands::Config) => {
            println!("Project Budget Configuration");
            println!("============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!("Budget file:     {}", paths.budget_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!("Initialized:     {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Month order:       {:?}", settings.month_order);
            println!("  Warning threshold: {}%", settings.warning_threshold_percent);
            println!("  Audit log enabled: {}", settings.audit_enabled);
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, &mut store, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, &mut store, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&settings, &store, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&settings, &store, args)?;
        }
        Some(Commands::History { count }) => {
            handle_history_command(&storage, &settings, count)?;
        }
        None => {
            println!("Project Budget - track project expenses against a budget");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget tui' to launch the interactive dashboard.");
        }
    }

    Ok(())
}
