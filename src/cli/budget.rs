//! CLI commands for the budget amount

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_summary;
use crate::error::BudgetResult;
use crate::services::TrackerService;
use crate::storage::Storage;
use crate::store::ExpenseStore;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the project budget
    Set {
        /// New budget amount; anything that isn't a non-negative number sets 0
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the budget against what has been spent
    Show,
}

/// Handle budget commands
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    store: &mut ExpenseStore,
    cmd: BudgetCommands,
) -> BudgetResult<()> {
    let service = TrackerService::new(storage, settings);

    match cmd {
        BudgetCommands::Set { amount } => {
            let budget = service.set_budget(store, amount);
            println!(
                "Budget set to {}",
                budget.format_with_symbol(&settings.currency_symbol)
            );
        }
        BudgetCommands::Show => {
            let summary = service.aggregator(store).summary();
            print!("{}", format_summary(&summary, &settings.currency_symbol));
        }
    }

    Ok(())
}
