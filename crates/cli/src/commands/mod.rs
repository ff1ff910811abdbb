//! `taco` subcommands.

pub mod import;
pub mod list;
pub mod lookup;
pub mod merge;

use crate::console::ConsoleHelper;
use taco_registry::PersistOutcome;

/// Result of running one subcommand.
pub type CommandResult = anyhow::Result<()>;

/// Tells the operator where a registry ended up.
pub(crate) fn report_outcome(outcome: &PersistOutcome) {
    match outcome {
        PersistOutcome::Skipped(path) => {
            ConsoleHelper::warning(format!("No entries provided; {} left untouched", path.display()))
        }
        PersistOutcome::Created(path) => {
            ConsoleHelper::info(["Created registry ", path.display().to_string().as_str()])
        }
        PersistOutcome::Updated(path) => {
            ConsoleHelper::info(["Updated registry ", path.display().to_string().as_str()])
        }
        PersistOutcome::Diverted {
            target,
            written,
            overlapping,
        } => {
            ConsoleHelper::warning(format!(
                "Cannot merge registries with overlapping chain IDs {overlapping:?}; {} left untouched",
                target.display()
            ));
            ConsoleHelper::info(["Registry written to ", written.display().to_string().as_str()]);
        }
    }
}
