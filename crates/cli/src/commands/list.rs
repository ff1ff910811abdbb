//! `taco list`

use super::CommandResult;
use crate::args::ListArgs;
use anyhow::Context;
use taco_registry::{read_registry, RegistryEntry};

pub fn run(args: &ListArgs) -> CommandResult {
    let entries = read_registry(&args.registry)
        .with_context(|| format!("failed to read {}", args.registry.display()))?;

    let selected: Vec<&RegistryEntry> = entries
        .iter()
        .filter(|entry| args.chain_id.map_or(true, |id| entry.chain_id == id))
        .collect();

    print!("{}", render_table(&selected));
    Ok(())
}

fn render_table(entries: &[&RegistryEntry]) -> String {
    let name_width = entries
        .iter()
        .map(|entry| entry.name.len())
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap_or_default();

    let mut table = format!(
        "{:<10}  {:<name_width$}  {:<42}  {}\n",
        "Chain ID", "Name", "Address", "Block"
    );
    for entry in entries {
        table.push_str(&format!(
            "{:<10}  {:<name_width$}  {:<42}  {}\n",
            entry.chain_id, entry.name, entry.address, entry.block_number
        ));
    }
    table
}
