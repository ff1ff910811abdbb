//! `taco merge`

use super::{report_outcome, CommandResult};
use crate::args::MergeArgs;
use crate::console::ConsoleResolver;
use anyhow::Context;
use std::collections::BTreeSet;
use taco_registry::merge_registries;

pub fn run(args: &MergeArgs) -> CommandResult {
    let deprecated: BTreeSet<String> = args.deprecated.iter().cloned().collect();
    let mut resolver = ConsoleResolver::stdio();

    let outcome = merge_registries(
        &args.first,
        &args.second,
        &args.output,
        &deprecated,
        &mut resolver,
    )
    .with_context(|| {
        format!(
            "failed to merge {} and {}",
            args.first.display(),
            args.second.display()
        )
    })?;

    report_outcome(&outcome);
    Ok(())
}
