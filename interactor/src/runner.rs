use std::io::{self, Write};

use ledger::{Ledger, LedgerCommand};
use lending_pool::{format_rational, LedgerError, LendingPool, Rational};
use log::{error, info};

use crate::trace::entries;

/// State a trace is run against.
#[derive(Clone, Debug)]
pub enum Target {
    Pool(LendingPool),
    Ledger(Ledger),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Applied(Option<Rational>),
    Reverted(LedgerError),
    /// Wallet commands have no meaning against a bare pool.
    Unsupported,
}

/// Counts per outcome over one trace run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub applied: usize,
    pub reverted: usize,
    pub skipped: usize,
    pub parse_errors: usize,
}

impl Target {
    pub fn apply(&mut self, command: &LedgerCommand) -> StepOutcome {
        let result = match (self, command) {
            (Target::Pool(_), LedgerCommand::Faucet { .. }) => return StepOutcome::Unsupported,
            (Target::Pool(pool), LedgerCommand::Pool(command)) => {
                pool.execute(command).map_err(LedgerError::from)
            }
            (Target::Ledger(ledger), command) => ledger.execute(command),
        };
        match result {
            Ok(value) => StepOutcome::Applied(value),
            Err(err) => StepOutcome::Reverted(err),
        }
    }

    pub fn render(&self, precise: bool) -> String {
        match self {
            Target::Pool(pool) => pool.display(precise).to_string(),
            Target::Ledger(ledger) => ledger.display(precise).to_string(),
        }
    }

    pub fn pool(&self) -> &LendingPool {
        match self {
            Target::Pool(pool) => pool,
            Target::Ledger(ledger) => ledger.pool(),
        }
    }
}

/// Runs every line of `input` against `target`, writing the command and the
/// resulting state for each executed line. Lines that fail to parse are
/// logged and skipped.
pub fn run_trace(
    input: &str,
    target: &mut Target,
    precise: bool,
    out: &mut impl Write,
) -> io::Result<RunSummary> {
    let mut summary = RunSummary::default();

    for entry in entries(input) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                error!("{}", err);
                summary.parse_errors += 1;
                continue;
            }
        };

        match target.apply(&entry.command) {
            StepOutcome::Applied(value) => {
                summary.applied += 1;
                match value {
                    Some(value) => writeln!(
                        out,
                        "{}: {} -> {}",
                        entry.line,
                        entry.text,
                        format_rational(&value, precise)
                    )?,
                    None => writeln!(out, "{}: {}", entry.line, entry.text)?,
                }
            }
            StepOutcome::Reverted(err) => {
                summary.reverted += 1;
                writeln!(out, "{}: {} reverted: {}", entry.line, entry.text, err)?;
            }
            StepOutcome::Unsupported => {
                info!(
                    "line {}: `{}` skipped in pool mode",
                    entry.line,
                    entry.command.name()
                );
                summary.skipped += 1;
                continue;
            }
        }
        writeln!(out, "{}", target.render(precise))?;
    }

    Ok(summary)
}
