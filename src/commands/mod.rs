pub mod auth;
pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod open;
pub mod update;

use clap::ArgMatches;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::error::{AdminError, AdminResult};
use crate::models::{EntityKind, Fields};

/// Flags that map onto editable record fields, matched case-insensitively
/// against `Fields::field_names`.
const FIELD_ARGS: &[&str] = &["name", "email", "role"];

/// Exit status for a process ended by Ctrl-C.
const INTERRUPT_EXIT_CODE: i32 = 130;

/// Cancels the wrapped token on the first Ctrl-C. Once the token is cancelled
/// or the guard is dropped, Ctrl-C ends the process, since tokio keeps its
/// SIGINT handler installed for the rest of the run.
pub struct InterruptGuard {
    released: CancellationToken,
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        self.released.cancel();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InterruptAction {
    CancelOperation,
    Exit,
}

fn interrupt_action(token: &CancellationToken, released: &CancellationToken) -> InterruptAction {
    if released.is_cancelled() || token.is_cancelled() {
        InterruptAction::Exit
    } else {
        InterruptAction::CancelOperation
    }
}

pub fn cancel_on_interrupt(token: CancellationToken) -> InterruptGuard {
    let released = CancellationToken::new();
    let watched = released.clone();
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            match interrupt_action(&token, &watched) {
                InterruptAction::CancelOperation => {
                    info!("interrupt received, cancelling operation");
                    token.cancel();
                }
                InterruptAction::Exit => {
                    warn!("interrupt received, exiting");
                    std::process::exit(INTERRUPT_EXIT_CODE);
                }
            }
        }
    });
    InterruptGuard { released }
}

/// Parse a positional or named entity argument.
pub fn entity_arg(matches: &ArgMatches, id: &str) -> AdminResult<EntityKind> {
    matches
        .get_one::<String>(id)
        .ok_or_else(|| AdminError::InvalidInput(format!("{} is required", id)))?
        .parse()
}

pub fn id_arg(matches: &ArgMatches) -> AdminResult<i64> {
    let raw = matches
        .get_one::<String>("id")
        .ok_or_else(|| AdminError::InvalidInput("ID is required".to_string()))?;
    raw.trim()
        .parse()
        .map_err(|_| AdminError::InvalidInput(format!("'{}' is not a valid ID", raw)))
}

/// Field edits given on the command line, as `(field index, value)` pairs.
/// A flag naming a field `T` does not have is rejected.
pub fn field_edits<T: Fields>(matches: &ArgMatches, kind: EntityKind) -> AdminResult<Vec<(usize, String)>> {
    let names: Vec<String> = T::field_names().iter().map(|n| n.to_lowercase()).collect();
    let mut edits = Vec::new();

    for arg in FIELD_ARGS {
        let Some(value) = matches.try_get_one::<String>(arg).ok().flatten() else {
            continue;
        };
        let index = names.iter().position(|name| name == arg).ok_or_else(|| {
            AdminError::InvalidInput(format!("--{} does not apply to {}s", arg, kind))
        })?;
        edits.push((index, value.clone()));
    }

    Ok(edits)
}

pub fn apply_edits<T: Fields>(target: &mut T, edits: Vec<(usize, String)>) {
    for (index, value) in edits {
        target.set_field(index, value);
    }
}
