//! Log setup
//!
//! The terminal belongs to the UI, so logs only go to a file and only when
//! one is requested. `RUST_LOG` overrides the default filter.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing::{debug, trace};
use tracing_subscriber::{EnvFilter, fmt};
use tui_dispatch::{ActionSummary, Middleware};

use crate::action::Action;

pub const DEFAULT_FILTER: &str = "skycast=info,skycast_core=info";

/// `RUST_LOG` when set and valid, else [`DEFAULT_FILTER`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Append plain-text logs to `path`. Without a path nothing is installed
/// and every `tracing` call is a no-op.
pub fn init(path: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot install logger: {e}"))?;

    Ok(())
}

/// Store middleware that traces every dispatched action
///
/// Ticks fire several times a second and are skipped before dispatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionTrace;

impl ActionTrace {
    fn is_noise(action: &Action) -> bool {
        matches!(action, Action::Tick)
    }
}

impl Middleware<Action> for ActionTrace {
    fn before(&mut self, action: &Action) {
        if !Self::is_noise(action) {
            debug!(action = %action.summary(), "dispatch");
        }
    }

    fn after(&mut self, action: &Action, state_changed: bool) {
        if !Self::is_noise(action) {
            let name = tui_dispatch::Action::name(action);
            trace!(action = name, state_changed, "reduced");
        }
    }
}
