//! Trace-driven runner for the lending pool.

pub mod config;
pub mod runner;
pub mod trace;

pub use config::{InteractorConfig, Mode};
pub use runner::{run_trace, RunSummary, StepOutcome, Target};
pub use trace::{entries, parse_line, parse_trace, TraceEntry, TraceError, TraceErrorKind};
