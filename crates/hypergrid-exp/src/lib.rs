//! Sweep orchestration for the hypergrid driver: deterministic grid
//! expansion, command-line rendering, and sequential fire-and-forget
//! invocation of the external training program.

mod command;
mod grid;
mod hash;
mod invoke;
mod serde;
mod sweep;

pub use command::CommandTemplate;
pub use grid::expand_grid;
pub use hash::stable_hash_string;
pub use invoke::{InvocationOutcome, JobRunner, ShellRunner};
pub use sweep::{run_sweep, JobReport, SweepPlan, SweepReport};

pub use crate::serde::{from_json_slice, to_canonical_json_bytes};
