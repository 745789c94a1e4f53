use hypergrid_core::errors::{ErrorInfo, GridError};
use hypergrid_core::{ParamTuple, ParameterTable};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::command::CommandTemplate;
use crate::grid::expand_grid;
use crate::hash::stable_hash_string;
use crate::invoke::{InvocationOutcome, JobRunner};

/// Plan combining the parameter table with the external command template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPlan {
    pub table: ParameterTable,
    pub template: CommandTemplate,
}

/// Record of one external invocation issued during a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobReport {
    pub params: Value,
    pub command: String,
    pub outcome: InvocationOutcome,
}

/// Aggregate sweep report covering every combination in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub plan_hash: String,
    pub jobs: Vec<JobReport>,
    #[serde(default)]
    pub metrics: Value,
}

/// Executes the full sweep described by [`SweepPlan`].
///
/// Enumerates the Cartesian product of the table in declaration order and
/// issues one blocking invocation per combination, strictly sequentially.
/// Invocation failures are recorded in the report and never interrupt or
/// reorder enumeration; the driver treats every job as settled once its
/// process exits. Errors are only returned for internal faults (template
/// arity mismatch, hashing, serialization), all detected before or aside
/// from any invocation outcome.
pub fn run_sweep(plan: &SweepPlan, runner: &dyn JobRunner) -> Result<SweepReport, GridError> {
    if plan.template.flags.len() != plan.table.arity() {
        return Err(GridError::Command(
            ErrorInfo::new("plan-arity", "template flag count does not match table slots")
                .with_context("flags", plan.template.flags.len().to_string())
                .with_context("slots", plan.table.arity().to_string()),
        ));
    }
    let plan_hash = stable_hash_string(plan)?;
    let expected = plan.table.combination_count()?;
    let tuples = expand_grid(&plan.table);

    let mut jobs = Vec::with_capacity(tuples.len());
    let mut completed = 0usize;
    let mut failed = 0usize;
    let mut launch_failed = 0usize;
    for tuple in &tuples {
        let command = plan.template.render(tuple)?;
        let outcome = runner.run(&command);
        match outcome {
            InvocationOutcome::Completed => completed += 1,
            InvocationOutcome::Failed { .. } => failed += 1,
            InvocationOutcome::LaunchFailed { .. } => launch_failed += 1,
        }
        jobs.push(JobReport {
            params: named_params(&plan.table, tuple)?,
            command,
            outcome,
        });
    }

    let metrics = json!({
        "jobs": jobs.len(),
        "expected": expected,
        "completed": completed,
        "failed": failed,
        "launch_failed": launch_failed,
    });

    Ok(SweepReport {
        plan_hash,
        jobs,
        metrics,
    })
}

fn named_params(table: &ParameterTable, tuple: &ParamTuple) -> Result<Value, GridError> {
    let mut map = Map::new();
    for (slot, value) in table.slots().iter().zip(tuple.values()) {
        let encoded = serde_json::to_value(value)
            .map_err(|err| GridError::Serde(ErrorInfo::new("params-encode", err.to_string())))?;
        map.insert(slot.name().to_string(), encoded);
    }
    Ok(Value::Object(map))
}
