use std::error::Error;

use hypergrid_core::{ParamValue, ParameterTable, Slot};
use hypergrid_exp::{run_sweep, to_canonical_json_bytes, CommandTemplate, ShellRunner, SweepPlan};

fn main() -> Result<(), Box<dyn Error>> {
    let plan = builtin_plan()?;
    let report = run_sweep(&plan, &ShellRunner)?;
    // Individual job failures are already folded into the report; the
    // driver itself always completes.
    let bytes = to_canonical_json_bytes(&report)?;
    println!("{}", String::from_utf8(bytes)?);
    Ok(())
}

/// The fixed built-in sweep: 13 slots driving `go.py` on the GPU in single
/// precision, 40 combinations total.
fn builtin_plan() -> Result<SweepPlan, Box<dyn Error>> {
    let table = ParameterTable::new(vec![
        Slot::new("epoch", ints(&[50])),
        Slot::new("aug", bools(&[false])),
        Slot::new("noise", bools(&[false])),
        Slot::new("maxout", bools(&[false])),
        Slot::new("dropout", bools(&[false])),
        Slot::new("l1", bools(&[false])),
        Slot::new("l2", bools(&[true])),
        Slot::new("maxpooling", bools(&[false])),
        Slot::new("deep", bools(&[false])),
        Slot::new("noise_rate", floats(&[0.01])),
        Slot::new("weight_constraint", bools(&[true, false])),
        Slot::new("l1_weight", floats(&[0.001, 0.005, 0.01, 0.05, 0.1])),
        Slot::new("l2_weight", floats(&[0.01, 0.05, 0.1, 0.5])),
    ])?;
    let template = CommandTemplate {
        env: vec![(
            "THEANO_FLAGS".to_string(),
            "device=gpu,floatX=float32".to_string(),
        )],
        program: "python go.py".to_string(),
        flags: [
            "-e", "-a", "-n", "-m", "-d", "-l", "-r", "-p", "-x", "-o", "-w", "-q", "-z",
        ]
        .iter()
        .map(|flag| flag.to_string())
        .collect(),
    };
    Ok(SweepPlan { table, template })
}

fn ints(values: &[i64]) -> Vec<ParamValue> {
    values.iter().copied().map(ParamValue::Int).collect()
}

fn bools(values: &[bool]) -> Vec<ParamValue> {
    values.iter().copied().map(ParamValue::Bool).collect()
}

fn floats(values: &[f64]) -> Vec<ParamValue> {
    values.iter().copied().map(ParamValue::Float).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypergrid_exp::expand_grid;

    #[test]
    fn builtin_plan_enumerates_forty_combinations() {
        let plan = builtin_plan().expect("plan");
        assert_eq!(plan.table.arity(), 13);
        assert_eq!(plan.table.combination_count().expect("count"), 40);
        assert_eq!(expand_grid(&plan.table).len(), 40);
    }

    #[test]
    fn builtin_first_command_matches_contract() {
        let plan = builtin_plan().expect("plan");
        let tuples = expand_grid(&plan.table);
        let first = plan.template.render(&tuples[0]).expect("render");
        assert_eq!(
            first,
            "THEANO_FLAGS=device=gpu,floatX=float32 python go.py \
             -e 50 -a False -n False -m False -d False -l False -r True \
             -p False -x False -o 0.01 -w True -q 0.001 -z 0.01"
        );
    }
}
