use hypergrid_core::{ParamTuple, ParamValue, ParameterTable, Slot};

/// Expands the full Cartesian product of the table's slots in declaration
/// order: the first slot varies slowest, the last slot fastest. Every
/// combination appears exactly once and the output length equals
/// [`ParameterTable::combination_count`].
pub fn expand_grid(table: &ParameterTable) -> Vec<ParamTuple> {
    let mut outputs = Vec::new();
    expand(table.slots(), 0, Vec::new(), &mut outputs);
    outputs
}

fn expand(slots: &[Slot], idx: usize, current: Vec<ParamValue>, outputs: &mut Vec<ParamTuple>) {
    if idx == slots.len() {
        outputs.push(ParamTuple::new(current));
        return;
    }
    for value in slots[idx].values() {
        let mut next = current.clone();
        next.push(value.clone());
        expand(slots, idx + 1, next, outputs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_slot_varies_fastest() {
        let table = ParameterTable::new(vec![
            Slot::new("outer", vec![ParamValue::Int(1), ParamValue::Int(2)]),
            Slot::new("inner", vec![ParamValue::Int(10), ParamValue::Int(20)]),
        ])
        .expect("table");
        let tuples = expand_grid(&table);
        let flat: Vec<Vec<ParamValue>> = tuples.iter().map(|t| t.values().to_vec()).collect();
        assert_eq!(
            flat,
            vec![
                vec![ParamValue::Int(1), ParamValue::Int(10)],
                vec![ParamValue::Int(1), ParamValue::Int(20)],
                vec![ParamValue::Int(2), ParamValue::Int(10)],
                vec![ParamValue::Int(2), ParamValue::Int(20)],
            ]
        );
    }
}
