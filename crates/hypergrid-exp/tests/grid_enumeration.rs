use std::collections::BTreeSet;

use hypergrid_core::{ParamValue, ParameterTable, Slot};
use hypergrid_exp::expand_grid;
use proptest::prelude::*;

fn ints(values: &[i64]) -> Vec<ParamValue> {
    values.iter().copied().map(ParamValue::Int).collect()
}

#[test]
fn every_combination_appears_exactly_once() {
    let table = ParameterTable::new(vec![
        Slot::new("a", ints(&[1, 2])),
        Slot::new("b", ints(&[10, 20, 30])),
        Slot::new("c", ints(&[100, 200])),
    ])
    .expect("table");
    let tuples = expand_grid(&table);
    assert_eq!(tuples.len(), table.combination_count().expect("count"));
    let unique: BTreeSet<String> = tuples
        .iter()
        .map(|tuple| format!("{:?}", tuple.values()))
        .collect();
    assert_eq!(unique.len(), tuples.len());
}

#[test]
fn first_slot_varies_slowest() {
    let table = ParameterTable::new(vec![
        Slot::new("outer", ints(&[1, 2])),
        Slot::new("inner", ints(&[10, 20, 30])),
    ])
    .expect("table");
    let tuples = expand_grid(&table);
    // The first three tuples hold the outer value fixed while the inner
    // slot cycles; the outer slot advances only afterwards.
    for tuple in &tuples[..3] {
        assert_eq!(tuple.values()[0], ParamValue::Int(1));
    }
    for tuple in &tuples[3..] {
        assert_eq!(tuple.values()[0], ParamValue::Int(2));
    }
    assert_eq!(tuples[0].values()[1], ParamValue::Int(10));
    assert_eq!(tuples[1].values()[1], ParamValue::Int(20));
    assert_eq!(tuples[2].values()[1], ParamValue::Int(30));
}

#[test]
fn swapping_slots_changes_order_not_set() {
    let forward = ParameterTable::new(vec![
        Slot::new("a", ints(&[1, 2])),
        Slot::new("b", ints(&[10, 20, 30])),
    ])
    .expect("table");
    let swapped = ParameterTable::new(vec![
        Slot::new("b", ints(&[10, 20, 30])),
        Slot::new("a", ints(&[1, 2])),
    ])
    .expect("table");

    let named = |table: &ParameterTable| -> BTreeSet<Vec<(String, String)>> {
        expand_grid(table)
            .iter()
            .map(|tuple| {
                let mut pairs: Vec<(String, String)> = table
                    .slots()
                    .iter()
                    .zip(tuple.values())
                    .map(|(slot, value)| (slot.name().to_string(), value.to_string()))
                    .collect();
                pairs.sort();
                pairs
            })
            .collect()
    };

    let set_forward = named(&forward);
    let set_swapped = named(&swapped);
    assert_eq!(set_forward.len(), 6);
    assert_eq!(set_forward, set_swapped);
}

proptest! {
    #[test]
    fn count_equals_product_of_lengths(sizes in prop::collection::vec(1usize..5, 1..5)) {
        let slots: Vec<Slot> = sizes
            .iter()
            .enumerate()
            .map(|(idx, size)| {
                let values = (0..*size as i64).map(ParamValue::Int).collect();
                Slot::new(format!("s{idx}"), values)
            })
            .collect();
        let table = ParameterTable::new(slots).expect("table");
        let tuples = expand_grid(&table);
        let product: usize = sizes.iter().product();
        prop_assert_eq!(tuples.len(), product);
        let unique: BTreeSet<String> = tuples
            .iter()
            .map(|tuple| format!("{:?}", tuple.values()))
            .collect();
        prop_assert_eq!(unique.len(), product);
    }
}
