use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, GridError};

/// A single candidate value for one parameter slot.
///
/// `Display` renders the literal form the external training program expects
/// on its command line: booleans as `True`/`False` (the consumer parses
/// Python-style literals), integers and floats in plain decimal notation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean flag value.
    Bool(bool),
    /// Small integer value (epoch counts and similar).
    Int(i64),
    /// Positive floating-point value (rates and weights).
    Float(f64),
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(true) => write!(f, "True"),
            ParamValue::Bool(false) => write!(f, "False"),
            ParamValue::Int(value) => write!(f, "{value}"),
            ParamValue::Float(value) => write!(f, "{value}"),
        }
    }
}

/// One named parameter slot with its ordered, non-empty candidate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    name: String,
    values: Vec<ParamValue>,
}

impl Slot {
    /// Creates a slot from a name and its candidate values.
    pub fn new(name: impl Into<String>, values: Vec<ParamValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Returns the slot name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered candidate values.
    pub fn values(&self) -> &[ParamValue] {
        &self.values
    }
}

/// Ordered, immutable table of parameter slots.
///
/// Declaration order is significant: enumeration varies the first slot
/// slowest and the last slot fastest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterTable {
    slots: Vec<Slot>,
}

impl ParameterTable {
    /// Builds a table, validating that at least one slot is present, slot
    /// names are unique, and every slot carries at least one value.
    pub fn new(slots: Vec<Slot>) -> Result<Self, GridError> {
        if slots.is_empty() {
            return Err(GridError::Params(ErrorInfo::new(
                "table-empty",
                "parameter table requires at least one slot",
            )));
        }
        for (idx, slot) in slots.iter().enumerate() {
            if slot.values.is_empty() {
                return Err(GridError::Params(
                    ErrorInfo::new("slot-empty", "slot has no candidate values")
                        .with_context("slot", slot.name.clone()),
                ));
            }
            if slots[..idx].iter().any(|prior| prior.name == slot.name) {
                return Err(GridError::Params(
                    ErrorInfo::new("slot-duplicate", "slot name declared twice")
                        .with_context("slot", slot.name.clone()),
                ));
            }
        }
        Ok(Self { slots })
    }

    /// Returns the slots in declaration order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the number of declared slots.
    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the total number of combinations the table enumerates,
    /// i.e. the product of all slot lengths.
    pub fn combination_count(&self) -> Result<usize, GridError> {
        let mut total = 1usize;
        for slot in &self.slots {
            total = total.checked_mul(slot.values.len()).ok_or_else(|| {
                GridError::Params(
                    ErrorInfo::new("table-overflow", "combination count overflows usize")
                        .with_context("slot", slot.name.clone()),
                )
            })?;
        }
        Ok(total)
    }
}

/// One concrete assignment of exactly one value per slot, in table order.
///
/// Tuples are ephemeral: produced by enumeration, consumed by one external
/// invocation, then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamTuple {
    values: Vec<ParamValue>,
}

impl ParamTuple {
    /// Creates a tuple from values already ordered by table slot order.
    pub fn new(values: Vec<ParamValue>) -> Self {
        Self { values }
    }

    /// Returns the values in slot order.
    pub fn values(&self) -> &[ParamValue] {
        &self.values
    }

    /// Returns the number of values in the tuple.
    pub fn arity(&self) -> usize {
        self.values.len()
    }
}
