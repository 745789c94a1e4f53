use hypergrid_core::errors::{ErrorInfo, GridError};
use hypergrid_core::ParamTuple;
use serde::{Deserialize, Serialize};

/// Fixed command-line template for the external training program.
///
/// Rendering substitutes one tuple value after each positional flag, in
/// declaration order, with the environment assignments prepended unchanged.
/// Values are passed through verbatim; no range or type validation happens
/// here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandTemplate {
    /// Environment assignments prefixed to the shell line (`KEY=VALUE`).
    pub env: Vec<(String, String)>,
    /// Program invocation, e.g. `python go.py`.
    pub program: String,
    /// Positional flags, one per parameter slot, in slot order.
    pub flags: Vec<String>,
}

impl CommandTemplate {
    /// Renders the full shell line for one parameter tuple.
    pub fn render(&self, tuple: &ParamTuple) -> Result<String, GridError> {
        if self.flags.len() != tuple.arity() {
            return Err(GridError::Command(
                ErrorInfo::new("command-arity", "flag count does not match tuple arity")
                    .with_context("flags", self.flags.len().to_string())
                    .with_context("values", tuple.arity().to_string()),
            ));
        }
        let mut line = String::new();
        for (key, value) in &self.env {
            line.push_str(key);
            line.push('=');
            line.push_str(value);
            line.push(' ');
        }
        line.push_str(&self.program);
        for (flag, value) in self.flags.iter().zip(tuple.values()) {
            line.push(' ');
            line.push_str(flag);
            line.push(' ');
            line.push_str(&value.to_string());
        }
        Ok(line)
    }
}
