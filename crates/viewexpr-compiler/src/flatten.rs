//! Flattening of nested statement sequences.

use crate::Lowered;

/// Append the leaves of `lowered` to `output`, depth first, left to right.
///
/// Sequences are produced by chains (and chains nested in chains); any
/// other value is appended as is.
pub fn flatten_statements(lowered: Lowered, output: &mut Vec<Lowered>) {
    match lowered {
        Lowered::Sequence(entries) => {
            for entry in entries {
                flatten_statements(entry, output);
            }
        }
        leaf => output.push(leaf),
    }
}
