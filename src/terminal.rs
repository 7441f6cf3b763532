mod prompt;
mod table;
#[cfg(test)]
pub mod testutils;

pub use prompt::{Operator, TerminalOperator};
pub use table::{show_mapping, show_sample_rows};
