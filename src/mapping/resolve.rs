use anyhow::Result;

use super::{FieldMapping, MappingSet};
use crate::schema::TargetField;
use crate::terminal::Operator;

/// A valid answer to "which column should be used for this field?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Skip,
    /// Zero-based index into the remaining candidates
    Candidate(usize),
}

/// Parse the operator's answer. The menu is 1-based with 0 meaning "skip".
/// Returns None for anything that isn't one of the displayed numbers.
pub fn parse_choice(input: &str, num_candidates: usize) -> Option<Choice> {
    match input.trim().parse::<usize>().ok()? {
        0 => Some(Choice::Skip),
        n if n <= num_candidates => Some(Choice::Candidate(n - 1)),
        _ => None,
    }
}

/// Ask the operator, field by field, which CSV column feeds each target field.
///
/// Every chosen column is removed from `candidates`, so it can't be offered
/// again for a later field. Columns nobody picked are left in `candidates`.
pub fn resolve_interactive(
    target_fields: &[TargetField],
    candidates: &mut Vec<String>,
    operator: &mut impl Operator,
) -> Result<MappingSet> {
    let mut mappings = Vec::with_capacity(target_fields.len());
    for target in target_fields {
        let source_field = match choose(target, candidates, operator)? {
            Choice::Skip => None,
            Choice::Candidate(index) => Some(candidates.remove(index)),
        };
        log::debug!("{} <- {:?}", target.name, source_field);
        mappings.push(FieldMapping::new(target, source_field));
    }
    Ok(MappingSet::new(mappings))
}

fn choose(
    target: &TargetField,
    candidates: &[String],
    operator: &mut impl Operator,
) -> Result<Choice> {
    loop {
        show_menu(target, candidates, operator);
        let answer = operator.prompt("Selection")?;
        match parse_choice(&answer, candidates.len()) {
            Some(choice) => return Ok(choice),
            None => {
                log::debug!("Rejected selection {:?} for {}", answer, target.name);
                operator.show("Invalid selection. Try again.");
            }
        }
    }
}

fn show_menu(target: &TargetField, candidates: &[String], operator: &mut impl Operator) {
    operator.show("");
    if target.note.is_empty() {
        operator.show(&format!(
            "Which field should be used as the {} field?",
            target.name
        ));
    } else {
        operator.show(&format!(
            "Which field should be used as the {} field? ({})",
            target.name, target.note
        ));
    }
    operator.show("");
    operator.show(&format!("0. Skip {} field", target.name));
    for (index, candidate) in candidates.iter().enumerate() {
        operator.show(&format!("{}. {}", index + 1, candidate));
    }
}
