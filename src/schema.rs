/// A column of the CSV layout that YNAB accepts for import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetField {
    pub name: &'static str,
    pub note: &'static str,
}

impl TargetField {
    const fn new(name: &'static str) -> Self {
        Self { name, note: "" }
    }

    const fn with_note(name: &'static str, note: &'static str) -> Self {
        Self { name, note }
    }
}

const SEPARATE_INFLOW_OUTFLOW: &str = "Used if separate fields are used for inflow and outflow";

/// The YNAB import columns, in the order they appear in the output file.
///
/// See https://support.ynab.com/en_us/formatting-a-csv-file-an-overview-BJvczkuRq
pub fn generate_target_fields() -> Vec<TargetField> {
    vec![
        TargetField::new("Date"),
        TargetField::new("Payee"),
        TargetField::new("Memo"),
        TargetField::with_note("Amount", "A single field for both inflow and outflow"),
        TargetField::with_note("Outflow", SEPARATE_INFLOW_OUTFLOW),
        TargetField::with_note("Inflow", SEPARATE_INFLOW_OUTFLOW),
    ]
}

/// Position of a target field in the output order, or None if it isn't a YNAB field.
pub fn position_of(target_fields: &[TargetField], name: &str) -> Option<usize> {
    target_fields.iter().position(|field| field.name == name)
}
