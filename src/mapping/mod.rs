use std::fmt::{self, Display};

use crate::schema::TargetField;

pub mod file;
mod resolve;

pub use resolve::{parse_choice, resolve_interactive, Choice};

/// Assignment of one YNAB column to a column of the bank's CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub target_field: String,
    /// `None` if the target field was skipped
    pub source_field: Option<String>,
    pub note: String,
}

impl FieldMapping {
    pub fn new(target: &TargetField, source_field: Option<String>) -> Self {
        Self {
            target_field: target.name.to_string(),
            source_field,
            note: target.note.to_string(),
        }
    }
}

impl Display for FieldMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t<- {}",
            self.target_field,
            self.source_field.as_deref().unwrap_or("Skipped"),
        )
    }
}

/// One [FieldMapping] per target field, in target schema order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MappingSet {
    mappings: Vec<FieldMapping>,
}

impl MappingSet {
    pub fn new(mappings: Vec<FieldMapping>) -> Self {
        Self { mappings }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldMapping> {
        self.mappings.iter()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Pairs of (target field, source column) for all fields that weren't skipped.
    pub fn mapped(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mappings.iter().filter_map(|mapping| {
            mapping
                .source_field
                .as_deref()
                .map(|source| (mapping.target_field.as_str(), source))
        })
    }

    /// True if at least one target field is taken from a source column.
    pub fn has_mapped_fields(&self) -> bool {
        self.mapped().next().is_some()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, target_field: &str) -> Option<&FieldMapping> {
        self.mappings
            .iter()
            .find(|mapping| mapping.target_field == target_field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::generate_target_fields;

    fn some_mapping_set() -> MappingSet {
        let fields = generate_target_fields();
        MappingSet::new(vec![
            FieldMapping::new(&fields[0], Some("Transaction Date".to_string())),
            FieldMapping::new(&fields[1], None),
            FieldMapping::new(&fields[3], Some("Amount".to_string())),
        ])
    }

    #[test]
    fn mapped_skips_absent_sources() {
        let set = some_mapping_set();
        assert_eq!(
            vec![("Date", "Transaction Date"), ("Amount", "Amount")],
            set.mapped().collect::<Vec<_>>()
        );
        assert!(set.has_mapped_fields());
    }

    #[test]
    fn all_skipped_has_no_mapped_fields() {
        let set = MappingSet::new(
            generate_target_fields()
                .iter()
                .map(|field| FieldMapping::new(field, None))
                .collect(),
        );
        assert_eq!(6, set.len());
        assert!(!set.has_mapped_fields());
        assert!(!MappingSet::default().has_mapped_fields());
    }

    #[test]
    fn new_copies_the_note() {
        let set = some_mapping_set();
        assert_eq!(
            "A single field for both inflow and outflow",
            set.get("Amount").unwrap().note
        );
        assert_eq!(None, set.get("Memo"));
    }

    #[test]
    fn display() {
        let set = some_mapping_set();
        let lines: Vec<String> = set.iter().map(ToString::to_string).collect();
        assert_eq!(
            vec![
                "Date\t<- Transaction Date",
                "Payee\t<- Skipped",
                "Amount\t<- Amount"
            ],
            lines
        );
    }
}
