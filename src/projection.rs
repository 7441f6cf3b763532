use anyhow::{bail, Result};
use std::collections::HashMap;

use crate::dataset::Dataset;
use crate::mapping::MappingSet;

/// Rename the mapped source columns to their target names and drop every other column.
///
/// Output columns follow the order of `mappings`, rows keep their order and values.
/// Fails if a mapped source column isn't in the dataset, which usually means a saved
/// mapping is used with a CSV file from a different bank or export format.
pub fn project(dataset: Dataset, mappings: &MappingSet) -> Result<Dataset> {
    let renames = rename_table(mappings)?;
    log::debug!("Renaming columns: {:?}", renames);

    let renamed: Vec<Option<&str>> = dataset
        .columns()
        .iter()
        .map(|column| renames.get(column.as_str()).copied())
        .collect();

    let mut selected = Vec::new();
    let mut missing = Vec::new();
    for (target, source) in mappings.mapped() {
        match renamed.iter().position(|name| *name == Some(target)) {
            Some(index) => selected.push((target.to_string(), index)),
            None => missing.push(format!("{:?} (for {})", source, target)),
        }
    }
    if !missing.is_empty() {
        bail!(
            "The transaction file has no column {}",
            missing.join(", no column ")
        );
    }

    let columns = selected.iter().map(|(target, _)| target.clone()).collect();
    let rows = dataset
        .into_rows()
        .into_iter()
        .map(|mut row| {
            selected
                .iter()
                .map(|&(_, index)| std::mem::take(&mut row[index]))
                .collect()
        })
        .collect();
    Dataset::new(columns, rows)
}

fn rename_table(mappings: &MappingSet) -> Result<HashMap<&str, &str>> {
    let mut renames = HashMap::new();
    for (target, source) in mappings.mapped() {
        if let Some(previous) = renames.insert(source, target) {
            bail!(
                "CSV field {:?} is used for both {} and {}",
                source,
                previous,
                target
            );
        }
    }
    Ok(renames)
}
