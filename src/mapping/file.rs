use anyhow::{anyhow, bail, ensure, Context as _, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::{FieldMapping, MappingSet};
use crate::schema::{self, TargetField};

/// One entry of a saved mapping file.
#[derive(Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct MappingRecord {
    ynab_field: String,
    #[serde(default)]
    csv_field: Option<String>,
    #[serde(default)]
    note: String,
}

/// Earlier versions of the tool wrote this instead of leaving the field empty.
const LEGACY_SKIPPED: &str = "skipped";

/// True for `csv_field` values that mean the target field is skipped.
fn is_skipped_marker(source: &str) -> bool {
    source.is_empty() || source.eq_ignore_ascii_case(LEGACY_SKIPPED)
}

/// Returns Ok(None) if the mapping file can't be used as a mapping, and reports the reason
/// as an error diagnostic. Failing to read the file at all, including a missing file, is Err.
pub fn load(path: &Path, target_fields: &[TargetField]) -> Result<Option<MappingSet>> {
    log::info!("Loading mapping from {}...", path.display());
    let content = std::fs::read_to_string(path)
        .with_context(|| anyhow!("Failed to read mapping file {}", path.display()))?;

    match parse(&content, target_fields) {
        Ok(mappings) => {
            log::info!("Loading mapping from {}...done", path.display());
            Ok(Some(mappings))
        }
        Err(err) => {
            log::error!("Error reading mapping file {}: {:#}", path.display(), err);
            log::error!("Perhaps the saved mapping file is corrupt?");
            Ok(None)
        }
    }
}

fn parse(content: &str, target_fields: &[TargetField]) -> Result<MappingSet> {
    let records: Vec<MappingRecord> =
        serde_yaml::from_str(content).context("Not a list of field mappings")?;
    ensure!(!records.is_empty(), "The file contains no field mappings");
    decode(records, target_fields)
}

/// Validate the records and bring them into target schema order.
/// Target fields the file doesn't mention are skipped.
fn decode(records: Vec<MappingRecord>, target_fields: &[TargetField]) -> Result<MappingSet> {
    let mut by_target: Vec<Option<FieldMapping>> = vec![None; target_fields.len()];
    let mut claimed_sources: HashMap<String, String> = HashMap::new();

    for record in records {
        ensure!(!record.ynab_field.is_empty(), "Found an empty ynab_field");
        let Some(position) = schema::position_of(target_fields, &record.ynab_field) else {
            bail!("{:?} is not a YNAB field", record.ynab_field);
        };
        ensure!(
            by_target[position].is_none(),
            "YNAB field {:?} is mapped more than once",
            record.ynab_field,
        );

        let source_field = record
            .csv_field
            .filter(|source| !is_skipped_marker(source));
        if let Some(source) = &source_field {
            if let Some(previous) =
                claimed_sources.insert(source.clone(), record.ynab_field.clone())
            {
                bail!(
                    "CSV field {:?} is used for both {} and {}",
                    source,
                    previous,
                    record.ynab_field,
                );
            }
        }

        by_target[position] = Some(FieldMapping {
            target_field: record.ynab_field,
            source_field,
            note: record.note,
        });
    }

    Ok(MappingSet::new(
        by_target
            .into_iter()
            .zip(target_fields)
            .map(|(mapping, target)| mapping.unwrap_or_else(|| FieldMapping::new(target, None)))
            .collect(),
    ))
}

pub fn save(mappings: &MappingSet, path: &Path) -> Result<()> {
    log::info!("Saving mapping to {}...", path.display());

    let records = mappings
        .iter()
        .map(|mapping| {
            if let Some(source) = &mapping.source_field {
                ensure!(
                    !is_skipped_marker(source),
                    "Can't save CSV field {:?} for {}, it would be read back as a skipped field",
                    source,
                    mapping.target_field,
                );
            }
            Ok(MappingRecord {
                ynab_field: mapping.target_field.clone(),
                csv_field: mapping.source_field.clone(),
                note: mapping.note.clone(),
            })
        })
        .collect::<Result<Vec<MappingRecord>>>()?;
    let content = serde_yaml::to_string(&records)?;

    // Write to a temporary file first so a failed write doesn't destroy an existing mapping
    let filename = path
        .file_name()
        .ok_or_else(|| anyhow!("Path {} has no filename", path.display()))?
        .to_str()
        .ok_or_else(|| anyhow!("Filename of {} isn't valid utf-8", path.display()))?;
    let tmppath = path.with_file_name(format!("{}.tmp", filename));
    std::fs::write(&tmppath, content)
        .with_context(|| anyhow!("Error writing to file {}", path.display()))?;
    std::fs::rename(&tmppath, path)
        .with_context(|| anyhow!("Error writing to file {}", path.display()))?;

    log::info!("Saving mapping to {}...done", path.display());

    Ok(())
}
