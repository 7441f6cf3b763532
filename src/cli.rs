use anyhow::{anyhow, Context as _, Result};
use std::path::{Path, PathBuf};

use crate::args::Args;
use crate::dataset::{self, Dataset};
use crate::mapping::{self, MappingSet};
use crate::projection::project;
use crate::schema::{generate_target_fields, TargetField};
use crate::terminal::{show_mapping, show_sample_rows, Operator, TerminalOperator};

const SAMPLE_ROWS: usize = 5;
const OUTPUT_EXTENSION: &str = "ynab.csv";

pub fn main(args: Args) -> Result<()> {
    let output_dir = match args.output_dir {
        Some(output_dir) => output_dir,
        None => std::env::current_dir().context("Failed to determine the current directory")?,
    };
    let run = Run {
        csv_file: args.csv_file,
        config_file: args.config_file,
        output_dir,
    };
    run.execute(&mut TerminalOperator::new())?;
    Ok(())
}

/// One conversion of a bank CSV file into a YNAB CSV file.
pub struct Run {
    pub csv_file: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub output_dir: PathBuf,
}

impl Run {
    /// Returns the path of the written YNAB file.
    pub fn execute(self, operator: &mut impl Operator) -> Result<PathBuf> {
        let csv_file = match &self.csv_file {
            Some(csv_file) => csv_file.clone(),
            None => PathBuf::from(operator.prompt("CSV file")?),
        };
        let transactions = dataset::file::read(&csv_file)?;
        show_sample_rows(operator, &transactions, SAMPLE_ROWS);

        let target_fields = generate_target_fields();
        let mappings = self.resolve_mappings(&target_fields, &transactions, operator)?;
        show_mapping(operator, &mappings);

        let converted = project(transactions, &mappings).context(
            "Hmmm... It looks like the saved mapping file does not match the transaction file. \
             Please check that the correct files are being used",
        )?;
        show_sample_rows(operator, &converted, SAMPLE_ROWS);

        let output_path = output_path(&csv_file, &self.output_dir)?;
        dataset::file::write(converted, &output_path)?;
        operator.show(&format!("Updated data written to {}", output_path.display()));

        if self.config_file.is_none() {
            prompt_to_save_mappings(&mappings, operator)?;
        }

        Ok(output_path)
    }

    fn resolve_mappings(
        &self,
        target_fields: &[TargetField],
        transactions: &Dataset,
        operator: &mut impl Operator,
    ) -> Result<MappingSet> {
        if let Some(config_file) = &self.config_file {
            match mapping::file::load(config_file, target_fields)? {
                Some(mappings) if mappings.has_mapped_fields() => return Ok(mappings),
                Some(_) => log::error!(
                    "The mapping file {} doesn't map any field",
                    config_file.display()
                ),
                None => {}
            }
            operator.show("Could not use the saved mapping, please choose the fields below.");
        }
        let mut candidates = transactions.columns().to_vec();
        mapping::resolve_interactive(target_fields, &mut candidates, operator)
    }
}

/// `<output_dir>/<name of the csv file>.ynab.csv`
fn output_path(csv_file: &Path, output_dir: &Path) -> Result<PathBuf> {
    let file_name = csv_file
        .file_name()
        .ok_or_else(|| anyhow!("Path {} has no filename", csv_file.display()))?;
    Ok(output_dir.join(Path::new(file_name).with_extension(OUTPUT_EXTENSION)))
}

fn prompt_to_save_mappings(mappings: &MappingSet, operator: &mut impl Operator) -> Result<()> {
    operator.show("");
    if operator.prompt_yes_no("Would you like to save this mapping to a file?", true)? {
        let path = PathBuf::from(operator.prompt("Enter the path to save the mapping file")?);
        mapping::file::save(mappings, &path)?;
        operator.show(&format!("Field mappings written to {}", path.display()));
    }
    Ok(())
}
