use anyhow::{Context, Result};
use clap::ValueEnum;
use grantham::standard_amino_acids;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Output format of all subcommands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    #[default]
    Tsv,
    Json,
}

/// Result of translating a single code, `output` is empty if the code is unknown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Translation {
    pub(crate) input: String,
    pub(crate) output: Option<String>,
}

/// Opens the given file for writing, creating missing parent directories, or stdout if no path is given.
pub(crate) fn output_writer(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if !parent.exists() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Could not create output directory {}", parent.display())
                    })?;
                }
            }
            let file = File::create(path)
                .with_context(|| format!("Could not create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Writes the rows as TSV with a header or as a JSON array.
///
/// # Arguments
///
/// * `writer` - Destination of the rendered rows.
/// * `rows` - Rows to render, field names become the TSV header or JSON keys.
/// * `format` - Output format.
pub(crate) fn render_rows<W: Write, T: Serialize>(
    mut writer: W,
    rows: &[T],
    format: Format,
) -> Result<()> {
    match format {
        Format::Tsv => {
            let mut wtr = csv::WriterBuilder::new()
                .delimiter(b'\t')
                .from_writer(writer);
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// Writes a 20 x 20 matrix with rows and columns labelled by the standard amino acids.
pub(crate) fn render_matrix<W: Write, T: Serialize + Copy + ToString>(
    mut writer: W,
    matrix: &[[T; 20]; 20],
    format: Format,
) -> Result<()> {
    let labels: Vec<&str> = standard_amino_acids()
        .iter()
        .map(|aa| aa.abbreviation())
        .collect();
    match format {
        Format::Tsv => {
            let mut wtr = csv::WriterBuilder::new()
                .delimiter(b'\t')
                .from_writer(writer);
            wtr.write_record(std::iter::once("").chain(labels.iter().copied()))?;
            for (label, row) in labels.iter().zip(matrix.iter()) {
                wtr.write_record(
                    std::iter::once(label.to_string()).chain(row.iter().map(|d| d.to_string())),
                )?;
            }
            wtr.flush()?;
        }
        Format::Json => {
            let json = serde_json::json!({
                "amino_acids": labels,
                "distances": matrix,
            });
            serde_json::to_writer_pretty(&mut writer, &json)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}
