use crate::cli::{Command, Grantham};
use crate::show::{output_writer, render_matrix, render_rows, Format, Translation};
use anyhow::Result;
use clap::Parser;
use grantham::{
    amino_acid_pairs, distance_matrix, grantham_distance, grantham_distances_matrix,
    standard_amino_acids, to_one_letter, to_three_letter, AminoAcid, AminoAcidPair,
    GranthamDistance, Method, PairOptions, Properties,
};
use log::{info, warn};
use serde::Serialize;
use std::path::Path;
mod cli;
mod show;

#[derive(Debug, Serialize)]
struct PropertyRow {
    amino_acid: AminoAcid,
    composition: f64,
    polarity: f64,
    volume: f64,
}

#[derive(Debug, Serialize)]
struct CodeRow {
    three_letter: &'static str,
    one_letter: char,
}

/// Result of a subcommand, computed completely before any output is opened
#[derive(Debug)]
enum Rendered {
    Distances(Vec<GranthamDistance>),
    Pairs(Vec<AminoAcidPair>),
    Translations(Vec<Translation>),
    Properties(Vec<PropertyRow>),
    Codes(Vec<CodeRow>),
    PublishedMatrix(&'static [[u16; 20]; 20]),
    Matrix(Box<[[f64; 20]; 20]>),
}

/// The given codes, or the 20 standard three-letter codes if none were given
fn codes_or_standard(codes: Vec<String>) -> Vec<String> {
    if codes.is_empty() {
        standard_amino_acids()
            .iter()
            .map(|aa| aa.abbreviation().to_string())
            .collect()
    } else {
        codes
    }
}

fn translations<T: ToString>(codes: &[String], translated: Vec<Option<T>>) -> Vec<Translation> {
    codes
        .iter()
        .zip(translated)
        .map(|(input, output)| Translation {
            input: input.to_string(),
            output: output.map(|o| o.to_string()),
        })
        .collect()
}

fn run(command: Command) -> Result<Rendered> {
    let rendered = match command {
        Command::Distance {
            x,
            y,
            method,
            constants,
        } => {
            if method == Method::Original && constants.is_set() {
                warn!("Constants are ignored by the original method");
            }
            Rendered::Distances(grantham_distance(
                &x,
                &y,
                method,
                &constants.resolve()?,
            )?)
        }
        Command::Pairs {
            x,
            y,
            drop_self,
            drop_duplicates,
            drop_reverses,
        } => {
            let options = PairOptions {
                keep_self: !drop_self,
                keep_duplicates: !drop_duplicates,
                keep_reverses: !drop_reverses,
            };
            Rendered::Pairs(amino_acid_pairs(
                &codes_or_standard(x),
                &codes_or_standard(y),
                &options,
            )?)
        }
        Command::OneLetter { codes } => {
            Rendered::Translations(translations(&codes, to_one_letter(&codes)))
        }
        Command::ThreeLetter { codes } => {
            Rendered::Translations(translations(&codes, to_three_letter(&codes)))
        }
        Command::Matrix { method, constants } => match method {
            Method::Original => {
                if constants.is_set() {
                    warn!("Constants are ignored by the original method");
                }
                Rendered::PublishedMatrix(grantham_distances_matrix())
            }
            Method::Exact => Rendered::Matrix(Box::new(distance_matrix(
                method,
                &constants.resolve()?,
            ))),
        },
        Command::Properties => Rendered::Properties(
            standard_amino_acids()
                .iter()
                .map(|aa| {
                    let Properties {
                        composition,
                        polarity,
                        volume,
                    } = *aa.properties();
                    PropertyRow {
                        amino_acid: *aa,
                        composition,
                        polarity,
                        volume,
                    }
                })
                .collect(),
        ),
        Command::AminoAcids => Rendered::Codes(
            standard_amino_acids()
                .iter()
                .map(|aa| CodeRow {
                    three_letter: aa.abbreviation(),
                    one_letter: aa.one_letter(),
                })
                .collect(),
        ),
    };
    Ok(rendered)
}

fn write(rendered: &Rendered, output: Option<&Path>, format: Format) -> Result<()> {
    let writer = output_writer(output)?;
    match rendered {
        Rendered::Distances(rows) => render_rows(writer, rows, format),
        Rendered::Pairs(rows) => render_rows(writer, rows, format),
        Rendered::Translations(rows) => render_rows(writer, rows, format),
        Rendered::Properties(rows) => render_rows(writer, rows, format),
        Rendered::Codes(rows) => render_rows(writer, rows, format),
        Rendered::PublishedMatrix(matrix) => render_matrix(writer, *matrix, format),
        Rendered::Matrix(matrix) => render_matrix(writer, &**matrix, format),
    }
}

/// Runs the subcommand and only then opens the output, so failures leave existing files untouched
fn execute(command: Command, output: Option<&Path>, format: Format) -> Result<()> {
    let rendered = run(command)?;
    write(&rendered, output, format)
}

fn main() -> Result<()> {
    let args = Grantham::parse();
    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    execute(args.command, args.output.as_deref(), args.format)?;
    info!("Done");

    Ok(())
}
