use clap::Args;

use crate::cli::OutputFormat;
use crate::design::selection::AcceptanceCriteria;
use crate::design::thermo::{evaluate, ThermoProfile};

#[derive(Args)]
pub struct EvaluateArgs {
    /// Primer sequences (A, C, G, T; case-insensitive)
    #[arg(required = true)]
    pub sequences: Vec<String>,
}

/// Execute evaluate subcommand
///
/// # Errors
///
/// Returns an error if a sequence contains a base other than A, C, G or T.
pub fn run(args: &EvaluateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let profiles = args
        .sequences
        .iter()
        .map(|sequence| Ok((sequence.to_ascii_uppercase(), evaluate(sequence)?)))
        .collect::<anyhow::Result<Vec<(String, ThermoProfile)>>>()?;

    let criteria = AcceptanceCriteria::default();
    match format {
        OutputFormat::Text => {
            for (sequence, profile) in &profiles {
                let note = if profile.is_degenerate() {
                    "  (degenerate: a base is missing)"
                } else if criteria.in_window(profile.melting_temp) {
                    ""
                } else {
                    "  (outside Tm window)"
                };
                println!(
                    "{sequence}  Tm: {:.3} °C  GC: {:.2}%{note}",
                    profile.melting_temp, profile.gc_content
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = profiles
                .iter()
                .map(|(sequence, profile)| {
                    serde_json::json!({
                        "sequence": sequence,
                        "length": sequence.len(),
                        "melting_temp": profile.melting_temp,
                        "gc_content": profile.gc_content,
                        "in_window": criteria.in_window(profile.melting_temp),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("sequence\tlength\tmelting_temp\tgc_content");
            for (sequence, profile) in &profiles {
                println!(
                    "{sequence}\t{}\t{:.3}\t{:.2}",
                    sequence.len(),
                    profile.melting_temp,
                    profile.gc_content
                );
            }
        }
    }

    Ok(())
}
