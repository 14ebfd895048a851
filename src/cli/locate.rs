use clap::Args;

use crate::cli::{OutputFormat, SearchArgs};
use crate::core::record::label_for_header;
use crate::parsing::corpus::Corpus;
use crate::parsing::locator::{HeaderMatch, RecordLocator};
use crate::utils::validation::parse_keywords;

#[derive(Args)]
pub struct LocateArgs {
    #[command(flatten)]
    pub search: SearchArgs,
}

/// Execute locate subcommand
///
/// # Errors
///
/// Returns an error if no keyword is given or the corpus cannot be read.
pub fn run(args: &LocateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let keywords = args
        .search
        .keywords
        .as_deref()
        .map(parse_keywords)
        .unwrap_or_default();
    let locator = RecordLocator::new(&keywords, args.search.ignore_case)?;
    let corpus = Corpus::from_path(&args.search.input)?;

    let headers: Vec<HeaderMatch<'_>> = locator.locate(corpus.text()).collect();

    if headers.is_empty() {
        eprintln!(
            "No records found with keyword(s): {}",
            locator.keywords().join(", ")
        );
    }

    match format {
        OutputFormat::Text => print_text(&headers),
        OutputFormat::Json => print_json(&headers)?,
        OutputFormat::Tsv => print_tsv(&headers),
    }

    Ok(())
}

fn print_text(headers: &[HeaderMatch<'_>]) {
    for (i, header) in headers.iter().enumerate() {
        println!("{}. {}", i + 1, header.text);
        println!("   Label: {}", label_for_header(header.text));
        println!("   Bytes: {}..{}", header.start, header.end);
    }
}

fn print_json(headers: &[HeaderMatch<'_>]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            serde_json::json!({
                "index": i + 1,
                "label": label_for_header(header.text),
                "header": header.text,
                "start": header.start,
                "end": header.end,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(headers: &[HeaderMatch<'_>]) {
    println!("index\tlabel\tstart\tend\theader");
    for (i, header) in headers.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            i + 1,
            label_for_header(header.text),
            header.start,
            header.end,
            header.text
        );
    }
}
