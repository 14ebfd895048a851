//! Tests of the `primer-finder` binary.

use std::io::Write;

use assert_cmd::Command;
use flate2::write::GzEncoder;
use flate2::Compression;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const CORPUS: &str = "\
>AT1G01010.1 | NAC001 | NAC domain containing protein 1 | chr1:3631-5899\n\
ATGGAGGATCAAGTTGGGTTTGGGTTCCGTCCGAACGACGAGGAGCTCGTTGGTTAA\n\
>AT3G54220.1 | Symbols: SCR | SCARECROW | chr3:12345\n\
ATGGCTAGCTAGCTAGCTAGCTAGCTAGGCATGCTAGCATGCTAGTAA\n\
>AT1G00001.1 | Symbols: BAL | balanced test gene | chr1:100\n\
ATGGCCAGCTTGACCGAGGTCAAGCTGTTCCAAGGACCGCTGAAGGCTCAGTCGTGA\n";

fn corpus_file() -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".txt").unwrap();
    file.write_all(CORPUS.as_bytes()).unwrap();
    file
}

fn primer_finder() -> Command {
    Command::cargo_bin("primer-finder").unwrap()
}

#[test]
fn test_design_text_output() {
    let file = corpus_file();
    primer_finder()
        .arg("design")
        .arg(file.path())
        .args(["-k", "SCARECROW,scarecrow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AT3G54220.1 (48 bp, 0 of 16 pairs accepted)"))
        .stdout(predicate::str::contains("Rejected primer set for AT3G54220.1"))
        .stdout(predicate::str::contains("Suggested alternative for reverse primer"))
        .stdout(predicate::str::contains("Primer pairs: 16 total, 0 accepted, 16 rejected"))
        .stdout(predicate::str::contains("NAC001").not());
}

#[test]
fn test_design_accepted_only_json() {
    let file = corpus_file();
    let output = primer_finder()
        .args(["--format", "json", "design"])
        .arg(file.path())
        .args(["-k", "balanced", "--accepted-only"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["summary"]["accepted_pairs"], 13);
    assert_eq!(report["summary"]["total_pairs"], 16);

    let pairs = report["records"][0]["pairs"].as_array().unwrap();
    assert_eq!(pairs.len(), 13);
    assert_eq!(pairs[0]["verdict"], "accepted");
    assert_eq!(pairs[0]["serial"], 1);
    assert_eq!(pairs[0]["pair"]["forward"]["sequence"], "CGGTCGAACTGGCTCCAGTT");
    assert_eq!(pairs[0]["pair"]["reverse"]["sequence"], "TCACGACTGAGCCTTCAGCG");
}

#[test]
fn test_design_tsv_one_row_per_pair() {
    let file = corpus_file();
    let output = primer_finder()
        .args(["-f", "tsv", "design"])
        .arg(file.path())
        .args(["-k", "SCARECROW", "--lengths", "20,21"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("record\tforward"));
    assert_eq!(lines.len(), 1 + 4);
    assert!(lines[1].starts_with("AT3G54220.1\t"));
    assert!(lines[1].contains("\trejected\t"));
}

#[test]
fn test_design_gzip_input() {
    let mut file = NamedTempFile::with_suffix(".gz").unwrap();
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(CORPUS.as_bytes()).unwrap();
    file.write_all(&encoder.finish().unwrap()).unwrap();

    primer_finder()
        .arg("design")
        .arg(file.path())
        .args(["-k", "scarecrow", "--ignore-case"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AT3G54220.1 (48 bp"));
}

#[test]
fn test_design_from_stdin() {
    primer_finder()
        .args(["design", "-", "-k", "balanced"])
        .write_stdin(CORPUS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Primer pairs: 16 total, 13 accepted, 3 rejected"));
}

#[test]
fn test_design_no_match() {
    let file = corpus_file();
    primer_finder()
        .arg("design")
        .arg(file.path())
        .args(["-k", "SHORT-ROOT"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No records found with keyword(s): SHORT-ROOT"))
        .stdout(predicate::str::contains("Records: 0 matched"));
}

#[test]
fn test_design_requires_keyword() {
    let file = corpus_file();
    primer_finder()
        .arg("design")
        .arg(file.path())
        .args(["-k", " , "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No keyword supplied"));
}

#[test]
fn test_design_rejects_bad_length() {
    let file = corpus_file();
    primer_finder()
        .arg("design")
        .arg(file.path())
        .args(["-k", "SCARECROW", "--lengths", "20,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid primer length 0"));
}

#[test]
fn test_design_rejects_non_fasta_corpus() {
    let mut file = NamedTempFile::with_suffix(".txt").unwrap();
    file.write_all(b"gene list\nSCARECROW\n").unwrap();

    primer_finder()
        .arg("design")
        .arg(file.path())
        .args(["-k", "SCARECROW"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a FASTA corpus"));
}

#[test]
fn test_design_missing_file() {
    primer_finder()
        .args(["design", "/nonexistent/corpus.txt", "-k", "SCARECROW"])
        .assert()
        .failure();
}

#[test]
fn test_design_with_config_file() {
    let file = corpus_file();
    let mut config = NamedTempFile::with_suffix(".json").unwrap();
    config
        .write_all(br#"{"keywords": ["balanced"], "max_tm_diff": 10.0}"#)
        .unwrap();

    primer_finder()
        .arg("design")
        .arg(file.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("16 of 16 pairs accepted"));
}

#[test]
fn test_locate_lists_headers() {
    let file = corpus_file();
    primer_finder()
        .arg("locate")
        .arg(file.path())
        .args(["-k", "SCARECROW,balanced"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. >AT3G54220.1 | Symbols: SCR | SCARECROW | chr3:12345"))
        .stdout(predicate::str::contains("2. >AT1G00001.1"))
        .stdout(predicate::str::contains("Label: AT3G54220.1"));
}

#[test]
fn test_locate_tsv() {
    let file = corpus_file();
    primer_finder()
        .args(["--format", "tsv", "locate"])
        .arg(file.path())
        .args(["-k", "NAC001"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("index\tlabel\tstart\tend\theader\n1\tAT1G01010.1\t0\t"));
}

#[test]
fn test_evaluate_text() {
    primer_finder()
        .args(["evaluate", "GATTACAGATTACAGATTACA", "acgtacgtac"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GATTACAGATTACAGATTACA  Tm: 44.595 °C  GC: 28.57%  (outside Tm window)"))
        .stdout(predicate::str::contains("ACGTACGTAC  Tm: 30.000 °C  GC: 50.00%"));
}

#[test]
fn test_evaluate_json_degenerate() {
    let output = primer_finder()
        .args(["-f", "json", "evaluate", "CCCCCCCCCCGGGGGGGGGG"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let profiles: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(profiles[0]["melting_temp"], 0.0);
    assert_eq!(profiles[0]["gc_content"], 0.0);
    assert_eq!(profiles[0]["in_window"], false);
}

#[test]
fn test_evaluate_rejects_invalid_base() {
    primer_finder()
        .args(["evaluate", "ACGTN"])
        .assert()
        .failure();
}
