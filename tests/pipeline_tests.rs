//! End-to-end tests of the design pipeline through the library API.

use primer_finder::design::correction::CorrectionOutcome;
use primer_finder::design::engine::Verdict;
use primer_finder::{Corpus, DesignConfig, PrimerDesigner, Strand};

const SCARECROW_HEADER: &str = ">AT3G54220.1 | Symbols: SCR | SCARECROW | chr3:12345";
const SCARECROW_CDS: &str = "ATGGCTAGCTAGCTAGCTAGCTAGCTAGGCATGCTAGCATGCTAGTAA";

const BALANCED_HEADER: &str = ">AT1G00001.1 | Symbols: BAL | balanced test gene | chr1:100";
const BALANCED_CDS: &str = "ATGGCCAGCTTGACCGAGGTCAAGCTGTTCCAAGGACCGCTGAAGGCTCAGTCGTGA";

fn corpus(records: &[(&str, &str)]) -> Corpus {
    let text: String = records
        .iter()
        .map(|(header, sequence)| format!("{header}\n{sequence}\n"))
        .collect();
    Corpus::from_text(text).unwrap()
}

fn designer(keywords: &[&str]) -> PrimerDesigner {
    let config = DesignConfig {
        keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        ..DesignConfig::default()
    };
    PrimerDesigner::new(config).unwrap()
}

#[test]
fn test_scarecrow_yields_sixteen_rejected_pairs() {
    let corpus = corpus(&[
        (">AT1G01010.1 | NAC001 | chr1:3631", "ATGGAGGATCAAGTTTAA"),
        (SCARECROW_HEADER, SCARECROW_CDS),
    ]);
    let report = designer(&["SCARECROW", "scarecrow"]).design(&corpus).unwrap();

    assert_eq!(report.summary.matched_records, 1);
    assert_eq!(report.records.len(), 1);

    let record = &report.records[0];
    assert_eq!(record.label, "AT3G54220.1");
    assert_eq!(record.sequence_length, SCARECROW_CDS.len());
    assert_eq!(record.pairs.len(), 16);
    assert_eq!(record.accepted_count(), 0);
    assert_eq!(report.summary.rejected_pairs, 16);

    // Every reverse primer is below the window, so each pair carries a reverse suggestion
    for pair in &record.pairs {
        assert!(pair
            .suggestions()
            .iter()
            .any(|s| s.original.strand() == Strand::Reverse));
    }

    // Forward primers of length 22 and 23 are inside the window and get none
    let first = &record.pairs[0];
    assert_eq!(first.pair.forward.length(), 20);
    assert_eq!(first.pair.reverse.length(), 20);
    let forward = first
        .suggestions()
        .iter()
        .find(|s| s.original.strand() == Strand::Forward)
        .unwrap();
    match &forward.outcome {
        CorrectionOutcome::Corrected { sequence, profile } => {
            assert_eq!(sequence, "CGATCGATCGGTCGATCGAT");
            assert!((profile.melting_temp - 53.83).abs() < 1e-9);
        }
        CorrectionOutcome::Unavailable => panic!("expected a corrected forward primer"),
    }

    let third = &record.pairs[2];
    assert_eq!(third.pair.forward.length(), 22);
    assert_eq!(third.suggestions().len(), 1);
}

#[test]
fn test_balanced_record_accepts_thirteen_pairs() {
    let corpus = corpus(&[(BALANCED_HEADER, BALANCED_CDS)]);
    let report = designer(&["balanced"]).design(&corpus).unwrap();

    let record = &report.records[0];
    assert_eq!(record.pairs.len(), 16);
    assert_eq!(record.accepted_count(), 13);
    assert_eq!(report.summary.accepted_pairs, 13);
    assert_eq!(report.summary.rejected_pairs, 3);

    // Rejected only for the Tm difference; both primers are in the window
    for pair in record.pairs.iter().filter(|p| !p.is_accepted()) {
        assert!(pair.tm_difference > 4.0);
        assert!(pair.suggestions().is_empty());
    }

    let serials: Vec<usize> = report
        .accepted_pairs()
        .map(|p| match p.verdict {
            Verdict::Accepted { serial, .. } => serial,
            Verdict::Rejected { .. } => unreachable!(),
        })
        .collect();
    assert_eq!(serials, (1..=13).collect::<Vec<_>>());
}

#[test]
fn test_serials_continue_across_records() {
    let second_header = ">AT1G00002.1 | Symbols: BAL2 | balanced copy | chr1:900";
    let corpus = corpus(&[
        (BALANCED_HEADER, BALANCED_CDS),
        (SCARECROW_HEADER, SCARECROW_CDS),
        (second_header, BALANCED_CDS),
    ]);
    let report = designer(&["balanced", "SCARECROW"]).design(&corpus).unwrap();

    assert_eq!(report.records.len(), 3);
    assert_eq!(report.summary.accepted_pairs, 26);

    let last = &report.records[2];
    assert_eq!(last.label, "AT1G00002.1");
    match last.pairs[0].verdict {
        Verdict::Accepted { rank, serial } => {
            assert_eq!(rank, 1);
            assert_eq!(serial, 14);
        }
        Verdict::Rejected { .. } => panic!("expected first pair to be accepted"),
    }
}

#[test]
fn test_no_match_is_empty_success() {
    let corpus = corpus(&[(SCARECROW_HEADER, SCARECROW_CDS)]);
    let report = designer(&["SHORT-ROOT"]).design(&corpus).unwrap();

    assert_eq!(report.summary.matched_records, 0);
    assert!(report.records.is_empty());
    assert_eq!(report.summary.total_pairs, 0);
}

#[test]
fn test_ignore_case_matches_lowercase_keyword() {
    let corpus = corpus(&[(SCARECROW_HEADER, SCARECROW_CDS)]);

    let report = designer(&["scarecrow"]).design(&corpus).unwrap();
    assert!(report.records.is_empty());

    let config = DesignConfig {
        keywords: vec!["scarecrow".to_string()],
        ignore_case: true,
        ..DesignConfig::default()
    };
    let report = PrimerDesigner::new(config).unwrap().design(&corpus).unwrap();
    assert_eq!(report.records.len(), 1);
}

#[test]
fn test_record_without_sequence_is_skipped() {
    let text = format!("{SCARECROW_HEADER}\n>AT9G99999.1 | other | chr9:1\nATGAAACCCGGGTTTTAA\n");
    let corpus = Corpus::from_text(text).unwrap();
    let report = designer(&["SCARECROW"]).design(&corpus).unwrap();

    assert_eq!(report.summary.matched_records, 1);
    assert_eq!(report.summary.skipped_records, 1);
    assert!(report.records.is_empty());
    assert_eq!(report.skipped[0].label, "AT3G54220.1");
}

#[test]
fn test_short_sequence_reports_candidate_failures() {
    let corpus = corpus(&[(">AT5G00001.1 | tiny SCARECROW | chr5:1", "ATGGCCTAA")]);
    let report = designer(&["SCARECROW"]).design(&corpus).unwrap();

    let record = &report.records[0];
    assert!(record.pairs.is_empty());
    // Four lengths on two strands
    assert_eq!(record.candidate_failures.len(), 8);
}

#[test]
fn test_design_is_idempotent_across_thread_counts() {
    let corpus = corpus(&[
        (BALANCED_HEADER, BALANCED_CDS),
        (SCARECROW_HEADER, SCARECROW_CDS),
        (">AT1G00002.1 | Symbols: BAL2 | balanced copy | chr1:900", BALANCED_CDS),
    ]);

    let sequential = designer(&["balanced", "SCARECROW"]).design(&corpus).unwrap();
    let again = designer(&["balanced", "SCARECROW"]).design(&corpus).unwrap();
    assert_eq!(sequential, again);

    let config = DesignConfig {
        keywords: vec!["balanced".to_string(), "SCARECROW".to_string()],
        threads: 3,
        ..DesignConfig::default()
    };
    let parallel = PrimerDesigner::new(config).unwrap().design(&corpus).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_retain_accepted_keeps_summary() {
    let corpus = corpus(&[(BALANCED_HEADER, BALANCED_CDS)]);
    let mut report = designer(&["balanced"]).design(&corpus).unwrap();
    report.retain_accepted();

    assert_eq!(report.records[0].pairs.len(), 13);
    assert_eq!(report.summary.total_pairs, 16);
}
