use super::*;
use std::io::{Cursor, Write};

const SAMPLE: &str = "Quality\t#1 ID\t#2 ID\t#1 String\t#2 String\n\
1\t702876\t702977\tAmrozi accused his brother.\tReferring to him, Amrozi accused his brother.\n\
\n\
0\t2108705\t2108831\tYucaipa owned Dominick's.\tYucaipa bought Dominick's in 1995.\n";

#[test]
fn test_parse_skips_header_and_blank_lines() {
    let pairs = parse_msrp(Cursor::new(SAMPLE)).unwrap();

    assert_eq!(pairs.len(), 2);
    assert!(pairs[0].is_paraphrase);
    assert_eq!(pairs[0].label(), 1);
    assert_eq!(pairs[0].id1, "702876");
    assert_eq!(pairs[0].s1, "Amrozi accused his brother.");
    assert_eq!(pairs[1].label(), 0);
    assert_eq!(pairs[1].s2, "Yucaipa bought Dominick's in 1995.");
}

#[test]
fn test_header_only() {
    let pairs = parse_msrp(Cursor::new("Quality\t#1 ID\t#2 ID\t#1 String\t#2 String\n")).unwrap();
    assert!(pairs.is_empty());
    assert!(parse_msrp(Cursor::new("")).unwrap().is_empty());
}

#[test]
fn test_missing_fields() {
    let input = "header\n1\t1\t2\tonly one sentence\n";
    assert!(matches!(
        parse_msrp(Cursor::new(input)),
        Err(CorpusError::MissingFields { line: 2, found: 4 })
    ));
}

#[test]
fn test_invalid_label() {
    let input = "header\n1\ta\tb\tx\ty\n2\ta\tb\tx\ty\n";
    match parse_msrp(Cursor::new(input)) {
        Err(CorpusError::InvalidLabel { line, value }) => {
            assert_eq!(line, 3);
            assert_eq!(value, "2");
        }
        other => panic!("expected InvalidLabel, got {other:?}"),
    }
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{SAMPLE}").unwrap();

    let pairs = load_msrp(file.path()).unwrap();
    assert_eq!(pairs.len(), 2);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_msrp(dir.path().join("missing.txt")),
        Err(CorpusError::Open { .. })
    ));
}

#[test]
fn test_reference_sentences_are_unique_and_sorted() {
    let pairs = vec![
        SentencePair::new(true, "1", "2", "b", "a"),
        SentencePair::new(false, "3", "4", "a", "c"),
    ];
    assert_eq!(reference_sentences(&pairs), vec!["a", "b", "c"]);
}
