// tests/names.rs
//
// Name/DOB normalisation over hand-picked name shapes.
use chrono::NaiveDate;

use case_scrape::names::{format_dob, parse_dob, split_full_name, PersonQuery, SUFFIXES};

const FIRSTS: &[&str] = &["John", "Maria", "Li", "D'Andre"];
const LASTS: &[&str] = &["Smith", "Garza-Lopez", "O'Neil", "Nguyen"];

#[test]
fn two_tokens_last_is_second() {
    for f in FIRSTS {
        for l in LASTS {
            let (first, last) = split_full_name(&format!("{f} {l}"));
            assert_eq!((first.as_str(), last.as_str()), (*f, *l));
        }
    }
}

#[test]
fn middle_initial_is_skipped() {
    for l in LASTS {
        for m in ["Q", "A.", "z"] {
            assert_eq!(split_full_name(&format!("John {m} {l}")).1, *l);
        }
    }
}

#[test]
fn trailing_suffix_excluded_and_preceding_token_kept() {
    for sfx in SUFFIXES {
        for l in LASTS {
            for middle in ["", "Ray ", "Q "] {
                let full = format!("John {middle}{l} {sfx}");
                let last = split_full_name(&full).1;
                assert!(!last.split(' ').any(|t| t == *sfx), "{full} -> {last}");
                assert!(last.ends_with(l), "{full} -> {last}");
                assert!(!last.starts_with("John"), "{full} -> {last}");
            }
        }
        for letter in ["A", "Q", "z"] {
            let full = format!("John {letter} {sfx}");
            assert_eq!(split_full_name(&full).1, letter, "{full}");
        }
    }
}

#[test]
fn whitespace_is_normalized_before_splitting() {
    let q = PersonQuery::new(Some("  Jane \t  Doe  "), None);
    assert_eq!(q.full_name, "Jane Doe");
    assert_eq!((q.first_name.as_str(), q.last_name.as_str()), ("Jane", "Doe"));
}

#[test]
fn dob_formats_as_mm_dd_yyyy() {
    let d = NaiveDate::from_ymd_opt(1987, 11, 3);
    assert_eq!(format_dob(d), "11/03/1987");
    assert_eq!(parse_dob(&format_dob(d)), d);
    assert_eq!(parse_dob("1987-11-03 00:00:00"), d);
}

#[test]
fn bad_dob_is_empty_never_an_error() {
    for raw in ["", "   ", "nan", "NaT", "13/45/2001", "yesterday", "02/30/1999"] {
        assert_eq!(parse_dob(raw), None, "{raw}");
        let q = PersonQuery::new(Some("Jane Doe"), parse_dob(raw));
        assert_eq!(q.dob_text(), "");
    }
}
