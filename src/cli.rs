// src/cli.rs
use std::{env, path::PathBuf, time::Duration};

use crate::config::options::{ExportFormat, RunOptions};
use crate::log::{set_min_level, Level};
use crate::portal::County;
use crate::progress::ConsoleProgress;
use crate::runner::RunSummary;

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run { opts: RunOptions, verbose: bool },
    ListCounties,
    Help,
}

/// Parse the process arguments and run.
pub fn run() -> Result<Option<RunSummary>, Box<dyn std::error::Error>> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{HELP}");
            Ok(None)
        }
        Command::ListCounties => {
            for c in County::ALL {
                println!("{},{}", c.name(), c.config().search_url);
            }
            Ok(None)
        }
        Command::Run { opts, verbose } => {
            if verbose {
                set_min_level(Level::Debug);
            }
            let mut progress = ConsoleProgress { quiet: false };
            let summary = crate::runner::run(&opts, &mut progress)?;
            eprintln!(
                "Done: {} filed, {} no case filed",
                summary.partitions.filed.len(),
                summary.partitions.unfiled.len()
            );
            Ok(Some(summary))
        }
    }
}

pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = RunOptions::default();
    let mut verbose = false;
    let mut have_input = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-i" | "--input" => {
                opts.input = PathBuf::from(args.next().ok_or("Missing value for --input")?);
                have_input = true; }
            "-c" | "--county" => {
                let v = args.next().ok_or("Missing value for --county")?;
                opts.county = v.parse::<County>()?; }
            "-o" | "--out" => opts.export.set_dir(&args.next().ok_or("Missing output directory")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--no-headers" => opts.export.include_headers = false,
            "--timeout" => {
                let secs: u64 = args.next().ok_or("Missing value for --timeout")?.parse()?;
                if secs == 0 { return Err("Timeout must be at least 1 second".into()); }
                opts.timeouts.result_wait = Duration::from_secs(secs);
                opts.timeouts.element_wait = Duration::from_secs(secs); }
            "--headed" => opts.browser.headless = false,
            "--chrome" => {
                opts.browser.executable = Some(PathBuf::from(args.next().ok_or("Missing value for --chrome")?)); }
            "--list-counties" => return Ok(Command::ListCounties),
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if !have_input {
        return Err("Missing --input <FILE> (see --help)".into());
    }
    Ok(Command::Run { opts, verbose })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn full_flag_set() {
        let cmd = parse_args(args(&[
            "-i", "people.xlsx", "-c", "hays", "-o", "results", "--format", "tsv",
            "--no-headers", "--timeout", "5", "--headed", "-v",
        ]))
        .unwrap();
        let Command::Run { opts, verbose } = cmd else { panic!("expected run") };
        assert!(verbose);
        assert_eq!(opts.input, PathBuf::from("people.xlsx"));
        assert_eq!(opts.county, County::Hays);
        assert_eq!(opts.export.filed_path(), PathBuf::from("results").join("filed_cases.tsv"));
        assert!(!opts.export.include_headers);
        assert!(!opts.browser.headless);
        assert_eq!(opts.timeouts.result_wait, Duration::from_secs(5));
    }

    #[test]
    fn unsupported_county_is_rejected() {
        let err = parse_args(args(&["-i", "x.csv", "-c", "Travis"])).unwrap_err();
        assert!(err.to_string().contains("Travis"));
    }

    #[test]
    fn input_is_required() {
        assert!(parse_args(args(&["-c", "Comal"])).is_err());
        assert_eq!(parse_args(args(&["--list-counties"])).unwrap(), Command::ListCounties);
    }
}
