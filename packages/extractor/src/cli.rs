//! Command-line interface for the extractor.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use console::style;

use crate::error::Result;
use crate::extract::extract_doc_numbers;

/// Usage line printed when no file is given.
pub const USAGE: &str = "Usage: docnum-extract <xml_file>";

/// Extract doc-numbers from a patent XML file in priority order.
#[derive(Parser)]
#[command(name = "docnum-extract")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a UTF-8 encoded patent XML file
    pub xml_file: Option<String>,
}

/// Run the CLI.
///
/// Returns the exit code to use on success or on a usage problem; extraction
/// errors are returned for the caller to report.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let Some(xml_file) = cli.xml_file else {
        println!("{USAGE}");
        return Ok(ExitCode::FAILURE);
    };

    let doc_numbers = extract_doc_numbers(&xml_file)?;

    let mut stdout = io::stdout().lock();
    // A closed stdout (e.g. `| head`) is not an extraction failure
    if write_report(&mut stdout, &doc_numbers).is_err() {
        tracing::debug!("stdout closed while writing report");
    }

    Ok(ExitCode::SUCCESS)
}

/// Write the numbered list of extracted doc-numbers.
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_report(out: &mut impl Write, doc_numbers: &[String]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} {} doc-number(s):",
        style("Extracted").bold(),
        style(doc_numbers.len()).cyan()
    )?;
    writeln!(out, "{}", "-".repeat(40))?;
    for (i, doc_number) in doc_numbers.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, style(doc_number).green())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::parse_from(["docnum-extract", "patent.xml"]);
        assert_eq!(cli.xml_file.as_deref(), Some("patent.xml"));
    }

    #[test]
    fn test_cli_parse_without_file() {
        let cli = Cli::parse_from(["docnum-extract"]);
        assert!(cli.xml_file.is_none());
    }

    #[test]
    fn test_cli_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["docnum-extract", "a.xml", "b.xml"]).is_err());
    }

    #[test]
    fn test_write_report() {
        console::set_colors_enabled(false);
        let mut out = Vec::new();
        write_report(&mut out, &["999000888".to_string(), "66667777".to_string()]).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "",
                "Extracted 2 doc-number(s):",
                "----------------------------------------",
                "1. 999000888",
                "2. 66667777",
            ]
        );
    }
}
