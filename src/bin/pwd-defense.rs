//! Interactive password defense tool.
//!
//! Prompts for a password, prints its SHA-256 digest and bcrypt hash, then
//! its strength analysis.
//!
//! Input is read without echo from the terminal. When stdin is not a
//! terminal (pipes, CI), one line is read from stdin instead.
//!
//! # Environment Variables
//!
//! Both are optional; unset keeps the plain behavior.
//!
//! - `PWD_BLACKLIST_PATH`: file replacing the built-in common password list
//! - `RUST_LOG`: log filter for stderr output (default `warn`)

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Context;
use pwd_defense::{Config, StrengthAnalyzer, StrengthReport, digest, salted_hash};
use secrecy::SecretString;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const PROMPT: &str = "Enter a password to evaluate: ";

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer().with_writer(io::stderr).with_target(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    Ok(())
}

/// Reads one line, stripping only the trailing line ending.
///
/// EOF yields an empty password.
fn read_line_password<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

fn read_password() -> anyhow::Result<SecretString> {
    let stdin = io::stdin();
    let input = if stdin.is_terminal() {
        rpassword::prompt_password(PROMPT).context("Failed to read password")?
    } else {
        print!("{PROMPT}");
        io::stdout().flush()?;
        let line = read_line_password(&mut stdin.lock()).context("Failed to read password")?;
        println!();
        line
    };
    Ok(SecretString::new(input.into()))
}

fn print_report<W: Write>(out: &mut W, report: &StrengthReport) -> io::Result<()> {
    writeln!(out, "Strength: {}", report.strength)?;
    writeln!(out, "Score: {}", report.score)?;

    writeln!(out, "\nIssues found:")?;
    for issue in &report.issues {
        writeln!(out, " - {}", issue)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = Config::from_env();
    let blacklist = config
        .load_blacklist()
        .context("Failed to load common password list")?;
    tracing::debug!("Common password list: {} entries", blacklist.len());
    let analyzer = StrengthAnalyzer::new(blacklist);

    println!("=== Password Defense Tool ===");

    let password = read_password()?;

    println!("\n--- Hashing Results ---");
    println!("SHA-256 Hash: {}", digest(&password));
    println!(
        "bcrypt Hash: {}",
        salted_hash(&password).context("Failed to compute bcrypt hash")?
    );

    println!("\n--- Strength Analysis ---");
    let mut stdout = io::stdout().lock();
    print_report(&mut stdout, &analyzer.check_strength(&password))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_read_line_password_strips_newline_only() {
        let mut input = Cursor::new("Tr0ub4dor&3XYZ\n");
        assert_eq!(read_line_password(&mut input).expect("read"), "Tr0ub4dor&3XYZ");

        let mut input = Cursor::new("  spaced out \r\n");
        assert_eq!(read_line_password(&mut input).expect("read"), "  spaced out ");
    }

    #[test]
    fn test_read_line_password_first_line_only() {
        let mut input = Cursor::new("first\nsecond\n");
        assert_eq!(read_line_password(&mut input).expect("read"), "first");
    }

    #[test]
    fn test_read_line_password_without_newline_and_eof() {
        let mut input = Cursor::new("no-newline");
        assert_eq!(read_line_password(&mut input).expect("read"), "no-newline");

        let mut input = Cursor::new("");
        assert_eq!(read_line_password(&mut input).expect("read"), "");
    }

    #[test]
    fn test_print_report_lines() {
        let report = StrengthAnalyzer::default().check_strength(&secret("abcdefgh"));
        let mut out = Vec::new();
        print_report(&mut out, &report).expect("write");

        let text = String::from_utf8(out).expect("utf-8 output");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Strength: Weak",
                "Score: 2",
                "",
                "Issues found:",
                " - Use a mix of uppercase and lowercase letters.",
                " - Add numbers to increase complexity.",
                " - Add symbols like ! @ # $ % ^ & *.",
            ]
        );
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_print_report_no_issues() {
        let report = StrengthAnalyzer::default().check_strength(&secret("Tr0ub4dor&3XYZ"));
        let mut out = Vec::new();
        print_report(&mut out, &report).expect("write");

        let text = String::from_utf8(out).expect("utf-8 output");
        assert_eq!(text, "Strength: Strong\nScore: 6\n\nIssues found:\n");
    }
}
