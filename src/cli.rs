//! Command line arguments.
//!
//! The classic form is `greip -log <logfile> -cidr <cidrfile> [-invert]`.
//! Single-dash long flags are rewritten to their `--` form before clap sees
//! them, so both spellings work.

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser};
use std::ffi::OsString;

/// Path value meaning standard input.
pub const STDIN: &str = "-";

const LONG_FLAGS: [&str; 4] = ["log", "cidr", "invert", "verbose"];
const VALUE_FLAGS: [&str; 2] = ["log", "cidr"];

/// Print IPv4 addresses from a log that fall inside (or outside) a set of CIDR ranges
#[derive(Debug, Clone, Parser)]
#[command(
    name = "greip",
    version,
    override_usage = "greip -log <logfile> -cidr <cidrfile> [-invert]"
)]
pub struct Args {
    /// Path to the log file ("-" for standard input)
    #[arg(long, value_name = "LOGFILE", default_value = STDIN, value_parser = NonEmptyStringValueParser::new())]
    pub log: String,

    /// Path to the CIDR file, one range per line
    #[arg(long, value_name = "CIDRFILE", value_parser = NonEmptyStringValueParser::new())]
    pub cidr: String,

    /// Invert the match (print IP addresses not in the provided CIDR ranges)
    #[arg(long)]
    pub invert: bool,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parse from the process arguments, accepting single-dash long flags.
    pub fn from_env() -> Args {
        Args::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn reads_stdin(&self) -> bool {
        self.log == STDIN
    }
}

/// Parse a boolean flag value the way `-flag=value` spells it.
fn parse_flag_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// Rewrite `-log`, `-cidr=...` and friends to `--log`, `--cidr=...`.
///
/// `-invert=false` is dropped and `-invert=true` becomes `--invert`. The
/// value after a value-taking flag is passed through untouched, so a path
/// such as `-invert` is not mistaken for a flag.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut expect_value = false;

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let Some(name) = arg
            .to_str()
            .and_then(|s| s.strip_prefix("--").or_else(|| s.strip_prefix('-')))
        else {
            out.push(arg);
            continue;
        };
        let (flag, value) = match name.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (name, None),
        };
        if !LONG_FLAGS.contains(&flag) {
            out.push(arg);
            continue;
        }

        match (flag, value.map(parse_flag_bool)) {
            ("invert", Some(Some(true))) => out.push("--invert".into()),
            ("invert", Some(Some(false))) => {}
            _ => {
                expect_value = VALUE_FLAGS.contains(&flag) && value.is_none();
                out.push(format!("--{name}").into());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(args: &[&str]) -> Vec<String> {
        normalize_args(args.iter().copied())
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_normalize_single_dash() {
        assert_eq!(
            norm(&["greip", "-log", "app.log", "-cidr", "r.txt", "-invert"]),
            vec!["greip", "--log", "app.log", "--cidr", "r.txt", "--invert"]
        );
    }

    #[test]
    fn test_normalize_equals_form() {
        assert_eq!(
            norm(&["greip", "-cidr=r.txt", "--log=a.log"]),
            vec!["greip", "--cidr=r.txt", "--log=a.log"]
        );
    }

    #[test]
    fn test_normalize_leaves_values_alone() {
        assert_eq!(
            norm(&["greip", "-cidr", "-invert", "-log", "-"]),
            vec!["greip", "--cidr", "-invert", "--log", "-"]
        );
        assert_eq!(
            norm(&["greip", "--cidr", "-log", "-v"]),
            vec!["greip", "--cidr", "-log", "-v"]
        );
    }

    #[test]
    fn test_normalize_invert_value() {
        assert_eq!(
            norm(&["greip", "-cidr", "r", "-invert=true", "--invert=1"]),
            vec!["greip", "--cidr", "r", "--invert", "--invert"]
        );
        assert_eq!(
            norm(&["greip", "-invert=false", "--invert=F", "-cidr", "r"]),
            vec!["greip", "--cidr", "r"]
        );
        assert_eq!(
            norm(&["greip", "-invert=maybe"]),
            vec!["greip", "--invert=maybe"]
        );
    }

    #[test]
    fn test_parse_invert_value() {
        let on = Args::parse_from(normalize_args(["greip", "-cidr", "r", "-invert=true"]));
        assert!(on.invert);
        let off = Args::parse_from(normalize_args(["greip", "-cidr", "r", "-invert=false"]));
        assert!(!off.invert);
        let bad = normalize_args(["greip", "-cidr", "r", "-invert=maybe"]);
        assert!(Args::try_parse_from(bad).is_err());
    }

    #[test]
    fn test_parse_defaults() {
        let args = Args::parse_from(normalize_args(["greip", "-cidr", "r.txt"]));
        assert_eq!(args.cidr, "r.txt");
        assert!(args.reads_stdin());
        assert!(!args.invert);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::parse_from(normalize_args([
            "greip", "-log", "a.log", "-cidr", "r.txt", "-invert", "-vv",
        ]));
        assert_eq!(args.log, "a.log");
        assert!(!args.reads_stdin());
        assert!(args.invert);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_missing_cidr_is_error() {
        assert!(Args::try_parse_from(normalize_args(["greip", "-log", "a.log"])).is_err());
    }

    #[test]
    fn test_empty_path_is_error() {
        assert!(Args::try_parse_from(normalize_args(["greip", "-cidr", ""])).is_err());
        assert!(Args::try_parse_from(normalize_args(["greip", "-cidr", "r", "-log", ""])).is_err());
    }
}
