//! log4rs setup.
//!
//! A `log4rs.yml` in the working directory wins. Without one, or when it
//! fails to load, records go to stderr so they never mix with the addresses
//! printed on stdout.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_FILE: &str = "log4rs.yml";

/// Environment variable holding the default console level.
pub const LEVEL_ENV: &str = "GREIP_LOG_LEVEL";

/// Pick the console level: `-v` flags first, then the environment, then `warn`.
pub fn resolve_level(verbose: u8, env_level: Option<&str>) -> LevelFilter {
    match verbose {
        0 => env_level
            .and_then(|l| LevelFilter::from_str(l.trim()).ok())
            .unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Colour diagnostics only when stderr is a terminal. `colored` otherwise
/// looks at stdout, which carries the addresses.
fn init_color() -> bool {
    let enabled = io::stderr().is_terminal();
    colored::control::set_override(enabled);
    enabled
}

fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("greip: {h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Install the global logger. Call once, before any range is loaded.
///
/// A `log4rs.yml` that fails to load is reported on the stderr logger
/// installed in its place.
pub fn init(verbose: u8) -> Result<(), Box<dyn Error>> {
    init_color();
    let mut file_error = None;
    if Path::new(CONFIG_FILE).exists() {
        match log4rs::init_file(CONFIG_FILE, Default::default()) {
            Ok(()) => {
                log::debug!("logging configured from {}", CONFIG_FILE);
                return Ok(());
            }
            Err(e) => file_error = Some(e),
        }
    }
    let env_level = std::env::var(LEVEL_ENV).ok();
    let level = resolve_level(verbose, env_level.as_deref());
    log4rs::init_config(stderr_config(level)?)?;
    if let Some(e) = file_error {
        log::warn!("ignoring {}: {}", CONFIG_FILE, e);
    }
    log::debug!("logging to stderr at {}", level);
    Ok(())
}
