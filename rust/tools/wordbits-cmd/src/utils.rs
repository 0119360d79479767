//! Common utilities for wordbits-cmd

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Parses a storage word given as decimal, `0x` hex or `0b` binary.
pub fn parse_word(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    let (digits, radix) = if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        (hex, 16)
    } else if let Some(bin) = trimmed
        .strip_prefix("0b")
        .or_else(|| trimmed.strip_prefix("0B"))
    {
        (bin, 2)
    } else {
        (trimmed, 10)
    };
    let digits = digits.replace('_', "");
    u32::from_str_radix(&digits, radix).with_context(|| format!("Invalid storage word: {text}"))
}

/// Maps the `-v` count to a filter directive: warnings by default, then debug, then
/// trace.
pub fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr `tracing` subscriber that also receives `log` records.
///
/// `RUST_LOG` takes precedence over the `-v` count when set.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbose)));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .compact()
        .with_writer(std::io::stderr);
    // `try_init` also installs the `log` bridge; a second call is a no-op.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
    log::trace!("logging initialized (verbosity {verbose})");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_word() {
        assert_eq!(parse_word("42").unwrap(), 42);
        assert_eq!(parse_word("0xff").unwrap(), 0xff);
        assert_eq!(parse_word("0XFFFF_FFFF").unwrap(), u32::MAX);
        assert_eq!(parse_word("0b1010").unwrap(), 10);
        assert_eq!(parse_word(" 7 ").unwrap(), 7);

        assert!(parse_word("-1").is_err());
        assert!(parse_word("0x1_0000_0000").is_err());
        assert!(parse_word("0x").is_err());
        assert!(parse_word("ten").is_err());
    }

    #[test]
    fn test_filter_for_verbosity() {
        assert_eq!(filter_for_verbosity(0), "warn");
        assert_eq!(filter_for_verbosity(1), "debug");
        assert_eq!(filter_for_verbosity(5), "trace");
        for verbose in 0..3 {
            assert!(EnvFilter::try_new(filter_for_verbosity(verbose)).is_ok());
        }
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(2);
        init_logging(0);
        log::debug!("routed through the tracing subscriber");
    }
}
