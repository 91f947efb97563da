//! Command line arguments.
//!
//! Every flag is optional; anything not given falls back to the
//! environment and then to [`ConsoleConfig::default`](crate::config::ConsoleConfig).

use std::path::PathBuf;

use clap::Parser;

/// RushMore Pizza order console.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "rushmore", version, about)]
pub struct Cli {
    /// Order file to read and append to
    #[arg(long, value_name = "PATH")]
    pub orders_file: Option<PathBuf>,

    /// Shop name shown in the banner
    #[arg(long, value_name = "NAME")]
    pub shop_name: Option<String>,

    /// Log filter, e.g. "info" or "rushmore_store=debug" (RUST_LOG wins)
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "rushmore",
            "--orders-file",
            "/tmp/orders.json",
            "--shop-name",
            "Pizza Planet",
            "--log",
            "debug",
        ]);
        assert_eq!(cli.orders_file, Some(PathBuf::from("/tmp/orders.json")));
        assert_eq!(cli.shop_name.as_deref(), Some("Pizza Planet"));
        assert_eq!(cli.log.as_deref(), Some("debug"));
    }

    #[test]
    fn test_no_flags() {
        let cli = Cli::parse_from(["rushmore"]);
        assert!(cli.orders_file.is_none());
        assert!(cli.shop_name.is_none());
    }
}
