//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the shopcart tool.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "shopcart")]
#[command(about = "Drive a shopcart REST service from the terminal")]
#[command(version)]
pub struct Cli {
    /// Base URL of the shopcart API
    #[arg(long = "base-url", global = true, env = "SHOPCART_API_URL")]
    pub base_url: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "shopcart",
            "--verbose",
            "--base-url",
            "http://example.com/shopcarts",
            "search",
        ]);
        assert!(cli.verbose);
        assert_eq!(
            cli.base_url,
            Some("http://example.com/shopcarts".to_string())
        );
    }

    #[test]
    fn test_retrieve_product_id_defaults_empty() {
        let cli = Cli::parse_from(["shopcart", "retrieve", "301"]);
        match cli.command {
            Some(Commands::Retrieve {
                customer_id,
                product_id,
            }) => {
                assert_eq!(customer_id, "301");
                assert_eq!(product_id, "");
            }
            _ => panic!("expected retrieve command"),
        }
    }
}
