//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers which drive the form
//! controller.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use shopcart_cli::{Cli, CliConfig, CliError, Commands, FormState, bootstrap, handlers};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Bootstrap the CLI context (composition root)
    let config = match CliConfig::resolve(cli.base_url) {
        Ok(config) => config,
        Err(err) => exit_with(&err),
    };
    let ctx = match bootstrap(&config) {
        Ok(ctx) => ctx,
        Err(err) => exit_with(&err),
    };

    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Create {
            customer_id,
            product_id,
            name,
            quantity,
            price,
        } => {
            let fields = FormState {
                customer_id,
                product_id,
                name,
                quantity,
                price,
            };
            handlers::create::execute(&ctx, fields).await?;
        }
        Commands::Update {
            customer_id,
            product_id,
            name,
            quantity,
            price,
        } => {
            let fields = FormState {
                customer_id,
                product_id,
                name,
                quantity,
                price,
            };
            handlers::update::execute(&ctx, fields).await?;
        }
        Commands::Retrieve {
            customer_id,
            product_id,
        } => {
            handlers::retrieve::execute(&ctx, customer_id, product_id).await?;
        }
        Commands::Delete {
            customer_id,
            product_id,
        } => {
            handlers::delete::execute(&ctx, customer_id, product_id).await?;
        }
        Commands::Checkout {
            customer_id,
            product_id,
        } => {
            handlers::checkout::execute(&ctx, customer_id, product_id).await?;
        }
        Commands::Search {
            name,
            quantity,
            price,
        } => {
            handlers::search::execute(&ctx, name, quantity, price).await?;
        }
        Commands::Console => {
            handlers::console::execute(&ctx).await?;
        }
    }

    Ok(())
}

fn exit_with(err: &CliError) -> ! {
    eprintln!("{err}");
    std::process::exit(err.exit_code());
}
