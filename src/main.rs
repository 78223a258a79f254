use anyhow::Result;
use clap::{Parser, Subcommand};
use corweb::cli::contact::ContactArgs;

/// corweb - Marketing site and contact pipeline
#[derive(Parser)]
#[command(name = "corweb")]
#[command(about = "Corweb marketing site server", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the sitemap for the configured site url
    Sitemap,
    /// Submit the contact form of a running server
    Contact(ContactArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = corweb::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    corweb::observability::init(&config.logging.level, config.logging.format)?;

    match cli.command {
        Commands::Serve { host, port } => corweb::cli::server::serve(config, host, port).await,
        Commands::Sitemap => {
            let today = time::OffsetDateTime::now_utc().date();
            print!("{}", corweb::sitemap::render(config.site.base_url(), today));

            Ok(())
        }
        Commands::Contact(args) => corweb::cli::contact::submit(&config, args).await,
    }
}
