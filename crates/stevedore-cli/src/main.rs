mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stevedore", about = "Build container images and push them to ECR with git-derived tags")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a stevedore.toml skeleton into the current directory
    Init,
    /// Print the release tag for the current working tree
    Tag,
    /// Build the image and apply local tags, without pushing
    Build,
    /// Authenticate docker against the configured registry
    Login,
    /// Build, tag, authenticate, and push to the registry
    Push {
        /// Skip pushing the `latest` alias
        #[arg(long)]
        no_latest: bool,
    },
    /// Check git, docker, and AWS CLI readiness
    Doctor,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init()?,
        Commands::Tag => commands::tag()?,
        Commands::Build => commands::build().await?,
        Commands::Login => commands::login().await?,
        Commands::Push { no_latest } => commands::push(no_latest).await?,
        Commands::Doctor => commands::doctor().await?,
    }

    Ok(())
}
