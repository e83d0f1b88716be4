use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use travelvibe::connector::web;
use travelvibe::{Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "travelvibe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer with a canned local response instead of calling the Groq API
    /// (no GROQ_API_KEY required)
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Fails fast when GROQ_API_KEY is absent (unless --mock).
    let container = Container::new(ContainerConfig { mock: cli.mock })?;

    match cli.command {
        Commands::Serve { port, public } => {
            web::serve(Arc::new(container), port, public).await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn ask_takes_a_positional_question() {
        let cli = Cli::try_parse_from(["travelvibe", "ask", "Best flight to Tokyo?"]).unwrap();
        match cli.command {
            Commands::Ask { question } => assert_eq!(question, "Best flight to Tokyo?"),
            _ => panic!("expected ask command"),
        }
    }

    #[test]
    fn serve_defaults_to_port_8080() {
        let cli = Cli::try_parse_from(["travelvibe", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { port, public } => {
                assert_eq!(port, 8080);
                assert!(!public);
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn mock_flag_is_global() {
        let cli = Cli::try_parse_from(["travelvibe", "ask", "--mock", "any trip?"]).unwrap();
        assert!(cli.mock);
    }
}
