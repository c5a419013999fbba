use anyhow::Result;
use clap::Parser;
use ghpages::cli::TargetArgs;
use ghpages::commands::{self, Variant};

#[derive(Parser)]
#[command(name = "ghpages")]
#[command(about = "Enable, update or disable GitHub Pages for a repository")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    target: TargetArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Argument errors, --help and --version all go to stdout with status 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            print!("{}", err.render());
            return Ok(());
        }
    };
    commands::run(Variant::Pages, &cli.target, None).await;
    Ok(())
}
