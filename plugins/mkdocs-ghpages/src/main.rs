use anyhow::Result;
use clap::Parser;
use ghpages::PublishSettings;
use ghpages::cli::{PublishArgs, TargetArgs};
use ghpages::commands::{self, Variant};

/// Same actions as `ghpages`, plus `mkdocs-commit`: build the site with MkDocs
/// and force-push the output directory to the publishing branch
#[derive(Parser)]
#[command(name = "mkdocs-ghpages")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    target: TargetArgs,

    #[command(flatten)]
    publish: PublishArgs,
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
    let settings = PublishSettings::from(&cli.publish);
    commands::run(Variant::Publisher, &cli.target, Some(&settings)).await;
    Ok(())
}
