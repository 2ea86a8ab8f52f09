use clap::Parser;
use gemini_probe::cli::{self, ListModelsArgs};
use gemini_probe::probe::{self, LISTING_BANNER};

#[tokio::main]
async fn main() -> gemini_probe::Result<()> {
    cli::init();
    let args = ListModelsArgs::parse();
    let client = args.connection.build_client()?;

    eprintln!("{LISTING_BANNER}");
    let mut stdout = std::io::stdout().lock();
    probe::list_models(&client.models(), args.list_config(), &mut stdout).await?;
    Ok(())
}
