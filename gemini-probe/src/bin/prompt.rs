use clap::Parser;
use gemini_probe::cli::{self, PromptArgs};
use gemini_probe::probe;

#[tokio::main]
async fn main() -> gemini_probe::Result<()> {
    cli::init();
    let args = PromptArgs::parse();
    let client = args.connection.build_client()?;

    let mut stdout = std::io::stdout().lock();
    probe::run_prompt(&client.models(), &args.prompt_request(), &mut stdout).await
}
