use clap::Parser;
use epic_generator::{cli::Args, config, logging, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Before logging so RUST_LOG from the env file takes effect
    let env_file = config::load_env_file(args.env_file.as_deref());
    logging::init(args.verbose);
    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "Loaded env file");
    }

    run(args, &mut std::io::stdout()).await
}
