use clap::Parser;
use happyform::adapters::generation_client::HttpFormGenerator;
use happyform::cli::Cli;
use happyform::config::Settings;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so one-shot HTML on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::new_with_cli(&cli)?;

    if let Some(prompt) = &cli.prompt {
        return happyform::one_shot::run(&settings, prompt, cli.output.as_deref()).await;
    }

    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting HappyForm on {}:{}", host, port);
    info!("Prompts are relayed to {}", settings.generate_form_url());

    let generator = Arc::new(HttpFormGenerator::from_settings(&settings));
    let app = happyform::create_app(Arc::new(settings), generator);

    let listener = happyform::bind(&host, port).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
