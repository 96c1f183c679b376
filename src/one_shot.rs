//! Single prompt, HTML out

use anyhow::{anyhow, Context};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use happyform_core::html::{self, HtmlOptions};
use happyform_core::Applied;

use crate::adapters::generation_client::{FormGenerator, HttpFormGenerator};
use crate::adapters::submitter::PromptSubmitter;
use crate::config::Settings;

/// Generate the form for `prompt` and return it as a standalone HTML document
pub async fn render_prompt(
    generator: Arc<dyn FormGenerator>,
    prompt: &str,
) -> anyhow::Result<String> {
    let submitter = PromptSubmitter::new(generator);

    match submitter.submit(prompt).await {
        Applied::Rendered => {
            let options = HtmlOptions::default().with_prompt(prompt);
            Ok(html::document(&submitter.rendered().await, &options))
        }
        Applied::Notice(notice) => Err(anyhow::Error::new(notice.error).context(notice.message)),
        Applied::Stale => Err(anyhow!("Generation result was superseded")),
    }
}

/// Run one generation against the configured service and write the result
pub async fn run(settings: &Settings, prompt: &str, output: Option<&Path>) -> anyhow::Result<()> {
    let generator = Arc::new(HttpFormGenerator::from_settings(settings));
    info!(endpoint = %generator.endpoint(), "Generating form");

    let document = render_prompt(generator, prompt).await?;

    match output {
        Some(path) => {
            tokio::fs::write(path, document)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Form written to {}", path.display());
        }
        None => print!("{}", document),
    }
    Ok(())
}
