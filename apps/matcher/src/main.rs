mod config;
mod errors;
mod extract;
mod matching;
mod similarity;

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::similarity::HfSimilarityClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        bail!("usage: {} <resume.pdf|resume.txt> <job.txt>", args[0]);
    }

    let resume_text = read_resume(Path::new(&args[1]))?;
    let job_text = std::fs::read_to_string(&args[2])
        .with_context(|| format!("Failed to read job description '{}'", args[2]))?;

    info!(
        "Scoring resume against job description (model: {})",
        config.hf_embed_model
    );

    let client = HfSimilarityClient::new(config.hf_api_key.clone(), config.hf_embed_model.clone());
    let report = matching::score(&client, &resume_text, &job_text).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// PDF resumes go through the extractor; anything else is read as UTF-8 text.
fn read_resume(path: &Path) -> Result<String> {
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read resume '{}'", path.display()))?;
        Ok(extract::pdf_to_text(&bytes)?)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read resume '{}'", path.display()))
    }
}
