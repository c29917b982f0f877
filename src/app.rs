use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::application::{CatalogEnrichmentUseCase, EnrichmentReport, TitleSynthesizer};
use crate::domain::error::Result;
use crate::infrastructure::config::{AppConfig, ConfigService};
use crate::infrastructure::llm_clients::{ChatCompletionsClient, LLMClient};

pub fn run() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    if Path::new(".env").is_file() {
        let _ = dotenvy::dotenv();
    }

    let args: Vec<String> = std::env::args().skip(1).collect();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(error = %err, "Failed to start async runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(execute(&args)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Catalog enrichment failed");
            ExitCode::FAILURE
        }
    }
}

/// Load configuration from `args` and run one enrichment batch
pub async fn execute(args: &[String]) -> Result<EnrichmentReport> {
    let config = ConfigService::new().load(args)?;
    let use_case = CatalogEnrichmentUseCase::new(build_synthesizer(&config), config.seed);

    use_case
        .execute(config.input_path(), config.output_path())
        .await
}

fn build_synthesizer(config: &AppConfig) -> TitleSynthesizer {
    if config.llm.remote_ready() {
        tracing::info!(model = %config.llm.model, "Remote title generation enabled");
        let client: Arc<dyn LLMClient + Send + Sync> =
            Arc::new(ChatCompletionsClient::new(&config.llm));
        TitleSynthesizer::new(Some(client), config.llm.clone())
    } else {
        if config.llm.enabled {
            tracing::warn!("No GLM_API_KEY found, content titles will come from templates");
        }
        TitleSynthesizer::template_only()
    }
}
