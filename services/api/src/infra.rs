use dpo_readiness::assessment::{AssessmentService, QuestionCatalog, ScoringPolicy};
use dpo_readiness::config::AssessmentConfig;
use dpo_readiness::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn load_catalog(config: &AssessmentConfig) -> Result<QuestionCatalog, AppError> {
    match &config.catalog_path {
        Some(path) => {
            let catalog = QuestionCatalog::from_path(path)?;
            info!(path = %path.display(), questions = catalog.len(), "loaded question catalog");
            Ok(catalog)
        }
        None => Ok(QuestionCatalog::standard()),
    }
}

pub(crate) fn build_service(config: &AssessmentConfig) -> Result<AssessmentService, AppError> {
    let catalog = load_catalog(config)?;
    Ok(AssessmentService::new(catalog, ScoringPolicy::default()))
}
