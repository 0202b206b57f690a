//! Application wiring - builds handlers and the router from configuration.

use std::sync::Arc;

use axum::Router;

use crate::adapters::ai::{MistralConfig, MistralProvider};
use crate::adapters::http::{app_router, AnalysisHandlers, QuizHandlers, RouterSettings};
use crate::application::handlers::{
    GetQuizHandler, GetResultHandler, PersonalityAnalyzer, RawAnalysisHandler, ResetQuizHandler,
    StartQuizHandler, SubmitAnswerHandler,
};
use crate::config::AppConfig;
use crate::domain::quiz::QuestionBank;
use crate::ports::{AIError, AIProvider, QuizSessionStore};

/// Creates the Mistral provider when an API key is configured.
pub fn mistral_provider(config: &AppConfig) -> Result<Option<Arc<dyn AIProvider>>, AIError> {
    let Some(key) = config.ai.mistral_api_key.clone() else {
        return Ok(None);
    };
    if !config.ai.has_mistral() {
        return Ok(None);
    }

    let provider = MistralProvider::new(
        MistralConfig::from_secret(key)
            .with_model(&config.ai.model)
            .with_base_url(&config.ai.base_url)
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries),
    )?;

    Ok(Some(Arc::new(provider)))
}

/// Builds the HTTP router over the given provider and store.
///
/// `provider` is `None` when no credential is configured; every analysis
/// then uses the keyword fallback.
pub fn build_router(
    config: &AppConfig,
    provider: Option<Arc<dyn AIProvider>>,
    store: Arc<dyn QuizSessionStore>,
) -> Router {
    let bank = Arc::new(QuestionBank::standard());
    let timer_secs = config.quiz.timer_secs;
    let analyzer = Arc::new(PersonalityAnalyzer::new(
        provider,
        config.analysis_settings(),
    ));

    let quiz = QuizHandlers::new(
        bank.clone(),
        timer_secs,
        Arc::new(StartQuizHandler::new(store.clone(), bank.clone(), timer_secs)),
        Arc::new(GetQuizHandler::new(store.clone(), bank.clone(), timer_secs)),
        Arc::new(SubmitAnswerHandler::new(store.clone(), bank.clone(), timer_secs)),
        Arc::new(ResetQuizHandler::new(store.clone(), bank.clone(), timer_secs)),
        Arc::new(GetResultHandler::new(store, bank, analyzer.clone())),
    );
    let analysis = AnalysisHandlers::new(Arc::new(RawAnalysisHandler::new(analyzer)));

    let settings = RouterSettings {
        request_timeout: config.server.request_timeout(),
        cors_origins: config.server.cors_origins_list(),
    };

    app_router(quiz, analysis, &settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn no_key_means_no_provider() {
        let config = AppConfig::default();
        assert!(mistral_provider(&config).unwrap().is_none());
    }

    #[test]
    fn blank_key_means_no_provider() {
        let mut config = AppConfig::default();
        config.ai.mistral_api_key = Some(SecretString::new(" ".to_string()));
        assert!(mistral_provider(&config).unwrap().is_none());
    }

    #[test]
    fn configured_key_builds_mistral_provider() {
        let mut config = AppConfig::default();
        config.ai.mistral_api_key = Some(SecretString::new("key".to_string()));
        config.ai.model = "mistral-small".to_string();

        let provider = mistral_provider(&config).unwrap().unwrap();

        let info = provider.provider_info();
        assert_eq!(info.name, "mistral");
        assert_eq!(info.model, "mistral-small");
    }
}
