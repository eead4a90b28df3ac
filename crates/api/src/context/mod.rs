//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Duration;

use doppler_core::{
    AccountPlansApiClient, AccountPlansService, BillingUserApiClient, ControlPanel,
    DopplerApiClient, PlanSelectionView, PlanService, SessionStore, StaticDataClient,
    TransferMode, TransferView,
};
use doppler_domain::{AppSession, Config, LoggingConfig, Result};
use doppler_infra::{
    config, ApiClient, ApiClientConfig, HttpAccountPlansApiClient, HttpBillingUserApiClient,
    HttpDopplerApiClient, HttpStaticDataClient,
};
use tracing::{error, info};

use crate::utils::logging::{error_label, init_tracing};

/// Application context - holds all clients and the session they read
pub struct AppContext {
    pub config: Config,
    pub session: Arc<SessionStore>,
    pub doppler_api: Arc<dyn DopplerApiClient>,
    pub billing: Arc<dyn BillingUserApiClient>,
    pub static_data: Arc<dyn StaticDataClient>,
    pub account_plans: Arc<dyn AccountPlansApiClient>,
    pub plan_service: Arc<dyn PlanService>,
}

impl AppContext {
    /// Load `.env` and the configuration, install tracing, then build the
    /// context. Tracing falls back to the default level when the
    /// configuration cannot be loaded.
    pub fn new() -> Result<Self> {
        let dotenv = dotenvy::dotenv().ok();

        let config = match config::load() {
            Ok(config) => config,
            Err(err) => {
                init_tracing(&LoggingConfig::default());
                error!(kind = error_label(&err), error = %err, "failed to load configuration");
                return Err(err);
            }
        };
        init_tracing(&config.logging);

        if let Some(path) = dotenv {
            info!(path = %path.display(), "loaded .env");
        }

        Self::new_with_config(config)
    }

    /// Build the context from an explicit configuration with an empty session.
    pub fn new_with_config(config: Config) -> Result<Self> {
        Self::new_with_session(config, Arc::new(SessionStore::new()))
    }

    /// Build the context around an existing session store.
    pub fn new_with_session(config: Config, session: Arc<SessionStore>) -> Result<Self> {
        let api = Arc::new(ApiClient::new(ApiClientConfig::from(&config.api), session.clone())?);
        let static_data = HttpStaticDataClient::new(
            &config.static_data,
            Duration::from_secs(config.api.timeout_seconds),
        )?;

        let account_plans: Arc<dyn AccountPlansApiClient> =
            Arc::new(HttpAccountPlansApiClient::new(api.clone()));
        let plan_service: Arc<dyn PlanService> =
            Arc::new(AccountPlansService::new(account_plans.clone()));

        info!(api = %api.base_url(), "application context ready");

        Ok(Self {
            doppler_api: Arc::new(HttpDopplerApiClient::new(api.clone())),
            billing: Arc::new(HttpBillingUserApiClient::new(api)),
            static_data: Arc::new(static_data),
            account_plans,
            plan_service,
            session,
            config,
        })
    }

    /// Called by the authentication flow once the user is known.
    pub fn sign_in(&self, session: AppSession) {
        self.session.set(session);
    }

    pub fn sign_out(&self) {
        self.session.clear();
    }

    /// Plan selection for `/buy-process/primer-pantalla/{url_segment}`.
    pub fn plan_selection(&self, url_segment: &str) -> PlanSelectionView {
        PlanSelectionView::new(self.plan_service.clone(), url_segment)
    }

    /// Transfer step of checkout, labelled in `language`.
    pub fn transfer(&self, mode: TransferMode, language: &str) -> TransferView {
        TransferView::new(self.billing.clone(), self.static_data.clone(), mode, language)
    }

    pub fn control_panel(&self) -> ControlPanel {
        ControlPanel::new()
    }
}
