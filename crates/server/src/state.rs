use crate::config::ServerConfig;
use crate::error::ServerResult;
use codefp::CodefpConfig;
use matcher::Matcher;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Matcher over the process-wide reference corpus
    pub matcher: Arc<Matcher>,

    /// Prometheus handle, present when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Build state from the configured pipeline file, or built-in defaults.
    ///
    /// The corpus is fingerprinted here, before the listener is bound.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let pipeline = match &config.pipeline_config {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading pipeline configuration");
                CodefpConfig::from_file(path)?
            }
            None => CodefpConfig::default(),
        };
        let matcher = pipeline.build_matcher()?;
        Ok(Self::with_matcher(config, Arc::new(matcher)))
    }

    /// Wrap an already-built matcher.
    pub fn with_matcher(config: ServerConfig, matcher: Arc<Matcher>) -> Self {
        Self {
            config: Arc::new(config),
            matcher,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
