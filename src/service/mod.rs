// ConversionService - owns initialization and request-level validation
// Handles: await-once resource loading -> status tracking -> convert / convert_object / requests
//
// The HTTP server and the CLI both go through this service, so a request can never run
// against a partially loaded dictionary.

mod resources;

pub use resources::{load_converter, load_engine};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::config::{Config, ConfigError};
use crate::converter::Converter;
use crate::lexicon::LexiconError;
use crate::mapping::{CorrectionStore, CustomMappings, StoreError};

/// Errors that prevent the service from accepting conversion traffic
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Built-in phrase or exception table failed to load
    #[error("Failed to load mapping table: {0}")]
    MappingLoad(String),
    /// The loading task itself failed
    #[error("Initialization task failed: {0}")]
    Task(String),
}

/// Errors returned to conversion callers
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// Initialization has not completed yet
    #[error("Service is not initialized")]
    NotInitialized,
    /// Initialization failed; the service will not convert
    #[error("Service failed to initialize: {0}")]
    InitFailed(String),
    /// Request is not a string / JSON shape the converter accepts
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Initialization state, reported by the health endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum InitStatus {
    /// Not started, or loading in progress
    Initializing,
    /// Resources loaded, accepting traffic
    Ready,
    /// Loading failed
    Failed(String),
}

/// Everything built at startup
pub struct Engine {
    pub converter: Converter,
    /// Persisted user corrections
    pub corrections: Arc<CorrectionStore>,
    /// Memory-only custom mappings, reset on restart
    pub custom_mappings: Arc<CustomMappings>,
}

/// Service wrapping the engine behind an await-once initialization gate
pub struct ConversionService {
    config: Config,
    engine: OnceCell<Arc<Engine>>,
    status: Mutex<InitStatus>,
    started_at: DateTime<Utc>,
}

impl ConversionService {
    /// Create an uninitialized service
    pub fn new(config: Config) -> Self {
        Self {
            config,
            engine: OnceCell::new(),
            status: Mutex::new(InitStatus::Initializing),
            started_at: Utc::now(),
        }
    }

    /// Create a service that is already initialized with `engine`
    pub fn with_engine(config: Config, engine: Engine) -> Self {
        let service = Self::new(config);
        // A fresh cell cannot already be set
        let _ = service.engine.set(Arc::new(engine));
        *service.status.lock() = InitStatus::Ready;
        service
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn status(&self) -> InitStatus {
        self.status.lock().clone()
    }

    /// Load resources exactly once. Concurrent callers wait for the same load;
    /// after a failure the next call retries.
    pub async fn initialize(&self) -> Result<Arc<Engine>, InitError> {
        let result = self
            .engine
            .get_or_try_init(|| async {
                crate::info!("Initializing conversion engine...");
                *self.status.lock() = InitStatus::Initializing;
                let config = self.config.clone();
                let engine = tokio::task::spawn_blocking(move || load_engine(&config))
                    .await
                    .map_err(|e| InitError::Task(e.to_string()))??;
                Ok::<_, InitError>(Arc::new(engine))
            })
            .await;

        match result {
            Ok(engine) => {
                let mut status = self.status.lock();
                if *status != InitStatus::Ready {
                    crate::info!("Conversion engine ready");
                    *status = InitStatus::Ready;
                }
                Ok(Arc::clone(engine))
            }
            Err(e) => {
                crate::error!("Failed to initialize conversion engine: {}", e);
                *self.status.lock() = InitStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// The engine, or the reason it is unavailable
    pub fn engine(&self) -> Result<&Arc<Engine>, ConvertError> {
        if let Some(engine) = self.engine.get() {
            return Ok(engine);
        }
        match self.status() {
            InitStatus::Failed(message) => Err(ConvertError::InitFailed(message)),
            _ => Err(ConvertError::NotInitialized),
        }
    }

    /// Convert a single string
    pub fn convert(&self, text: &str) -> Result<String, ConvertError> {
        Ok(self.engine()?.converter.convert(text))
    }

    /// Convert every string leaf of a JSON value
    pub fn convert_object(&self, value: &Value) -> Result<Value, ConvertError> {
        Ok(self.engine()?.converter.convert_object(value))
    }

    /// Convert a request body: `{"text": string}` or `{"data": any}`,
    /// answered as `{"converted": ...}`
    pub fn convert_request(&self, body: &Value) -> Result<Value, ConvertError> {
        let Some(fields) = body.as_object() else {
            return Err(ConvertError::InvalidInput(
                "request body must be a JSON object".to_string(),
            ));
        };

        if let Some(text) = fields.get("text") {
            let Some(text) = text.as_str() else {
                return Err(ConvertError::InvalidInput(
                    "\"text\" must be a string".to_string(),
                ));
            };
            return Ok(json!({ "converted": self.convert(text)? }));
        }

        if let Some(data) = fields.get("data") {
            return Ok(json!({ "converted": self.convert_object(data)? }));
        }

        Err(ConvertError::InvalidInput(
            "expected a \"text\" or \"data\" field".to_string(),
        ))
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod tests;
