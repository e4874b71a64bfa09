use std::sync::Arc;
use log::info;
use parking_lot::RwLock;
use crate::core::config::Config;
use crate::core::engine::TextEngine;
use crate::core::error::Result;
use crate::extract::ExtractorRegistry;
use crate::report::ReportWriter;

/// Shared state behind every request handler
pub struct AppState {
    pub config: Config,
    pub extractors: ExtractorRegistry,
    pub reports: ReportWriter,
    engine: RwLock<Arc<TextEngine>>,   // swapped whole on reload
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let engine = TextEngine::from_config(&config)?;
        Ok(AppState::with_engine(config, engine))
    }

    pub fn with_engine(config: Config, engine: TextEngine) -> Self {
        AppState {
            reports: ReportWriter::new(config.output_dir.clone()),
            extractors: ExtractorRegistry::new(),
            engine: RwLock::new(Arc::new(engine)),
            config,
        }
    }

    /// Engine for one request. A concurrent reload does not affect it.
    pub fn engine(&self) -> Arc<TextEngine> {
        Arc::clone(&self.engine.read())
    }

    /// Rebuild the engine from the stop word file; returns the new word count
    pub fn reload_stop_words(&self) -> Result<usize> {
        let fresh = self.engine().reload()?;
        let count = fresh.stop_words().len();
        *self.engine.write() = Arc::new(fresh);

        info!("Stop words reloaded: {}", count);
        Ok(count)
    }
}
