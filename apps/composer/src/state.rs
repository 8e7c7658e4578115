use std::sync::Arc;

use crate::config::Config;
use crate::render::ResumeRenderer;
use crate::store::{ArtifactStore, ProfileStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Row persistence for profile write-backs.
    pub profiles: Arc<dyn ProfileStore>,
    /// Storage for rendered PDF artifacts.
    pub artifacts: Arc<dyn ArtifactStore>,
    /// Optional binary-render capability. `None` means profiles get text
    /// outputs only.
    pub renderer: Option<Arc<dyn ResumeRenderer>>,
}
