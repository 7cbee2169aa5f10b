use std::path::PathBuf;

use crate::scenes::ScenarioKind;

/// Errors surfaced by scene loading, asset retrieval and the render bridge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A shader source could not be read. Fatal at startup.
    #[error("failed to fetch {path}: {source}")]
    AssetFetch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A scenario's `create` failed; the previously active scenario is kept.
    #[error("scenario `{scenario}` failed to load: {reason}")]
    ScenarioLoad {
        scenario: &'static str,
        reason: String,
    },

    /// A load request arrived while another one was still queued.
    #[error("cannot load `{requested}`: a load of `{pending}` is already in progress")]
    LoadInProgress {
        requested: ScenarioKind,
        pending: ScenarioKind,
    },

    /// Adapter, device or surface setup failed.
    #[error("GPU error: {0}")]
    Gpu(String),

    #[error(transparent)]
    Surface(#[from] wgpu::SurfaceError),
}

pub type Result<T> = std::result::Result<T, Error>;
