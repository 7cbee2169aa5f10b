use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const VERTEX_SHADER_FILE: &str = "sdf_vs.wgsl";
pub const FRAGMENT_SHADER_FILE: &str = "sdf_fs.wgsl";

/// Vertex and fragment stage source text for the display quad
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// Fetch both stages from `dir`. Either failure aborts the fetch.
    pub async fn fetch(dir: &Path) -> Result<Self> {
        let (vertex, fragment) = futures::try_join!(
            fetch_text(dir.join(VERTEX_SHADER_FILE)),
            fetch_text(dir.join(FRAGMENT_SHADER_FILE)),
        )?;

        Ok(Self { vertex, fragment })
    }
}

async fn fetch_text(path: PathBuf) -> Result<String> {
    match std::fs::read_to_string(&path) {
        Ok(text) => {
            log::info!("Fetched {} ({} bytes)", path.display(), text.len());
            Ok(text)
        }
        Err(source) => Err(Error::AssetFetch { path, source }),
    }
}
