use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::import::ImportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Diffuse,
    Specular,
}

impl TextureKind {
    /// Uniform name stem the shader expects for this kind of texture.
    pub fn uniform_name(&self) -> &'static str {
        match self {
            TextureKind::Diffuse => "textureDiffuse",
            TextureKind::Specular => "textureSpecular",
        }
    }
}

/// Handle to a texture already resident with the graphics backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRef {
    pub id: u32,
    pub kind: TextureKind,
}

/// Cache of loaded textures keyed by file path, so a texture shared between
/// materials is decoded and uploaded once.
///
/// The cache is a plain value owned by the scene-construction phase and
/// passed into model import explicitly; nothing about it is process-global.
#[derive(Debug, Default)]
pub struct TextureCache {
    loaded: HashMap<PathBuf, u32>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    /// Look up `path`, invoking `load` only on a cache miss. `load` receives
    /// the path and returns the backend id of the uploaded texture.
    pub fn get_or_load<F>(
        &mut self,
        path: &Path,
        kind: TextureKind,
        load: F,
    ) -> Result<TextureRef, ImportError>
    where
        F: FnOnce(&Path) -> Result<u32, ImportError>,
    {
        if let Some(&id) = self.loaded.get(path) {
            debug!("Texture cache hit: {:?}", path);
            return Ok(TextureRef { id, kind });
        }

        let id = load(path)?;
        info!("Loaded texture: {:?}", path);
        self.loaded.insert(path.to_path_buf(), id);
        Ok(TextureRef { id, kind })
    }
}
