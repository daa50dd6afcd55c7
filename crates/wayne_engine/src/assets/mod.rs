//! Asset management system
//!
//! The engine never decodes pixels. The loader collaborator registers each
//! texture once under a name, together with its pixel dimensions, and gets a
//! [`TextureHandle`] back. Scene setup resolves names to handles a single
//! time; hot paths only ever touch handles.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::foundation::collections::{HandleMap, TypedHandle};

/// Handle to a registered texture
pub type TextureHandle = TypedHandle<TextureInfo>;

/// What the engine knows about a texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureInfo {
    /// Registration name
    pub name: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Asset errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// No texture registered under this name
    #[error("Texture not found: {0}")]
    NotFound(String),

    /// A texture is already registered under this name
    #[error("Texture already registered: {0}")]
    Duplicate(String),

    /// Image header could not be read
    #[error("Failed to read image {path}: {source}")]
    Image {
        /// Offending file
        path: String,
        /// Decoder error
        #[source]
        source: image::ImageError,
    },
}

/// Name → handle registry for textures
#[derive(Debug, Default)]
pub struct TextureRegistry {
    textures: HandleMap<TextureInfo>,
    by_name: HashMap<String, TextureHandle>,
}

impl TextureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture with known pixel dimensions
    pub fn register(&mut self, name: impl Into<String>, width: u32, height: u32) -> Result<TextureHandle, AssetError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(AssetError::Duplicate(name));
        }

        let key = self.textures.insert(TextureInfo { name: name.clone(), width, height });
        let handle = TextureHandle::new(key);
        log::debug!("Registered texture '{}' ({}x{})", name, width, height);
        self.by_name.insert(name, handle);
        Ok(handle)
    }

    /// Register a texture, reading its dimensions from the image file header
    pub fn register_from_file(&mut self, name: impl Into<String>, path: impl AsRef<Path>) -> Result<TextureHandle, AssetError> {
        let path = path.as_ref();
        let (width, height) = image::image_dimensions(path).map_err(|source| AssetError::Image {
            path: path.display().to_string(),
            source,
        })?;
        self.register(name, width, height)
    }

    /// Resolve a name to its handle
    pub fn handle(&self, name: &str) -> Result<TextureHandle, AssetError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }

    /// Look up texture information; `None` for handles from another registry
    /// or removed textures
    pub fn info(&self, handle: TextureHandle) -> Option<&TextureInfo> {
        self.textures.get(handle.key())
    }

    /// Resolve a name straight to its texture information
    pub fn info_by_name(&self, name: &str) -> Result<&TextureInfo, AssetError> {
        let handle = self.handle(name)?;
        self.info(handle).ok_or_else(|| AssetError::NotFound(name.to_string()))
    }

    /// Remove a texture; outstanding handles become stale
    pub fn remove(&mut self, name: &str) -> Option<TextureInfo> {
        let handle = self.by_name.remove(name)?;
        self.textures.remove(handle.key())
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether no texture is registered
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
