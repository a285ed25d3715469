use std::collections::HashMap;
use crate::api::types::TextureId;
use crate::assets::manifest::{AssetManifest, TextureDescriptor};

/// Registry of named textures.
/// Provides name-based texture lookup for scene setup code.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    ids: HashMap<String, TextureId>,
    descriptors: Vec<TextureDescriptor>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut registry = Self::new();
        registry.merge(manifest);
        registry
    }

    /// Fold a manifest into the registry.
    /// Known names keep their index and take the manifest's path;
    /// new names are appended.
    pub fn merge(&mut self, manifest: &AssetManifest) {
        for desc in &manifest.textures {
            match self.ids.get(&desc.name) {
                Some(id) => self.descriptors[id.0 as usize].path = desc.path.clone(),
                None => {
                    self.insert(desc.clone());
                }
            }
        }
    }

    fn insert(&mut self, desc: TextureDescriptor) -> TextureId {
        let id = TextureId(self.descriptors.len() as u32);
        self.ids.insert(desc.name.clone(), id);
        self.descriptors.push(desc);
        id
    }

    /// Look up a texture by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<TextureId> {
        self.ids.get(name).copied()
    }

    /// Look up a texture, registering `fallback_path` under `name` if it is new.
    pub fn resolve(&mut self, name: &str, fallback_path: &str) -> TextureId {
        if let Some(id) = self.get(name) {
            return id;
        }
        self.insert(TextureDescriptor {
            name: name.to_string(),
            path: fallback_path.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Snapshot as a manifest, in index order.
    pub fn to_manifest(&self) -> AssetManifest {
        AssetManifest {
            textures: self.descriptors.clone(),
        }
    }
}
