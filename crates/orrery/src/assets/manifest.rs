use serde::{Deserialize, Serialize};

/// Asset manifest listing the surface textures a scene uses.
/// Loaded from a JSON file at runtime; array position is the texture index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub textures: Vec<TextureDescriptor>,
}

/// Describes a single surface texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Name bodies refer to (e.g., "earth").
    pub name: String,
    /// Relative path to the image file (e.g., "earth.jpg").
    pub path: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize back to JSON (handed to the host's texture loader).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
