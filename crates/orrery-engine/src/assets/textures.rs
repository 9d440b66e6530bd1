use serde::{Deserialize, Serialize};
use crate::error::EngineError;

/// Handle to a requested texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextureId(pub u32);

/// Load progress of a texture. Loading happens on the host, asynchronously
/// to frame ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureState {
    Pending,
    Loaded,
    /// Missing or undecodable; materials using it render untextured.
    Failed,
}

/// A texture the host should fetch, as handed over the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureRequest {
    pub id: TextureId,
    /// Relative path (e.g., "img/earth.jpg").
    pub path: String,
}

struct TextureEntry {
    path: String,
    state: TextureState,
}

/// Registry of texture requests and their load state.
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Request a texture by path. Requesting the same path twice returns the
    /// same id.
    pub fn request(&mut self, path: impl Into<String>) -> TextureId {
        let path = path.into();
        if let Some(idx) = self.entries.iter().position(|e| e.path == path) {
            return TextureId(idx as u32);
        }
        self.entries.push(TextureEntry { path, state: TextureState::Pending });
        TextureId(self.entries.len() as u32 - 1)
    }

    pub fn state(&self, id: TextureId) -> Option<TextureState> {
        self.entries.get(id.0 as usize).map(|e| e.state)
    }

    /// Record the host's load result for a texture.
    pub fn resolve(&mut self, id: TextureId, loaded: bool) -> Result<TextureState, EngineError> {
        let entry = self
            .entries
            .get_mut(id.0 as usize)
            .ok_or(EngineError::UnknownTexture(id))?;

        entry.state = if loaded {
            log::info!("texture {} loaded", entry.path);
            TextureState::Loaded
        } else {
            log::warn!("texture {} failed to load; rendering untextured", entry.path);
            TextureState::Failed
        };
        Ok(entry.state)
    }

    /// The texture to bind for a material, if it is ready.
    pub fn bound(&self, texture: Option<TextureId>) -> Option<TextureId> {
        texture.filter(|&id| self.state(id) == Some(TextureState::Loaded))
    }

    /// Requests still waiting on the host.
    pub fn pending(&self) -> Vec<TextureRequest> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.state == TextureState::Pending)
            .map(|(i, e)| TextureRequest { id: TextureId(i as u32), path: e.path.clone() })
            .collect()
    }

    /// Pending requests as a JSON array for the host.
    pub fn pending_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.pending())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_dedupes_paths() {
        let mut reg = TextureRegistry::new();
        let a = reg.request("img/sun.jpg");
        let b = reg.request("img/earth.jpg");
        let c = reg.request("img/sun.jpg");
        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn only_loaded_textures_are_bound() {
        let mut reg = TextureRegistry::new();
        let sun = reg.request("img/sun.jpg");
        let moon = reg.request("img/moon.jpg");

        assert_eq!(reg.bound(Some(sun)), None);

        reg.resolve(sun, true).unwrap();
        reg.resolve(moon, false).unwrap();

        assert_eq!(reg.bound(Some(sun)), Some(sun));
        assert_eq!(reg.bound(Some(moon)), None);
        assert_eq!(reg.bound(None), None);
    }

    #[test]
    fn resolve_unknown_texture_errors() {
        let mut reg = TextureRegistry::new();
        let err = reg.resolve(TextureId(3), true).unwrap_err();
        assert_eq!(err, EngineError::UnknownTexture(TextureId(3)));
    }

    #[test]
    fn pending_json_lists_unresolved() {
        let mut reg = TextureRegistry::new();
        let sun = reg.request("img/sun.jpg");
        reg.request("img/earth.jpg");
        reg.resolve(sun, true).unwrap();

        let json = reg.pending_json().unwrap();
        assert_eq!(json, r#"[{"id":1,"path":"img/earth.jpg"}]"#);

        let parsed: Vec<TextureRequest> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0].id, TextureId(1));
    }
}
