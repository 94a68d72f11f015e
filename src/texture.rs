use std::collections::HashMap;
use std::path::Path;

use id_arena::{Arena, Id};
use image::RgbaImage;

pub type TextureId = Id<Texture>;

/// A texture reference. Registration only records the file name; pixel data
/// arrives whenever `TextureRegistry::load_all` manages to decode the file.
/// Materials referencing an unloaded texture fall back to their solid color.
pub struct Texture {
    pub file_name: String,
    image: Option<RgbaImage>,
}

impl Texture {
    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }
}

#[derive(Default)]
pub struct TextureRegistry {
    textures: Arena<Texture>,
    by_name: HashMap<String, TextureId>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            textures: Arena::new(),
            by_name: HashMap::new(),
        }
    }

    /// Registers a texture by file name, deduplicating repeat registrations.
    pub fn register(&mut self, file_name: &str) -> TextureId {
        if let Some(id) = self.by_name.get(file_name).copied() {
            return id;
        }

        let id = self.textures.alloc(Texture {
            file_name: file_name.to_string(),
            image: None,
        });
        self.by_name.insert(file_name.to_string(), id);
        id
    }

    pub fn get(&self, id: TextureId) -> Option<&Texture> {
        self.textures.get(id)
    }

    pub fn get_by_name(&self, file_name: &str) -> Option<TextureId> {
        self.by_name.get(file_name).copied()
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.len() == 0
    }

    /// Decodes every registered texture found under `dir`. Missing or broken
    /// files are logged and skipped; the scene renders with fallback colors
    /// for those. Returns the number of textures decoded in this pass.
    pub fn load_all(&mut self, dir: &Path) -> usize {
        let mut loaded = 0;

        for (_, texture) in self.textures.iter_mut() {
            if texture.is_loaded() {
                continue;
            }

            let path = dir.join(&texture.file_name);
            match image::open(&path) {
                Ok(decoded) => {
                    texture.image = Some(decoded.to_rgba8());
                    loaded += 1;
                }
                Err(error) => {
                    log::warn!("Could not load texture {}: {}", path.display(), error);
                }
            }
        }

        loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_deduplicates_by_file_name() {
        let mut registry = TextureRegistry::new();
        let a = registry.register("brick.jpg");
        let b = registry.register("brick.jpg");
        let c = registry.register("carpet.jpg");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get_by_name("brick.jpg"), Some(a));
    }

    #[test]
    fn unloaded_texture_has_no_image() {
        let mut registry = TextureRegistry::new();
        let id = registry.register("fire.jpg");
        let texture = registry.get(id).unwrap();

        assert!(!texture.is_loaded());
        assert!(texture.image().is_none());
        assert_eq!(texture.file_name, "fire.jpg");
    }

    #[test]
    fn load_all_tolerates_missing_files() {
        let mut registry = TextureRegistry::new();
        registry.register("does_not_exist.jpg");

        let loaded = registry.load_all(Path::new("/nonexistent"));
        assert_eq!(loaded, 0);
    }
}
