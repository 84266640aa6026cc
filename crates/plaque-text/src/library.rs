use std::sync::{Arc, Mutex};

use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};
use hashbrown::HashMap;

use crate::{FontFace, Result};

/// Font collection resolving family names to loaded faces.
///
/// Wraps a `fontdb::Database` and caches resolved faces per family name.
/// Resolution falls back to the generic sans-serif family, mirroring how a
/// 2D canvas substitutes a default font for unknown families; `resolve`
/// returns `None` only when the database has no usable face at all.
pub struct FontLibrary {
    db: Database,
    cache: Mutex<HashMap<String, Option<Arc<FontFace>>>>,
}

impl FontLibrary {
    /// An empty library. Families resolve to `None` until fonts are added.
    pub fn empty() -> Self {
        Self {
            db: Database::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Build a library from the system font directories.
    pub fn from_system() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        log::debug!("font library loaded {} system faces", db.len());
        Self {
            db,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Register a font file on disk.
    pub fn load_font_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.db.load_font_file(path)?;
        self.cache.lock().unwrap().clear();
        Ok(())
    }

    /// Register an in-memory font.
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
        self.cache.lock().unwrap().clear();
    }

    /// Resolve a family name to a loaded face, consulting the cache first.
    pub fn resolve(&self, family: &str) -> Option<Arc<FontFace>> {
        if let Some(hit) = self.cache.lock().unwrap().get(family) {
            return hit.clone();
        }
        let face = self.resolve_uncached(family);
        self.cache
            .lock()
            .unwrap()
            .insert(family.to_string(), face.clone());
        face
    }

    fn resolve_uncached(&self, family: &str) -> Option<Arc<FontFace>> {
        let id = self.db.query(&Query {
            families: &[Family::Name(family), Family::SansSerif],
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
            ..Query::default()
        })?;

        let face = self.db.face(id)?;
        let index = face.index as usize;
        let bytes: Vec<u8> = match &face.source {
            Source::File(path) => std::fs::read(path).ok()?,
            Source::Binary(data) => data.as_ref().as_ref().to_vec(),
            Source::SharedFile(_, data) => data.as_ref().as_ref().to_vec(),
        };

        match FontFace::from_vec(bytes, index) {
            Ok(face) => Some(Arc::new(face)),
            Err(err) => {
                log::warn!("failed to load face for family {family:?}: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_library_resolves_nothing() {
        let lib = FontLibrary::empty();
        assert!(lib.resolve("Sans").is_none());
        // Second lookup hits the negative cache entry.
        assert!(lib.resolve("Sans").is_none());
    }
}
