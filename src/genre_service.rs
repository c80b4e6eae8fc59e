use crate::catalog::GenreCatalog;
use crate::podcast::GenreId;

pub const UNKNOWN_GENRE: &str = "Unknown";

/// Resolves genre ids to display names against a fixed catalog.
#[derive(Debug, Clone, Default)]
pub struct GenreService {
    catalog: GenreCatalog,
}

impl GenreService {
    pub fn new(catalog: GenreCatalog) -> Self {
        Self { catalog }
    }

    pub fn name(&self, id: GenreId) -> &str {
        self.catalog.get(id).filter(|name| !name.is_empty()).unwrap_or(UNKNOWN_GENRE)
    }

    /// One name per id, same order; ids missing from the catalog become `"Unknown"`.
    pub fn get_names(&self, ids: &[GenreId]) -> Vec<String> {
        ids.iter().map(|&id| self.name(id).to_string()).collect()
    }
}
