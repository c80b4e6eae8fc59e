// src/catalog.rs
use crate::errors::CatalogError;
use crate::podcast::{GenreId, Podcast, PodcastId, Season};
use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::rc::Rc;

const BUILTIN_DATASET: &str = include_str!("../data/podcasts.json");

// === RAW DATASET SHAPE ===
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDataset {
    podcasts: Vec<Podcast>,
    genres: Vec<RawGenre>,
    seasons: Vec<RawSeasonEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawGenre {
    id: GenreId,
    title: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSeasonEntry {
    id: PodcastId,
    #[serde(rename = "seasonDetails")]
    season_details: Vec<Season>,
}

// === GENRE CATALOG ===
#[derive(Debug, Clone, Default)]
pub struct GenreCatalog {
    names: HashMap<GenreId, String>,
}

impl GenreCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first name registered for an id wins.
    pub fn with_genre(mut self, id: GenreId, name: &str) -> Self {
        self.names.entry(id).or_insert_with(|| name.to_string());
        self
    }

    pub fn get(&self, id: GenreId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(GenreId, String)> for GenreCatalog {
    fn from_iter<I: IntoIterator<Item = (GenreId, String)>>(iter: I) -> Self {
        let mut names = HashMap::new();
        for (id, name) in iter {
            names.entry(id).or_insert(name);
        }
        Self { names }
    }
}

// === SEASON CATALOG ===
#[derive(Debug, Clone, Default)]
pub struct SeasonCatalog {
    seasons: HashMap<PodcastId, Vec<Season>>,
}

impl SeasonCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first entry registered for an id wins.
    pub fn with_seasons(mut self, id: PodcastId, seasons: Vec<Season>) -> Self {
        self.seasons.entry(id).or_insert(seasons);
        self
    }

    /// Seasons for `id` in dataset order; empty when the podcast has no entry.
    pub fn seasons_for(&self, id: &PodcastId) -> &[Season] {
        self.seasons.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }
}

// === CATALOG ===
/// Everything the UI reads, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub podcasts: Vec<Rc<Podcast>>,
    pub genres: GenreCatalog,
    pub seasons: SeasonCatalog,
}

impl Catalog {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: RawDataset = serde_json::from_str(json)?;

        let mut seen: HashSet<&PodcastId> = HashSet::new();
        for podcast in &raw.podcasts {
            if !seen.insert(podcast.id()) {
                warn!("Catalog: duplicate podcast id '{}'", podcast.id());
            }
        }

        let genres: GenreCatalog = raw.genres.into_iter().map(|g| (g.id, g.title)).collect();

        let mut seasons = SeasonCatalog::new();
        for entry in raw.seasons {
            seasons = seasons.with_seasons(entry.id, entry.season_details);
        }

        debug!(
            "Catalog: parsed {} podcasts, {} genres, {} season entries",
            raw.podcasts.len(),
            genres.len(),
            seasons.len()
        );

        Ok(Self { podcasts: raw.podcasts.into_iter().map(Rc::new).collect(), genres, seasons })
    }

    pub fn from_file<P: AsRef<Path>>(file_path: P) -> Result<Self, CatalogError> {
        info!("Catalog: loading dataset from {}", file_path.as_ref().display());
        let content = fs::read_to_string(file_path)?;
        Self::from_json_str(&content)
    }

    /// The sample dataset compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_DATASET)
    }
}
