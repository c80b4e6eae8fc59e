//! Shared fixtures for unit tests.

use crate::catalog::{GenreCatalog, SeasonCatalog};
use crate::genre_service::GenreService;
use crate::podcast::{GenreId, Podcast, PodcastId, Season};

pub fn podcast(id: &str, title: &str, genres: &[GenreId], seasons: u32) -> Podcast {
    Podcast::new(
        PodcastId::new(id),
        title.to_string(),
        format!("https://img.example.com/{}.jpg", id),
        format!("About {}", title),
        genres.to_vec(),
        "2023-05-01T10:00:00.000Z".to_string(),
        seasons,
    )
}

/// Knows genres 1 and 3 only.
pub fn genre_catalog() -> GenreCatalog {
    GenreCatalog::new().with_genre(1, "Personal Growth").with_genre(3, "History")
}

pub fn genre_service() -> GenreService {
    GenreService::new(genre_catalog())
}

/// Seasons for `abc` (one) and `multi` (two).
pub fn season_catalog() -> SeasonCatalog {
    SeasonCatalog::new()
        .with_seasons(PodcastId::new("abc"), vec![Season::new("Launch", 5)])
        .with_seasons(
            PodcastId::new("multi"),
            vec![Season::new("Pilot", 8), Season::new("Return", 0)],
        )
}
