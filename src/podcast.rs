use serde::Deserialize;
use std::fmt;

// === PODCAST STRUCTURES ===
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct PodcastId(String);

impl fmt::Display for PodcastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PodcastId {
    pub fn new(s: &str) -> Self {
        PodcastId(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PodcastId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub type GenreId = i64;

/// One podcast as it comes out of the dataset. Never mutated after loading.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Podcast {
    #[serde(rename = "id")]
    id: PodcastId,
    #[serde(rename = "title")]
    title: String,
    #[serde(rename = "image")]
    image_url: String,
    #[serde(rename = "description")]
    description: String,
    #[serde(rename = "genres")]
    genre_ids: Vec<GenreId>,
    #[serde(rename = "updated")]
    last_updated: String,
    #[serde(rename = "seasons")]
    season_count: u32,
}

impl Podcast {
    pub fn new(
        id: PodcastId,
        title: String,
        image_url: String,
        description: String,
        genre_ids: Vec<GenreId>,
        last_updated: String,
        season_count: u32,
    ) -> Self {
        Self { id, title, image_url, description, genre_ids, last_updated, season_count }
    }

    // Accessor methods

    pub fn id(&self) -> &PodcastId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn genre_ids(&self) -> &[GenreId] {
        &self.genre_ids
    }

    /// ISO-8601 date string, exactly as supplied.
    pub fn last_updated(&self) -> &str {
        &self.last_updated
    }

    pub fn season_count(&self) -> u32 {
        self.season_count
    }
}

// === SEASON STRUCTURES ===
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Season {
    #[serde(rename = "title")]
    title: String,
    #[serde(rename = "episodes")]
    episodes: u32,
}

impl Season {
    pub fn new(title: &str, episodes: u32) -> Self {
        Self { title: title.to_string(), episodes }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn episodes(&self) -> u32 {
        self.episodes
    }
}

impl fmt::Display for Podcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title       : {}", self.title)?;
        writeln!(f, "ID          : {}", self.id)?;
        if !self.image_url.is_empty() {
            writeln!(f, "Image URL   : {}", self.image_url)?;
        }
        writeln!(f, "Seasons     : {}", self.season_count)?;
        writeln!(f, "Genres      : {:?}", self.genre_ids)?;
        writeln!(f, "Last updated: {}", self.last_updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let podcast: Podcast = serde_json::from_str(r#"{"id": "42", "title": "Sparse"}"#).unwrap();

        assert_eq!(podcast.id(), &PodcastId::new("42"));
        assert_eq!(podcast.title(), "Sparse");
        assert_eq!(podcast.image_url(), "");
        assert_eq!(podcast.description(), "");
        assert!(podcast.genre_ids().is_empty());
        assert_eq!(podcast.last_updated(), "");
        assert_eq!(podcast.season_count(), 0);
    }

    #[test]
    fn test_dataset_field_names_are_mapped() {
        let json = r#"{
            "id": "10716",
            "title": "Something Was Wrong",
            "description": "An award-winning docuseries",
            "seasons": 14,
            "image": "https://example.com/cover.jpg",
            "genres": [1, 2],
            "updated": "2022-11-03T07:00:00.000Z"
        }"#;
        let podcast: Podcast = serde_json::from_str(json).unwrap();

        assert_eq!(podcast.id().as_str(), "10716");
        assert_eq!(podcast.season_count(), 14);
        assert_eq!(podcast.image_url(), "https://example.com/cover.jpg");
        assert_eq!(podcast.genre_ids(), &[1, 2]);
        assert_eq!(podcast.last_updated(), "2022-11-03T07:00:00.000Z");
    }

    #[test]
    fn test_display_lists_key_fields() {
        let podcast = Podcast::new(
            PodcastId::new("abc"),
            "Rust Daily News".to_string(),
            String::new(),
            "Daily news about Rust".to_string(),
            vec![3],
            "2024-01-02".to_string(),
            2,
        );
        let shown = podcast.to_string();

        assert!(shown.contains("Title       : Rust Daily News"));
        assert!(shown.contains("ID          : abc"));
        assert!(!shown.contains("Image URL"));
        assert!(shown.contains("Seasons     : 2"));
    }
}
