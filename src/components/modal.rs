// src/components/modal.rs
use crate::catalog::SeasonCatalog;
use crate::date_utils::format_updated;
use crate::genre_service::GenreService;
use crate::podcast::{Podcast, PodcastId, Season};
use crate::text::format_description;
use crate::view::{Container, ViewNode};
use log::debug;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

pub fn season_line(position: usize, season: &Season) -> String {
    format!("Season {}: {} — {} episodes", position, season.title(), season.episodes())
}

/// Detail overlay for a single podcast. One instance per page, passed around
/// explicitly by whoever needs to open or close it.
#[derive(Debug)]
pub struct ModalController {
    content: Container<ViewNode>,
    state: ModalState,
    showing: Option<PodcastId>,
    genres: Rc<GenreService>,
    seasons: Rc<SeasonCatalog>,
}

impl ModalController {
    pub fn create(
        container: Container<ViewNode>,
        genres: Rc<GenreService>,
        seasons: Rc<SeasonCatalog>,
    ) -> Self {
        Self { content: container, state: ModalState::Closed, showing: None, genres, seasons }
    }

    /// Replaces whatever is displayed with `podcast` and shows the overlay.
    pub fn open(&mut self, podcast: &Podcast) {
        self.update_content(podcast);
        self.showing = Some(podcast.id().clone());
        self.state = ModalState::Open;
        debug!("Modal: opened '{}' ({})", podcast.title(), podcast.id());
    }

    /// Hides the overlay. Content stays until the next `open`.
    pub fn close(&mut self) {
        if self.state == ModalState::Open {
            debug!("Modal: closed");
        }
        self.state = ModalState::Closed;
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn showing(&self) -> Option<&PodcastId> {
        self.showing.as_ref()
    }

    pub fn content(&self) -> &Container<ViewNode> {
        &self.content
    }

    pub fn season_lines(&self) -> Vec<&str> {
        self.content.list_items()
    }

    fn update_content(&mut self, podcast: &Podcast) {
        self.content.clear();
        self.content.append(ViewNode::Image {
            src: podcast.image_url().to_string(),
            alt: format!("{} cover", podcast.title()),
        });
        self.content.append(ViewNode::Heading(podcast.title().to_string()));
        self.content.append(ViewNode::Text(format_description(podcast.description())));
        self.content.append(ViewNode::Tags(self.genres.get_names(podcast.genre_ids())));
        self.content.append(ViewNode::Caption(format_updated(podcast.last_updated())));

        for (index, season) in self.seasons.seasons_for(podcast.id()).iter().enumerate() {
            self.content.append(ViewNode::ListItem(season_line(index + 1, season)));
        }
    }
}
