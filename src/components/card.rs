// src/components/card.rs
use crate::date_utils::format_updated;
use crate::genre_service::GenreService;
use crate::podcast::{GenreId, Podcast};
use crate::signal::{Signal, SubscriptionId};
use crate::view::{Container, ViewNode};
use log::{debug, trace};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Unrendered,
    Rendered,
}

/// Loose values a card can be fed without a full podcast record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardAttribute {
    Title,
    Image,
    Seasons,
    Genres,
    Updated,
}

/// Payload of a card's selection signal.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Podcast(Rc<Podcast>),
    /// No record was assigned; carries whatever title the card was given.
    Title(String),
}

impl Selection {
    pub fn podcast(&self) -> Option<&Rc<Podcast>> {
        match self {
            Selection::Podcast(podcast) => Some(podcast),
            Selection::Title(_) => None,
        }
    }
}

/// `"1 season"`, otherwise `"N seasons"`.
pub fn season_label(count: u32) -> String {
    if count == 1 { "1 season".to_string() } else { format!("{} seasons", count) }
}

/// Preview of one podcast. Owns its content container and re-renders it in
/// full whenever its data changes.
#[derive(Debug)]
pub struct PodcastCard {
    genres: Rc<GenreService>,
    podcast: Option<Rc<Podcast>>,
    attributes: HashMap<CardAttribute, String>,
    state: CardState,
    content: Container<ViewNode>,
    selected: Signal<Selection>,
}

impl PodcastCard {
    pub fn new(genres: Rc<GenreService>) -> Self {
        Self {
            genres,
            podcast: None,
            attributes: HashMap::new(),
            state: CardState::default(),
            content: Container::new(),
            selected: Signal::new(),
        }
    }

    pub fn set_data(&mut self, podcast: Rc<Podcast>) {
        self.podcast = Some(podcast);
        self.render();
    }

    pub fn podcast(&self) -> Option<&Rc<Podcast>> {
        self.podcast.as_ref()
    }

    /// Re-renders only when the value actually changed.
    pub fn set_attribute(&mut self, attribute: CardAttribute, value: &str) {
        if self.attributes.get(&attribute).map(String::as_str) == Some(value) {
            return;
        }
        self.attributes.insert(attribute, value.to_string());
        self.render();
    }

    pub fn attribute(&self, attribute: CardAttribute) -> Option<&str> {
        self.attributes.get(&attribute).map(String::as_str)
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn content(&self) -> &Container<ViewNode> {
        &self.content
    }

    pub fn on_selected<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&Selection) + 'static,
    {
        self.selected.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.selected.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.selected.handler_count()
    }

    /// User activation. Emits the selection signal once and returns the payload.
    pub fn activate(&mut self) -> Selection {
        let selection = match &self.podcast {
            Some(podcast) => Selection::Podcast(Rc::clone(podcast)),
            None => Selection::Title(self.attribute(CardAttribute::Title).unwrap_or("").to_string()),
        };
        let handled = self.selected.emit(&selection);
        debug!("PodcastCard: '{}' activated, {} handler(s)", self.title(), handled);
        selection
    }

    // === Field resolution: record first, attributes fill the gaps ===

    pub fn title(&self) -> String {
        self.text_field(Podcast::title, CardAttribute::Title)
    }

    fn image_url(&self) -> String {
        self.text_field(Podcast::image_url, CardAttribute::Image)
    }

    fn updated(&self) -> String {
        self.text_field(Podcast::last_updated, CardAttribute::Updated)
    }

    fn text_field(&self, from_record: fn(&Podcast) -> &str, attribute: CardAttribute) -> String {
        self.podcast
            .as_deref()
            .map(from_record)
            .filter(|v| !v.is_empty())
            .or_else(|| self.attribute(attribute))
            .unwrap_or("")
            .to_string()
    }

    fn season_count(&self) -> u32 {
        self.podcast
            .as_deref()
            .map(Podcast::season_count)
            .filter(|&n| n > 0)
            .or_else(|| {
                self.attribute(CardAttribute::Seasons).and_then(|v| v.trim().parse::<u32>().ok())
            })
            .unwrap_or(0)
    }

    fn genre_ids(&self) -> Vec<GenreId> {
        match &self.podcast {
            Some(podcast) => podcast.genre_ids().to_vec(),
            None => self
                .attribute(CardAttribute::Genres)
                .unwrap_or("")
                .split(',')
                .filter_map(|id| id.trim().parse::<GenreId>().ok())
                .collect(),
        }
    }

    fn render(&mut self) {
        let title = self.title();
        let updated = self.updated();
        let formatted_date = if updated.is_empty() { String::new() } else { format_updated(&updated) };
        let genre_names = self.genres.get_names(&self.genre_ids());

        self.content.clear();
        self.content.append(ViewNode::Image { src: self.image_url(), alt: format!("{} cover", title) });
        self.content.append(ViewNode::Heading(title));
        self.content.append(ViewNode::Text(season_label(self.season_count())));
        self.content.append(ViewNode::Tags(genre_names));
        self.content.append(ViewNode::Caption(formatted_date));

        self.state = CardState::Rendered;
        trace!("PodcastCard: rendered {} nodes", self.content.len());
    }
}
