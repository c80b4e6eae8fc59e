// src/components/grid.rs
use crate::components::card::PodcastCard;
use crate::components::modal::ModalController;
use crate::genre_service::GenreService;
use crate::podcast::Podcast;
use crate::view::Container;
use log::{debug, info};
use std::cell::RefCell;
use std::rc::Rc;

pub const DEFAULT_COLUMNS: usize = 3;

/// Lays podcasts out as cards and routes each card's selection to the modal.
#[derive(Debug)]
pub struct Grid {
    cards: Container<PodcastCard>,
    genres: Rc<GenreService>,
    modal: Rc<RefCell<ModalController>>,
    columns: usize,
    focused: Option<usize>,
}

impl Grid {
    pub fn new(genres: Rc<GenreService>, modal: Rc<RefCell<ModalController>>, columns: usize) -> Self {
        Self { cards: Container::new(), genres, modal, columns: columns.max(1), focused: None }
    }

    /// Drops every existing card (and its subscriptions) and builds one card
    /// per podcast, in order.
    pub fn render(&mut self, podcasts: &[Rc<Podcast>]) {
        self.cards.clear();

        for podcast in podcasts {
            let mut card = PodcastCard::new(Rc::clone(&self.genres));
            card.set_data(Rc::clone(podcast));

            let modal = Rc::clone(&self.modal);
            let record = Rc::clone(podcast);
            card.on_selected(move |_| modal.borrow_mut().open(&record));

            self.cards.append(card);
        }

        self.focused = if self.cards.is_empty() { None } else { Some(0) };
        info!("Grid: rendered {} cards", self.cards.len());
    }

    pub fn cards(&self) -> &[PodcastCard] {
        self.cards.children()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.cards.len().div_ceil(self.columns)
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    // ================================ User activation ============================================

    /// Forwards a user activation to the card at `index`. Returns false when
    /// there is no such card.
    pub fn activate(&mut self, index: usize) -> bool {
        match self.cards.get_mut(index) {
            Some(card) => {
                self.focused = Some(index);
                card.activate();
                true
            }
            None => {
                debug!("Grid: activation of missing card {}", index);
                false
            }
        }
    }

    pub fn activate_focused(&mut self) -> bool {
        match self.focused {
            Some(index) => self.activate(index),
            None => false,
        }
    }

    // ================================= Focus movement ============================================

    pub fn focus_next(&mut self) {
        self.move_focus(|i, len, _| (i + 1).min(len - 1));
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(|i, _, _| i.saturating_sub(1));
    }

    pub fn focus_down(&mut self) {
        self.move_focus(|i, len, cols| if i + cols < len { i + cols } else { i });
    }

    pub fn focus_up(&mut self) {
        self.move_focus(|i, _, cols| if i >= cols { i - cols } else { i });
    }

    fn move_focus(&mut self, step: impl Fn(usize, usize, usize) -> usize) {
        let len = self.cards.len();
        if len == 0 {
            self.focused = None;
            return;
        }
        let current = self.focused.unwrap_or(0).min(len - 1);
        self.focused = Some(step(current, len, self.columns));
    }
}
