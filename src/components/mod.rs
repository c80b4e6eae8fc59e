pub mod card;
pub mod grid;
pub mod modal;

pub use card::{CardAttribute, CardState, PodcastCard, Selection};
pub use grid::Grid;
pub use modal::{ModalController, ModalState};
