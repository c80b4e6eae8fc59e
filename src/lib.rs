pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod errors;
pub mod genre_service;
pub mod logging;
pub mod podcast;
pub mod signal;
pub mod text;
pub mod theme;
pub mod ui;
pub mod view;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;
