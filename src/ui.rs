// src/ui.rs
use crate::app::App;
use crate::text::truncate_to_width;
use crate::theme::{CardTheme, ModalTheme};
use crate::view::{Container, ViewNode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Wrap,
        block::{Position, Title},
    },
};
use std::rc::Rc;

/// Borders plus the five card lines.
pub const CARD_HEIGHT: u16 = 7;

pub struct LayoutChunks {
    pub header_chunk: Rect,
    pub grid_chunk: Rect,
    pub hint_chunk: Rect,
}

pub fn compute_layout(frame_size: Rect) -> LayoutChunks {
    let main_chunks: Rc<[Rect]> = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(frame_size);

    LayoutChunks { header_chunk: main_chunks[0], grid_chunk: main_chunks[1], hint_chunk: main_chunks[2] }
}

pub fn visible_rows(grid_chunk: Rect) -> usize {
    ((grid_chunk.height / CARD_HEIGHT) as usize).max(1)
}

/// Smallest scroll change that keeps `focused_row` on screen.
pub fn first_visible_row(focused_row: usize, current_first: usize, visible: usize) -> usize {
    if focused_row < current_first {
        focused_row
    } else if focused_row >= current_first + visible {
        focused_row + 1 - visible
    } else {
        current_first
    }
}

/// Screen rectangles of the cards that fit, as `(card index, area)`.
pub fn card_areas(grid_chunk: Rect, columns: usize, count: usize, first_row: usize) -> Vec<(usize, Rect)> {
    let columns = columns.max(1);
    let card_width = grid_chunk.width / columns as u16;
    if card_width == 0 {
        return Vec::new();
    }
    let visible = visible_rows(grid_chunk);
    let start = first_row * columns;
    let end = count.min((first_row + visible) * columns);

    (start..end)
        .filter_map(|index| {
            let row = (index / columns - first_row) as u16;
            let col = (index % columns) as u16;
            let y = grid_chunk.y + row * CARD_HEIGHT;
            if y + CARD_HEIGHT > grid_chunk.bottom() {
                return None;
            }
            let x = grid_chunk.x + col * card_width;
            // last column takes the rounding remainder
            let width =
                if col as usize == columns - 1 { grid_chunk.right() - x } else { card_width };
            Some((index, Rect::new(x, y, width, CARD_HEIGHT)))
        })
        .collect()
}

pub fn modal_area(frame_size: Rect) -> Rect {
    let width = frame_size.width * 7 / 10;
    let height = frame_size.height * 7 / 10;
    Rect::new(
        frame_size.x + (frame_size.width - width) / 2,
        frame_size.y + (frame_size.height - height) / 2,
        width,
        height,
    )
}

fn modal_block<'a>(title: &'a str, theme: &ModalTheme) -> Block<'a> {
    Block::default()
        .title(Span::styled(title, theme.title))
        .title(Title::from(" [Esc] Close ").position(Position::Bottom).alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_style(theme.border)
}

fn tag_spans<'a>(tags: &[String], style: ratatui::style::Style) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {} ", tag), style));
    }
    spans
}

pub fn card_lines(content: &Container<ViewNode>, theme: &CardTheme, width: usize) -> Vec<Line<'static>> {
    content
        .iter()
        .map(|node| match node {
            ViewNode::Image { .. } => {
                Line::from(Span::styled(truncate_to_width(&node.to_string(), width), theme.image))
            }
            ViewNode::Heading(title) => {
                Line::from(Span::styled(truncate_to_width(title, width), theme.title))
            }
            ViewNode::Text(text) => Line::from(Span::styled(text.clone(), theme.seasons)),
            ViewNode::Tags(tags) => Line::from(tag_spans(tags, theme.tag)),
            ViewNode::Caption(text) => Line::from(Span::styled(text.clone(), theme.updated)),
            ViewNode::ListItem(text) => Line::from(truncate_to_width(text, width)),
        })
        .collect()
}

/// Body of the modal; the heading goes into the block title instead.
pub fn modal_lines(content: &Container<ViewNode>, theme: &ModalTheme) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();
    let mut seasons_started = false;
    for node in content.iter() {
        match node {
            ViewNode::Heading(_) => {}
            ViewNode::Image { .. } => {
                lines.push(Line::from(Span::styled(node.to_string(), theme.image)));
                lines.push(Line::default());
            }
            ViewNode::Text(text) => {
                lines.push(Line::from(Span::styled(text.clone(), theme.description)));
                lines.push(Line::default());
            }
            ViewNode::Tags(tags) => lines.push(Line::from(tag_spans(tags, theme.tag))),
            ViewNode::Caption(text) => lines.push(Line::from(Span::styled(text.clone(), theme.updated))),
            ViewNode::ListItem(text) => {
                if !seasons_started {
                    lines.push(Line::default());
                    lines.push(Line::from("Seasons"));
                    seasons_started = true;
                }
                lines.push(Line::from(Span::styled(format!("• {}", text), theme.season)));
            }
        }
    }
    lines
}

/// Plain text of `lines`, used to measure wrapping for the scroll state.
pub fn plain_text(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
        .collect::<Vec<String>>()
        .join("\n")
}

/// Updates layout-dependent state (grid scroll, hit areas, modal viewport)
/// outside the draw closure.
pub fn prepare_ui_layout(app: &mut App, frame_size: Rect) {
    let layout_chunks: LayoutChunks = compute_layout(frame_size);

    let columns = app.grid.columns();
    let visible = visible_rows(layout_chunks.grid_chunk);
    if let Some(focused) = app.grid.focused() {
        app.grid_first_row = first_visible_row(focused / columns, app.grid_first_row, visible);
    } else {
        app.grid_first_row = 0;
    }
    app.card_areas =
        card_areas(layout_chunks.grid_chunk, columns, app.grid.len(), app.grid_first_row);

    let modal = app.modal.borrow();
    if modal.is_open() {
        let area = modal_area(frame_size);
        let inner: Rect = modal_block("", &app.theme.modal).inner(area);
        let body = plain_text(&modal_lines(modal.content(), &app.theme.modal));
        app.modal_scroll.set_dimensions(inner.width, inner.height, &body);
    }
}

pub fn ui(f: &mut Frame, app: &App) {
    let layout_chunks: LayoutChunks = compute_layout(f.size());
    let theme = &app.theme;
    let modal = app.modal.borrow();

    // =================================== Header ==================================================
    let header_widget: Paragraph = Paragraph::new(format!("{} podcasts", app.grid.len())).block(
        Block::default().title("Podshelf").borders(Borders::ALL).style(theme.header.title),
    );
    f.render_widget(header_widget, layout_chunks.header_chunk);

    // ==================================== Cards ==================================================
    if app.grid.is_empty() {
        let empty = Paragraph::new("No podcasts to show").alignment(Alignment::Center);
        f.render_widget(empty, layout_chunks.grid_chunk);
    }
    for &(index, area) in &app.card_areas {
        let Some(card) = app.grid.cards().get(index) else { continue };
        let is_focused = app.grid.focused() == Some(index) && !modal.is_open();
        let block = Block::default().borders(Borders::ALL).border_style(if is_focused {
            theme.card.border_focused
        } else {
            theme.card.border
        });
        let inner_width = block.inner(area).width as usize;
        let card_widget = Paragraph::new(card_lines(card.content(), &theme.card, inner_width)).block(block);
        f.render_widget(card_widget, area);
    }

    // ================================== Hint Bar =================================================
    let hint_text: &str = if modal.is_open() {
        "[↑/↓/PgUp/PgDn] Scroll | [Esc] Close | [Q] Quit"
    } else {
        "[←/→/↑/↓] Move | [Enter] Open | [Click] Open | [Q] Quit"
    };
    let hint_widget: Paragraph = Paragraph::new(hint_text).style(theme.header.hint).alignment(Alignment::Center);
    f.render_widget(hint_widget, layout_chunks.hint_chunk);

    // ==================================== Modal ==================================================
    if modal.is_open() {
        let area = modal_area(f.size());
        let title = modal.content().heading().unwrap_or("").to_string();
        let modal_widget = Paragraph::new(modal_lines(modal.content(), &theme.modal))
            .wrap(Wrap { trim: true })
            .block(modal_block(&title, &theme.modal))
            .scroll((app.modal_scroll.scroll_offset_vertical, 0));
        f.render_widget(Clear, area);
        f.render_widget(modal_widget, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, SeasonCatalog};
    use crate::podcast::{Podcast, PodcastId, Season};
    use crate::test_utils::{genre_catalog, podcast, season_catalog};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn app(ids: &[&str]) -> App {
        let catalog = Catalog {
            podcasts: ids
                .iter()
                .map(|id| Rc::new(podcast(id, &format!("Show {}", id), &[1, 3], 1)))
                .collect(),
            genres: genre_catalog(),
            seasons: season_catalog(),
        };
        App::new(catalog, 3)
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        prepare_ui_layout(app, Rect::new(0, 0, width, height));
        terminal.draw(|f| ui(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_first_visible_row() {
        assert_eq!(first_visible_row(0, 0, 3), 0);
        assert_eq!(first_visible_row(5, 0, 3), 3);
        assert_eq!(first_visible_row(1, 2, 3), 1);
        assert_eq!(first_visible_row(3, 2, 3), 2);
    }

    #[test]
    fn test_card_areas_fill_columns_in_order() {
        let areas = card_areas(Rect::new(0, 3, 90, 21), 3, 5, 0);

        assert_eq!(areas.len(), 5);
        assert_eq!(areas[0], (0, Rect::new(0, 3, 30, CARD_HEIGHT)));
        assert_eq!(areas[2], (2, Rect::new(60, 3, 30, CARD_HEIGHT)));
        assert_eq!(areas[3], (3, Rect::new(0, 10, 30, CARD_HEIGHT)));
    }

    #[test]
    fn test_card_areas_skip_rows_out_of_view() {
        let areas = card_areas(Rect::new(0, 0, 60, 14), 2, 10, 1);
        let indices: Vec<usize> = areas.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_draw_grid_shows_cards() {
        let mut app = app(&["a", "b", "c"]);
        let screen = draw(&mut app, 96, 30);

        assert!(screen.contains("3 podcasts"));
        assert!(screen.contains("Show a"));
        assert!(screen.contains("Show c"));
        assert!(screen.contains("1 season"));
        assert!(screen.contains("Personal Growth"));
        assert!(screen.contains("Updated May 1, 2023"));
        assert!(!screen.contains("Seasons"));
    }

    #[test]
    fn test_draw_open_modal() {
        let mut app = app(&["x", "abc"]);
        app.grid.activate(1);
        let screen = draw(&mut app, 96, 30);

        assert!(screen.contains("Show abc"));
        assert!(screen.contains("About Show abc"));
        assert!(screen.contains("Season 1: Launch — 5 episodes"));
    }

    #[test]
    fn test_modal_scrolls_to_last_season() {
        let description = vec!["chapter"; 48].join(" ");
        let long = Podcast::new(
            PodcastId::new("long"),
            "Long Read".to_string(),
            String::new(),
            description,
            vec![1],
            "2023-05-01".to_string(),
            3,
        );
        let seasons = SeasonCatalog::new().with_seasons(
            PodcastId::new("long"),
            vec![Season::new("S1", 1), Season::new("S2", 2), Season::new("S3", 3)],
        );
        let catalog = Catalog { podcasts: vec![Rc::new(long)], genres: genre_catalog(), seasons };
        let mut app = App::new(catalog, 3);
        app.grid.activate(0);

        prepare_ui_layout(&mut app, Rect::new(0, 0, 30, 30));
        for _ in 0..200 {
            app.modal_scroll.scroll_down(1);
        }
        let screen = draw(&mut app, 30, 30);

        assert!(screen.contains("Season 3: S3"));
    }

    #[test]
    fn test_draw_empty_grid() {
        let mut app = app(&[]);
        let screen = draw(&mut app, 60, 20);
        assert!(screen.contains("No podcasts to show"));
    }
}
