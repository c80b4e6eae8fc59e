use crate::catalog::Catalog;
use crate::components::{Grid, ModalController};
use crate::genre_service::GenreService;
use crate::podcast::Podcast;
use crate::theme::Theme;
use crate::view::Container;
use crate::widgets::scrollable_paragraph::ScrollableParagraphState;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, error, info};
use ratatui::{Terminal, backend::Backend, layout::Rect};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

pub struct App {
    pub should_quit: bool,
    pub podcasts: Vec<Rc<Podcast>>,
    pub grid: Grid,
    pub modal: Rc<RefCell<ModalController>>,
    pub modal_scroll: ScrollableParagraphState,
    pub theme: Theme,
    // Layout results from the last prepare_ui_layout, used for scrolling and mouse hits
    pub grid_first_row: usize,
    pub card_areas: Vec<(usize, Rect)>,
}

impl App {
    /// Builds the modal and grid over `catalog` and renders the grid once.
    pub fn new(catalog: Catalog, columns: usize) -> App {
        let genres = Rc::new(GenreService::new(catalog.genres));
        let seasons = Rc::new(catalog.seasons);
        let modal = Rc::new(RefCell::new(ModalController::create(
            Container::new(),
            Rc::clone(&genres),
            seasons,
        )));

        let mut grid = Grid::new(genres, Rc::clone(&modal), columns);
        grid.render(&catalog.podcasts);

        App {
            should_quit: false,
            podcasts: catalog.podcasts,
            grid,
            modal,
            modal_scroll: ScrollableParagraphState::default(),
            theme: Theme::default(),
            grid_first_row: 0,
            card_areas: Vec::new(),
        }
    }

    pub fn modal_is_open(&self) -> bool {
        self.modal.borrow().is_open()
    }

    pub fn close_modal(&mut self) {
        self.modal.borrow_mut().close();
    }

    // ================================== Activation ===============================================

    pub fn open_focused(&mut self) {
        if self.grid.activate_focused() {
            self.modal_scroll.reset();
        }
    }

    pub fn open_card(&mut self, index: usize) {
        if self.grid.activate(index) {
            self.modal_scroll.reset();
        }
    }

    /// Card under a screen position, from the last computed layout.
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        self.card_areas
            .iter()
            .find(|(_, area)| {
                column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
            })
            .map(|(index, _)| *index)
    }

    // --- Key Handler ---
    pub fn on_key(&mut self, key: KeyCode) {
        // Handle global quit first
        if key == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        if self.modal_is_open() {
            match key {
                KeyCode::Esc | KeyCode::Backspace => self.close_modal(),
                KeyCode::Down => self.modal_scroll.scroll_down(1),
                KeyCode::Up => self.modal_scroll.scroll_up(1),
                KeyCode::PageDown => self.modal_scroll.scroll_down(self.modal_scroll.page_size()),
                KeyCode::PageUp => self.modal_scroll.scroll_up(self.modal_scroll.page_size()),
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Right | KeyCode::Tab => self.grid.focus_next(),
            KeyCode::Left | KeyCode::BackTab => self.grid.focus_prev(),
            KeyCode::Down => self.grid.focus_down(),
            KeyCode::Up => self.grid.focus_up(),
            KeyCode::Enter | KeyCode::Char(' ') => self.open_focused(),
            _ => {}
        }
    }

    // --- Mouse Handler ---
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if self.modal_is_open() {
            match mouse.kind {
                MouseEventKind::ScrollDown => self.modal_scroll.scroll_down(1),
                MouseEventKind::ScrollUp => self.modal_scroll.scroll_up(1),
                _ => {}
            }
            return;
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            match self.card_at(mouse.column, mouse.row) {
                Some(index) => self.open_card(index),
                None => debug!("App: click at {},{} hit no card", mouse.column, mouse.row),
            }
        }
    }
}

pub fn start_ui(mut app: App) -> Result<()> {
    // Set up the terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("App: terminal ready, {} podcasts", app.podcasts.len());

    let res = run_app_loop(&mut terminal, &mut app);

    // Restore the terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!("App: loop ended with error: {}", e);
    }
    res
}

pub fn run_app_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        let frame_size = terminal.get_frame().size(); // Fetch once before drawing
        crate::ui::prepare_ui_layout(app, frame_size);
        terminal.draw(|f| crate::ui::ui(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    app.on_key(key_event.code)
                }
                Event::Mouse(mouse_event) => app.on_mouse(mouse_event),
                _ => {}
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{genre_catalog, podcast, season_catalog};
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        let catalog = Catalog {
            podcasts: ["a", "abc", "c", "multi"]
                .iter()
                .map(|id| Rc::new(podcast(id, &format!("Show {}", id), &[1], 1)))
                .collect(),
            genres: genre_catalog(),
            seasons: season_catalog(),
        };
        App::new(catalog, 2)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_new_renders_grid() {
        let app = app();
        assert_eq!(app.grid.len(), 4);
        assert!(!app.modal_is_open());
    }

    #[test]
    fn test_enter_opens_focused_card_and_esc_closes() {
        let mut app = app();
        app.on_key(KeyCode::Right);
        app.on_key(KeyCode::Enter);

        assert!(app.modal_is_open());
        assert_eq!(app.modal.borrow().content().heading(), Some("Show abc"));

        app.on_key(KeyCode::Esc);
        assert!(!app.modal_is_open());
    }

    #[test]
    fn test_grid_keys_are_ignored_while_modal_open() {
        let mut app = app();
        app.on_key(KeyCode::Enter);
        app.on_key(KeyCode::Right);
        assert_eq!(app.grid.focused(), Some(0));
    }

    #[test]
    fn test_down_moves_by_a_row() {
        let mut app = app();
        app.on_key(KeyCode::Down);
        app.on_key(KeyCode::Char(' '));
        assert_eq!(app.modal.borrow().content().heading(), Some("Show c"));
    }

    #[test]
    fn test_q_quits() {
        let mut app = app();
        app.on_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_click_opens_card_under_pointer() {
        let mut app = app();
        crate::ui::prepare_ui_layout(&mut app, Rect::new(0, 0, 80, 24));

        let (index, area) = app.card_areas[3];
        app.on_mouse(click(area.x + 1, area.y + 1));

        assert!(app.modal_is_open());
        assert_eq!(index, 3);
        assert_eq!(app.modal.borrow().content().heading(), Some("Show multi"));
        assert_eq!(app.grid.focused(), Some(3));
    }

    #[test]
    fn test_click_outside_cards_does_nothing() {
        let mut app = app();
        crate::ui::prepare_ui_layout(&mut app, Rect::new(0, 0, 80, 24));
        app.on_mouse(click(0, 0));
        assert!(!app.modal_is_open());
    }
}
