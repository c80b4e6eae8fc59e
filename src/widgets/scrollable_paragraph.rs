use crate::text::wrapped_height;

/// Vertical scroll position of a wrapped paragraph, clamped to its content.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScrollableParagraphState {
    pub scroll_offset_vertical: u16,
    pub content_height: u16,
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl ScrollableParagraphState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, e.g. when the paragraph shows new content.
    pub fn reset(&mut self) {
        self.scroll_offset_vertical = 0;
    }

    /// Called before each draw with the inner area of the panel and its text.
    pub fn set_dimensions(&mut self, width: u16, height: u16, content: &str) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.content_height = wrapped_height(content, width);
        self.scroll_offset_vertical = self.scroll_offset_vertical.min(self.max_scroll());
    }

    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll_offset_vertical = self.scroll_offset_vertical.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: u16) {
        self.scroll_offset_vertical =
            self.scroll_offset_vertical.saturating_add(amount).min(self.max_scroll());
    }

    pub fn page_size(&self) -> u16 {
        self.viewport_height.saturating_sub(1).max(1)
    }
}
