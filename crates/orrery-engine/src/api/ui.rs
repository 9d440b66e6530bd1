/// Pointer affordance shown over the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Something interactive is under the pointer.
    Pointer,
}

impl Cursor {
    /// CSS `cursor` value.
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

/// Host-side text and cursor state written by game logic.
///
/// Changes are flagged so the bridge only touches the DOM when something
/// actually changed. The cursor starts flagged so the first flush always
/// writes it.
#[derive(Debug)]
pub struct UiState {
    cursor: Cursor,
    caption: Option<String>,
    cursor_dirty: bool,
    caption_dirty: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            cursor: Cursor::Default,
            caption: None,
            cursor_dirty: true,
            caption_dirty: false,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Last caption written, if any.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn set_cursor(&mut self, cursor: Cursor) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.cursor_dirty = true;
        }
    }

    pub fn set_caption(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.caption.as_deref() != Some(text.as_str()) {
            self.caption = Some(text);
            self.caption_dirty = true;
        }
    }

    /// Push pending changes to a surface and clear the change flags.
    pub fn flush(&mut self, surface: &mut dyn UiSurface) {
        if self.cursor_dirty {
            surface.set_cursor(self.cursor);
            self.cursor_dirty = false;
        }
        if self.caption_dirty {
            if let Some(text) = &self.caption {
                surface.set_caption(text);
            }
            self.caption_dirty = false;
        }
    }
}

/// Where cursor and caption changes end up (the DOM in the browser).
pub trait UiSurface {
    fn set_cursor(&mut self, cursor: Cursor);
    fn set_caption(&mut self, text: &str);
}
