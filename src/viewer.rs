//! Navigation state for the observation photo viewer.
//!
//! The viewer owns an ordered list of image references and a cursor into it.
//! Key presses are translated into [`ViewerIntent`]s; drawing is left to the
//! caller.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the viewer wants the surrounding UI to do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerIntent {
    /// Show the image at this index
    Show(usize),
    Close,
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageViewer {
    images: Vec<String>,
    index: usize,
}

impl ImageViewer {
    /// Open the viewer at `index`, clamped to the last image.
    pub fn new(images: Vec<String>, index: usize) -> Self {
        let index = index.min(images.len().saturating_sub(1));
        Self { images, index }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Advance one image, wrapping from the last to the first.
    pub fn next(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.len();
        Some(self.index)
    }

    /// Step back one image, wrapping from the first to the last.
    pub fn previous(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = self.index.checked_sub(1).unwrap_or(self.len() - 1);
        Some(self.index)
    }

    pub fn first(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = 0;
        Some(self.index)
    }

    pub fn last(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = self.len() - 1;
        Some(self.index)
    }

    /// Apply a key press and report what the UI should do next.
    pub fn handle_key(&mut self, key: KeyEvent) -> ViewerIntent {
        let is_quit = matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
        if is_quit || self.is_empty() {
            return ViewerIntent::Close;
        }

        let moved = match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => self.next(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => self.previous(),
            KeyCode::Home => self.first(),
            KeyCode::End => self.last(),
            _ => None,
        };

        moved.map_or(ViewerIntent::Ignore, ViewerIntent::Show)
    }
}
