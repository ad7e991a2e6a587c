use crate::{EditorError, EditorState, HELP_MESSAGE, io_ops};
use core_config::Config;
use core_input::{Key, KeyReader, decode};
use core_model::{Cursor, DEFAULT_MARGIN_WIDTH, Layout};
use core_render::{Frame, FrameRenderer};
use core_state::{Document, StatusMessage};
use core_text::Line;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, trace};

/// Status bar name of a document that has never been saved.
pub const UNTITLED: &str = "[Untitled]";

/// Consecutive quit presses needed to discard unsaved changes.
const DEFAULT_QUIT_CONFIRMATIONS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    pub layout: Layout,
    pub horizontal_margin: usize,
    pub quit_confirmations: u32,
}

impl EditorConfig {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            horizontal_margin: DEFAULT_MARGIN_WIDTH,
            quit_confirmations: DEFAULT_QUIT_CONFIRMATIONS,
        }
    }

    /// Take the effective values of a loaded configuration. Call after
    /// `Config::apply_context` so the margin is already clamped.
    pub fn from_config(cfg: &Config, layout: Layout) -> Self {
        Self {
            layout,
            horizontal_margin: usize::from(cfg.effective_horizontal_margin),
            quit_confirmations: cfg.effective_quit_confirmations.max(1),
        }
    }
}

pub struct Editor<R, V> {
    pub(crate) reader: R,
    pub(crate) renderer: V,
    pub(crate) config: EditorConfig,
    pub(crate) doc: Document,
    pub(crate) cursor: Cursor,
    pub(crate) path: Option<PathBuf>,
    pub(crate) filename: String,
    /// Filename typed so far while `Prompting`.
    pub(crate) prompt: Line,
    pub(crate) status: StatusMessage,
    pub(crate) quit_count: u32,
    pub(crate) dirty: bool,
    pub(crate) state: EditorState,
}

impl<R: KeyReader, V: FrameRenderer> Editor<R, V> {
    /// Editor on an empty, untitled document.
    pub fn new(reader: R, renderer: V, config: EditorConfig) -> Self {
        Self {
            reader,
            renderer,
            config,
            doc: Document::new(),
            cursor: Cursor::new(),
            path: None,
            filename: UNTITLED.to_string(),
            prompt: Line::new(),
            status: StatusMessage::new(HELP_MESSAGE),
            quit_count: 0,
            dirty: false,
            state: EditorState::Running,
        }
    }

    /// Load `path` into the editor before the loop starts.
    pub fn open(&mut self, path: &Path) -> Result<(), EditorError> {
        self.doc = io_ops::open_document(path)?;
        self.set_path(path.to_path_buf());
        self.cursor = Cursor::new();
        self.dirty = false;
        info!(target: "editor", file = %path.display(), lines = self.doc.len(), "document_opened");
        Ok(())
    }

    /// Render, read and dispatch until the editor terminates. The screen is
    /// cleared on the way out whether or not the loop failed; a loop error
    /// takes precedence over a failure to clear.
    pub fn run(&mut self) -> Result<(), EditorError> {
        info!(target: "editor", "loop_start");
        let result = self.run_loop();
        self.state = EditorState::Terminated;
        let cleared = self.renderer.clear().map_err(EditorError::Render);
        match &result {
            Ok(()) => info!(target: "editor", "loop_exit"),
            Err(e) => error!(target: "editor", error = %e, "loop_failed"),
        }
        result.and(cleared)
    }

    fn run_loop(&mut self) -> Result<(), EditorError> {
        while self.state != EditorState::Terminated {
            self.refresh()?;
            let key = self.next_key()?;
            self.process_key(key)?;
        }
        Ok(())
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn status_message(&self) -> &StatusMessage {
        &self.status
    }

    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    pub(crate) fn set_path(&mut self, path: PathBuf) {
        self.filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.path = Some(path);
    }

    pub(crate) fn set_status<S: Into<String>>(&mut self, text: S) {
        self.status = StatusMessage::new(text);
    }

    pub(crate) fn terminate(&mut self, reason: &'static str) {
        debug!(target: "editor", reason, "terminated");
        self.state = EditorState::Terminated;
    }

    /// Bring the viewport to the cursor and repaint the whole screen.
    pub(crate) fn refresh(&mut self) -> Result<(), EditorError> {
        let layout = self.config.layout;
        self.cursor.scroll_with_margin(
            layout.text_columns(),
            layout.text_rows(),
            self.config.horizontal_margin,
        );
        let frame = Frame {
            cursor: self.cursor,
            lines: self.doc.lines(),
            filename: &self.filename,
            status_msg: &self.status.text,
            last_status_time: self.status.set_at,
            dirty: self.dirty,
        };
        if let Err(e) = self.renderer.render(&frame) {
            self.state = EditorState::Terminated;
            return Err(EditorError::Render(e));
        }
        Ok(())
    }

    /// Block for the next keypress.
    pub(crate) fn next_key(&mut self) -> Result<Key, EditorError> {
        match self.reader.read_key() {
            Ok(bytes) => {
                let key = decode(bytes);
                trace!(target: "editor", bytes = ?bytes, code = key.code(), "key_decoded");
                Ok(key)
            }
            Err(e) => {
                self.state = EditorState::Terminated;
                Err(EditorError::Read(e))
            }
        }
    }
}
