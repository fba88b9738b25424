//! Recording fakes for the backend and computer traits.

use std::collections::VecDeque;
use std::io::Write;
use std::sync::Arc;

use deskpilot_protocols::ToolError;

use crate::backend::{ButtonAction, ClipboardBackend, InputBackend, MouseButton, ScrollAxis};
use crate::clipboard::ClipboardError;
use crate::geometry::Point;
use crate::input::InputError;
use crate::output::{CursorPosition, EntryMethod, ScreenDimensions, ScreenshotImage, TextEntryReport};
use crate::requests::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputEvent {
    Move(i32, i32),
    Button(MouseButton, ButtonAction),
    Scroll(i32, ScrollAxis),
    Type(char),
    Key(String),
    Hotkey(Vec<String>),
}

/// Records every input event; can be told to reject some characters.
#[derive(Default)]
pub(crate) struct RecordingInput {
    pub events: Vec<InputEvent>,
    pub cursor: Point,
    reject: Option<fn(char) -> bool>,
    fail_hotkey: bool,
}

impl RecordingInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail `type_char` for characters matching `predicate`.
    pub fn rejecting(predicate: fn(char) -> bool) -> Self {
        Self {
            reject: Some(predicate),
            ..Self::default()
        }
    }

    pub fn with_failing_hotkey(mut self) -> Self {
        self.fail_hotkey = true;
        self
    }

    pub fn typed(&self) -> String {
        self.events
            .iter()
            .filter_map(|e| match e {
                InputEvent::Type(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    pub fn hotkeys(&self) -> Vec<Vec<String>> {
        self.events
            .iter()
            .filter_map(|e| match e {
                InputEvent::Hotkey(keys) => Some(keys.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn type_attempts(&self) -> usize {
        self.typed().chars().count()
    }
}

impl InputBackend for RecordingInput {
    fn move_to(&mut self, x: i32, y: i32) -> Result<(), InputError> {
        self.cursor = Point::new(x, y);
        self.events.push(InputEvent::Move(x, y));
        Ok(())
    }

    fn button(&mut self, button: MouseButton, action: ButtonAction) -> Result<(), InputError> {
        self.events.push(InputEvent::Button(button, action));
        Ok(())
    }

    fn scroll(&mut self, amount: i32, axis: ScrollAxis) -> Result<(), InputError> {
        self.events.push(InputEvent::Scroll(amount, axis));
        Ok(())
    }

    fn type_char(&mut self, ch: char) -> Result<(), InputError> {
        // Attempts are recorded even when rejected.
        self.events.push(InputEvent::Type(ch));
        match self.reject {
            Some(reject) if reject(ch) => Err(InputError::Failed(format!("cannot type {:?}", ch))),
            _ => Ok(()),
        }
    }

    fn key_press(&mut self, key: &str) -> Result<(), InputError> {
        crate::input::parse_key(key)?;
        self.events.push(InputEvent::Key(key.to_string()));
        Ok(())
    }

    fn hotkey(&mut self, keys: &[&str]) -> Result<(), InputError> {
        if self.fail_hotkey {
            return Err(InputError::Failed("hotkey rejected".to_string()));
        }
        self.events
            .push(InputEvent::Hotkey(keys.iter().map(|k| k.to_string()).collect()));
        Ok(())
    }

    fn cursor_position(&mut self) -> Result<Point, InputError> {
        Ok(self.cursor)
    }
}

/// In-memory clipboard with scripted failures.
#[derive(Default)]
pub(crate) struct MemoryClipboard {
    pub content: Option<String>,
    pub writes: Vec<String>,
    pub reads: usize,
    fail_writes: bool,
    /// Results returned by successive reads before falling back to `content`.
    scripted_reads: VecDeque<Result<String, ClipboardError>>,
}

impl MemoryClipboard {
    pub fn with_content(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn script_read(mut self, result: Result<String, ClipboardError>) -> Self {
        self.scripted_reads.push_back(result);
        self
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.reads += 1;
        if let Some(scripted) = self.scripted_reads.pop_front() {
            return scripted;
        }
        self.content.clone().ok_or(ClipboardError::NoText)
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail_writes {
            return Err(ClipboardError::AccessFailed("write rejected".to_string()));
        }
        self.writes.push(text.to_string());
        self.content = Some(text.to_string());
        Ok(())
    }
}

/// Records which [`ComputerTool`](crate::ComputerTool) methods were called.
#[derive(Default)]
pub(crate) struct RecordingComputer {
    pub calls: parking_lot::Mutex<Vec<String>>,
}

impl RecordingComputer {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().push(call);
    }
}

#[async_trait::async_trait]
impl crate::computer::ComputerTool for RecordingComputer {
    async fn move_mouse(&self, req: MoveMouseRequest) -> Result<(), ToolError> {
        self.record(format!("move_mouse({}, {})", req.x, req.y));
        Ok(())
    }

    async fn click_mouse(&self, req: ClickMouseRequest) -> Result<(), ToolError> {
        self.record(format!("click_mouse({:?})", req.button));
        Ok(())
    }

    async fn press_mouse(&self, req: PressMouseRequest) -> Result<(), ToolError> {
        self.record(format!("press_mouse({:?})", req.button));
        Ok(())
    }

    async fn release_mouse(&self, req: ReleaseMouseRequest) -> Result<(), ToolError> {
        self.record(format!("release_mouse({:?})", req.button));
        Ok(())
    }

    async fn drag_mouse(&self, req: DragMouseRequest) -> Result<(), ToolError> {
        self.record(format!(
            "drag_mouse({}, {} -> {}, {})",
            req.source_x, req.source_y, req.target_x, req.target_y
        ));
        Ok(())
    }

    async fn scroll(&self, req: ScrollRequest) -> Result<(), ToolError> {
        self.record(format!("scroll({:?}, {})", req.scroll_direction, req.scroll_amount));
        Ok(())
    }

    async fn press_key(&self, req: PressKeyRequest) -> Result<(), ToolError> {
        if req.key == "hyperdrive" {
            return Err(ToolError::InvalidParameters("Invalid key: hyperdrive".to_string()));
        }
        self.record(format!("press_key({})", req.key));
        Ok(())
    }

    async fn type_text(&self, req: TypeTextRequest) -> Result<TextEntryReport, ToolError> {
        self.record(format!("type_text({})", req.text));
        Ok(TextEntryReport {
            method: EntryMethod::Typed,
            verified: None,
            shortcut: None,
        })
    }

    async fn wait(&self, req: WaitRequest) -> Result<(), ToolError> {
        self.record(format!("wait({})", req.duration));
        Ok(())
    }

    async fn take_screenshot(
        &self,
        _req: TakeScreenshotRequest,
    ) -> Result<ScreenshotImage, ToolError> {
        self.record("take_screenshot".to_string());
        Ok(ScreenshotImage {
            screenshot: "iVBORw==".to_string(),
            width: 640,
            height: 480,
        })
    }

    async fn get_cursor_position(
        &self,
        _req: GetCursorPositionRequest,
    ) -> Result<CursorPosition, ToolError> {
        self.record("get_cursor_position".to_string());
        Ok(CursorPosition {
            position_x: 7,
            position_y: 9,
        })
    }

    async fn get_screen_size(
        &self,
        _req: GetScreenSizeRequest,
    ) -> Result<ScreenDimensions, ToolError> {
        self.record("get_screen_size".to_string());
        Ok(ScreenDimensions {
            width: 1920,
            height: 1080,
        })
    }

    async fn change_password(&self, req: ChangePasswordRequest) -> Result<(), ToolError> {
        self.record(format!("change_password({})", req.username));
        Ok(())
    }
}

/// In-memory `tracing` writer for asserting on formatted log lines.
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Arc<parking_lot::Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    /// A debug-level subscriber that formats into this buffer.
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        let writer = self.clone();
        tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
