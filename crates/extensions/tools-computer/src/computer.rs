//! The computer action interface and its local desktop implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, Dispatch};

use deskpilot_protocols::ToolError;

use crate::actions;
use crate::backend::{CurrentHost, InputBackend};
use crate::clipboard::ClipboardController;
use crate::input::{InputController, InputError};
use crate::output::{CursorPosition, ScreenDimensions, ScreenshotImage, TextEntryReport};
use crate::password;
use crate::requests::*;
use crate::screenshot;
use crate::text_entry::{TextEntry, TextEntryTimings};

/// One method per supported action.
#[async_trait]
pub trait ComputerTool: Send + Sync {
    async fn move_mouse(&self, req: MoveMouseRequest) -> Result<(), ToolError>;

    async fn click_mouse(&self, req: ClickMouseRequest) -> Result<(), ToolError>;

    async fn press_mouse(&self, req: PressMouseRequest) -> Result<(), ToolError>;

    async fn release_mouse(&self, req: ReleaseMouseRequest) -> Result<(), ToolError>;

    async fn drag_mouse(&self, req: DragMouseRequest) -> Result<(), ToolError>;

    async fn scroll(&self, req: ScrollRequest) -> Result<(), ToolError>;

    async fn press_key(&self, req: PressKeyRequest) -> Result<(), ToolError>;

    async fn type_text(&self, req: TypeTextRequest) -> Result<TextEntryReport, ToolError>;

    async fn wait(&self, req: WaitRequest) -> Result<(), ToolError>;

    async fn take_screenshot(
        &self,
        req: TakeScreenshotRequest,
    ) -> Result<ScreenshotImage, ToolError>;

    async fn get_cursor_position(
        &self,
        req: GetCursorPositionRequest,
    ) -> Result<CursorPosition, ToolError>;

    async fn get_screen_size(
        &self,
        req: GetScreenSizeRequest,
    ) -> Result<ScreenDimensions, ToolError>;

    async fn change_password(&self, req: ChangePasswordRequest) -> Result<(), ToolError>;
}

/// Timing and process settings for [`LocalComputer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputerSettings {
    pub text_entry: TextEntryTimings,
    /// Pause after each intermediate drag move.
    pub drag_interval: Duration,
    pub password_program: String,
    pub password_timeout: Duration,
}

impl Default for ComputerSettings {
    fn default() -> Self {
        Self {
            text_entry: TextEntryTimings::default(),
            drag_interval: Duration::from_millis(10),
            password_program: "chpasswd".to_string(),
            password_timeout: Duration::from_secs(30),
        }
    }
}

/// Drives the desktop this process runs on.
///
/// Actions are serialized: each one holds the desktop lock for its whole duration,
/// so a drag or a clipboard paste is never interleaved with another action.
pub struct LocalComputer {
    settings: ComputerSettings,
    desktop: Arc<Mutex<()>>,
    dispatch: Option<Dispatch>,
}

impl LocalComputer {
    pub fn new(settings: ComputerSettings) -> Self {
        Self {
            settings,
            desktop: Arc::new(Mutex::new(())),
            dispatch: None,
        }
    }

    /// Send text entry logs to `dispatch` rather than the global subscriber.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    pub fn settings(&self) -> &ComputerSettings {
        &self.settings
    }

    fn text_entry(&self) -> TextEntry {
        let entry = TextEntry::new(self.settings.text_entry);
        match &self.dispatch {
            Some(dispatch) => entry.with_dispatch(dispatch.clone()),
            None => entry,
        }
    }

    /// Run blocking desktop work on the blocking pool while holding the desktop lock.
    async fn run_blocking<F, T>(&self, f: F) -> Result<T, ToolError>
    where
        F: FnOnce() -> Result<T, ToolError> + Send + 'static,
        T: Send + 'static,
    {
        let desktop = Arc::clone(&self.desktop);
        tokio::task::spawn_blocking(move || {
            let _guard = desktop.lock();
            f()
        })
        .await
        .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?
    }

    /// Run `f` against a fresh input controller.
    async fn with_input<F, T>(&self, f: F) -> Result<T, ToolError>
    where
        F: FnOnce(&mut dyn InputBackend) -> Result<T, InputError> + Send + 'static,
        T: Send + 'static,
    {
        self.run_blocking(move || {
            let mut input = InputController::new()?;
            Ok(f(&mut input)?)
        })
        .await
    }
}

impl Default for LocalComputer {
    fn default() -> Self {
        Self::new(ComputerSettings::default())
    }
}

#[async_trait]
impl ComputerTool for LocalComputer {
    async fn move_mouse(&self, req: MoveMouseRequest) -> Result<(), ToolError> {
        self.with_input(move |input| actions::move_mouse(input, &req))
            .await
    }

    async fn click_mouse(&self, req: ClickMouseRequest) -> Result<(), ToolError> {
        self.with_input(move |input| actions::click_mouse(input, &req))
            .await
    }

    async fn press_mouse(&self, req: PressMouseRequest) -> Result<(), ToolError> {
        self.with_input(move |input| actions::press_mouse(input, &req))
            .await
    }

    async fn release_mouse(&self, req: ReleaseMouseRequest) -> Result<(), ToolError> {
        self.with_input(move |input| actions::release_mouse(input, &req))
            .await
    }

    async fn drag_mouse(&self, req: DragMouseRequest) -> Result<(), ToolError> {
        let interval = self.settings.drag_interval;
        self.with_input(move |input| actions::drag_mouse(input, &req, interval))
            .await
    }

    async fn scroll(&self, req: ScrollRequest) -> Result<(), ToolError> {
        self.with_input(move |input| actions::scroll(input, &req))
            .await
    }

    async fn press_key(&self, req: PressKeyRequest) -> Result<(), ToolError> {
        self.with_input(move |input| actions::press_key(input, &req))
            .await
    }

    async fn type_text(&self, req: TypeTextRequest) -> Result<TextEntryReport, ToolError> {
        let entry = self.text_entry();
        self.run_blocking(move || {
            let mut input = InputController::new()?;
            let outcome = entry.enter(&req.text, &mut input, ClipboardController::new, &CurrentHost)?;
            Ok(TextEntryReport::from(&outcome))
        })
        .await
    }

    async fn wait(&self, req: WaitRequest) -> Result<(), ToolError> {
        debug!(duration_ms = req.duration, "Waiting");
        tokio::time::sleep(Duration::from_millis(req.duration)).await;
        Ok(())
    }

    async fn take_screenshot(
        &self,
        _req: TakeScreenshotRequest,
    ) -> Result<ScreenshotImage, ToolError> {
        self.run_blocking(|| Ok(screenshot::capture_screen()?.into()))
            .await
    }

    async fn get_cursor_position(
        &self,
        _req: GetCursorPositionRequest,
    ) -> Result<CursorPosition, ToolError> {
        self.with_input(|input| input.cursor_position().map(CursorPosition::from))
            .await
    }

    async fn get_screen_size(
        &self,
        _req: GetScreenSizeRequest,
    ) -> Result<ScreenDimensions, ToolError> {
        self.run_blocking(|| Ok(screenshot::get_screen_size()?.into()))
            .await
    }

    async fn change_password(&self, req: ChangePasswordRequest) -> Result<(), ToolError> {
        password::validate_credentials(&req)?;
        if !cfg!(target_os = "linux") {
            return Err(ToolError::Unsupported(
                "change_password requires chpasswd on Linux".to_string(),
            ));
        }
        password::run_chpasswd(
            &self.settings.password_program,
            &req,
            self.settings.password_timeout,
        )
        .await
    }
}
