//! Routes a parsed request to the matching [`ComputerTool`] method.

use tracing::debug;

use deskpilot_protocols::ToolError;

use crate::computer::ComputerTool;
use crate::output::ActionOutput;
use crate::requests::ComputerRequest;

pub async fn dispatch<C>(computer: &C, request: ComputerRequest) -> Result<ActionOutput, ToolError>
where
    C: ComputerTool + ?Sized,
{
    debug!(action = request.action(), "Dispatching computer action");

    let output = match request {
        ComputerRequest::MoveMouse(req) => computer.move_mouse(req).await.map(done)?,
        ComputerRequest::ClickMouse(req) => computer.click_mouse(req).await.map(done)?,
        ComputerRequest::PressMouse(req) => computer.press_mouse(req).await.map(done)?,
        ComputerRequest::ReleaseMouse(req) => computer.release_mouse(req).await.map(done)?,
        ComputerRequest::DragMouse(req) => computer.drag_mouse(req).await.map(done)?,
        ComputerRequest::Scroll(req) => computer.scroll(req).await.map(done)?,
        ComputerRequest::PressKey(req) => computer.press_key(req).await.map(done)?,
        ComputerRequest::TypeText(req) => ActionOutput::Text(computer.type_text(req).await?),
        ComputerRequest::Wait(req) => computer.wait(req).await.map(done)?,
        ComputerRequest::TakeScreenshot(req) => {
            ActionOutput::Screenshot(computer.take_screenshot(req).await?)
        }
        ComputerRequest::GetCursorPosition(req) => {
            ActionOutput::Position(computer.get_cursor_position(req).await?)
        }
        ComputerRequest::GetScreenSize(req) => {
            ActionOutput::Size(computer.get_screen_size(req).await?)
        }
        ComputerRequest::ChangePassword(req) => computer.change_password(req).await.map(done)?,
    };
    Ok(output)
}

fn done(_: ()) -> ActionOutput {
    ActionOutput::Done
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
