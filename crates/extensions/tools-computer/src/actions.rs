//! Input actions, synchronous and generic over the input backend.

use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::backend::{ButtonAction, InputBackend, MouseButton, ScrollAxis};
use crate::geometry::{plan_drag_path, Point};
use crate::input::InputError;
use crate::requests::*;

/// Pause between the two clicks of a double click.
pub const DOUBLE_CLICK_INTERVAL: Duration = Duration::from_millis(50);

pub fn move_mouse<I>(input: &mut I, req: &MoveMouseRequest) -> Result<(), InputError>
where
    I: InputBackend + ?Sized,
{
    input.move_to(req.x, req.y)
}

pub fn click_mouse<I>(input: &mut I, req: &ClickMouseRequest) -> Result<(), InputError>
where
    I: InputBackend + ?Sized,
{
    input.move_to(req.x, req.y)?;

    let button = match req.button {
        ClickButton::Left | ClickButton::DoubleClick | ClickButton::DoubleLeft => MouseButton::Left,
        ClickButton::Right => MouseButton::Right,
        ClickButton::Middle => MouseButton::Middle,
    };

    match (req.press, req.release) {
        (true, false) => input.button(button, ButtonAction::Press),
        (false, true) => input.button(button, ButtonAction::Release),
        _ if matches!(req.button, ClickButton::DoubleClick | ClickButton::DoubleLeft) => {
            input.button(button, ButtonAction::Click)?;
            thread::sleep(DOUBLE_CLICK_INTERVAL);
            input.button(button, ButtonAction::Click)
        }
        _ => input.button(button, ButtonAction::Click),
    }
}

pub fn press_mouse<I>(input: &mut I, req: &PressMouseRequest) -> Result<(), InputError>
where
    I: InputBackend + ?Sized,
{
    input.move_to(req.x, req.y)?;
    input.button(req.button, ButtonAction::Press)
}

pub fn release_mouse<I>(input: &mut I, req: &ReleaseMouseRequest) -> Result<(), InputError>
where
    I: InputBackend + ?Sized,
{
    input.move_to(req.x, req.y)?;
    input.button(req.button, ButtonAction::Release)
}

/// Press at the source, visit every planned point, release at the target.
pub fn drag_mouse<I>(
    input: &mut I,
    req: &DragMouseRequest,
    interval: Duration,
) -> Result<(), InputError>
where
    I: InputBackend + ?Sized,
{
    let path = plan_drag_path(
        Point::new(req.source_x, req.source_y),
        Point::new(req.target_x, req.target_y),
    );
    debug!(points = path.len(), "Dragging mouse");

    input.move_to(req.source_x, req.source_y)?;
    input.button(MouseButton::Left, ButtonAction::Press)?;

    let moved = path.points().iter().try_for_each(|p| {
        input.move_to(p.x, p.y)?;
        thread::sleep(interval);
        Ok::<_, InputError>(())
    });

    // Never leave the button held, even if a move failed.
    let released = input.button(MouseButton::Left, ButtonAction::Release);
    moved.and(released)
}

pub fn scroll<I>(input: &mut I, req: &ScrollRequest) -> Result<(), InputError>
where
    I: InputBackend + ?Sized,
{
    input.move_to(req.x, req.y)?;

    let amount = req.scroll_amount;
    let (amount, axis) = match req.scroll_direction {
        ScrollDirection::Up => (-amount, ScrollAxis::Vertical),
        ScrollDirection::Down => (amount, ScrollAxis::Vertical),
        ScrollDirection::Left => (-amount, ScrollAxis::Horizontal),
        ScrollDirection::Right => (amount, ScrollAxis::Horizontal),
    };
    input.scroll(amount, axis)
}

/// Press a key or a `+`-joined combination such as `ctrl+shift+t`.
pub fn press_key<I>(input: &mut I, req: &PressKeyRequest) -> Result<(), InputError>
where
    I: InputBackend + ?Sized,
{
    let key = req.key.trim();
    if key.len() > 1 && key.contains('+') {
        let keys: Vec<&str> = key.split('+').map(str::trim).collect();
        if keys.iter().any(|k| k.is_empty()) {
            return Err(InputError::InvalidKey(req.key.clone()));
        }
        input.hotkey(&keys)
    } else {
        input.key_press(key)
    }
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod tests;
