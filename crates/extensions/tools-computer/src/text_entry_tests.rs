use super::*;
use crate::backend::NamedHost;
use crate::testing::{MemoryClipboard, RecordingInput, SharedBuffer};

fn linux() -> NamedHost {
    NamedHost("Linux".to_string())
}

fn enter(
    text: &str,
    input: &mut RecordingInput,
    clipboard: &mut MemoryClipboard,
    host: &NamedHost,
) -> Result<TextEntryOutcome, TextEntryError> {
    TextEntry::new(TextEntryTimings::immediate()).enter(text, input, move || Ok(clipboard), host)
}

fn non_ascii(c: char) -> bool {
    !c.is_ascii()
}

#[test]
fn test_ascii_text_is_typed_without_touching_clipboard() {
    let mut input = RecordingInput::new();
    let mut clipboard = MemoryClipboard::with_content("before");

    let outcome = enter("hello", &mut input, &mut clipboard, &linux()).unwrap();

    assert_eq!(outcome, TextEntryOutcome::Typed { chars: 5 });
    assert_eq!(input.typed(), "hello");
    assert!(input.hotkeys().is_empty());
    assert!(clipboard.writes.is_empty());
    assert_eq!(clipboard.reads, 0);
    assert_eq!(clipboard.content.as_deref(), Some("before"));
}

#[test]
fn test_empty_text_types_nothing() {
    let mut input = RecordingInput::new();
    let mut clipboard = MemoryClipboard::default();

    let outcome = enter("", &mut input, &mut clipboard, &linux()).unwrap();

    assert_eq!(outcome, TextEntryOutcome::Typed { chars: 0 });
    assert!(input.events.is_empty());
}

#[test]
fn test_clipboard_not_opened_when_typing_succeeds() {
    let mut input = RecordingInput::new();
    let outcome = TextEntry::new(TextEntryTimings::immediate()).enter(
        "ok",
        &mut input,
        || -> Result<MemoryClipboard, ClipboardError> {
            Err(ClipboardError::AccessFailed("no clipboard".to_string()))
        },
        &linux(),
    );
    assert_eq!(outcome.unwrap(), TextEntryOutcome::Typed { chars: 2 });
}

#[test]
fn test_failed_character_falls_back_to_paste() {
    let mut input = RecordingInput::rejecting(non_ascii);
    let mut clipboard = MemoryClipboard::with_content("before");

    let outcome = enter("ab中文cd", &mut input, &mut clipboard, &linux()).unwrap();

    // Typing stops at the first rejected character.
    assert_eq!(input.typed(), "ab中");
    assert_eq!(input.type_attempts(), 3);
    assert_eq!(clipboard.writes, vec!["ab中文cd".to_string()]);
    assert_eq!(input.hotkeys(), vec![vec!["ctrl".to_string(), "v".to_string()]]);
    assert_eq!(
        outcome,
        TextEntryOutcome::Pasted {
            previous: ClipboardSnapshot::Captured("before".to_string()),
            verified: true,
            shortcut: PasteShortcut::CtrlV,
        }
    );
}

#[test]
fn test_first_character_failure_skips_remaining_characters() {
    let mut input = RecordingInput::rejecting(|_| true);
    let mut clipboard = MemoryClipboard::default();

    enter("abc", &mut input, &mut clipboard, &linux()).unwrap();

    assert_eq!(input.type_attempts(), 1);
    assert_eq!(input.hotkeys().len(), 1);
}

#[test]
fn test_paste_shortcut_on_darwin() {
    let mut input = RecordingInput::rejecting(non_ascii);
    let mut clipboard = MemoryClipboard::default();

    let outcome = enter(
        "héllo",
        &mut input,
        &mut clipboard,
        &NamedHost("Darwin".to_string()),
    )
    .unwrap();

    assert_eq!(input.hotkeys(), vec![vec!["command".to_string(), "v".to_string()]]);
    assert!(matches!(
        outcome,
        TextEntryOutcome::Pasted {
            shortcut: PasteShortcut::CommandV,
            ..
        }
    ));
}

#[test]
fn test_paste_shortcut_on_other_hosts() {
    for system in ["Linux", "Windows", "FreeBSD", "darwin"] {
        let mut input = RecordingInput::rejecting(non_ascii);
        let mut clipboard = MemoryClipboard::default();

        enter("日本", &mut input, &mut clipboard, &NamedHost(system.to_string())).unwrap();

        assert_eq!(
            input.hotkeys(),
            vec![vec!["ctrl".to_string(), "v".to_string()]],
            "system {}",
            system
        );
    }
}

#[test]
fn test_unreadable_previous_clipboard_is_tolerated() {
    let mut input = RecordingInput::rejecting(non_ascii);
    let mut clipboard = MemoryClipboard::default()
        .script_read(Err(ClipboardError::AccessFailed("busy".to_string())));

    let outcome = enter("ü", &mut input, &mut clipboard, &linux()).unwrap();

    assert_eq!(
        outcome,
        TextEntryOutcome::Pasted {
            previous: ClipboardSnapshot::Unknown,
            verified: true,
            shortcut: PasteShortcut::CtrlV,
        }
    );
}

#[test]
fn test_clipboard_mismatch_still_pastes() {
    let mut input = RecordingInput::rejecting(non_ascii);
    let mut clipboard = MemoryClipboard::default()
        .script_read(Ok("before".to_string()))
        .script_read(Ok("stale".to_string()));

    let outcome = enter("ñ", &mut input, &mut clipboard, &linux()).unwrap();

    assert!(matches!(
        outcome,
        TextEntryOutcome::Pasted { verified: false, .. }
    ));
    assert_eq!(input.hotkeys().len(), 1);
}

#[test]
fn test_failed_verification_read_aborts_before_paste() {
    let mut input = RecordingInput::rejecting(non_ascii);
    let mut clipboard = MemoryClipboard::default()
        .script_read(Ok("before".to_string()))
        .script_read(Err(ClipboardError::AccessFailed("busy".to_string())));

    let result = enter("ñ", &mut input, &mut clipboard, &linux());

    assert!(matches!(result, Err(TextEntryError::Clipboard(_))));
    assert_eq!(clipboard.writes, vec!["ñ".to_string()]);
    assert!(input.hotkeys().is_empty());
}

#[test]
fn test_previous_clipboard_is_not_restored() {
    let mut input = RecordingInput::rejecting(non_ascii);
    let mut clipboard = MemoryClipboard::with_content("keep me");

    enter("ß", &mut input, &mut clipboard, &linux()).unwrap();

    assert_eq!(clipboard.writes, vec!["ß".to_string()]);
    assert_eq!(clipboard.content.as_deref(), Some("ß"));
}

#[test]
fn test_clipboard_write_failure_is_terminal() {
    let mut input = RecordingInput::rejecting(non_ascii);
    let mut clipboard = MemoryClipboard::default().failing_writes();

    let result = enter("ø", &mut input, &mut clipboard, &linux());

    assert!(matches!(result, Err(TextEntryError::Clipboard(_))));
    assert!(input.hotkeys().is_empty());
}

#[test]
fn test_paste_shortcut_failure_is_terminal() {
    let mut input = RecordingInput::rejecting(non_ascii).with_failing_hotkey();
    let mut clipboard = MemoryClipboard::default();

    let result = enter("ø", &mut input, &mut clipboard, &linux());

    assert!(matches!(result, Err(TextEntryError::PasteShortcut(_))));
    assert_eq!(clipboard.writes.len(), 1);
}

#[test]
fn test_clipboard_open_failure_is_terminal() {
    let mut input = RecordingInput::rejecting(non_ascii);
    let result = TextEntry::new(TextEntryTimings::immediate()).enter(
        "ø",
        &mut input,
        || -> Result<MemoryClipboard, ClipboardError> {
            Err(ClipboardError::AccessFailed("no display".to_string()))
        },
        &linux(),
    );

    match result {
        Err(TextEntryError::Clipboard(ClipboardError::AccessFailed(msg))) => {
            assert_eq!(msg, "no display")
        }
        other => panic!("Expected clipboard error, got {:?}", other),
    }
    assert!(input.hotkeys().is_empty());
}

#[test]
fn test_default_timings() {
    let timings = TextEntryTimings::default();
    assert_eq!(timings.char_interval, Duration::from_millis(50));
    assert_eq!(timings.clipboard_settle, Duration::from_millis(200));
    assert_eq!(TextEntry::default().timings(), timings);
}

#[test]
fn test_paste_shortcut_keys() {
    assert_eq!(PasteShortcut::for_system("Darwin").keys(), &["command", "v"]);
    assert_eq!(PasteShortcut::for_system("Linux").keys(), &["ctrl", "v"]);
}

#[test]
fn test_injected_dispatch_receives_fallback_events() {
    let buffer = SharedBuffer::default();
    let entry = TextEntry::new(TextEntryTimings::immediate())
        .with_dispatch(Dispatch::new(buffer.subscriber()));
    let mut input = RecordingInput::rejecting(non_ascii);
    let mut clipboard = MemoryClipboard::default()
        .script_read(Ok("before".to_string()))
        .script_read(Ok("stale".to_string()));
    let clipboard_ref = &mut clipboard;

    entry
        .enter("中", &mut input, move || Ok(clipboard_ref), &linux())
        .unwrap();

    let logs = buffer.contents();
    assert!(logs.contains("Direct typing failed"));
    assert!(logs.contains("Clipboard content mismatch"));
}
