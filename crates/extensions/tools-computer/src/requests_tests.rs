use super::*;
use serde_json::json;

#[test]
fn test_move_mouse_external_names() {
    let req: MoveMouseRequest =
        serde_json::from_value(json!({"PositionX": 100, "PositionY": 200})).unwrap();
    assert_eq!(req, MoveMouseRequest { x: 100, y: 200 });
}

#[test]
fn test_move_mouse_internal_names() {
    let req: MoveMouseRequest = serde_json::from_value(json!({"x": -5, "y": 7})).unwrap();
    assert_eq!(req, MoveMouseRequest { x: -5, y: 7 });
}

#[test]
fn test_move_mouse_defaults() {
    let req: MoveMouseRequest = serde_json::from_value(json!({})).unwrap();
    assert_eq!(req, MoveMouseRequest { x: 0, y: 0 });
}

#[test]
fn test_numbers_from_strings() {
    let req: DragMouseRequest = serde_json::from_value(json!({
        "SourceX": "10",
        "SourceY": " 20 ",
        "TargetX": 30.0,
        "TargetY": -40
    }))
    .unwrap();
    assert_eq!(
        req,
        DragMouseRequest {
            source_x: 10,
            source_y: 20,
            target_x: 30,
            target_y: -40
        }
    );
}

#[test]
fn test_non_integer_rejected() {
    assert!(serde_json::from_value::<MoveMouseRequest>(json!({"PositionX": 1.5})).is_err());
    assert!(serde_json::from_value::<MoveMouseRequest>(json!({"PositionX": "left"})).is_err());
}

#[test]
fn test_out_of_range_rejected() {
    assert!(
        serde_json::from_value::<MoveMouseRequest>(json!({"PositionX": 5_000_000_000i64})).is_err()
    );
    assert!(serde_json::from_value::<WaitRequest>(json!({"Duration": -1})).is_err());
}

#[test]
fn test_click_mouse_defaults() {
    let req: ClickMouseRequest = serde_json::from_value(json!({})).unwrap();
    assert_eq!(req.button, ClickButton::Left);
    assert!(!req.press);
    assert!(!req.release);
}

#[test]
fn test_click_mouse_full() {
    let req: ClickMouseRequest = serde_json::from_value(json!({
        "PositionX": "5",
        "PositionY": "6",
        "Button": "double_click",
        "Press": "true",
        "Release": "false"
    }))
    .unwrap();
    assert_eq!(req.x, 5);
    assert_eq!(req.y, 6);
    assert_eq!(req.button, ClickButton::DoubleClick);
    assert!(req.press);
    assert!(!req.release);
}

#[test]
fn test_click_button_variants() {
    for (name, expected) in [
        ("left", ClickButton::Left),
        ("right", ClickButton::Right),
        ("middle", ClickButton::Middle),
        ("double_click", ClickButton::DoubleClick),
        ("double_left", ClickButton::DoubleLeft),
    ] {
        let req: ClickMouseRequest = serde_json::from_value(json!({ "Button": name })).unwrap();
        assert_eq!(req.button, expected);
    }
    assert!(serde_json::from_value::<ClickMouseRequest>(json!({"Button": "side"})).is_err());
}

#[test]
fn test_press_mouse_rejects_double_click() {
    assert!(
        serde_json::from_value::<PressMouseRequest>(json!({"Button": "double_click"})).is_err()
    );
    let req: ReleaseMouseRequest = serde_json::from_value(json!({"Button": "right"})).unwrap();
    assert_eq!(req.button, MouseButton::Right);
}

#[test]
fn test_boolean_spellings() {
    for (raw, expected) in [
        (json!(true), true),
        (json!(1), true),
        (json!("yes"), true),
        (json!("False"), false),
        (json!(0), false),
        (json!(""), false),
    ] {
        let req: ClickMouseRequest = serde_json::from_value(json!({ "Press": raw })).unwrap();
        assert_eq!(req.press, expected);
    }
    assert!(serde_json::from_value::<ClickMouseRequest>(json!({"Press": "maybe"})).is_err());
}

#[test]
fn test_scroll_request() {
    let req: ScrollRequest = serde_json::from_value(json!({
        "Direction": "down",
        "Amount": 3,
        "PositionX": 400,
        "PositionY": 300
    }))
    .unwrap();
    assert_eq!(req.scroll_direction, ScrollDirection::Down);
    assert_eq!(req.scroll_amount, 3);
    assert_eq!((req.x, req.y), (400, 300));

    let default: ScrollRequest = serde_json::from_value(json!({})).unwrap();
    assert_eq!(default.scroll_direction, ScrollDirection::Up);
}

#[test]
fn test_text_fields_accept_scalars() {
    let req: PressKeyRequest = serde_json::from_value(json!({"Key": 5})).unwrap();
    assert_eq!(req.key, "5");

    let req: TypeTextRequest = serde_json::from_value(json!({"Text": "你好"})).unwrap();
    assert_eq!(req.text, "你好");
}

#[test]
fn test_unknown_fields_ignored() {
    let req: TakeScreenshotRequest =
        serde_json::from_value(json!({"Version": "2020-04-01", "Extra": 1})).unwrap();
    assert_eq!(req, TakeScreenshotRequest {});
}

#[test]
fn test_serialize_uses_external_names() {
    let json = serde_json::to_value(MoveMouseRequest { x: 1, y: 2 }).unwrap();
    assert_eq!(json, json!({"PositionX": 1, "PositionY": 2}));
}

#[test]
fn test_change_password_debug_redacts() {
    let req = ChangePasswordRequest {
        username: "alice".to_string(),
        new_password: "hunter2".to_string(),
    };
    let debug = format!("{:?}", ComputerRequest::ChangePassword(req));
    assert!(debug.contains("alice"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn test_request_action_names() {
    assert_eq!(
        ComputerRequest::MoveMouse(MoveMouseRequest::default()).action(),
        "move_mouse"
    );
    assert_eq!(
        ComputerRequest::GetCursorPosition(GetCursorPositionRequest {}).action(),
        "get_cursor_position"
    );
}

#[test]
fn test_computer_request_serialization() {
    let json = serde_json::to_value(ComputerRequest::Wait(WaitRequest { duration: 10 })).unwrap();
    assert_eq!(json, json!({"Action": "Wait", "Params": {"Duration": 10}}));
}
