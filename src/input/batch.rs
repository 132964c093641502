//! Pure record builders for injection batches.
//!
//! Each builder composes flags and payloads without touching the OS; the
//! extra-info token is pulled from an injected source so the façade can wire
//! in the live OS query while tests substitute their own. The source is
//! queried once per record, never cached across records.
//!
//! Ordering contract: within one batch the Down record always precedes its
//! Up record, and the OS processes the batch in slice order.

use super::flags::{KeyEventFlags, KeyState, MouseAction, MouseEventFlags};
use super::record::{InputRecord, KeyInput, KeyboardPayload, MousePayload};

fn mouse_record(
    dx: i32,
    dy: i32,
    data: i32,
    flags: MouseEventFlags,
    extra: &mut impl FnMut() -> isize,
) -> InputRecord {
    InputRecord::Mouse(MousePayload {
        dx,
        dy,
        data,
        flags,
        time: 0,
        extra_info: extra(),
    })
}

fn key_record(
    vk: u16,
    scan: u16,
    flags: KeyEventFlags,
    extra: &mut impl FnMut() -> isize,
) -> InputRecord {
    InputRecord::Keyboard(KeyboardPayload {
        vk,
        scan,
        flags,
        time: 0,
        extra_info: extra(),
    })
}

fn move_flags(absolute: bool, virtual_desk: bool) -> MouseEventFlags {
    let mut flags = MouseEventFlags::MOVE;
    if absolute {
        flags |= MouseEventFlags::ABSOLUTE;
    }
    if virtual_desk {
        flags |= MouseEventFlags::VIRTUAL_DESK;
    }
    flags
}

/// One Move record, relative by default, absolute/virtual-desktop on request.
pub fn mouse_move(
    x: i32,
    y: i32,
    absolute: bool,
    virtual_desk: bool,
    mut extra: impl FnMut() -> isize,
) -> InputRecord {
    mouse_record(x, y, 0, move_flags(absolute, virtual_desk), &mut extra)
}

/// One Wheel record carrying the delta in the data field.
pub fn mouse_wheel(delta: i16, mut extra: impl FnMut() -> isize) -> InputRecord {
    mouse_record(0, 0, delta as i32, MouseEventFlags::WHEEL, &mut extra)
}

/// Button action expansion: one record, plus an Up-only follow-up for the
/// four Click variants.
pub fn mouse_button(action: MouseAction, mut extra: impl FnMut() -> isize) -> Vec<InputRecord> {
    let first = mouse_record(0, 0, 0, action.press_flags(), &mut extra);
    if action.is_click() {
        let second = mouse_record(0, 0, 0, action.release_flags(), &mut extra);
        vec![first, second]
    } else {
        vec![first]
    }
}

/// Combined move + wheel + button in a single first record.
///
/// Move is always flagged; Wheel only when the delta is nonzero; the button
/// contributes its press flag. A Click action still appends its Up-only
/// record, which repeats none of the move or wheel data.
pub fn mouse_combined(
    x: i32,
    y: i32,
    wheel: i16,
    action: MouseAction,
    absolute: bool,
    virtual_desk: bool,
    mut extra: impl FnMut() -> isize,
) -> Vec<InputRecord> {
    let mut flags = move_flags(absolute, virtual_desk);
    let mut data = 0;
    if wheel != 0 {
        flags |= MouseEventFlags::WHEEL;
        data = wheel as i32;
    }
    flags |= action.press_flags();

    let first = mouse_record(x, y, data, flags, &mut extra);
    if action.is_click() {
        let second = mouse_record(0, 0, 0, action.release_flags(), &mut extra);
        vec![first, second]
    } else {
        vec![first]
    }
}

/// Raw flag combination: the caller owns the bitset, no pairing logic.
pub fn mouse_raw(
    x: i32,
    y: i32,
    wheel: i16,
    flags: MouseEventFlags,
    mut extra: impl FnMut() -> isize,
) -> InputRecord {
    mouse_record(x, y, wheel as i32, flags, &mut extra)
}

/// `KeyState` expansion for any key source: Click is a Down record then an
/// Up record, Down/Up a single record carrying only the matching transition.
pub fn keyboard(
    key: KeyInput,
    state: KeyState,
    mut extra: impl FnMut() -> isize,
) -> Vec<InputRecord> {
    // UNICODE and SCANCODE route the code through the scan field, vk zeroed.
    let (vk, scan, marker) = match key {
        KeyInput::VirtualKey(vk) => (vk, 0, KeyEventFlags::empty()),
        KeyInput::Unicode(c) => (0, c as u16, KeyEventFlags::UNICODE),
        KeyInput::ScanCode(scan) => (0, scan, KeyEventFlags::SCANCODE),
    };

    match state {
        KeyState::Click => vec![
            key_record(vk, scan, marker, &mut extra),
            key_record(vk, scan, marker | KeyEventFlags::KEY_UP, &mut extra),
        ],
        KeyState::Down => vec![key_record(vk, scan, marker, &mut extra)],
        KeyState::Up => vec![key_record(vk, scan, marker | KeyEventFlags::KEY_UP, &mut extra)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Deterministic stand-in for the OS extra-info query.
    fn counting_source() -> (std::rc::Rc<std::cell::Cell<isize>>, impl FnMut() -> isize) {
        let calls = std::rc::Rc::new(std::cell::Cell::new(0));
        let seen = calls.clone();
        let source = move || {
            seen.set(seen.get() + 1);
            seen.get()
        };
        (calls, source)
    }

    fn mouse_payload(record: &InputRecord) -> MousePayload {
        match record {
            InputRecord::Mouse(payload) => *payload,
            other => panic!("expected mouse record, got {other:?}"),
        }
    }

    fn key_payload(record: &InputRecord) -> KeyboardPayload {
        match record {
            InputRecord::Keyboard(payload) => *payload,
            other => panic!("expected keyboard record, got {other:?}"),
        }
    }

    #[test]
    fn test_move_record_flags() {
        let record = mouse_move(10, -4, false, false, || 0);
        assert_eq!(record.mouse_flags(), MouseEventFlags::MOVE);

        let record = mouse_move(1, 1, true, true, || 0);
        assert_eq!(
            record.mouse_flags(),
            MouseEventFlags::MOVE | MouseEventFlags::ABSOLUTE | MouseEventFlags::VIRTUAL_DESK
        );
        let payload = mouse_payload(&record);
        assert_eq!((payload.dx, payload.dy, payload.data), (1, 1, 0));
    }

    #[test]
    fn test_wheel_record_carries_delta() {
        let payload = mouse_payload(&mouse_wheel(-120, || 0));
        assert_eq!(payload.flags, MouseEventFlags::WHEEL);
        assert_eq!(payload.data, -120);
        assert_eq!((payload.dx, payload.dy), (0, 0));
    }

    #[test]
    fn test_click_produces_down_then_up() {
        let batch = mouse_button(MouseAction::LeftClick, || 0);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].mouse_flags(), MouseEventFlags::LEFT_DOWN);
        assert_eq!(batch[1].mouse_flags(), MouseEventFlags::LEFT_UP);
    }

    #[test]
    fn test_non_click_actions_produce_one_record() {
        for raw in 0u8..=12 {
            let action = MouseAction::try_from(raw).unwrap();
            let batch = mouse_button(action, || 0);
            let expected = if action.is_click() { 2 } else { 1 };
            assert_eq!(batch.len(), expected, "{action:?}");
            assert_eq!(batch[0].mouse_flags(), action.press_flags());
        }
    }

    #[test]
    fn test_combined_wheel_flag_iff_nonzero_delta() {
        let batch = mouse_combined(5, 5, 0, MouseAction::None, false, false, || 0);
        assert_eq!(batch.len(), 1);
        let payload = mouse_payload(&batch[0]);
        assert!(!payload.flags.contains(MouseEventFlags::WHEEL));
        assert_eq!(payload.data, 0);

        let batch = mouse_combined(5, 5, 120, MouseAction::None, false, false, || 0);
        let payload = mouse_payload(&batch[0]);
        assert!(payload.flags.contains(MouseEventFlags::MOVE));
        assert!(payload.flags.contains(MouseEventFlags::WHEEL));
        assert_eq!(payload.data, 120);
    }

    #[test]
    fn test_combined_click_appends_bare_up_record() {
        let batch = mouse_combined(30, 40, 120, MouseAction::RightClick, true, false, || 7);
        assert_eq!(batch.len(), 2);

        let first = mouse_payload(&batch[0]);
        assert!(first.flags.contains(MouseEventFlags::MOVE));
        assert!(first.flags.contains(MouseEventFlags::ABSOLUTE));
        assert!(first.flags.contains(MouseEventFlags::WHEEL));
        assert!(first.flags.contains(MouseEventFlags::RIGHT_DOWN));

        // Follow-up record carries only the release flag, no repeated data.
        let second = mouse_payload(&batch[1]);
        assert_eq!(second.flags, MouseEventFlags::RIGHT_UP);
        assert_eq!((second.dx, second.dy, second.data), (0, 0, 0));
    }

    #[test]
    fn test_combined_down_action_is_single_record() {
        let batch = mouse_combined(0, 0, 0, MouseAction::MiddleDown, false, false, || 0);
        assert_eq!(batch.len(), 1);
        assert!(batch[0].mouse_flags().contains(MouseEventFlags::MIDDLE_DOWN));
    }

    #[test]
    fn test_raw_flags_pass_through_unpaired() {
        let flags = MouseEventFlags::MOVE | MouseEventFlags::LEFT_DOWN;
        let record = mouse_raw(3, 4, 60, flags, || 0);
        let payload = mouse_payload(&record);
        assert_eq!(payload.flags, flags);
        assert_eq!(payload.data, 60);
    }

    #[test]
    fn test_key_click_produces_down_then_up() {
        let batch = keyboard(KeyInput::VirtualKey(0x41), KeyState::Click, || 0);
        assert_eq!(batch.len(), 2);
        assert!(!batch[0].key_flags().contains(KeyEventFlags::KEY_UP));
        assert!(batch[1].key_flags().contains(KeyEventFlags::KEY_UP));
        assert_eq!(key_payload(&batch[0]).vk, 0x41);
        assert_eq!(key_payload(&batch[1]).vk, 0x41);
    }

    #[test]
    fn test_key_down_and_up_are_single_records() {
        let down = keyboard(KeyInput::VirtualKey(0x0D), KeyState::Down, || 0);
        assert_eq!(down.len(), 1);
        assert_eq!(down[0].key_flags(), KeyEventFlags::empty());

        let up = keyboard(KeyInput::VirtualKey(0x0D), KeyState::Up, || 0);
        assert_eq!(up.len(), 1);
        assert_eq!(up[0].key_flags(), KeyEventFlags::KEY_UP);
    }

    #[test]
    fn test_unicode_marker_and_field_routing() {
        let batch = keyboard(KeyInput::Unicode('ж'), KeyState::Click, || 0);
        for record in &batch {
            let payload = key_payload(record);
            assert!(payload.flags.contains(KeyEventFlags::UNICODE));
            assert_eq!(payload.vk, 0);
            assert_eq!(payload.scan, 'ж' as u16);
        }
    }

    #[test]
    fn test_scan_code_marker_and_field_routing() {
        let batch = keyboard(KeyInput::ScanCode(0x1C), KeyState::Down, || 0);
        let payload = key_payload(&batch[0]);
        assert!(payload.flags.contains(KeyEventFlags::SCANCODE));
        assert_eq!(payload.vk, 0);
        assert_eq!(payload.scan, 0x1C);
    }

    #[test]
    fn test_extra_info_queried_once_per_record() {
        let (calls, source) = counting_source();
        let batch = mouse_button(MouseAction::LeftClick, source);
        assert_eq!(calls.get(), 2);
        // Each record saw a fresh token, in construction order.
        assert_eq!(mouse_payload(&batch[0]).extra_info, 1);
        assert_eq!(mouse_payload(&batch[1]).extra_info, 2);

        let (calls, source) = counting_source();
        keyboard(KeyInput::ScanCode(0x1E), KeyState::Up, source);
        assert_eq!(calls.get(), 1);
    }
}
