//! Tests for the dialog interaction state machine: hover, clicks, keys,
//! resizing and the close sequence.

use alertbox::model::{
    ButtonId, DialogCore, DialogFlags, DialogKey, DialogOptions, DialogPhase, DialogResult, Point,
    Rect, Size, Update,
};

fn core(flags: DialogFlags) -> DialogCore {
    let options = DialogOptions::from_flags(flags);
    DialogCore::new(options, Size::new(480, 200), Size::new(300, 40))
}

fn center(r: Rect) -> Point {
    Point::new((r.left + r.right) / 2, (r.top + r.bottom) / 2)
}

fn first_button(core: &DialogCore) -> Point {
    center(core.layout().button1)
}

fn second_button(core: &DialogCore) -> Point {
    center(core.layout().button2.unwrap())
}

// === Hover Tests ===

#[test]
fn hover_over_first_button_requests_repaint() {
    let mut core = core(DialogFlags::OK);
    let p = first_button(&core);
    assert_eq!(core.pointer_moved(p), Update::Repaint);
    assert_eq!(core.hovered(), Some(ButtonId::First));
}

#[test]
fn unchanged_hover_is_quiet() {
    let mut core = core(DialogFlags::OK);
    let p = first_button(&core);
    core.pointer_moved(p);
    assert_eq!(core.pointer_moved(p), Update::None);
}

#[test]
fn leaving_a_button_clears_hover() {
    let mut core = core(DialogFlags::OK);
    core.pointer_moved(first_button(&core));
    assert_eq!(core.pointer_moved(Point::new(1, 1)), Update::Repaint);
    assert_eq!(core.hovered(), None);
}

#[test]
fn hover_tracks_the_second_button() {
    let mut core = core(DialogFlags::OK_CANCEL);
    let p = second_button(&core);
    core.pointer_moved(p);
    assert_eq!(core.hovered(), Some(ButtonId::Second));
}

#[test]
fn pointer_outside_buttons_hovers_nothing() {
    let mut core = core(DialogFlags::OK_CANCEL);
    assert_eq!(core.pointer_moved(Point::new(1, 1)), Update::None);
    assert_eq!(core.hovered(), None);
}

// === Click Tests ===

#[test]
fn clicking_ok_confirms() {
    let mut core = core(DialogFlags::OK);
    let p = first_button(&core);
    assert_eq!(core.pointer_released(p), Update::Close);
    assert_eq!(core.phase(), DialogPhase::Closing);
    assert_eq!(core.final_result(), DialogResult::Ok);
}

#[test]
fn clicking_cancel_dismisses() {
    let mut core = core(DialogFlags::OK_CANCEL);
    let p = second_button(&core);
    assert_eq!(core.pointer_released(p), Update::Close);
    assert_eq!(core.final_result(), DialogResult::Cancel);
}

#[test]
fn clicking_yes_and_no_map_to_their_results() {
    let mut yes = core(DialogFlags::YES_NO);
    let p = first_button(&yes);
    yes.pointer_released(p);
    assert_eq!(yes.final_result(), DialogResult::Yes);

    let mut no = core(DialogFlags::YES_NO);
    let p = second_button(&no);
    no.pointer_released(p);
    assert_eq!(no.final_result(), DialogResult::No);
}

#[test]
fn clicks_outside_buttons_do_nothing() {
    let mut core = core(DialogFlags::OK_CANCEL);
    assert_eq!(core.pointer_released(Point::new(1, 1)), Update::None);
    assert_eq!(core.phase(), DialogPhase::Open);
}

#[test]
fn clicks_after_closing_are_ignored() {
    let mut core = core(DialogFlags::OK);
    let p = first_button(&core);
    core.pointer_released(p);
    assert_eq!(core.pointer_released(p), Update::None);
}

// === Keyboard Tests ===

#[test]
fn escape_dismisses_single_ok_as_cancel() {
    let mut core = core(DialogFlags::OK);
    assert_eq!(core.key_pressed(DialogKey::Escape), Update::Close);
    assert_eq!(core.final_result(), DialogResult::Cancel);
}

#[test]
fn escape_answers_no_for_yes_no() {
    let mut core = core(DialogFlags::YES_NO);
    core.key_pressed(DialogKey::Escape);
    assert_eq!(core.final_result(), DialogResult::No);
}

#[test]
fn enter_activates_the_first_default() {
    let mut core = core(DialogFlags::OK_CANCEL);
    assert_eq!(core.key_pressed(DialogKey::Enter), Update::Close);
    assert_eq!(core.final_result(), DialogResult::Ok);
}

#[test]
fn enter_follows_a_second_default() {
    let mut core = core(DialogFlags::OK_CANCEL | DialogFlags::DEFAULT_SECOND);
    core.key_pressed(DialogKey::Enter);
    assert_eq!(core.final_result(), DialogResult::Cancel);
}

#[test]
fn enter_confirms_a_plain_info_dialog() {
    let mut core = core(DialogFlags::OK | DialogFlags::ICON_INFO);
    assert_eq!(core.key_pressed(DialogKey::Enter), Update::Close);
    assert_eq!(core.final_result(), DialogResult::Ok);
}

#[test]
fn escape_and_enter_agree_when_cancel_is_default() {
    let flags = DialogFlags::OK_CANCEL | DialogFlags::DEFAULT_SECOND | DialogFlags::ICON_WARNING;

    let mut via_escape = core(flags);
    via_escape.key_pressed(DialogKey::Escape);
    assert_eq!(via_escape.final_result(), DialogResult::Cancel);

    let mut via_enter = core(flags);
    via_enter.key_pressed(DialogKey::Enter);
    assert_eq!(via_enter.final_result(), via_escape.final_result());
}

#[test]
fn space_matches_enter() {
    let mut with_default = core(DialogFlags::YES_NO | DialogFlags::DEFAULT_SECOND);
    with_default.key_pressed(DialogKey::Space);
    assert_eq!(with_default.final_result(), DialogResult::No);

    let mut plain = core(DialogFlags::YES_NO);
    plain.key_pressed(DialogKey::Space);
    assert_eq!(plain.final_result(), DialogResult::Yes);
}

#[test]
fn keys_after_closing_are_ignored() {
    let mut core = core(DialogFlags::YES_NO);
    core.key_pressed(DialogKey::Enter);
    assert_eq!(core.key_pressed(DialogKey::Escape), Update::None);
    assert_eq!(core.final_result(), DialogResult::Yes);
}

// === Resize Tests ===

#[test]
fn resize_recenters_the_button_row() {
    let mut core = core(DialogFlags::OK);
    let before = core.layout().button1;
    core.resize(Size::new(600, 200), Size::new(300, 40));
    let after = core.layout().button1;
    assert_ne!(before.left, after.left);
    assert_eq!(after.left, (600 - after.width()) / 2);
}

#[test]
fn resize_tracks_rewrapped_text_height() {
    let mut core = core(DialogFlags::OK);
    core.resize(Size::new(480, 260), Size::new(300, 100));
    assert_eq!(core.layout().button1.top, 50 + 100 + 24);
}

#[test]
fn resizing_back_restores_the_initial_layout() {
    let mut core = core(DialogFlags::OK_CANCEL);
    let initial = *core.layout();
    core.resize(Size::new(600, 240), Size::new(360, 60));
    core.resize(Size::new(480, 200), Size::new(300, 40));
    assert_eq!(*core.layout(), initial);
}

#[test]
fn resize_after_close_is_ignored() {
    let mut core = core(DialogFlags::OK);
    let p = first_button(&core);
    core.pointer_released(p);
    let before = core.layout().button1;
    core.resize(Size::new(800, 400), Size::new(300, 40));
    assert_eq!(core.layout().button1, before);
}

// === Lifecycle Tests ===

#[test]
fn force_close_without_result_falls_back_to_dismiss() {
    let mut ok = core(DialogFlags::OK_CANCEL);
    ok.force_close();
    assert_eq!(ok.phase(), DialogPhase::Closing);
    assert_eq!(ok.final_result(), DialogResult::Cancel);

    let mut yes_no = core(DialogFlags::YES_NO);
    yes_no.force_close();
    assert_eq!(yes_no.final_result(), DialogResult::No);
}

#[test]
fn force_close_keeps_a_settled_result() {
    let mut core = core(DialogFlags::OK);
    let p = first_button(&core);
    core.pointer_released(p);
    core.force_close();
    assert_eq!(core.final_result(), DialogResult::Ok);
}

#[test]
fn closed_is_terminal() {
    let mut core = core(DialogFlags::OK_CANCEL);
    core.mark_closed();
    assert_eq!(core.phase(), DialogPhase::Closed);
    assert_eq!(core.key_pressed(DialogKey::Enter), Update::None);
    assert_eq!(core.pointer_moved(Point::new(1, 1)), Update::None);
}

#[test]
fn final_result_before_any_input_is_the_dismiss_result() {
    assert_eq!(core(DialogFlags::OK).final_result(), DialogResult::Cancel);
    assert_eq!(core(DialogFlags::YES_NO).final_result(), DialogResult::No);
}
