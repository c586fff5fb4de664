//! Tests for the model layer: flag parsing, option resolution, geometry and
//! layout placement.

use alertbox::model::constants::{
    BUTTON_GAP, BUTTON_HEIGHT, BUTTON_MARGIN, BUTTON_WIDTH, CONTENT_TOP, ICON_SIZE, ICON_SPACING,
    PADDING, SEPARATOR_Y, TITLE_INSET_X,
};
use alertbox::model::{
    ButtonId, ButtonSet, DialogFlags, DialogLayout, DialogOptions, DialogResult, IconKind, Point,
    Rect, Size,
};

// === Flag Parsing Tests ===

#[test]
fn ok_flag_gives_single_button() {
    let set = ButtonSet::from_flags(DialogFlags::OK);
    assert_eq!(set, ButtonSet::Ok);
    assert!(!set.has_second());
}

#[test]
fn empty_flags_fall_back_to_ok() {
    assert_eq!(ButtonSet::from_flags(DialogFlags::empty()), ButtonSet::Ok);
}

#[test]
fn ok_cancel_flag_gives_two_buttons() {
    let set = ButtonSet::from_flags(DialogFlags::OK_CANCEL);
    assert_eq!(set, ButtonSet::OkCancel);
    assert!(set.has_second());
}

#[test]
fn yes_no_flag_gives_two_buttons() {
    let set = ButtonSet::from_flags(DialogFlags::YES_NO);
    assert_eq!(set, ButtonSet::YesNo);
    assert!(set.has_second());
}

#[test]
fn yes_no_wins_over_ok_cancel() {
    let set = ButtonSet::from_flags(DialogFlags::OK_CANCEL | DialogFlags::YES_NO);
    assert_eq!(set, ButtonSet::YesNo);
}

#[test]
fn ok_labels() {
    assert_eq!(ButtonSet::Ok.labels(), ("OK", None));
}

#[test]
fn ok_cancel_labels() {
    assert_eq!(ButtonSet::OkCancel.labels(), ("OK", Some("Cancel")));
}

#[test]
fn yes_no_labels() {
    assert_eq!(ButtonSet::YesNo.labels(), ("Yes", Some("No")));
}

#[test]
fn icon_flags_resolve_to_kinds() {
    assert_eq!(IconKind::from_flags(DialogFlags::ICON_INFO), IconKind::Info);
    assert_eq!(
        IconKind::from_flags(DialogFlags::ICON_WARNING),
        IconKind::Warning
    );
    assert_eq!(
        IconKind::from_flags(DialogFlags::ICON_ERROR),
        IconKind::Error
    );
}

#[test]
fn info_wins_when_multiple_icon_flags_set() {
    let kind = IconKind::from_flags(DialogFlags::ICON_INFO | DialogFlags::ICON_ERROR);
    assert_eq!(kind, IconKind::Info);
}

#[test]
fn warning_wins_over_error() {
    let kind = IconKind::from_flags(DialogFlags::ICON_WARNING | DialogFlags::ICON_ERROR);
    assert_eq!(kind, IconKind::Warning);
}

#[test]
fn no_icon_without_icon_flags() {
    let kind = IconKind::from_flags(DialogFlags::OK_CANCEL);
    assert_eq!(kind, IconKind::None);
    assert!(!kind.is_visible());
}

#[test]
fn flags_combine_with_bitor() {
    let flags = DialogFlags::YES_NO | DialogFlags::ICON_WARNING | DialogFlags::TOPMOST;
    assert!(flags.contains(DialogFlags::YES_NO));
    assert!(flags.contains(DialogFlags::ICON_WARNING));
    assert!(flags.contains(DialogFlags::TOPMOST));
    assert!(!flags.contains(DialogFlags::OK_CANCEL));
}

// === Option Resolution Tests ===

#[test]
fn default_button_is_first_without_flag() {
    let options = DialogOptions::from_flags(DialogFlags::OK_CANCEL);
    assert_eq!(options.default_button, ButtonId::First);
}

#[test]
fn default_second_flag_selects_second_button() {
    let options = DialogOptions::from_flags(DialogFlags::OK_CANCEL | DialogFlags::DEFAULT_SECOND);
    assert_eq!(options.default_button, ButtonId::Second);
}

#[test]
fn default_second_ignored_for_single_button() {
    let options = DialogOptions::from_flags(DialogFlags::OK | DialogFlags::DEFAULT_SECOND);
    assert_eq!(options.default_button, ButtonId::First);
}

#[test]
fn topmost_flag_carries_through() {
    assert!(DialogOptions::from_flags(DialogFlags::OK | DialogFlags::TOPMOST).topmost);
    assert!(!DialogOptions::from_flags(DialogFlags::OK).topmost);
}

#[test]
fn ok_dialog_results() {
    let options = DialogOptions::from_flags(DialogFlags::OK);
    assert_eq!(options.confirm_result(), DialogResult::Ok);
    assert_eq!(options.dismiss_result(), DialogResult::Cancel);
}

#[test]
fn ok_cancel_dialog_results() {
    let options = DialogOptions::from_flags(DialogFlags::OK_CANCEL);
    assert_eq!(options.confirm_result(), DialogResult::Ok);
    assert_eq!(options.dismiss_result(), DialogResult::Cancel);
}

#[test]
fn yes_no_dialog_results() {
    let options = DialogOptions::from_flags(DialogFlags::YES_NO);
    assert_eq!(options.confirm_result(), DialogResult::Yes);
    assert_eq!(options.dismiss_result(), DialogResult::No);
}

#[test]
fn default_result_follows_default_button() {
    let first = DialogOptions::from_flags(DialogFlags::YES_NO);
    assert_eq!(first.default_result(), DialogResult::Yes);

    let second = DialogOptions::from_flags(DialogFlags::YES_NO | DialogFlags::DEFAULT_SECOND);
    assert_eq!(second.default_result(), DialogResult::No);
}

// === Layout Placement Tests ===

#[test]
fn body_starts_right_of_icon() {
    let layout = DialogLayout::compute(Size::new(480, 200), Size::new(300, 40), true, false);
    assert_eq!(layout.body.left, PADDING + ICON_SIZE + ICON_SPACING);
    assert_eq!(layout.body.top, CONTENT_TOP);
}

#[test]
fn body_spans_padding_without_icon() {
    let layout = DialogLayout::compute(Size::new(480, 200), Size::new(300, 40), false, false);
    assert_eq!(layout.body.left, PADDING);
    assert_eq!(layout.body.right, 480 - PADDING);
    assert!(layout.icon.is_none());
}

#[test]
fn icon_square_sits_at_content_top() {
    let layout = DialogLayout::compute(Size::new(480, 200), Size::new(300, 40), true, false);
    let icon = layout.icon.unwrap();
    assert_eq!(icon, Rect::new(PADDING, CONTENT_TOP, PADDING + ICON_SIZE, CONTENT_TOP + ICON_SIZE));
}

#[test]
fn single_button_is_centered() {
    let layout = DialogLayout::compute(Size::new(480, 200), Size::new(300, 40), false, false);
    assert_eq!(layout.button1.left, (480 - BUTTON_WIDTH) / 2);
    assert!(layout.button2.is_none());
}

#[test]
fn two_buttons_form_a_centered_row() {
    let layout = DialogLayout::compute(Size::new(480, 200), Size::new(300, 40), false, true);
    let row_width = 2 * BUTTON_WIDTH + BUTTON_GAP;
    assert_eq!(layout.button1.left, (480 - row_width) / 2);

    let second = layout.button2.unwrap();
    assert_eq!(second.left, layout.button1.right + BUTTON_GAP);
    assert_eq!(second.top, layout.button1.top);
}

#[test]
fn buttons_sit_below_tall_body_text() {
    let layout = DialogLayout::compute(Size::new(480, 400), Size::new(300, 120), false, false);
    assert_eq!(layout.button1.top, CONTENT_TOP + 120 + BUTTON_MARGIN);
    assert_eq!(layout.button1.bottom, layout.button1.top + BUTTON_HEIGHT);
}

#[test]
fn short_text_with_icon_still_clears_the_badge() {
    let layout = DialogLayout::compute(Size::new(480, 200), Size::new(120, 18), true, false);
    assert_eq!(layout.button1.top, CONTENT_TOP + ICON_SIZE + BUTTON_MARGIN);

    let empty = DialogLayout::compute(Size::new(480, 200), Size::new(0, 0), true, false);
    assert_eq!(empty.button1.top, layout.button1.top);
}

#[test]
fn title_band_spans_the_client_width() {
    let layout = DialogLayout::compute(Size::new(480, 200), Size::new(300, 40), false, false);
    assert_eq!(layout.title.left, TITLE_INSET_X);
    assert_eq!(layout.title.right, 480 - TITLE_INSET_X);
    assert_eq!(layout.separator_y, SEPARATOR_Y);
}

// === Geometry Tests ===

#[test]
fn rect_contains_is_half_open() {
    let r = Rect::new(10, 10, 20, 20);
    assert!(r.contains(Point::new(10, 10)));
    assert!(r.contains(Point::new(19, 19)));
    assert!(!r.contains(Point::new(20, 10)));
    assert!(!r.contains(Point::new(10, 20)));
}

#[test]
fn empty_rect_contains_nothing() {
    let r = Rect::new(5, 5, 5, 5);
    assert!(r.is_empty());
    assert!(!r.contains(Point::new(5, 5)));
}

#[test]
fn rect_dimensions() {
    let r = Rect::new(10, 20, 110, 50);
    assert_eq!(r.width(), 100);
    assert_eq!(r.height(), 30);
}
