// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use selvage::editing::{Decorator, PopupPolicy, SelectionHandle};
use selvage::model::CharacterRun;
use selvage::style::FontWeight;
use selvage::{CursorPlacement, EditState, Highlight, SelectionController, TextUpdate};
use selvage_dev::ModelBuilder;

#[derive(Default)]
struct CountingDecorator {
    highlights: usize,
    deactivations: usize,
    handles: usize,
    cursor: Option<CursorPlacement>,
    popup: Option<bool>,
}

impl Decorator for CountingDecorator {
    fn set_highlight(&mut self, highlight: Option<&Highlight>) {
        match highlight {
            Some(_) => self.highlights += 1,
            None => self.deactivations += 1,
        }
    }

    fn set_handle(&mut self, _handle: SelectionHandle, _placement: CursorPlacement) {
        self.handles += 1;
    }

    fn set_cursor(&mut self, placement: CursorPlacement) {
        self.cursor = Some(placement);
    }

    fn set_popup_visible(&mut self, visible: bool) {
        self.popup = Some(visible);
    }
}

#[test]
fn controller_selection_and_style_round_trip() {
    let (text, visual) = ModelBuilder::new(&["hello world"]).build();
    let mut controller = SelectionController::new(text, visual);
    let mut decorator = CountingDecorator::default();

    controller.tap(25.0, 8.0, &mut decorator);
    assert_eq!(controller.state(), EditState::Selecting);
    assert_eq!(controller.selection(), Some((0, 5)));
    assert_eq!(decorator.highlights, 1);
    assert_eq!(decorator.handles, 2);

    // Setting a weight during selection creates exactly one run covering
    // the active selection, and the getter reflects it immediately.
    let update = controller.set_input_font_weight(FontWeight::BOLD);
    assert_eq!(update, TextUpdate::span(0, 5));
    assert_eq!(controller.input_font_weight(), FontWeight::BOLD);
    let runs = &controller.text().font_description_runs;
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].run, CharacterRun::new(0, 5));
}

#[test]
fn controller_popup_flow() {
    let (text, visual) = ModelBuilder::new(&["hello"]).control_width(300.0).build();
    let mut controller = SelectionController::new(text, visual);
    controller.set_popup_policy(PopupPolicy::ShowOnEmptyHit);
    let mut decorator = CountingDecorator::default();

    controller.tap(200.0, 8.0, &mut decorator);
    assert_eq!(controller.state(), EditState::EditingWithPopup);
    assert_eq!(controller.cursor(), 5);
    assert_eq!(decorator.popup, Some(true));
    assert_eq!(decorator.cursor.expect("cursor").x, 50.0);

    controller.deactivate(&mut decorator);
    assert_eq!(controller.state(), EditState::Inactive);
    assert_eq!(decorator.popup, Some(false));
}

#[test]
fn controller_select_all_then_clear() {
    let (text, visual) = ModelBuilder::new(&["hello"]).build();
    let mut controller = SelectionController::new(text, visual);
    let mut decorator = CountingDecorator::default();

    controller.select_all(&mut decorator);
    assert_eq!(controller.selection(), Some((0, 5)));

    controller.clear_selection(&mut decorator);
    assert_eq!(controller.state(), EditState::Editing);
    assert_eq!(controller.selection(), None);
    assert_eq!(decorator.deactivations, 1);
}
