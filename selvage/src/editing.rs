// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection state machine for editable text controls.
//!
//! [`SelectionController`] owns the text and visual models and orchestrates
//! hit testing, selection-state transitions and handle repositioning. The
//! rendering side is an explicit [`Decorator`] observer passed into each
//! operation; the controller never draws anything itself.

use alloc::string::String;

use crate::cursor::{self, cursor_placement, CursorPlacement};
use crate::highlight::{Highlight, HighlightBuilder};
use crate::model::{CharacterRun, TextModel, VisualModel};
use crate::style::{
    FontDescriptionRun, FontStyle, FontWeight, FontWidth, InputStyle, TextUpdate,
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE,
};

/// Edit-session state.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub enum EditState {
    /// No edit session.
    #[default]
    Inactive,
    /// A selection is active and its handles are shown.
    Selecting,
    /// A cursor is active with no selection.
    Editing,
    /// A cursor is active and the edit popup is shown.
    EditingWithPopup,
}

/// Policy for taps that land outside any glyph.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub enum PopupPolicy {
    /// Reposition the cursor only.
    #[default]
    None,
    /// Show the edit popup and enter [`EditState::EditingWithPopup`].
    ShowOnEmptyHit,
}

/// Identity of a selection handle in decorator callbacks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionHandle {
    /// Handle at the caller's first selection index.
    Start,
    /// Handle at the caller's second selection index.
    End,
}

/// Rendering collaborator notified of decoration changes.
///
/// Implementations draw the highlight quads, the two selection handles,
/// the cursor and the edit popup; the controller only computes geometry.
pub trait Decorator {
    /// The highlight changed. `None` deactivates it.
    fn set_highlight(&mut self, highlight: Option<&Highlight>);
    /// A selection handle moved.
    fn set_handle(&mut self, handle: SelectionHandle, placement: CursorPlacement);
    /// The cursor moved.
    fn set_cursor(&mut self, placement: CursorPlacement);
    /// The edit popup was shown or hidden.
    fn set_popup_visible(&mut self, visible: bool);
}

/// Orchestrates hit testing, selection state and input style for one text
/// control.
#[derive(Default, Debug)]
pub struct SelectionController {
    text: TextModel,
    visual: VisualModel,
    builder: HighlightBuilder,
    state: EditState,
    selection_start: usize,
    selection_end: usize,
    cursor: usize,
    input_style: InputStyle,
    popup_policy: PopupPolicy,
    placeholder_active: bool,
}

impl SelectionController {
    /// Creates a controller over the given models.
    pub fn new(text: TextModel, visual: VisualModel) -> Self {
        Self {
            text,
            visual,
            ..Self::default()
        }
    }

    /// Current edit-session state.
    pub fn state(&self) -> EditState {
        self.state
    }

    /// The active selection indices, in caller order, while selecting.
    pub fn selection(&self) -> Option<(usize, usize)> {
        (self.state == EditState::Selecting).then_some((self.selection_start, self.selection_end))
    }

    /// Character index of the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The logical text model.
    pub fn text(&self) -> &TextModel {
        &self.text
    }

    /// The visual model.
    pub fn visual(&self) -> &VisualModel {
        &self.visual
    }

    /// Sets the empty-hit popup policy.
    pub fn set_popup_policy(&mut self, policy: PopupPolicy) {
        self.popup_policy = policy;
    }

    /// Marks placeholder text as shown. While active, hit events are
    /// ignored; there is nothing to select.
    pub fn set_placeholder_active(&mut self, active: bool) {
        self.placeholder_active = active;
    }

    /// Handles a tap at a control-local point.
    ///
    /// A hit on a character selects the word around it and enters
    /// [`EditState::Selecting`]. A hit on empty space repositions the
    /// cursor to the nearest valid character, additionally entering
    /// [`EditState::EditingWithPopup`] under
    /// [`PopupPolicy::ShowOnEmptyHit`]. With no text, or while placeholder
    /// text is shown, this is a no-op.
    pub fn tap(&mut self, x: f32, y: f32, decorator: &mut impl Decorator) {
        if self.text.text.is_empty() || self.placeholder_active {
            return;
        }
        let Some(hit) = cursor::hit_test(&self.text, &self.visual, x, y) else {
            return;
        };
        if hit.on_text {
            let word = cursor::word_bounds(&self.text.text, hit.character);
            self.state = EditState::Selecting;
            self.selection_start = word.index;
            self.selection_end = word.end();
            self.cursor = word.end();
            self.refresh_highlight(decorator);
        } else if self.popup_policy == PopupPolicy::ShowOnEmptyHit {
            self.state = EditState::EditingWithPopup;
            self.cursor = hit.character;
            self.selection_start = self.cursor;
            self.selection_end = self.cursor;
            decorator.set_highlight(None);
            decorator.set_cursor(cursor_placement(&self.text, &self.visual, self.cursor));
            decorator.set_popup_visible(true);
        } else {
            self.cursor = hit.character;
            decorator.set_cursor(cursor_placement(&self.text, &self.visual, self.cursor));
        }
    }

    /// Selects the whole text.
    pub fn select_all(&mut self, decorator: &mut impl Decorator) {
        let count = self.text.character_count();
        if count == 0 {
            return;
        }
        self.state = EditState::Selecting;
        self.selection_start = 0;
        self.selection_end = count;
        self.refresh_highlight(decorator);
    }

    /// Collapses the selection to the cursor and deactivates the
    /// highlight.
    pub fn clear_selection(&mut self, decorator: &mut impl Decorator) {
        if self.state == EditState::Selecting {
            self.state = EditState::Editing;
        }
        self.selection_start = self.cursor;
        self.selection_end = self.cursor;
        decorator.set_highlight(None);
    }

    /// Ends the edit session.
    pub fn deactivate(&mut self, decorator: &mut impl Decorator) {
        self.state = EditState::Inactive;
        self.selection_start = self.cursor;
        self.selection_end = self.cursor;
        decorator.set_highlight(None);
        decorator.set_popup_visible(false);
    }

    /// Replaces both models after an external text change.
    ///
    /// Ends the edit session and reports a whole-text invalidation; every
    /// font-description run of the old text is dropped with it.
    pub fn replace_text(&mut self, text: TextModel, visual: VisualModel) -> TextUpdate {
        let previous_count = self.text.character_count();
        self.text = text;
        self.visual = visual;
        let current_count = self.text.character_count();
        self.state = EditState::Inactive;
        self.cursor = self.cursor.min(current_count);
        self.selection_start = self.cursor;
        self.selection_end = self.cursor;
        TextUpdate::full(previous_count, current_count)
    }

    /// Rebuilds the highlight and repositions both handles.
    fn refresh_highlight(&mut self, decorator: &mut impl Decorator) {
        match self
            .builder
            .build(self.selection_start, self.selection_end, &self.text, &self.visual)
        {
            Some(highlight) => {
                decorator.set_handle(SelectionHandle::Start, highlight.start_handle);
                decorator.set_handle(SelectionHandle::End, highlight.end_handle);
                decorator.set_highlight(Some(&highlight));
            }
            None => decorator.set_highlight(None),
        }
    }

    fn normalized_selection(&self) -> (usize, usize) {
        if self.selection_start <= self.selection_end {
            (self.selection_start, self.selection_end)
        } else {
            (self.selection_end, self.selection_start)
        }
    }

    /// Applies one changed style axis.
    ///
    /// While selecting, a new font-description run spanning exactly the
    /// normalized selection is appended and only that span is invalidated.
    /// In every other state the style applies to future input, so the
    /// whole text is invalidated.
    fn push_style_run(&mut self, set: impl FnOnce(&mut FontDescriptionRun)) -> TextUpdate {
        match self.state {
            EditState::Selecting => {
                let (start, end) = self.normalized_selection();
                let length = end - start;
                let mut run = FontDescriptionRun::new(CharacterRun::new(start, length));
                set(&mut run);
                self.text.font_description_runs.push(run);
                TextUpdate::span(start, length)
            }
            _ => {
                let count = self.text.character_count();
                TextUpdate::full(count, count)
            }
        }
    }

    /// Sets the input font family.
    pub fn set_input_font_family(&mut self, family: String) -> TextUpdate {
        self.input_style.family = Some(family.clone());
        self.push_style_run(move |run| run.family = Some(family))
    }

    /// Sets the input font weight.
    pub fn set_input_font_weight(&mut self, weight: FontWeight) -> TextUpdate {
        self.input_style.weight = Some(weight);
        self.push_style_run(|run| run.weight = Some(weight))
    }

    /// Sets the input font width.
    pub fn set_input_font_width(&mut self, width: FontWidth) -> TextUpdate {
        self.input_style.width = Some(width);
        self.push_style_run(|run| run.width = Some(width))
    }

    /// Sets the input font slant.
    pub fn set_input_font_slant(&mut self, slant: FontStyle) -> TextUpdate {
        self.input_style.slant = Some(slant);
        self.push_style_run(|run| run.slant = Some(slant))
    }

    /// Sets the input font size.
    pub fn set_input_font_size(&mut self, size: f32) -> TextUpdate {
        self.input_style.size = Some(size);
        self.push_style_run(|run| run.size = Some(size))
    }

    /// Input font family, or the toolkit default outside an edit session.
    pub fn input_font_family(&self) -> &str {
        if self.state == EditState::Inactive {
            DEFAULT_FONT_FAMILY
        } else {
            self.input_style.family_or_default()
        }
    }

    /// Input font weight, or the toolkit default outside an edit session.
    pub fn input_font_weight(&self) -> FontWeight {
        if self.state == EditState::Inactive {
            FontWeight::NORMAL
        } else {
            self.input_style.weight_or_default()
        }
    }

    /// Input font width, or the toolkit default outside an edit session.
    pub fn input_font_width(&self) -> FontWidth {
        if self.state == EditState::Inactive {
            FontWidth::NORMAL
        } else {
            self.input_style.width_or_default()
        }
    }

    /// Input font slant, or the toolkit default outside an edit session.
    pub fn input_font_slant(&self) -> FontStyle {
        if self.state == EditState::Inactive {
            FontStyle::Normal
        } else {
            self.input_style.slant_or_default()
        }
    }

    /// Input font size, or the toolkit default outside an edit session.
    pub fn input_font_size(&self) -> f32 {
        if self.state == EditState::Inactive {
            DEFAULT_FONT_SIZE
        } else {
            self.input_style.size_or_default()
        }
    }
}
