// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Script classification for selection behavior.

use swash::text::Script;

/// Returns `true` if a selection boundary may fall strictly inside a
/// ligature of this script.
///
/// For these scripts a multi-character glyph must be split into fractional
/// selection quads so that individual characters remain selectable. Scripts
/// whose ligatures are indivisible shaping units select whole glyphs only.
pub fn must_break_ligature(script: Script) -> bool {
    matches!(script, Script::Latin | Script::Arabic)
}
