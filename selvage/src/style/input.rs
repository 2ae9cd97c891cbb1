// Copyright 2026 the Selvage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use fontique::{FontStyle, FontWeight, FontWidth};

/// Family name used when nothing else is specified.
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Point size used when nothing else is specified.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// The style applied to subsequently typed characters.
///
/// Axes left `None` fall back to the toolkit defaults through the
/// `*_or_default` accessors.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct InputStyle {
    /// Font family name.
    pub family: Option<String>,
    /// Font weight.
    pub weight: Option<FontWeight>,
    /// Font width.
    pub width: Option<FontWidth>,
    /// Font slant.
    pub slant: Option<FontStyle>,
    /// Point size.
    pub size: Option<f32>,
}

impl InputStyle {
    /// Family, or the toolkit default.
    pub fn family_or_default(&self) -> &str {
        self.family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY)
    }

    /// Weight, or [`FontWeight::NORMAL`].
    pub fn weight_or_default(&self) -> FontWeight {
        self.weight.unwrap_or(FontWeight::NORMAL)
    }

    /// Width, or [`FontWidth::NORMAL`].
    pub fn width_or_default(&self) -> FontWidth {
        self.width.unwrap_or(FontWidth::NORMAL)
    }

    /// Slant, or [`FontStyle::Normal`].
    pub fn slant_or_default(&self) -> FontStyle {
        self.slant.unwrap_or(FontStyle::Normal)
    }

    /// Size, or the toolkit default.
    pub fn size_or_default(&self) -> f32 {
        self.size.unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Forgets every recorded axis.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
