//! Type-agnostic styles shared by every component.

use crate::schema::{check_range, SchemaError};
use serde::{Deserialize, Serialize};

/// Four-sided box spacing in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Spacing {
    pub fn all(value: i32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    fn sides(&self) -> [(&'static str, i32); 4] {
        [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    None,
    Solid,
    Dashed,
    Dotted,
}

impl BorderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Border {
    pub width: u32,
    pub style: BorderStyle,
    pub color: String,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            width: 0,
            style: BorderStyle::None,
            color: "#e5e7eb".to_string(),
        }
    }
}

impl Border {
    /// Whether the border draws anything
    pub fn is_visible(&self) -> bool {
        self.width > 0 && self.style != BorderStyle::None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Shadow {
    pub enabled: bool,
    pub offset_x: i32,
    pub offset_y: i32,
    pub blur: u32,
    pub spread: i32,
    pub color: String,
    pub opacity: f32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            enabled: false,
            offset_x: 0,
            offset_y: 4,
            blur: 10,
            spread: 0,
            color: "#000000".to_string(),
            opacity: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// Viewport classes used by the responsive display override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop];

    /// Simulated viewport width in pixels
    pub fn width_px(&self) -> u32 {
        match self {
            Breakpoint::Mobile => 375,
            Breakpoint::Tablet => 768,
            Breakpoint::Desktop => 1280,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveDisplay {
    pub mobile: Visibility,
    pub tablet: Visibility,
    pub desktop: Visibility,
}

impl ResponsiveDisplay {
    pub fn at(&self, breakpoint: Breakpoint) -> Visibility {
        match breakpoint {
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Tablet => self.tablet,
            Breakpoint::Desktop => self.desktop,
        }
    }

    pub fn is_visible(&self, breakpoint: Breakpoint) -> bool {
        self.at(breakpoint) == Visibility::Visible
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Styles {
    pub margin: Spacing,
    pub padding: Spacing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    pub border: Border,
    pub shadow: Shadow,
    pub responsive: ResponsiveDisplay,
}

impl Styles {
    pub fn validate(&self) -> Result<(), SchemaError> {
        for (side, value) in self.margin.sides() {
            check_range(&format!("styles.margin.{}", side), value, -1000, 1000)?;
        }
        for (side, value) in self.padding.sides() {
            check_range(&format!("styles.padding.{}", side), value, 0, 1000)?;
        }
        check_range("styles.border.width", self.border.width, 0, 50)?;
        check_range("styles.shadow.offsetX", self.shadow.offset_x, -100, 100)?;
        check_range("styles.shadow.offsetY", self.shadow.offset_y, -100, 100)?;
        check_range("styles.shadow.blur", self.shadow.blur, 0, 100)?;
        check_range("styles.shadow.spread", self.shadow.spread, -50, 50)?;
        check_range("styles.shadow.opacity", self.shadow.opacity, 0.0, 1.0)?;
        Ok(())
    }
}
