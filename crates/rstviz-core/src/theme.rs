//! Graphviz style attributes for graph nodes.
//!
//! A [`Theme`] maps the two unit styles and the two relation styles of the
//! [`semantic`](crate::semantic) model to DOT node attributes. Unit nodes are
//! filled boxes; relation nodes are borderless plaintext.
//!
//! | style | shape | fill | font |
//! |-------|-------|------|------|
//! | [`UnitStyle::Image`] | `box`, filled | image fill | larger |
//! | [`UnitStyle::Text`] | `box`, filled | white | smaller |
//! | [`RelationStyle::Highlighted`] | `plaintext` | none | highlight color, larger |
//! | [`RelationStyle::Normal`] | `plaintext` | none | muted color, smaller |

use crate::{
    color::Color,
    semantic::{RelationStyle, UnitStyle},
};

/// A single `name="value"` DOT attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: &'static str,
    value: String,
}

impl Attribute {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Style constants for every node style.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    image_fill_color: Color,
    text_fill_color: Color,
    highlight_font_color: Color,
    normal_font_color: Color,
    image_font_size: u32,
    text_font_size: u32,
    highlight_font_size: u32,
    normal_font_size: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            image_fill_color: Color::new("#fbe3b4").expect("valid hex color"),
            text_fill_color: Color::new("white").expect("valid CSS color"),
            highlight_font_color: Color::new("#d62728").expect("valid hex color"),
            normal_font_color: Color::new("#4d4d4d").expect("valid hex color"),
            image_font_size: 14,
            text_font_size: 10,
            highlight_font_size: 16,
            normal_font_size: 10,
        }
    }
}

impl Theme {
    pub fn with_image_fill_color(mut self, color: Color) -> Self {
        self.image_fill_color = color;
        self
    }

    pub fn with_text_fill_color(mut self, color: Color) -> Self {
        self.text_fill_color = color;
        self
    }

    pub fn with_highlight_font_color(mut self, color: Color) -> Self {
        self.highlight_font_color = color;
        self
    }

    pub fn with_normal_font_color(mut self, color: Color) -> Self {
        self.normal_font_color = color;
        self
    }

    pub fn with_image_font_size(mut self, size: u32) -> Self {
        self.image_font_size = size;
        self
    }

    pub fn with_text_font_size(mut self, size: u32) -> Self {
        self.text_font_size = size;
        self
    }

    pub fn with_highlight_font_size(mut self, size: u32) -> Self {
        self.highlight_font_size = size;
        self
    }

    pub fn with_normal_font_size(mut self, size: u32) -> Self {
        self.normal_font_size = size;
        self
    }

    /// Node attributes for a segment or content unit.
    pub fn unit_attributes(&self, style: UnitStyle) -> Vec<Attribute> {
        let (fill, font_size) = match style {
            UnitStyle::Image => (self.image_fill_color, self.image_font_size),
            UnitStyle::Text => (self.text_fill_color, self.text_font_size),
        };

        vec![
            Attribute::new("shape", "box"),
            Attribute::new("style", "filled"),
            Attribute::new("fillcolor", fill.to_hex()),
            Attribute::new("fontsize", font_size.to_string()),
        ]
    }

    /// Node attributes for a relation span.
    pub fn relation_attributes(&self, style: RelationStyle) -> Vec<Attribute> {
        let (font_color, font_size) = match style {
            RelationStyle::Highlighted => (self.highlight_font_color, self.highlight_font_size),
            RelationStyle::Normal => (self.normal_font_color, self.normal_font_size),
        };

        vec![
            Attribute::new("shape", "plaintext"),
            Attribute::new("fontcolor", font_color.to_hex()),
            Attribute::new("fontsize", font_size.to_string()),
        ]
    }
}
