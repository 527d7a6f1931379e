//! RGB colors and the label→color map used when drawing detections.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const AMBER: Color = Color::new(255, 191, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The color as a `[r, g, b]` byte triple, the canvas storage order.
    pub fn as_bytes(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Maps detection labels to overlay colors.
///
/// Unknown labels all resolve to one fallback color rather than failing, so
/// a new detector class never breaks rendering.
#[derive(Debug, Clone)]
pub struct ColorMap {
    colors: HashMap<String, Color>,
    fallback: Color,
}

impl ColorMap {
    /// An empty map with the given fallback color.
    pub fn new(fallback: Color) -> Self {
        Self {
            colors: HashMap::new(),
            fallback,
        }
    }

    /// Register a label color, replacing any previous entry for that label.
    pub fn with_label(mut self, label: impl Into<String>, color: Color) -> Self {
        self.colors.insert(label.into(), color);
        self
    }

    /// Resolve the color for a label, falling back for unknown labels.
    pub fn color_for(&self, label: &str) -> Color {
        self.colors.get(label).copied().unwrap_or(self.fallback)
    }
}

impl Default for ColorMap {
    /// The pipeline's standard palette for road objects.
    fn default() -> Self {
        Self::new(Color::WHITE)
            .with_label("speed limit", Color::AMBER)
            .with_label("traffic light", Color::GREEN)
            .with_label("vehicle", Color::BLUE)
            .with_label("person", Color::RED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_label_resolves_to_registered_color() {
        let map = ColorMap::default();
        assert_eq!(map.color_for("speed limit"), Color::AMBER);
    }

    #[test]
    fn unknown_label_resolves_to_fallback() {
        let map = ColorMap::default();
        assert_eq!(map.color_for("unicycle"), Color::WHITE);
    }

    #[test]
    fn with_label_overrides_palette_entry() {
        let map = ColorMap::default().with_label("speed limit", Color::RED);
        assert_eq!(map.color_for("speed limit"), Color::RED);
    }
}
