use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Allowed content column widths, in pixels
pub const CONTENT_WIDTH_RANGE: RangeInclusive<u32> = 480..=700;

/// Allowed corner radii, in pixels
pub const BORDER_RADIUS_RANGE: RangeInclusive<u32> = 0..=24;

/// Document-wide rendering parameters.
///
/// Colors are opaque CSS values and are never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeParameters {
    /// Page background behind the content column
    pub background_color: String,
    pub content_background: String,
    /// Gradient start for headers, fallback button color
    pub primary_color: String,
    /// Gradient end for headers
    pub secondary_color: String,
    pub footer_background: String,
    pub content_width: u32,
    pub border_radius: u32,
}

impl ThemeParameters {
    /// Pull width and radius back into their editing ranges
    pub fn clamped(mut self) -> Self {
        self.content_width = self
            .content_width
            .clamp(*CONTENT_WIDTH_RANGE.start(), *CONTENT_WIDTH_RANGE.end());
        self.border_radius = self
            .border_radius
            .clamp(*BORDER_RADIUS_RANGE.start(), *BORDER_RADIUS_RANGE.end());
        self
    }

    pub fn is_within_bounds(&self) -> bool {
        CONTENT_WIDTH_RANGE.contains(&self.content_width)
            && BORDER_RADIUS_RANGE.contains(&self.border_radius)
    }
}

impl Default for ThemeParameters {
    fn default() -> Self {
        Self {
            background_color: "#f4f4f5".to_string(),
            content_background: "#ffffff".to_string(),
            primary_color: "#6366f1".to_string(),
            secondary_color: "#8b5cf6".to_string(),
            footer_background: "#f9fafb".to_string(),
            content_width: 600,
            border_radius: 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_within_bounds() {
        assert!(ThemeParameters::default().is_within_bounds());
    }

    #[test]
    fn test_clamped() {
        let theme = ThemeParameters {
            content_width: 1200,
            border_radius: 40,
            ..Default::default()
        }
        .clamped();

        assert_eq!(theme.content_width, 700);
        assert_eq!(theme.border_radius, 24);

        let narrow = ThemeParameters {
            content_width: 100,
            ..Default::default()
        }
        .clamped();
        assert_eq!(narrow.content_width, 480);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let theme: ThemeParameters =
            serde_json::from_str(r##"{"primaryColor":"#ff0000","contentWidth":520}"##).unwrap();

        assert_eq!(theme.primary_color, "#ff0000");
        assert_eq!(theme.content_width, 520);
        assert_eq!(theme.border_radius, 12);
        assert_eq!(theme.background_color, "#f4f4f5");
    }
}
