use crate::pdf::Name;

/// Placement and font of the rendered text.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    /// Page size `[llx lly urx ury]`, US Letter by default.
    pub media_box: [i32; 4],
    /// Name under which the font is registered in the page resources.
    pub font_resource: Name,
    /// One of the standard 14 fonts.
    pub base_font: Name,
    pub font_size: f32,
    /// Text leading, distance between baselines.
    pub leading: f32,
    /// Start of the first baseline.
    pub origin: (i32, i32),
    /// Fill gray level, 0 is black.
    pub gray: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            media_box: [0, 0, 612, 792],
            font_resource: Name::from_str("F1"),
            base_font: Name::from_str("Helvetica"),
            font_size: 24.0,
            leading: 28.8,
            origin: (100, 700),
            gray: 0.0,
        }
    }
}

impl PageLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_media_box(mut self, media_box: [i32; 4]) -> Self {
        self.media_box = media_box;
        self
    }

    pub fn with_font_resource(mut self, name: &str) -> Self {
        self.font_resource = Name::from_str(name);
        self
    }

    pub fn with_base_font(mut self, name: &str) -> Self {
        self.base_font = Name::from_str(name);
        self
    }

    /// Set the font size. The leading follows at 1.2 times the size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self.leading = size * 1.2;
        self
    }

    pub fn with_leading(mut self, leading: f32) -> Self {
        self.leading = leading;
        self
    }

    pub fn with_origin(mut self, x: i32, y: i32) -> Self {
        self.origin = (x, y);
        self
    }

    pub fn with_gray(mut self, gray: f32) -> Self {
        self.gray = gray;
        self
    }

    /// First real value that has no PDF number representation (NaN or
    /// infinite).
    pub fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("font_size", self.font_size),
            ("leading", self.leading),
            ("gray", self.gray),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(field, _)| field)
    }
}
