// File: crates/linechart-render-skia/src/text.rs
// Summary: Axis label shaping with Skia textlayout, placed by the layout's label anchor.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

use linechart_core::LabelAnchor;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // tabular digits keep tick labels aligned
        ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` so that its `anchor` point lands on `(x, y)`.
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        anchor: LabelAnchor,
        size: f32,
        color: skia::Color,
    ) {
        let mut p = self.layout(text, size, color);
        let (w, h) = (p.longest_line(), p.height());
        p.paint(canvas, anchored_top_left((x, y), (w, h), anchor));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-left corner of a `w x h` text box whose `anchor` point is `(x, y)`.
pub(crate) fn anchored_top_left((x, y): (f32, f32), (w, h): (f32, f32), anchor: LabelAnchor) -> (f32, f32) {
    match anchor {
        LabelAnchor::TopCenter => (x - w / 2.0, y),
        LabelAnchor::RightMiddle => (x - w, y - h / 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_offset_the_text_box() {
        assert_eq!(anchored_top_left((50.0, 90.0), (20.0, 10.0), LabelAnchor::TopCenter), (40.0, 90.0));
        assert_eq!(anchored_top_left((6.0, 20.0), (12.0, 10.0), LabelAnchor::RightMiddle), (-6.0, 15.0));
    }
}
