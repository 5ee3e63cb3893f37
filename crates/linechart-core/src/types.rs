// File: crates/linechart-core/src/types.rs
// Summary: Shared types and constants (margins, tick length, marker size, colors, layout options).

use crate::error::{ChartError, ChartResult};

/// Default distance between the viewport edge and the plot rectangle, in pixels.
pub const DEFAULT_EDGE_MARGIN: f64 = 20.0;
/// Default length of a tick mark, in pixels.
pub const DEFAULT_TICK_LENGTH: f64 = 10.0;
/// Default side length of a point marker, in pixels.
pub const DEFAULT_MARKER_SIZE: f64 = 6.0;
/// Default gap between a tick end and its label anchor, in pixels.
pub const DEFAULT_LABEL_GAP: f64 = 4.0;

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 255)
    }

    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
}

/// Colors handed to series registered without one, cycled by registration index.
pub const PALETTE: [Color; 6] = [
    Color::from_rgb(64, 160, 255),
    Color::from_rgb(40, 200, 120),
    Color::from_rgb(220, 80, 80),
    Color::from_rgb(255, 180, 40),
    Color::from_rgb(170, 110, 230),
    Color::from_rgb(90, 200, 210),
];

/// Palette color for the series registered at `index`.
pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Geometry constants consumed by the transform and the tick layout.
/// Contract: all fields are finite and non-negative (checked by [`LayoutOptions::validate`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    pub edge_margin: f64,
    pub tick_length: f64,
    pub marker_size: f64,
    pub label_gap: f64,
}

impl LayoutOptions {
    pub fn with_edge_margin(mut self, edge_margin: f64) -> Self {
        self.edge_margin = edge_margin;
        self
    }

    pub fn with_tick_length(mut self, tick_length: f64) -> Self {
        self.tick_length = tick_length;
        self
    }

    pub fn with_marker_size(mut self, marker_size: f64) -> Self {
        self.marker_size = marker_size;
        self
    }

    pub fn with_label_gap(mut self, label_gap: f64) -> Self {
        self.label_gap = label_gap;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        let fields = [
            ("edge_margin", self.edge_margin),
            ("tick_length", self.tick_length),
            ("marker_size", self.marker_size),
            ("label_gap", self.label_gap),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfiguration(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            edge_margin: DEFAULT_EDGE_MARGIN,
            tick_length: DEFAULT_TICK_LENGTH,
            marker_size: DEFAULT_MARKER_SIZE,
            label_gap: DEFAULT_LABEL_GAP,
        }
    }
}
