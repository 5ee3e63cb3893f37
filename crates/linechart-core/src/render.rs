// File: crates/linechart-core/src/render.rs
// Summary: Rendering collaborator interface fed one ChartLayout per layout pass.

use anyhow::Result;

use crate::layout::ChartLayout;

/// Draws a finished layout. Stroke order must follow `ChartLayout::series`.
pub trait Renderer {
    fn render(&mut self, layout: &ChartLayout) -> Result<()>;
}

/// Keeps every frame it is handed; useful for headless hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<ChartLayout>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[ChartLayout] {
        &self.frames
    }

    pub fn last(&self) -> Option<&ChartLayout> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, layout: &ChartLayout) -> Result<()> {
        self.frames.push(layout.clone());
        Ok(())
    }
}
