// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports the chart coordinate & axis layout API.

pub mod axis;
pub mod chart;
pub mod context;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod series;
pub mod sync;
pub mod ticks;
pub mod transform;
pub mod types;
pub mod value;

pub use axis::{AxisContext, AxisKind, AxisPolicy, CategoryAxis, DateAxis, LabelFormatter, NumericAxis};
pub use chart::{Chart, ChartBuilder, ChartState};
pub use context::ChartContext;
pub use error::{ChartError, ChartResult};
pub use geometry::{PixelPoint, Rect, Segment, Size};
pub use layout::{AxisLabel, AxisLayout, ChartLayout, LabelAnchor, MarkerFrame, SeriesPath};
pub use render::{RecordingRenderer, Renderer};
pub use series::{DataSource, Entry, Series, StaticSource};
pub use sync::{MarkerArena, MarkerId, MarkerUpdate, PointMarker, PointSynchronizer};
pub use transform::Transform;
pub use types::{Color, LayoutOptions};
pub use value::AxisValue;
