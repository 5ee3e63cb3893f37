// File: crates/linechart-core/src/chart.rs
// Summary: Chart struct: explicit Uninitialized -> Loaded lifecycle, reload, and the layout pass pipeline.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::axis::{AxisContext, AxisKind, AxisPolicy, NumericAxis};
use crate::context::ChartContext;
use crate::error::{ChartError, ChartResult};
use crate::geometry::Size;
use crate::layout::{layout_axis, ChartLayout, MarkerFrame, SeriesPath};
use crate::render::Renderer;
use crate::series::{DataSource, Series};
use crate::sync::{MarkerArena, MarkerId, PointSynchronizer};
use crate::transform::Transform;
use crate::types::{palette_color, Color, LayoutOptions};
use crate::value::AxisValue;

/// Lifecycle of a chart, see [`Chart::state`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartState {
    /// No data pulled yet.
    Uninitialized,
    /// Series, bounds and markers reflect the latest reload.
    Loaded,
}

/// Everything derived from one reload; replaced wholesale on the next.
struct Loaded<Tx, Ty> {
    series: Vec<Series<Tx, Ty>>,
    colors: Vec<Color>,
    coordinates: Vec<Vec<(f64, f64)>>,
    context: ChartContext,
    markers: MarkerArena,
}

enum Phase<Tx, Ty> {
    Uninitialized,
    Loaded(Loaded<Tx, Ty>),
}

pub struct Chart<Tx: AxisValue, Ty: AxisValue> {
    source: Arc<dyn DataSource<Tx, Ty>>,
    x_policy: Arc<dyn AxisPolicy<Tx>>,
    y_policy: Arc<dyn AxisPolicy<Ty>>,
    options: LayoutOptions,
    viewport: Option<Size>,
    phase: Phase<Tx, Ty>,
    loads: usize,
}

impl<Tx: AxisValue + 'static, Ty: AxisValue + 'static> Chart<Tx, Ty> {
    pub fn builder() -> ChartBuilder<Tx, Ty> {
        ChartBuilder::new()
    }

    pub fn state(&self) -> ChartState {
        match self.phase {
            Phase::Uninitialized => ChartState::Uninitialized,
            Phase::Loaded(_) => ChartState::Loaded,
        }
    }

    pub fn options(&self) -> &LayoutOptions { &self.options }
    pub fn viewport(&self) -> Option<Size> { self.viewport }

    /// How many times the data source has been queried.
    pub fn load_count(&self) -> usize { self.loads }

    pub fn series(&self) -> &[Series<Tx, Ty>] {
        match &self.phase {
            Phase::Loaded(data) => &data.series,
            Phase::Uninitialized => &[],
        }
    }

    pub fn context(&self) -> Option<&ChartContext> {
        match &self.phase {
            Phase::Loaded(data) => Some(&data.context),
            Phase::Uninitialized => None,
        }
    }

    pub fn markers(&self) -> Option<&MarkerArena> {
        match &self.phase {
            Phase::Loaded(data) => Some(&data.markers),
            Phase::Uninitialized => None,
        }
    }

    /// Set the viewport size. The first call on an uninitialized chart also
    /// performs the initial load.
    pub fn attach_viewport(&mut self, size: Size) {
        debug!(width = size.width, height = size.height, "attach viewport");
        self.viewport = Some(size);
        if matches!(self.phase, Phase::Uninitialized) {
            self.reload();
        }
    }

    /// Pull fresh series from the data source and rebuild bounds and markers.
    pub fn reload(&mut self) {
        let series = self.source.series();
        let colors: Vec<Color> = series
            .iter()
            .enumerate()
            .map(|(i, s)| s.color.unwrap_or_else(|| palette_color(i)))
            .collect();
        let coordinates: Vec<Vec<(f64, f64)>> = series
            .iter()
            .map(|s| {
                s.entries
                    .iter()
                    .map(|e| (self.x_policy.coordinate_of(&e.x), self.y_policy.coordinate_of(&e.y)))
                    .collect()
            })
            .collect();
        let context = ChartContext::from_coordinates(coordinates.iter().flatten().copied());
        let markers = MarkerArena::with_shape(coordinates.iter().map(Vec::len).zip(colors.iter().copied()));
        self.loads += 1;
        debug!(
            series = series.len(),
            entries = context.len(),
            domain = context.domain(),
            range = context.range(),
            "reloaded chart data"
        );
        self.phase = Phase::Loaded(Loaded { series, colors, coordinates, context, markers });
    }

    /// Run one layout pass against the attached viewport.
    pub fn layout(&mut self) -> ChartResult<ChartLayout> {
        let viewport = self.viewport.ok_or(ChartError::NoViewport)?;
        // attach_viewport always loads, so an attached chart is never uninitialized
        let Phase::Loaded(data) = &mut self.phase else {
            return Err(ChartError::NoViewport);
        };

        let transform = Transform::build(&data.context, viewport, self.options.edge_margin);
        let plot = transform.plot_rect();
        let x_axis = layout_axis(
            self.x_policy.as_ref(),
            &AxisContext::new(AxisKind::X, &data.context, plot.width()),
            &transform,
            &self.options,
        );
        let y_axis = layout_axis(
            self.y_policy.as_ref(),
            &AxisContext::new(AxisKind::Y, &data.context, plot.height()),
            &transform,
            &self.options,
        );

        let series = data
            .coordinates
            .iter()
            .enumerate()
            .rev()
            .map(|(index, coords)| SeriesPath {
                index,
                name: data.series[index].name.clone(),
                color: data.colors[index],
                points: coords.iter().map(|&(x, y)| transform.apply(x, y)).collect(),
            })
            .collect();

        let sync = PointSynchronizer::new(self.options.marker_size);
        let updates = sync.synchronize(
            &transform,
            data.coordinates.iter().map(|s| s.iter().copied()),
            &mut data.markers,
        );
        let changed: HashSet<MarkerId> = updates.iter().map(|u| u.id).collect();
        let markers = data
            .markers
            .iter()
            .filter_map(|(id, marker)| {
                marker.position.map(|position| MarkerFrame {
                    id,
                    position,
                    size: self.options.marker_size,
                    color: marker.color,
                    changed: changed.contains(&id),
                })
            })
            .collect();

        debug!(
            width = viewport.width,
            height = viewport.height,
            x_ticks = x_axis.ticks.len(),
            y_ticks = y_axis.ticks.len(),
            updated = updates.len(),
            "layout pass"
        );

        Ok(ChartLayout {
            viewport,
            plot_rect: plot,
            origin: transform.origin(),
            x_axis,
            y_axis,
            series,
            markers,
        })
    }

    /// Lay out and hand the frame to `renderer`.
    pub fn render<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        let layout = self.layout()?;
        renderer.render(&layout)
    }
}

impl Chart<f64, f64> {
    /// A chart with numeric policies on both axes and default options.
    pub fn numeric(source: impl DataSource<f64, f64> + 'static) -> ChartResult<Self> {
        ChartBuilder::new()
            .data_source(source)
            .x_axis(NumericAxis::new())
            .y_axis(NumericAxis::new())
            .build()
    }
}

/// Collects a chart's collaborators; `build` fails fast on anything missing.
pub struct ChartBuilder<Tx, Ty> {
    source: Option<Arc<dyn DataSource<Tx, Ty>>>,
    x_policy: Option<Arc<dyn AxisPolicy<Tx>>>,
    y_policy: Option<Arc<dyn AxisPolicy<Ty>>>,
    options: LayoutOptions,
}

impl<Tx: AxisValue + 'static, Ty: AxisValue + 'static> ChartBuilder<Tx, Ty> {
    pub fn new() -> Self {
        Self { source: None, x_policy: None, y_policy: None, options: LayoutOptions::default() }
    }

    pub fn data_source(self, source: impl DataSource<Tx, Ty> + 'static) -> Self {
        self.shared_data_source(Arc::new(source))
    }

    pub fn shared_data_source(mut self, source: Arc<dyn DataSource<Tx, Ty>>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn x_axis(self, policy: impl AxisPolicy<Tx> + 'static) -> Self {
        self.shared_x_axis(Arc::new(policy))
    }

    /// Use a policy instance that other charts may also hold.
    pub fn shared_x_axis(mut self, policy: Arc<dyn AxisPolicy<Tx>>) -> Self {
        self.x_policy = Some(policy);
        self
    }

    pub fn y_axis(self, policy: impl AxisPolicy<Ty> + 'static) -> Self {
        self.shared_y_axis(Arc::new(policy))
    }

    pub fn shared_y_axis(mut self, policy: Arc<dyn AxisPolicy<Ty>>) -> Self {
        self.y_policy = Some(policy);
        self
    }

    pub fn options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> ChartResult<Chart<Tx, Ty>> {
        let missing = |what: &str| ChartError::InvalidConfiguration(format!("no {what} supplied"));
        let source = self.source.ok_or_else(|| missing("data source"))?;
        let x_policy = self.x_policy.ok_or_else(|| missing("x axis policy"))?;
        let y_policy = self.y_policy.ok_or_else(|| missing("y axis policy"))?;
        self.options.validate()?;
        Ok(Chart {
            source,
            x_policy,
            y_policy,
            options: self.options,
            viewport: None,
            phase: Phase::Uninitialized,
            loads: 0,
        })
    }
}

impl<Tx: AxisValue + 'static, Ty: AxisValue + 'static> Default for ChartBuilder<Tx, Ty> {
    fn default() -> Self {
        Self::new()
    }
}
