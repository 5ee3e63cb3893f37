// File: crates/linechart-core/src/sync.rs
// Summary: Point marker arena (one marker per entry) and the synchronizer that moves markers only when needed.

use crate::geometry::PixelPoint;
use crate::transform::Transform;
use crate::types::Color;

/// Positions closer than this (per component, in pixels) count as unchanged.
pub const POSITION_EPSILON: f64 = 1e-9;

/// Index of a marker: `series` in registration order, `entry` within that series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId {
    pub series: usize,
    pub entry: usize,
}

/// Last position applied to the on-screen object standing for one entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointMarker {
    /// Top-left corner of the marker box; `None` until first synchronized.
    pub position: Option<PixelPoint>,
    pub color: Color,
}

/// Markers laid out in parallel with the loaded entries, `[series][entry]`.
///
/// Rebuilt wholesale whenever the series are reloaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkerArena {
    markers: Vec<Vec<PointMarker>>,
}

impl MarkerArena {
    /// One unpositioned marker per entry, from `(entry count, color)` per series.
    pub fn with_shape<I>(shape: I) -> Self
    where
        I: IntoIterator<Item = (usize, Color)>,
    {
        let markers = shape
            .into_iter()
            .map(|(len, color)| vec![PointMarker { position: None, color }; len])
            .collect();
        Self { markers }
    }

    pub fn series_count(&self) -> usize { self.markers.len() }

    pub fn len(&self) -> usize { self.markers.iter().map(Vec::len).sum() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn get(&self, id: MarkerId) -> Option<&PointMarker> {
        self.markers.get(id.series).and_then(|s| s.get(id.entry))
    }

    /// All markers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (MarkerId, &PointMarker)> + '_ {
        self.markers.iter().enumerate().flat_map(|(series, markers)| {
            markers.iter().enumerate().map(move |(entry, m)| (MarkerId { series, entry }, m))
        })
    }

    fn series_mut(&mut self, series: usize) -> Option<&mut [PointMarker]> {
        self.markers.get_mut(series).map(Vec::as_mut_slice)
    }
}

/// A marker whose position was actually changed by a synchronization pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerUpdate {
    pub id: MarkerId,
    pub position: PixelPoint,
}

/// Recomputes marker positions under a transform and writes only the ones that moved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointSynchronizer {
    marker_size: f64,
}

impl PointSynchronizer {
    pub fn new(marker_size: f64) -> Self {
        Self { marker_size }
    }

    pub fn marker_size(&self) -> f64 { self.marker_size }

    /// Marker box top-left for a data coordinate: the transformed point shifted by half the marker size.
    pub fn target(&self, transform: &Transform, x: f64, y: f64) -> PixelPoint {
        let half = self.marker_size / 2.0;
        transform.apply(x, y).translate(-half, -half)
    }

    /// `coordinates` yields each series' `(x, y)` data coordinates, in arena order.
    /// Series or entries without a marker slot are ignored.
    pub fn synchronize<S, P>(
        &self,
        transform: &Transform,
        coordinates: S,
        arena: &mut MarkerArena,
    ) -> Vec<MarkerUpdate>
    where
        S: IntoIterator<Item = P>,
        P: IntoIterator<Item = (f64, f64)>,
    {
        let mut updates = Vec::new();
        for (series, points) in coordinates.into_iter().enumerate() {
            let Some(markers) = arena.series_mut(series) else { break };
            for ((x, y), (entry, marker)) in points.into_iter().zip(markers.iter_mut().enumerate()) {
                let target = self.target(transform, x, y);
                let unchanged = marker
                    .position
                    .is_some_and(|current| current.approx_eq(&target, POSITION_EPSILON));
                if unchanged {
                    continue;
                }
                marker.position = Some(target);
                updates.push(MarkerUpdate { id: MarkerId { series, entry }, position: target });
            }
        }
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ChartContext;
    use crate::geometry::Size;

    fn series() -> Vec<Vec<(f64, f64)>> {
        vec![vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)], vec![(1.0, 2.0)]]
    }

    fn arena_for(data: &[Vec<(f64, f64)>]) -> MarkerArena {
        MarkerArena::with_shape(data.iter().map(|s| (s.len(), Color::BLACK)))
    }

    fn transform(data: &[Vec<(f64, f64)>], size: f64) -> Transform {
        let ctx = ChartContext::from_coordinates(data.iter().flatten().copied());
        Transform::build(&ctx, Size::new(size, size), 20.0)
    }

    #[test]
    fn first_pass_positions_every_marker_centered() {
        let data = series();
        let mut arena = arena_for(&data);
        let t = transform(&data, 100.0);
        let sync = PointSynchronizer::new(6.0);
        let updates = sync.synchronize(&t, data.iter().map(|s| s.iter().copied()), &mut arena);
        assert_eq!(updates.len(), 4);
        let last = arena.get(MarkerId { series: 0, entry: 2 }).unwrap();
        assert_eq!(last.position, Some(PixelPoint::new(77.0, 17.0)));
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let data = series();
        let mut arena = arena_for(&data);
        let t = transform(&data, 100.0);
        let sync = PointSynchronizer::new(6.0);
        sync.synchronize(&t, data.iter().map(|s| s.iter().copied()), &mut arena);
        let again = sync.synchronize(&t, data.iter().map(|s| s.iter().copied()), &mut arena);
        assert!(again.is_empty());
    }

    #[test]
    fn resize_moves_only_markers_that_changed() {
        let data = series();
        let mut arena = arena_for(&data);
        let sync = PointSynchronizer::new(6.0);
        sync.synchronize(&transform(&data, 100.0), data.iter().map(|s| s.iter().copied()), &mut arena);
        let updates =
            sync.synchronize(&transform(&data, 200.0), data.iter().map(|s| s.iter().copied()), &mut arena);
        // (0, 0) sits on the bottom-left corner, which moves with the height
        assert_eq!(updates.len(), 4);
        // x of (0, 0) stays at the margin
        let first = updates.iter().find(|u| u.id == MarkerId { series: 0, entry: 0 }).unwrap();
        assert_eq!(first.position.x, 17.0);
    }

    #[test]
    fn arena_iterates_in_registration_order() {
        let arena = arena_for(&series());
        let ids: Vec<MarkerId> = arena.iter().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(ids[3], MarkerId { series: 1, entry: 0 });
        assert_eq!(arena.series_count(), 2);
    }
}
