// File: crates/linechart-core/src/series.rs
// Summary: Entry and Series model plus the data source the chart pulls series from.
// Notes:
// - A series is replaced wholesale on every reload; the core never edits entries in place.

use crate::types::Color;

/// One (x, y) data point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry<Tx, Ty> {
    pub x: Tx,
    pub y: Ty,
}

impl<Tx, Ty> Entry<Tx, Ty> {
    pub const fn new(x: Tx, y: Ty) -> Self {
        Self { x, y }
    }
}

impl<Tx, Ty> From<(Tx, Ty)> for Entry<Tx, Ty> {
    fn from((x, y): (Tx, Ty)) -> Self {
        Self { x, y }
    }
}

/// A named, optionally colored run of entries drawn as one connected line.
/// Entry order is rendering order; it need not be sorted by x.
#[derive(Clone, Debug, PartialEq)]
pub struct Series<Tx, Ty> {
    pub name: String,
    pub color: Option<Color>,
    pub entries: Vec<Entry<Tx, Ty>>,
}

impl<Tx, Ty> Series<Tx, Ty> {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), color: None, entries: Vec::new() }
    }

    pub fn with_entries<I, E>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry<Tx, Ty>>,
    {
        Self { name: name.into(), color: None, entries: entries.into_iter().map(Into::into).collect() }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn push(&mut self, entry: impl Into<Entry<Tx, Ty>>) {
        self.entries.push(entry.into());
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/// Supplies the chart's series; queried once per reload.
pub trait DataSource<Tx, Ty>: Send + Sync {
    fn series(&self) -> Vec<Series<Tx, Ty>>;
}

impl<Tx, Ty, F> DataSource<Tx, Ty> for F
where
    F: Fn() -> Vec<Series<Tx, Ty>> + Send + Sync,
{
    fn series(&self) -> Vec<Series<Tx, Ty>> {
        self()
    }
}

/// A data source that always yields the same series.
#[derive(Clone, Debug)]
pub struct StaticSource<Tx, Ty> {
    series: Vec<Series<Tx, Ty>>,
}

impl<Tx, Ty> StaticSource<Tx, Ty> {
    pub fn new(series: Vec<Series<Tx, Ty>>) -> Self {
        Self { series }
    }
}

impl<Tx, Ty> DataSource<Tx, Ty> for StaticSource<Tx, Ty>
where
    Tx: Clone + Send + Sync,
    Ty: Clone + Send + Sync,
{
    fn series(&self) -> Vec<Series<Tx, Ty>> {
        self.series.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_from_tuples_keeps_order() {
        let s: Series<f64, f64> = Series::with_entries("s", [(2.0, 1.0), (0.0, 3.0)]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.entries[0], Entry::new(2.0, 1.0));
        assert_eq!(s.entries[1], Entry::new(0.0, 3.0));
        assert!(s.color.is_none());
    }

    #[test]
    fn closures_are_data_sources() {
        let source = || vec![Series::<f64, f64>::with_entries("a", [(0.0, 0.0)])];
        assert_eq!(DataSource::series(&source).len(), 1);
    }
}
