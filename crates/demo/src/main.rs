// File: crates/demo/src/main.rs
// Summary: Demo loads (series, x, y) rows from CSV and renders the chart to PNG at two viewport sizes.

use anyhow::{Context, Result};
use linechart_core::{Chart, Series, Size, StaticSource};
use linechart_render_skia::{theme, RenderOptions, SkiaRenderer};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "crates/demo/data/sample.csv";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // usage: linechart-demo [input.csv] [theme]
    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let theme = theme::find(&args.next().unwrap_or_else(|| "dark".to_string()));

    let path = PathBuf::from(&raw);
    let series = if path.exists() {
        load_series_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
    } else {
        warn!(input = %path.display(), "input not found; using generated waves");
        generated_series()
    };
    let points: usize = series.iter().map(Series::len).sum();
    info!(series = series.len(), points, theme = theme.name, "loaded data");

    let mut chart = Chart::numeric(StaticSource::new(series))?;
    let renderer = SkiaRenderer::new(RenderOptions { theme, ..RenderOptions::default() });

    for (suffix, size) in [("small", Size::new(640.0, 400.0)), ("wide", Size::new(1280.0, 480.0))] {
        chart.attach_viewport(size);
        let layout = chart.layout()?;
        let out = out_name_with(&path, suffix);
        renderer.render_to_png(&layout, &out)?;
        info!(
            output = %out.display(),
            x_ticks = layout.x_axis.ticks.len(),
            y_ticks = layout.y_axis.ticks.len(),
            moved = layout.updated_markers(),
            "wrote chart"
        );
    }
    Ok(())
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    out.push(format!("chart_{}_{}.png", stem, suffix));
    out
}

/// Load `series,x,y` rows; series keep the order their names first appear in.
fn load_series_csv(path: &Path) -> Result<Vec<Series<f64, f64>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_name = idx(&["series", "name"]);
    let i_x = idx(&["x"]).context("missing x column")?;
    let i_y = idx(&["y", "value"]).context("missing y column")?;

    let mut out: Vec<Series<f64, f64>> = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok()).filter(|v| v.is_finite());
        let (Some(x), Some(y)) = (parse(i_x), parse(i_y)) else {
            skipped += 1;
            continue;
        };
        let name = i_name.and_then(|i| rec.get(i)).unwrap_or("series");
        match out.iter_mut().find(|s| s.name == name) {
            Some(series) => series.push((x, y)),
            None => out.push(Series::with_entries(name, [(x, y)])),
        }
    }
    if skipped > 0 {
        warn!(skipped, "dropped rows without numeric x/y");
    }
    Ok(out)
}

fn generated_series() -> Vec<Series<f64, f64>> {
    (0..3)
        .map(|s| {
            let phase = s as f64 * 1.3;
            Series::with_entries(
                format!("wave {s}"),
                (0..60).map(|i| {
                    let x = i as f64 * 0.25 - 5.0;
                    (x, (x + phase).sin() * (3.0 - s as f64))
                }),
            )
        })
        .collect()
}
