// File: crates/linechart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart to PNG bytes (labels off).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns without failing.

use linechart_core::{Chart, Series, Size, StaticSource};
use linechart_render_skia::{RenderOptions, SkiaRenderer};

fn render_bytes() -> Vec<u8> {
    let source = StaticSource::new(vec![Series::with_entries(
        "basic",
        [(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.5), (4.0, 1.0)],
    )]);
    let mut chart = Chart::numeric(source).expect("chart");
    chart.attach_viewport(Size::new(320.0, 200.0));
    let layout = chart.layout().expect("layout");

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    SkiaRenderer::new(opts).render_to_png_bytes(&layout).expect("render bytes")
}

#[test]
fn golden_basic_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn axis_lines_use_theme_color() {
    let source = StaticSource::new(vec![Series::with_entries("s", [(0.0, 0.0), (10.0, 10.0)])]);
    let mut chart = Chart::numeric(source).expect("chart");
    chart.attach_viewport(Size::new(100.0, 100.0));
    let layout = chart.layout().expect("layout");

    let opts = RenderOptions { draw_labels: false, draw_markers: false, ..RenderOptions::default() };
    let bg = opts.theme.background;
    let bytes = SkiaRenderer::new(opts).render_to_png_bytes(&layout).expect("render");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();

    // corner pixel is untouched background
    let corner = img.get_pixel(2, 2);
    assert_eq!(corner.0, [bg.r(), bg.g(), bg.b(), 255]);
    // the X axis runs along y = 80 from x = 20 to 80
    let on_axis = img.get_pixel(50, 80);
    assert_ne!(on_axis.0, [bg.r(), bg.g(), bg.b(), 255]);
}
