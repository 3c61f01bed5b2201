// File: crates/demo/src/main.rs
// Summary: Demo replays numeric CSV columns (or a synthetic signal) into a streaming chart,
// writing one PNG per frame and optionally printing the tooltip readout at a hover point.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stream_chart::{theme, ChartInput, ChartProps, DisplayOptions, OverlayManager, Rgba, SeriesDescriptor, StreamingChart};
use stream_chart_skia::{SkiaEngine, SkiaTextMeasure};

/// Replay a metric stream into a live-tail line chart.
#[derive(Parser, Debug)]
#[command(name = "stream-chart-demo")]
#[command(about = "Render a streaming line chart to PNG frames")]
#[command(version)]
struct Args {
    /// CSV with a header row; every numeric column becomes a series.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Number of most recent samples kept in view.
    #[arg(long, default_value_t = 60)]
    x_range: usize,

    /// Seconds between consecutive samples.
    #[arg(long, default_value_t = 1.0)]
    refresh_rate: f64,

    /// Frames to render after the initial fill.
    #[arg(long, default_value_t = 10)]
    frames: usize,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 300)]
    height: u32,

    /// Theme preset name (dark, light, solarized-dark, solarized-light, high-contrast-dark).
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Draw the second series against a right-hand axis.
    #[arg(long)]
    second_axis: bool,

    /// Mark every sample with a point.
    #[arg(long)]
    points: bool,

    /// Output directory for frames.
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    /// Plot-relative cursor position `x,y` to report the tooltip for after the last frame.
    #[arg(long, value_parser = parse_point)]
    hover: Option<(f32, f32)>,
}

const PALETTE: [Rgba; 4] = [
    Rgba::rgb(64, 160, 255),
    Rgba::rgb(255, 120, 64),
    Rgba::rgb(80, 200, 120),
    Rgba::rgb(200, 100, 255),
];

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let columns = match &args.csv {
        Some(path) => load_columns(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => synthetic_columns(args.x_range + args.frames),
    };
    if columns.is_empty() {
        bail!("no numeric columns to plot");
    }
    let total = columns.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
    let initial = total.saturating_sub(args.frames).max(1).min(total);
    info!(series = columns.len(), samples = total, initial, "loaded stream");

    let mut input = ChartInput::new(args.refresh_rate);
    for (i, (label, values)) in columns.iter().enumerate() {
        let data = values[..initial.min(values.len())].to_vec();
        input.add_series(SeriesDescriptor::new(label.clone(), PALETTE[i % PALETTE.len()]).with_data(data));
    }
    let mut props = ChartProps::new(args.x_range, input);
    props.show_second_axis = args.second_axis;
    props.options = DisplayOptions { show_data_points: Some(args.points), ..DisplayOptions::default() };

    let mut chart = StreamingChart::mount(SkiaEngine::new(), props, theme::find(&args.theme))?;
    chart.on_resize(args.width as f64, args.height as f64)?;
    std::fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;

    let mut frame = 0usize;
    write_frame(&mut chart, &args.out, frame)?;
    for idx in initial..total {
        let row: Vec<f64> = columns.iter().map(|(_, v)| v.get(idx).copied().unwrap_or(f64::NAN)).collect();
        chart.push_samples(&row)?;
        frame += 1;
        write_frame(&mut chart, &args.out, frame)?;
    }
    info!(frames = frame + 1, out = %args.out.display(), "rendered frames");

    if let Some((x, y)) = args.hover {
        let mut body = OverlayManager::with_measure(Box::new(SkiaTextMeasure::new(12.0)));
        chart.on_cursor_move(x, y, &mut body);
        match body.nodes().next() {
            Some((_, node)) => {
                println!("tooltip at ({:.1}, {:.1}):", node.left, node.top);
                println!("{}", node.content.html);
            }
            None => warn!(x, y, "cursor is outside the plot; no tooltip"),
        }
        chart.unmount(&mut body);
    }
    Ok(())
}

fn write_frame(chart: &mut StreamingChart<SkiaEngine>, out: &Path, frame: usize) -> Result<()> {
    chart.render()?;
    let bytes = chart.engine().frame_png().context("engine kept no frame")?;
    let path = out.join(format!("frame_{frame:04}.png"));
    std::fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    debug!(path = %path.display(), window = ?chart.view_window(), "wrote frame");
    Ok(())
}

/// Numeric columns of a CSV, keyed by header. Columns with no parseable value are skipped;
/// unparseable cells become NaN (drawn as gaps).
fn load_columns(path: &Path) -> Result<Vec<(String, Vec<f64>)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
    debug!(?headers, "csv headers");

    let mut cols: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    for rec in rdr.records() {
        let rec = rec?;
        for (i, col) in cols.iter_mut().enumerate() {
            let v = rec.get(i).and_then(|s| s.trim().replace(',', "").parse::<f64>().ok());
            col.push(v.unwrap_or(f64::NAN));
        }
    }

    Ok(headers
        .into_iter()
        .zip(cols)
        .filter(|(_, v)| v.iter().any(|x| x.is_finite()))
        .collect())
}

/// Two synthetic metrics: a slow wave in the thousands and a noisy ratio.
fn synthetic_columns(n: usize) -> Vec<(String, Vec<f64>)> {
    let rps = (0..n).map(|i| 1500.0 + 900.0 * (i as f64 / 9.0).sin()).collect();
    let err = (0..n).map(|i| 2.0 + (i as f64 * 1.7).sin().abs() * 3.0).collect();
    vec![("req/s".to_string(), rps), ("errors %".to_string(), err)]
}

fn parse_point(s: &str) -> std::result::Result<(f32, f32), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected x,y but got '{s}'"))?;
    let x = x.trim().parse::<f32>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f32>().map_err(|e| e.to_string())?;
    Ok((x, y))
}
