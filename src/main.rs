//! Replays a snapshot feed against an in-memory chart at display-frame pace
//! and prints the final chart.

#![allow(clippy::print_stdout)]

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use sortvis::chart::BarChart;
use sortvis::feed::demo::ShuffleDemo;
use sortvis::feed::{self, ReaderStats, SnapshotFeed, SnapshotSender};
use sortvis::options::ChartOptions;
use sortvis::surface::recording::{RecordingOverlay, RecordingSurface};
use sortvis::surface::text::render_rows;
use sortvis::util::frame_timing::FrameTiming;
use web_time::Instant;

type Chart = BarChart<RecordingSurface, RecordingOverlay>;

/// Animate a sorting-visualization snapshot feed.
#[derive(Debug, Parser)]
#[command(name = "sortvis", version)]
struct Cli {
    /// JSON-lines snapshot file, or "-" for stdin.
    #[arg(long, value_name = "FILE", conflicts_with = "demo")]
    input: Option<PathBuf>,
    /// Shuffle N random values instead of reading a feed (default 50).
    #[arg(long, value_name = "N")]
    demo: Option<usize>,
    /// Seed for the demo's random values.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Probability that each demo position is swapped.
    #[arg(long, default_value_t = 0.1)]
    strength: f64,
    /// Seconds each demo swap animates for.
    #[arg(long, value_name = "SECS", default_value_t = 0.1)]
    step: f64,
    /// Target frame rate (0 = unlimited).
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// TOML options preset.
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,
    /// Text rows used to print the final chart.
    #[arg(long, default_value_t = 12)]
    rows: usize,
}

enum Producer {
    Reader(JoinHandle<ReaderStats>),
    Demo(JoinHandle<usize>),
}

impl Producer {
    fn start(cli: &Cli, sender: SnapshotSender) -> Result<Self> {
        if let Some(path) = &cli.input {
            let reader: Box<dyn BufRead + Send> = if path.as_os_str() == "-" {
                Box::new(BufReader::new(io::stdin()))
            } else {
                let file = File::open(path)
                    .with_context(|| format!("opening {}", path.display()))?;
                Box::new(BufReader::new(file))
            };
            return Ok(Self::Reader(feed::spawn_reader(reader, sender)?));
        }

        let mut demo = ShuffleDemo::new(cli.demo.unwrap_or(50), cli.seed)
            .with_strength(cli.strength)
            .with_step(cli.step);
        let handle = thread::Builder::new()
            .name("shuffle-demo".into())
            .spawn(move || demo.run(&sender))?;
        Ok(Self::Demo(handle))
    }

    /// Snapshots the producer delivered.
    fn join(self) -> Result<u64> {
        match self {
            Self::Reader(handle) => handle
                .join()
                .map(|stats| stats.accepted)
                .map_err(|_| anyhow!("snapshot reader panicked")),
            Self::Demo(handle) => handle
                .join()
                .map(|sent| sent as u64)
                .map_err(|_| anyhow!("shuffle demo panicked")),
        }
    }
}

/// Run frames until the feed is closed and the chart has settled.
fn replay(
    chart: &mut Chart,
    feed: &mut SnapshotFeed,
    fps: u32,
) -> Result<FrameTiming> {
    let mut timing = FrameTiming::new(fps);
    if timing.frame_interval().is_zero() {
        log::debug!("frame pacing unlimited");
    } else {
        log::debug!("pacing frames every {:?}", timing.frame_interval());
    }
    loop {
        let now = Instant::now();
        if !timing.should_render(now) {
            thread::sleep(timing.time_until_next(now));
            continue;
        }

        let received = feed.drain_into(chart);
        let report = chart.frame(now)?;
        if received > 0 || report.applied || report.swaps_settled > 0 {
            log::trace!(
                "frame {}: {received} received, {report:?}",
                timing.frames()
            );
        }
        timing.end_frame(now);

        if feed.is_closed() && chart.is_idle() {
            return Ok(timing);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();
    let cli = Cli::parse();

    let options = match &cli.options {
        Some(path) => ChartOptions::load(path).with_context(|| {
            format!("loading options from {}", path.display())
        })?,
        None => ChartOptions::default(),
    };

    let mut chart = Chart::new(&options);
    let _ = chart.attach_surface(RecordingSurface::new());
    let _ = chart.attach_overlay(RecordingOverlay::new());

    let (sender, mut feed) = feed::channel();
    let producer = Producer::start(&cli, sender)?;
    let timing = replay(&mut chart, &mut feed, cli.fps)?;
    let delivered = producer.join()?;

    if let Some(surface) = chart.surface() {
        for row in render_rows(surface, cli.rows) {
            println!("{row}");
        }
    }
    println!(
        "{} bars, {delivered} snapshots, {} coalesced, {} frames at {:.1} fps",
        chart.bars().len(),
        chart.dropped_total(),
        timing.frames(),
        timing.fps()
    );
    if let Some(overlay) = chart.overlay() {
        println!("{} swap ghosts spawned", overlay.spawned() / 2);
    }
    Ok(())
}
