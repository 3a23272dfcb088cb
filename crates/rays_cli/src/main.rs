use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rays_core::{Art, BenchResult, Scene};
use rays_renderer::{image_size, render_on, worker_pool, Camera, FrameBuffer, RenderConfig};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Art file name that is looked up inside the RAYS folder.
const DEFAULT_ART_FILE: &str = "ART";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

/// Path-traced sphere field benchmark
#[derive(Debug, Parser)]
#[command(name = "rays", version, about)]
struct Cli {
    /// Megapixels of the rendered image
    #[arg(long = "mp", default_value_t = 1.0)]
    megapixels: f64,

    /// Times to repeat the benchmark
    #[arg(short, long, default_value_t = 1)]
    times: u32,

    /// Number of render threads [default: available parallelism]
    #[arg(short, long)]
    procs: Option<usize>,

    /// Output file to write the rendered image to (.png for PNG)
    #[arg(short, long, default_value = "render.ppm")]
    output: PathBuf,

    /// Result file to write the benchmark data to
    #[arg(short, long, default_value = "result.json")]
    result: PathBuf,

    /// The art file to use for rendering
    #[arg(short, long, default_value = DEFAULT_ART_FILE)]
    art: PathBuf,

    /// RAYS folder, where the default art file lives
    #[arg(long, env = "RAYS_HOME")]
    home: Option<PathBuf>,

    /// Render the built-in card art instead of reading a file
    #[arg(long, conflicts_with = "art")]
    builtin_art: bool,

    /// Seed the workers for a reproducible image
    #[arg(long)]
    seed: Option<u64>,

    /// Log level, overrides RUST_LOG
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

impl Cli {
    /// The default art name resolves inside the RAYS folder, any other path
    /// is used as given.
    fn art_path(&self) -> PathBuf {
        match &self.home {
            Some(home) if self.art == Path::new(DEFAULT_ART_FILE) => home.join(&self.art),
            _ => self.art.clone(),
        }
    }

    fn load_art(&self) -> Result<Art> {
        if self.builtin_art {
            return Ok(Art::default());
        }
        let path = self.art_path();
        Art::from_file(&path).with_context(|| format!("loading art from {}", path.display()))
    }
}

fn init_logging(level: Option<LogLevel>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level.into());
    }
    builder.init();
}

fn run(cli: &Cli) -> Result<()> {
    if cli.megapixels.is_nan() || cli.megapixels <= 0.0 {
        bail!("megapixels ({}) needs to be > 0", cli.megapixels);
    }
    let size = image_size(cli.megapixels);
    if size == 0 {
        bail!("{} MP is less than one pixel", cli.megapixels);
    }
    if cli.times == 0 {
        bail!("times needs to be >= 1");
    }

    let mut config = RenderConfig::default();
    if let Some(procs) = cli.procs {
        if procs < 1 {
            bail!("procs ({procs}) needs to be >= 1");
        }
        config = config.with_threads(procs);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let art = cli.load_art()?;
    let scene = Scene::from_art(&art);
    let camera = Camera::new(size)?;
    let mut image = FrameBuffer::square(size).context("allocating frame buffer")?;

    // Pool setup stays out of the timed passes.
    let pool = worker_pool(config.threads).context("starting render workers")?;
    log::debug!("Started {} render worker(s)", pool.current_num_threads());

    log::info!("Will render {} time(s)", cli.times);
    let mut result = BenchResult::new();

    for pass in 1..=cli.times {
        log::info!(
            "Starting render #{pass} of size {} MP ({size}x{size}) with {} thread(s)",
            cli.megapixels,
            config.threads
        );
        let start = Instant::now();
        render_on(&pool, &scene, &camera, &config, &mut image)
            .with_context(|| format!("render #{pass} failed"))?;

        let seconds = start.elapsed().as_secs_f64();
        log::info!("Time taken for render {seconds:.3}s");
        result.push(seconds);
    }

    log::info!("Average time {:.3}s", result.average());

    result
        .save(&cli.result)
        .with_context(|| format!("writing results to {}", cli.result.display()))?;
    image
        .save(&cli.output)
        .with_context(|| format!("writing image to {}", cli.output.display()))?;

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);
    run(&cli)
}
