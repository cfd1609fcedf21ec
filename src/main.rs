use clap::Parser;
use image::Rgb;
use serde::Serialize;
use std::path::PathBuf;

use squarescan::{SquareDetector, SquareParams, load_image, render};

#[derive(Parser)]
#[command(name = "squarescan")]
#[command(about = "Find convex, near-right-angled quadrilaterals in images")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save sweep masks to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Load detector parameters from a JSON file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Minimum square area in pixels²
    #[arg(long)]
    min_area: Option<f64>,

    /// Upper bound on the absolute corner cosine
    #[arg(long)]
    max_cosine: Option<f64>,

    /// Overlap rate above which a detection counts as a duplicate
    #[arg(long)]
    overlap: Option<f64>,

    /// Distance between threshold levels
    #[arg(long)]
    threshold_step: Option<u8>,

    /// Scan sweep passes in parallel
    #[arg(long)]
    parallel: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Write a copy of the image with the squares outlined
    #[arg(long, value_name = "OUT")]
    overlay: Option<PathBuf>,
}

#[derive(Serialize)]
struct SquareReport {
    corners: [[i32; 2]; 4],
    area: f64,
    max_cosine: f64,
    channel: Option<usize>,
    level: Option<u8>,
}

fn load_params(args: &Cli) -> anyhow::Result<SquareParams> {
    let mut params = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
            serde_json::from_str(&text)
                .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?
        }
        None => SquareParams::default(),
    };

    if let Some(min_area) = args.min_area {
        params = params.with_min_area(min_area);
    }
    if let Some(max_cosine) = args.max_cosine {
        params = params.with_max_cosine(max_cosine);
    }
    if let Some(overlap) = args.overlap {
        params = params.with_overlap_threshold(overlap);
    }
    if let Some(step) = args.threshold_step {
        params = params.with_threshold_step(step);
    }
    if args.parallel {
        params = params.with_parallel(true);
    }

    params.validate()?;
    Ok(params)
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let params = load_params(&args)?;

    log::info!("Loading image: {:?}", args.image_path);
    let img = load_image(&args.image_path)?;
    log::info!("Image loaded: {}x{}", img.width(), img.height());

    let mut detector = SquareDetector::new().with_params(params);
    if let Some(debug_dir) = args.debug_out.clone() {
        detector = detector.with_debug(debug_dir)?;
    }

    let squares = detector.detect(&img)?;

    if args.json {
        let reports: Vec<SquareReport> = squares
            .iter()
            .map(|s| SquareReport {
                corners: s.corners(),
                area: s.area(),
                max_cosine: s.max_cosine(),
                channel: s.step().map(|step| step.channel),
                level: s.step().map(|step| step.level),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("=== Square Detection Results ===");
        println!("Total squares detected: {}", squares.len());
        for (i, square) in squares.iter().enumerate() {
            let c = square.corners();
            print!(
                "  Square {}: ({}, {}) ({}, {}) ({}, {}) ({}, {}) - area: {:.0}, max cos: {:.3}",
                i + 1,
                c[0][0], c[0][1], c[1][0], c[1][1], c[2][0], c[2][1], c[3][0], c[3][1],
                square.area(),
                square.max_cosine()
            );
            match square.step() {
                Some(step) => println!(" [channel {}, level {}]", step.channel, step.level),
                None => println!(),
            }
        }
    }

    if let Some(out) = &args.overlay {
        render::draw_squares(&img, &squares, Rgb([0, 255, 0]))
            .save(out)
            .map_err(|e| anyhow::anyhow!("Failed to save overlay {}: {}", out.display(), e))?;
        log::info!("Overlay written to {}", out.display());
    }

    Ok(())
}
