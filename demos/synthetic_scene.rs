use image::{DynamicImage, Luma, Rgb};
use imageproc::drawing::draw_polygon_mut;
use squarescan::{Polygon, SquareDetector, SquareParams, evaluate, render};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let references = vec![
        Polygon::from_coords(&[(43, 25), (43, 129), (232, 129), (232, 25)]),
        Polygon::from_coords(&[(252, 87), (324, 40), (387, 137), (315, 184)]),
        Polygon::from_coords(&[(154, 178), (196, 180), (198, 278), (154, 278)]),
        Polygon::from_coords(&[(0, 0), (400, 0), (400, 300), (0, 300)]),
    ];

    let mut gray = image::GrayImage::from_pixel(400, 300, Luma([200u8]));
    for region in &references[..3] {
        draw_polygon_mut(&mut gray, region.points(), Luma([40u8]));
    }
    let scene = DynamicImage::ImageLuma8(gray);
    println!("Created 400x300 scene with {} reference regions", references.len());

    // Standard parameters
    println!("\n=== Default Parameters ===");
    let squares = SquareDetector::new().detect(&scene)?;
    for (i, square) in squares.iter().enumerate() {
        println!("  {}: {:?} area={:.0} max_cos={:.3}", i + 1, square.corners(), square.area(), square.max_cosine());
    }

    let report = evaluate(&squares.polygons(), &references, 0.9);
    println!(
        "match rate {:.2}, extra rate {:.2}, {}/{} references found",
        report.match_rate(),
        report.extra_rate(),
        report.matched_references,
        report.references
    );

    // Stricter corners, coarser sweep, parallel scan
    println!("\n=== Strict Parameters ===");
    let strict = SquareParams::default()
        .with_max_cosine(0.03)
        .with_threshold_step(64)
        .with_parallel(true);
    let strict_squares = SquareDetector::new().with_params(strict).detect(&scene)?;
    println!("Strict sweep kept {} square(s)", strict_squares.len());

    render::draw_squares(&scene, &squares, Rgb([0, 255, 0])).save("synthetic_scene_overlay.png")?;
    println!("\nOverlay saved to synthetic_scene_overlay.png");

    Ok(())
}
