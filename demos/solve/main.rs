//! Art gallery solver demo.
//!
//! Usage:
//! ```text
//! cargo run --example solve                      # built-in comb polygon
//! cargo run --example solve -- random 24 7       # 24 random vertices, seed 7
//! cargo run --example solve -- 0,0 4,0 4,4 2,4 2,2 0,2
//! ```
//!
//! Output goes through `tracing`; set `RUST_LOG=artgallery=debug` to see the
//! individual pipeline stages.

use artgallery::math::Point2;
use artgallery::operations::creation::{RandomPolygon, DEFAULT_EXTENT};
use artgallery::operations::pipeline::{GalleryParams, SolveGallery};
use artgallery::operations::triangulate::TriangulationFallback;
use artgallery::{GalleryError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for artgallery and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=artgallery=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("solve=info".parse().unwrap_or_default())
        .add_directive("artgallery=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let points = polygon_from_args(&args)?;

    let params = GalleryParams {
        fallback: TriangulationFallback::EarClipping { max_forced_ears: 0 },
        ..GalleryParams::default()
    };
    let solution = SolveGallery::new(&points, params).execute()?;

    for (i, p) in solution.vertices.iter().enumerate() {
        tracing::info!(vertex = i, x = p.x, y = p.y, color = ?solution.coloring.get(i), "vertex");
    }
    for d in &solution.partition_diagonals {
        tracing::info!(from = d.from, to = d.to, "partition diagonal");
    }
    for (i, node) in solution.dual.nodes().iter().enumerate() {
        let neighbors: Vec<usize> = solution.dual.neighbors(i).collect();
        tracing::info!(
            node = i,
            triangle = ?node.triangle.vertices(),
            centroid = ?(node.centroid.x, node.centroid.y),
            ?neighbors,
            "dual node"
        );
    }
    tracing::info!(
        color = ?solution.guards.color,
        guards = ?solution.guards.vertices,
        stats = ?solution.stats,
        "guards placed"
    );
    Ok(())
}

fn polygon_from_args(args: &[String]) -> Result<Vec<Point2>> {
    match args.first().map(String::as_str) {
        None => Ok(comb()),
        Some("random") => {
            let n = parse_arg(args.get(1), 12)?;
            let seed = parse_arg(args.get(2), 0)?;
            RandomPolygon::new(n, DEFAULT_EXTENT).execute(&mut StdRng::seed_from_u64(seed))
        }
        Some(_) => args.iter().map(|arg| parse_point(arg)).collect(),
    }
}

fn parse_arg<T: std::str::FromStr>(arg: Option<&String>, default: T) -> Result<T> {
    arg.map_or(Ok(default), |s| {
        s.parse()
            .map_err(|_| invalid(format!("not a number: {s}")))
    })
}

fn parse_point(arg: &str) -> Result<Point2> {
    let (x, y) = arg
        .split_once(',')
        .ok_or_else(|| invalid(format!("expected x,y but got {arg}")))?;
    let coord = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|_| invalid(format!("bad coordinate in {arg}")))
    };
    Ok(Point2::new(coord(x)?, coord(y)?))
}

fn invalid(msg: String) -> GalleryError {
    artgallery::error::OperationError::InvalidInput(msg).into()
}

/// A comb with three teeth hanging from the top edge.
fn comb() -> Vec<Point2> {
    [
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 6.0),
        (9.0, 6.0),
        (8.0, 2.0),
        (7.0, 6.0),
        (5.0, 6.0),
        (4.0, 3.0),
        (3.0, 6.0),
        (1.0, 6.0),
        (0.5, 1.0),
        (0.0, 6.0),
    ]
    .iter()
    .map(|&(x, y)| Point2::new(x, y))
    .collect()
}
