//! Casts a few rays against a segment and a triangle and logs the results.
//!
//! Usage:
//! ```text
//! cargo run --example raycast
//! RUST_LOG=raycast2d=trace cargo run --example raycast   # show rejections
//! ```

use raycast2d::{Point2, Ray2, Triangle2};
use tracing::{info, warn};

fn main() {
    // Default: WARN for everything, INFO for the demo and the crate.
    // Override with RUST_LOG env var.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("raycast=info".parse().unwrap_or_default())
        .add_directive("raycast2d=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let triangle = Triangle2::new(
        Point2::new(5.0, -5.0),
        Point2::new(5.0, 5.0),
        Point2::new(15.0, 0.0),
    );
    let ray = Ray2::from_components(0.0, 0.0, 10.0, 0.0);
    match ray.intersect_triangle(&triangle) {
        Some(hit) => info!(
            x = hit.point.x,
            y = hit.point.y,
            nx = hit.normal.x,
            ny = hit.normal.y,
            "triangle hit"
        ),
        None => warn!("triangle missed"),
    }

    // The crossing at x = 5 lies beyond this ray's reach of 4.
    let short = Ray2::from_components(0.0, 0.0, 4.0, 0.0);
    match short.intersect_segment(&Point2::new(5.0, -1.0), &Point2::new(5.0, 1.0)) {
        Some(pt) => warn!(x = pt.x, y = pt.y, "short ray unexpectedly hit"),
        None => info!("short ray stops before the segment"),
    }
}
