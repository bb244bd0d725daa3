mod ray;
mod triangle;

pub use ray::Ray2;
pub use triangle::Triangle2;
