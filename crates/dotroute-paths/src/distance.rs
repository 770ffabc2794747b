use dotroute_core::Point;

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}
