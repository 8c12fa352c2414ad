use crate::foundation::core::Point;
use crate::scene::model::TextPosition;

/// Four corners of a text box's rotated bounding rectangle.
///
/// The rectangle is `width × height` centered at
/// `(x + width/2, y + height/2)` and rotated about its own center. Corner
/// offsets are rotated with the standard 2D rotation
/// `(dx·cosθ − dy·sinθ, dx·sinθ + dy·cosθ)` before translating to the
/// center. At θ = 0 the winding is top-left, top-right, bottom-right,
/// bottom-left.
pub fn rotated_bounding_box(position: &TextPosition) -> [Point; 4] {
    let center = position.center();
    let (hw, hh) = (position.width / 2.0, position.height / 2.0);
    let (sin, cos) = position.rotation_rad.sin_cos();

    let corner = |dx: f64, dy: f64| {
        Point::new(
            center.x + dx * cos - dy * sin,
            center.y + dx * sin + dy * cos,
        )
    };

    [
        corner(-hw, -hh),
        corner(hw, -hh),
        corner(hw, hh),
        corner(-hw, hh),
    ]
}

/// Even-odd ray-casting point-in-polygon test.
///
/// Casts a ray in +x and counts edge crossings with the conventional
/// `(yi > y) != (yj > y)` tie-break, so points exactly on shared edges
/// resolve consistently rather than double-counting.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    if polygon.is_empty() {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// True when `point` lies inside the text box's rotated rectangle.
pub fn hit_text_position(point: Point, position: &TextPosition) -> bool {
    point_in_polygon(point, &rotated_bounding_box(position))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/hit.rs"]
mod tests;
