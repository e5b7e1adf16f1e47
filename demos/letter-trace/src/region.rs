use glam::Vec2;

/// The interactive area of a stroke. Leaving it while tracing resets the stroke.
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    /// No boundary; the pointer can never leave.
    Unbounded,
    /// Closed polygon, even-odd rule.
    Polygon(Vec<Vec2>),
    /// Everything within `half_width` of the polyline through `path`.
    Corridor { path: Vec<Vec2>, half_width: f32 },
}

impl Region {
    pub fn contains(&self, p: Vec2) -> bool {
        match self {
            Region::Unbounded => true,
            Region::Polygon(points) => polygon_contains(points, p),
            Region::Corridor { path, half_width } => match path.as_slice() {
                [] => false,
                [only] => only.distance(p) <= *half_width,
                _ => path
                    .windows(2)
                    .any(|seg| distance_to_segment(p, seg[0], seg[1]) <= *half_width),
            },
        }
    }
}

/// Even-odd crossing test.
fn polygon_contains(points: &[Vec2], p: Vec2) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Region {
        Region::Polygon(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ])
    }

    #[test]
    fn polygon_inside_and_outside() {
        let r = square();
        assert!(r.contains(Vec2::new(5.0, 5.0)));
        assert!(!r.contains(Vec2::new(15.0, 5.0)));
        assert!(!r.contains(Vec2::new(5.0, -1.0)));
    }

    #[test]
    fn concave_polygon_notch_is_outside() {
        // U shape: notch between x=3..7 above y=3.
        let r = Region::Polygon(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(7.0, 10.0),
            Vec2::new(7.0, 3.0),
            Vec2::new(3.0, 3.0),
            Vec2::new(3.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]);
        assert!(r.contains(Vec2::new(1.0, 8.0)));
        assert!(!r.contains(Vec2::new(5.0, 8.0)));
        assert!(r.contains(Vec2::new(5.0, 1.0)));
    }

    #[test]
    fn degenerate_polygon_contains_nothing() {
        let r = Region::Polygon(vec![Vec2::ZERO, Vec2::new(1.0, 1.0)]);
        assert!(!r.contains(Vec2::new(0.5, 0.5)));
    }

    #[test]
    fn corridor_follows_polyline() {
        let r = Region::Corridor {
            path: vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), Vec2::new(100.0, 100.0)],
            half_width: 10.0,
        };
        assert!(r.contains(Vec2::new(50.0, 9.0)));
        assert!(!r.contains(Vec2::new(50.0, 11.0)));
        assert!(r.contains(Vec2::new(105.0, 50.0)));
        // Past the end cap
        assert!(!r.contains(Vec2::new(100.0, 115.0)));
    }

    #[test]
    fn single_point_corridor_is_a_disc() {
        let r = Region::Corridor {
            path: vec![Vec2::new(5.0, 5.0)],
            half_width: 2.0,
        };
        assert!(r.contains(Vec2::new(6.0, 6.0)));
        assert!(!r.contains(Vec2::new(8.0, 5.0)));
    }

    #[test]
    fn unbounded_contains_everything() {
        assert!(Region::Unbounded.contains(Vec2::new(-1e6, 1e6)));
    }
}
