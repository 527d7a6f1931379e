//! Pixel-space geometry: points and axis-aligned bounding boxes.

/// A point in image-pixel coordinates.  Values may be negative while a
/// projected box is partially off-screen; drawing clamps, geometry does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle in image-pixel coordinates delimiting a
/// detected object in camera view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox2D {
    x_min: i32,
    x_max: i32,
    y_min: i32,
    y_max: i32,
}

impl BoundingBox2D {
    /// Build a box from its extents.  Swapped extents are normalized so the
    /// min corner is always the min corner.
    pub fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self {
            x_min: x_min.min(x_max),
            x_max: x_min.max(x_max),
            y_min: y_min.min(y_max),
            y_max: y_min.max(y_max),
        }
    }

    /// The top-left corner.
    pub fn min_point(&self) -> Point2D {
        Point2D::new(self.x_min, self.y_min)
    }

    /// The bottom-right corner.
    pub fn max_point(&self) -> Point2D {
        Point2D::new(self.x_max, self.y_max)
    }

    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    /// Whether the point lies inside the box (edges inclusive).
    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}

impl std::fmt::Display for BoundingBox2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BoundingBox2D(xmin: {}, xmax: {}, ymin: {}, ymax: {})",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_queries_return_extents() {
        let bbox = BoundingBox2D::new(0, 10, 0, 20);
        assert_eq!(bbox.min_point(), Point2D::new(0, 0));
        assert_eq!(bbox.max_point(), Point2D::new(10, 20));
        assert_eq!(bbox.width(), 10);
        assert_eq!(bbox.height(), 20);
    }

    #[test]
    fn swapped_extents_are_normalized() {
        let bbox = BoundingBox2D::new(10, 0, 20, 0);
        assert_eq!(bbox.min_point(), Point2D::new(0, 0));
        assert_eq!(bbox.max_point(), Point2D::new(10, 20));
    }

    #[test]
    fn contains_is_edge_inclusive() {
        let bbox = BoundingBox2D::new(0, 10, 0, 20);
        assert!(bbox.contains(Point2D::new(0, 0)));
        assert!(bbox.contains(Point2D::new(10, 20)));
        assert!(!bbox.contains(Point2D::new(11, 5)));
    }
}
