use std::fmt;

use crate::{EPSILON, Geometry, Matrix, Point, Rect, Region};

/// A general four-sided shape, such as a rotated text span.
///
/// The corners are upper-left, upper-right, lower-left and lower-right, in
/// that order. The order is not checked: a quad built from shuffled corners
/// is representable, but its predicates describe a different shape.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Quad {
    pub ul: Point,
    pub ur: Point,
    pub ll: Point,
    pub lr: Point,
}

impl Quad {
    pub const fn new(ul: Point, ur: Point, ll: Point, lr: Point) -> Self {
        Self { ul, ur, ll, lr }
    }

    pub const fn to_array(self) -> [f64; 8] {
        [
            self.ul.x, self.ul.y, self.ur.x, self.ur.y, self.ll.x, self.ll.y, self.lr.x, self.lr.y,
        ]
    }

    pub const fn from_array([ulx, uly, urx, ury, llx, lly, lrx, lry]: [f64; 8]) -> Self {
        Self {
            ul: Point::new(ulx, uly),
            ur: Point::new(urx, ury),
            ll: Point::new(llx, lly),
            lr: Point::new(lrx, lry),
        }
    }

    /// The smallest rectangle containing all four corners.
    pub fn rect(&self) -> Rect {
        Rect::bounding([self.ul, self.ur, self.ll, self.lr])
    }

    /// Length of the longer of the top and bottom edges.
    pub fn width(&self) -> f64 {
        self.ul.distance_to(self.ur).max(self.ll.distance_to(self.lr))
    }

    /// Length of the longer of the left and right edges.
    pub fn height(&self) -> f64 {
        self.ul.distance_to(self.ll).max(self.ur.distance_to(self.lr))
    }

    /// Returns `true` if the quad has (almost) no extent in some direction.
    pub fn is_empty(&self) -> bool {
        self.width() < EPSILON || self.height() < EPSILON
    }

    /// Returns `true` if walking ul → ur → lr → ll never turns both left and
    /// right.
    pub fn is_convex(&self) -> bool {
        let corners = [self.ul, self.ur, self.lr, self.ll];
        let mut positive = false;
        let mut negative = false;

        for i in 0..corners.len() {
            let (a, b, c) = (corners[i], corners[(i + 1) % 4], corners[(i + 2) % 4]);
            let turn = cross(b - a, c - b);
            positive |= turn > EPSILON;
            negative |= turn < -EPSILON;
        }

        !(positive && negative)
    }

    /// Returns `true` if all four corners are right angles.
    pub fn is_rectangular(&self) -> bool {
        if self.is_empty() {
            return false;
        }

        let corners = [self.ul, self.ur, self.lr, self.ll];
        (0..corners.len()).all(|i| {
            let (a, b, c) = (corners[i], corners[(i + 1) % 4], corners[(i + 2) % 4]);
            let (incoming, outgoing) = ((b - a).unit(), (c - b).unit());
            dot(incoming, outgoing).abs() < EPSILON
        })
    }

    /// Returns `true` if every point of `other` lies inside or on the
    /// boundary of the quad. Empty quads contain nothing.
    pub fn contains(&self, other: impl Into<Region>) -> bool {
        if self.is_empty() {
            return false;
        }

        other.into().points().all(|p| {
            in_triangle(p, self.ul, self.ur, self.lr) || in_triangle(p, self.ul, self.ll, self.lr)
        })
    }

    /// Maps each corner through `m`.
    pub fn transform(&self, m: &Matrix) -> Self {
        Self {
            ul: self.ul.transform(m),
            ur: self.ur.transform(m),
            ll: self.ll.transform(m),
            lr: self.lr.transform(m),
        }
    }

    /// Applies `m` as if `fixpoint` were the origin.
    pub fn morph(&self, fixpoint: impl Into<Point>, m: &Matrix) -> Self {
        let p = fixpoint.into();
        let m = Matrix::translation(-p.x, -p.y) * *m * Matrix::translation(p.x, p.y);

        self.transform(&m)
    }
}

componentwise!(Quad, 8, "quad");
transformable!(Quad, "quad");

impl From<Rect> for Quad {
    fn from(rect: Rect) -> Self {
        rect.quad()
    }
}

impl From<[Point; 4]> for Quad {
    fn from([ul, ur, ll, lr]: [Point; 4]) -> Self {
        Self { ul, ur, ll, lr }
    }
}

impl Geometry for Quad {
    type Components = [f64; 8];

    fn components(&self) -> [f64; 8] {
        self.to_array()
    }

    fn abs(&self) -> f64 {
        let rect = self.rect();
        rect.width() * rect.height()
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quad({}, {}, {}, {})", self.ul, self.ur, self.ll, self.lr)
    }
}

fn cross(u: Point, v: Point) -> f64 {
    u.x * v.y - u.y * v.x
}

fn dot(u: Point, v: Point) -> f64 {
    u.x * v.x + u.y * v.y
}

/// Inclusive test: points on an edge count as inside.
fn in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let d1 = cross(b - a, p - a);
    let d2 = cross(c - b, p - b);
    let d3 = cross(a - c, p - c);

    let has_negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_negative && has_positive)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_quad_predicates() {
        struct TestCase {
            name: &'static str,
            input: Quad,
            empty: bool,
            convex: bool,
            rectangular: bool,
        }

        let test_cases = [
            TestCase {
                name: "from rect",
                input: Rect::new(0.0, 0.0, 4.0, 2.0).quad(),
                empty: false,
                convex: true,
                rectangular: true,
            },
            TestCase {
                name: "rotated rect",
                input: Rect::new(0.0, 0.0, 4.0, 2.0).quad() * Matrix::rotation(30.0),
                empty: false,
                convex: true,
                rectangular: true,
            },
            TestCase {
                name: "parallelogram",
                input: Rect::new(0.0, 0.0, 4.0, 2.0).quad() * Matrix::shear(1.0, 0.0),
                empty: false,
                convex: true,
                rectangular: false,
            },
            TestCase {
                name: "dart",
                input: Quad::from([
                    Point::new(0.0, 0.0),
                    Point::new(4.0, 0.0),
                    Point::new(0.0, 4.0),
                    Point::new(1.0, 1.0),
                ]),
                empty: false,
                convex: false,
                rectangular: false,
            },
            TestCase {
                name: "flat",
                input: Rect::new(0.0, 1.0, 4.0, 1.0).quad(),
                empty: true,
                convex: true,
                rectangular: false,
            },
        ];

        for case in &test_cases {
            let quad = case.input;
            assert_eq!(quad.is_empty(), case.empty, "Test '{}' failed: is_empty", case.name);
            assert_eq!(quad.is_convex(), case.convex, "Test '{}' failed: is_convex", case.name);
            assert_eq!(
                quad.is_rectangular(),
                case.rectangular,
                "Test '{}' failed: is_rectangular",
                case.name
            );
        }
    }

    #[test]
    fn test_quad_contains() {
        let diamond = Rect::new(-1.0, -1.0, 1.0, 1.0).morph(Point::ORIGIN, &Matrix::rotation(45.0));

        assert!(diamond.contains(Point::ORIGIN));
        assert!(diamond.contains([1.0, 0.0]));
        assert!(!diamond.contains([1.0, 1.0]));
        assert!(diamond.contains(Rect::new(-0.5, -0.5, 0.5, 0.5)));
        assert!(!diamond.contains(Rect::new(-1.0, -1.0, 1.0, 1.0)));
        assert!(diamond.contains(diamond));

        let flat = Rect::new(0.0, 1.0, 4.0, 1.0).quad();
        assert!(!flat.contains(Point::new(2.0, 1.0)));
    }

    #[test]
    fn test_quad_bounding_rect_and_area() {
        let quad = Rect::new(0.0, 0.0, 2.0, 2.0).morph((1.0, 1.0), &Matrix::rotation(90.0));
        assert_eq!(quad.rect(), Rect::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(quad.abs(), 4.0);

        let huge = Rect::new(3e9, 3e9, 4e9, 4e9);
        assert_eq!(Quad::from(huge).rect(), huge);

        let sheared = Rect::new(0.0, 0.0, 2.0, 1.0).quad() * Matrix::shear(1.0, 0.0);
        assert_eq!(sheared.rect(), Rect::new(0.0, 0.0, 3.0, 1.0));
        assert_eq!(sheared.abs(), 3.0);
    }

    #[test]
    fn test_quad_arithmetic() {
        let quad = Rect::new(0.0, 0.0, 1.0, 1.0).quad();

        assert_eq!(
            quad + 1.0,
            Rect::new(1.0, 1.0, 2.0, 2.0).quad(),
            "scalar broadcast must shift every corner"
        );
        assert_eq!(quad * 2.0, Rect::new(0.0, 0.0, 2.0, 2.0).quad());
        assert_eq!(quad - quad, Quad::default());
        assert_eq!(
            (quad * Matrix::translation(3.0, 4.0) / Matrix::translation(3.0, 4.0)).unwrap(),
            quad
        );
        assert_eq!(quad, [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    }
}
