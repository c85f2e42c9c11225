use std::fmt;

use crate::{Geometry, Matrix};

/// A point, or a 2-D vector, in page space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub const fn from_array([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }

    /// Applies the affine map `m`: `(x*a + y*c + e, x*b + y*d + f)`.
    pub fn transform(&self, m: &Matrix) -> Self {
        Self {
            x: self.x * m.a + self.y * m.c + m.e,
            y: self.x * m.b + self.y * m.d + m.f,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: impl Into<Point>) -> f64 {
        (*self - other.into()).abs()
    }

    /// The vector scaled to length 1; the zero vector stays zero.
    pub fn unit(&self) -> Self {
        let length = self.abs();
        if length == 0.0 {
            return Self::ORIGIN;
        }

        Self::new(self.x / length, self.y / length)
    }

    /// [`Point::unit`] with both coordinates made non-negative.
    pub fn abs_unit(&self) -> Self {
        let unit = self.unit();
        Self::new(unit.x.abs(), unit.y.abs())
    }
}

componentwise!(Point, 2, "point");
transformable!(Point, "point");

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl PartialEq<(f64, f64)> for Point {
    fn eq(&self, other: &(f64, f64)) -> bool {
        *self == Point::from(*other)
    }
}

impl Geometry for Point {
    type Components = [f64; 2];

    fn components(&self) -> [f64; 2] {
        self.to_array()
    }

    fn abs(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({:?}, {:?})", self.x, self.y)
    }
}
