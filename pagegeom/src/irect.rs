use std::fmt;

use crate::{Geometry, Matrix, Point, Quad, Rect, Region};

/// Slack applied when rounding a [`Rect`] outwards, so that coordinates a
/// hair off an integer (typical after a transform) do not grow the result.
const ROUNDING_SLACK: f64 = 0.001;

/// An integer rectangle, typically a pixel area.
///
/// Follows the same conventions as [`Rect`]; arithmetic is carried out on the
/// float rectangle and rounded back outwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl IRect {
    pub const EMPTY: IRect = IRect::new(2147483520, 2147483520, i32::MIN, i32::MIN);
    pub const INFINITE: IRect = IRect::new(i32::MIN, i32::MIN, 2147483520, 2147483520);

    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub const fn to_array(self) -> [i32; 4] {
        [self.x0, self.y0, self.x1, self.y1]
    }

    pub fn width(&self) -> i64 {
        i64::from(self.x1) - i64::from(self.x0)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.y1) - i64::from(self.y0)
    }

    pub fn top_left(&self) -> Point {
        self.rect().top_left()
    }

    pub fn top_right(&self) -> Point {
        self.rect().top_right()
    }

    pub fn bottom_left(&self) -> Point {
        self.rect().bottom_left()
    }

    pub fn bottom_right(&self) -> Point {
        self.rect().bottom_right()
    }

    pub fn is_valid(&self) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn is_infinite(&self) -> bool {
        *self == Self::INFINITE
    }

    /// The same rectangle with float coordinates.
    pub fn rect(&self) -> Rect {
        Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1),
            f64::from(self.y1),
        )
    }

    pub fn quad(&self) -> Quad {
        self.rect().quad()
    }

    pub fn include_point(&mut self, p: impl Into<Point>) {
        let mut rect = self.rect();
        rect.include_point(p);
        *self = rect.into();
    }

    pub fn include_rect(&mut self, other: impl Into<IRect>) {
        let other: IRect = other.into();
        let mut rect = self.rect();
        rect.include_rect(other);
        *self = rect.into();
    }

    pub fn union(&self, other: impl Into<Region>) -> Self {
        self.rect().union(other).into()
    }

    pub fn intersect(&self, other: impl Into<IRect>) -> Self {
        let other: IRect = other.into();
        self.rect().intersect(other).into()
    }

    pub fn intersects(&self, other: impl Into<IRect>) -> bool {
        let other: IRect = other.into();
        self.rect().intersects(other)
    }

    pub fn contains(&self, other: impl Into<Region>) -> bool {
        self.rect().contains(other)
    }

    /// Transforms the float rectangle and rounds the bounding box outwards.
    pub fn transform(&self, m: &Matrix) -> Self {
        if !self.is_valid() || self.is_infinite() {
            return *self;
        }

        self.rect().transform(m).into()
    }
}

transformable!(IRect, "irect");

/// Outward rounding: `x0, y0` down, `x1, y1` up. Coordinates outside the
/// `i32` range saturate.
impl From<Rect> for IRect {
    fn from(rect: Rect) -> Self {
        if rect.is_infinite() {
            return Self::INFINITE;
        }

        Self {
            x0: (rect.x0 + ROUNDING_SLACK).floor() as i32,
            y0: (rect.y0 + ROUNDING_SLACK).floor() as i32,
            x1: (rect.x1 - ROUNDING_SLACK).ceil() as i32,
            y1: (rect.y1 - ROUNDING_SLACK).ceil() as i32,
        }
    }
}

impl From<[i32; 4]> for IRect {
    fn from([x0, y0, x1, y1]: [i32; 4]) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

impl From<(i32, i32, i32, i32)> for IRect {
    fn from((x0, y0, x1, y1): (i32, i32, i32, i32)) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

/// Broadcasts an integer to every coordinate.
impl From<i32> for IRect {
    fn from(value: i32) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Broadcasts a scalar, rounded to the nearest integer, to every coordinate.
impl From<f64> for IRect {
    fn from(value: f64) -> Self {
        Self::from(value.round() as i32)
    }
}

impl TryFrom<&[f64]> for IRect {
    type Error = crate::Error;

    fn try_from(values: &[f64]) -> crate::Result<Self> {
        Rect::try_from(values).map(IRect::from)
    }
}

impl PartialEq<[i32; 4]> for IRect {
    fn eq(&self, other: &[i32; 4]) -> bool {
        self.to_array() == *other
    }
}

impl PartialEq<(i32, i32, i32, i32)> for IRect {
    fn eq(&self, other: &(i32, i32, i32, i32)) -> bool {
        *self == IRect::from(*other)
    }
}

impl<T: Into<IRect>> std::ops::Add<T> for IRect {
    type Output = IRect;

    fn add(self, rhs: T) -> IRect {
        let rhs = rhs.into();
        Self {
            x0: self.x0.saturating_add(rhs.x0),
            y0: self.y0.saturating_add(rhs.y0),
            x1: self.x1.saturating_add(rhs.x1),
            y1: self.y1.saturating_add(rhs.y1),
        }
    }
}

impl<T: Into<IRect>> std::ops::Sub<T> for IRect {
    type Output = IRect;

    fn sub(self, rhs: T) -> IRect {
        let rhs = rhs.into();
        Self {
            x0: self.x0.saturating_sub(rhs.x0),
            y0: self.y0.saturating_sub(rhs.y0),
            x1: self.x1.saturating_sub(rhs.x1),
            y1: self.y1.saturating_sub(rhs.y1),
        }
    }
}

impl<T: Into<IRect>> std::ops::AddAssign<T> for IRect {
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs;
    }
}

impl<T: Into<IRect>> std::ops::SubAssign<T> for IRect {
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs;
    }
}

impl std::ops::Neg for IRect {
    type Output = IRect;

    fn neg(self) -> IRect {
        Self {
            x0: self.x0.saturating_neg(),
            y0: self.y0.saturating_neg(),
            x1: self.x1.saturating_neg(),
            y1: self.y1.saturating_neg(),
        }
    }
}

impl std::ops::Mul<f64> for IRect {
    type Output = IRect;

    fn mul(self, rhs: f64) -> IRect {
        (self.rect() * rhs).into()
    }
}

impl std::ops::MulAssign<f64> for IRect {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl std::ops::Div<f64> for IRect {
    type Output = crate::Result<IRect>;

    fn div(self, rhs: f64) -> crate::Result<IRect> {
        (self.rect() / rhs).map(IRect::from)
    }
}

impl<T: Into<Region>> std::ops::BitOr<T> for IRect {
    type Output = IRect;

    fn bitor(self, rhs: T) -> IRect {
        self.union(rhs)
    }
}

impl<T: Into<Region>> std::ops::BitOrAssign<T> for IRect {
    fn bitor_assign(&mut self, rhs: T) {
        *self = self.union(rhs);
    }
}

impl<T: Into<IRect>> std::ops::BitAnd<T> for IRect {
    type Output = IRect;

    fn bitand(self, rhs: T) -> IRect {
        self.intersect(rhs)
    }
}

impl<T: Into<IRect>> std::ops::BitAndAssign<T> for IRect {
    fn bitand_assign(&mut self, rhs: T) {
        *self = self.intersect(rhs);
    }
}

impl Geometry for IRect {
    type Components = [f64; 4];

    fn components(&self) -> [f64; 4] {
        self.rect().to_array()
    }

    fn abs(&self) -> f64 {
        self.width() as f64 * self.height() as f64
    }
}

impl fmt::Display for IRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IRect({}, {}, {}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_irect_from_rect() {
        struct TestCase {
            name: &'static str,
            input: Rect,
            expected: IRect,
        }

        let test_cases = [
            TestCase {
                name: "integral",
                input: Rect::new(1.0, 2.0, 3.0, 4.0),
                expected: IRect::new(1, 2, 3, 4),
            },
            TestCase {
                name: "fractional rounds outwards",
                input: Rect::new(0.5, 0.5, 3.2, 3.7),
                expected: IRect::new(0, 0, 4, 4),
            },
            TestCase {
                name: "negative fractional rounds outwards",
                input: Rect::new(-0.5, -1.5, -0.2, 0.1),
                expected: IRect::new(-1, -2, 0, 1),
            },
            TestCase {
                name: "float noise is ignored",
                input: Rect::new(0.9999999, 1e-9, 2.0000001, 3.0),
                expected: IRect::new(1, 0, 2, 3),
            },
            TestCase {
                name: "empty sentinel",
                input: Rect::EMPTY,
                expected: IRect::EMPTY,
            },
            TestCase {
                name: "infinite sentinel",
                input: Rect::INFINITE,
                expected: IRect::INFINITE,
            },
        ];

        for case in &test_cases {
            let result = IRect::from(case.input);
            assert_eq!(
                result, case.expected,
                "Test '{}' failed: expected: {}, got: {}",
                case.name, case.expected, result
            );
        }
    }

    #[test]
    fn test_irect_arithmetic() {
        let r = IRect::new(1, 2, 3, 4);

        assert_eq!(r + IRect::new(1, 1, 1, 1), IRect::new(2, 3, 4, 5));
        assert_eq!(r + [1, 1, 1, 1], IRect::new(2, 3, 4, 5));
        assert_eq!(r - (1, 2, 3, 4), IRect::new(0, 0, 0, 0));
        assert_eq!(r + 1.0, IRect::new(2, 3, 4, 5));
        assert_eq!(r + 0.6, IRect::new(2, 3, 4, 5), "scalars round to the nearest integer");
        assert!(r == (1, 2, 3, 4));
        assert_eq!(-r, IRect::new(-1, -2, -3, -4));
        assert_eq!(r * 2.0, IRect::new(2, 4, 6, 8));
        assert_eq!((r / 2.0).unwrap(), IRect::new(0, 1, 2, 2));
        assert_eq!((r / 0.0).unwrap_err().kind(), ErrorKind::DivisionByZero);
        assert_eq!(
            IRect::INFINITE + IRect::new(-1, -1, 1, 1),
            IRect::new(i32::MIN, i32::MIN, 2147483521, 2147483521)
        );
    }

    #[test]
    fn test_irect_transform() {
        let r = IRect::new(1, 2, 3, 5);

        assert_eq!(r * Matrix::rotation(90.0), IRect::new(-5, 1, -2, 3));
        assert_eq!(
            r * Matrix::rotation(45.0) * Matrix::rotation(-45.0),
            IRect::new(-1, 0, 5, 7)
        );
        assert_eq!((r / Matrix::scaling(1.0, 0.5)).unwrap(), IRect::new(1, 4, 3, 10));

        let span = IRect::new(0, 0, 0, 4);
        assert_eq!(span * Matrix::translation(2.0, 3.0), IRect::new(2, 3, 2, 7));
        assert_eq!(IRect::EMPTY * Matrix::translation(2.0, 3.0), IRect::EMPTY);
    }

    #[test]
    fn test_irect_union_intersection_containment() {
        let a = IRect::new(0, 0, 4, 4);
        let b = IRect::new(2, 2, 6, 6);

        assert_eq!(a | b, IRect::new(0, 0, 6, 6));
        assert_eq!(a | Point::new(-1.5, 5.0), IRect::new(-2, 0, 4, 5));
        assert_eq!(a & b, IRect::new(2, 2, 4, 4));

        let disjoint = a & IRect::new(10, 10, 12, 12);
        assert!(disjoint.is_valid() && disjoint.is_empty());

        assert!(a.contains(Point::new(4.0, 4.0)));
        assert!(a.contains(IRect::new(1, 1, 2, 2)));
        assert!(!a.contains(b));
        assert!(!IRect::new(0, 0, 0, 4).contains(Point::new(0.0, 1.0)));

        let mut fold = IRect::EMPTY;
        for (x, y) in [(3.0, 1.0), (0.0, 2.0), (1.0, 5.0)] {
            fold |= (x, y);
        }
        assert_eq!(fold, IRect::new(0, 1, 3, 5));
    }

    #[test]
    fn test_irect_area() {
        assert_eq!(IRect::new(0, 0, 4, 2).abs(), 8.0);
        assert_eq!(IRect::new(4, 0, 0, 2).abs(), -8.0);
        assert!(IRect::new(4, 0, 0, 2).is_empty());
        assert!(!IRect::new(4, 0, 0, 2).is_valid());
    }
}
