use std::fmt;

use crate::{Geometry, IRect, Matrix, Point, Quad, Region};

/// Lowest coordinate of the infinite rectangle.
pub(crate) const MIN_INF_RECT: f64 = -2147483648.0;
/// Highest coordinate of the infinite rectangle.
pub(crate) const MAX_INF_RECT: f64 = 2147483520.0;

/// An axis-aligned rectangle given by its top-left `(x0, y0)` and
/// bottom-right `(x1, y1)` corners.
///
/// Coordinates are not normalised on construction: a rectangle with
/// `x0 > x1` or `y0 > y1` is representable but invalid. Invalid rectangles
/// are always empty, contain nothing, and report a signed area
/// (`width * height`) that may be negative.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    /// The neutral element of unions: invalid, empty, and absorbed by any
    /// point or non-empty rectangle.
    pub const EMPTY: Rect = Rect::new(MAX_INF_RECT, MAX_INF_RECT, MIN_INF_RECT, MIN_INF_RECT);
    pub const INFINITE: Rect = Rect::new(MIN_INF_RECT, MIN_INF_RECT, MAX_INF_RECT, MAX_INF_RECT);
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn from_points(top_left: impl Into<Point>, bottom_right: impl Into<Point>) -> Self {
        let (tl, br) = (top_left.into(), bottom_right.into());
        Self::new(tl.x, tl.y, br.x, br.y)
    }

    pub const fn to_array(self) -> [f64; 4] {
        [self.x0, self.y0, self.x1, self.y1]
    }

    pub const fn from_array([x0, y0, x1, y1]: [f64; 4]) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Signed width; negative for invalid rectangles.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Signed height; negative for invalid rectangles.
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.x1, self.y0)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.x0, self.y1)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn is_valid(&self) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    pub fn is_infinite(&self) -> bool {
        *self == Self::INFINITE
    }

    /// Swaps coordinates where needed so that the rectangle is valid.
    pub fn normalize(&self) -> Self {
        Self {
            x0: self.x0.min(self.x1),
            y0: self.y0.min(self.y1),
            x1: self.x0.max(self.x1),
            y1: self.y0.max(self.y1),
        }
    }

    /// Grows the rectangle to cover `p`.
    pub fn include_point(&mut self, p: impl Into<Point>) {
        if self.is_infinite() {
            return;
        }

        let p = p.into();
        self.x0 = self.x0.min(p.x);
        self.y0 = self.y0.min(p.y);
        self.x1 = self.x1.max(p.x);
        self.y1 = self.y1.max(p.y);
    }

    /// Grows the rectangle to cover `other`. Empty rectangles cover nothing
    /// and are skipped; an infinite rectangle absorbs everything.
    pub fn include_rect(&mut self, other: impl Into<Rect>) {
        let other = other.into();
        if self.is_infinite() || other.is_empty() {
            return;
        }
        if other.is_infinite() || self.is_empty() {
            *self = other;
            return;
        }

        self.x0 = self.x0.min(other.x0);
        self.y0 = self.y0.min(other.y0);
        self.x1 = self.x1.max(other.x1);
        self.y1 = self.y1.max(other.y1);
    }

    /// Smallest rectangle covering `self` and `other`.
    pub fn union(&self, other: impl Into<Region>) -> Self {
        let mut result = *self;
        match other.into() {
            Region::Point(point) => result.include_point(point),
            Region::Rect(rect) => result.include_rect(rect),
            Region::Quad(quad) => result.include_rect(quad.rect()),
        }
        result
    }

    /// Largest rectangle contained in both `self` and `other`.
    ///
    /// Non-overlapping operands give a valid, empty rectangle: edges that
    /// would cross are collapsed onto each other.
    pub fn intersect(&self, other: impl Into<Rect>) -> Self {
        let other = other.into();
        if other.is_infinite() {
            return *self;
        }
        if self.is_infinite() {
            return other;
        }

        let x0 = self.x0.max(other.x0);
        let y0 = self.y0.max(other.y0);
        Self {
            x0,
            y0,
            x1: self.x1.min(other.x1).max(x0),
            y1: self.y1.min(other.y1).max(y0),
        }
    }

    /// Returns `true` if the two rectangles share a non-empty area.
    pub fn intersects(&self, other: impl Into<Rect>) -> bool {
        let other = other.into();
        !self.is_empty() && !other.is_empty() && !self.intersect(other).is_empty()
    }

    /// Returns `true` if every point of `other` lies inside or on the
    /// boundary of `self`. Empty rectangles contain nothing.
    pub fn contains(&self, other: impl Into<Region>) -> bool {
        if self.is_empty() {
            return false;
        }

        other.into().points().all(|p| {
            self.x0 <= p.x && p.x <= self.x1 && self.y0 <= p.y && p.y <= self.y1
        })
    }

    /// Maps all four corners through `m` and returns their bounding box.
    ///
    /// Rotations and reflections can move any corner to the top-left, so the
    /// result is rebuilt from the extremes rather than from `(x0, y0)` and
    /// `(x1, y1)`. Zero-width and zero-height rectangles are moved like any
    /// other; invalid and infinite rectangles are returned unchanged.
    pub fn transform(&self, m: &Matrix) -> Self {
        if !self.is_valid() || self.is_infinite() {
            return *self;
        }

        Self::bounding(
            [
                self.top_left(),
                self.top_right(),
                self.bottom_left(),
                self.bottom_right(),
            ]
            .map(|corner| corner.transform(m)),
        )
    }

    /// The bounding box of `points`, taken from their extremes alone so
    /// that no sentinel value limits the result.
    pub(crate) fn bounding(points: [Point; 4]) -> Self {
        let [first, rest @ ..] = points;
        rest.iter().fold(
            Self::new(first.x, first.y, first.x, first.y),
            |rect, p| Self::new(rect.x0.min(p.x), rect.y0.min(p.y), rect.x1.max(p.x), rect.y1.max(p.y)),
        )
    }

    pub fn quad(&self) -> Quad {
        Quad::new(
            self.top_left(),
            self.top_right(),
            self.bottom_left(),
            self.bottom_right(),
        )
    }

    /// The smallest integer rectangle containing `self`.
    pub fn round(&self) -> IRect {
        IRect::from(*self)
    }

    /// Transforms the rectangle's quad by `m` around the fixed point `fixpoint`.
    pub fn morph(&self, fixpoint: impl Into<Point>, m: &Matrix) -> Quad {
        self.quad().morph(fixpoint, m)
    }

    /// The matrix mapping `self` onto `target`.
    pub fn torect(&self, target: impl Into<Rect>) -> crate::Result<Matrix> {
        let target = target.into();
        for rect in [*self, target] {
            if rect.is_empty() || rect.is_infinite() {
                return Err(crate::error::DegenerateRect { rect }.build().into());
            }
        }

        Ok(Matrix::translation(-self.x0, -self.y0)
            * Matrix::scaling(
                target.width() / self.width(),
                target.height() / self.height(),
            )
            * Matrix::translation(target.x0, target.y0))
    }
}

componentwise!(Rect, 4, "rect");
transformable!(Rect, "rect");

impl From<(f64, f64, f64, f64)> for Rect {
    fn from((x0, y0, x1, y1): (f64, f64, f64, f64)) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

impl PartialEq<(f64, f64, f64, f64)> for Rect {
    fn eq(&self, other: &(f64, f64, f64, f64)) -> bool {
        *self == Rect::from(*other)
    }
}

impl From<IRect> for Rect {
    fn from(rect: IRect) -> Self {
        rect.rect()
    }
}

impl<T: Into<Region>> std::ops::BitOr<T> for Rect {
    type Output = Rect;

    fn bitor(self, rhs: T) -> Rect {
        self.union(rhs)
    }
}

impl<T: Into<Region>> std::ops::BitOrAssign<T> for Rect {
    fn bitor_assign(&mut self, rhs: T) {
        *self = self.union(rhs);
    }
}

impl<T: Into<Rect>> std::ops::BitAnd<T> for Rect {
    type Output = Rect;

    fn bitand(self, rhs: T) -> Rect {
        self.intersect(rhs)
    }
}

impl<T: Into<Rect>> std::ops::BitAndAssign<T> for Rect {
    fn bitand_assign(&mut self, rhs: T) {
        *self = self.intersect(rhs);
    }
}

impl Geometry for Rect {
    type Components = [f64; 4];

    fn components(&self) -> [f64; 4] {
        self.to_array()
    }

    fn abs(&self) -> f64 {
        self.width() * self.height()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect({:?}, {:?}, {:?}, {:?})",
            self.x0, self.y0, self.x1, self.y1
        )
    }
}
