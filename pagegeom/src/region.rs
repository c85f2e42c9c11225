use crate::{IRect, Point, Quad, Rect};

/// Anything that can be tested for containment or folded into a union:
/// a point, a rectangle or a quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    Point(Point),
    Rect(Rect),
    Quad(Quad),
}

impl Region {
    /// The defining points of the region.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (points, count) = match self {
            Region::Point(point) => ([*point; 4], 1),
            Region::Rect(rect) => (
                [
                    rect.top_left(),
                    rect.top_right(),
                    rect.bottom_left(),
                    rect.bottom_right(),
                ],
                4,
            ),
            Region::Quad(quad) => ([quad.ul, quad.ur, quad.ll, quad.lr], 4),
        };

        points.into_iter().take(count)
    }
}

impl From<Point> for Region {
    fn from(point: Point) -> Self {
        Region::Point(point)
    }
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        Region::Rect(rect)
    }
}

impl From<IRect> for Region {
    fn from(rect: IRect) -> Self {
        Region::Rect(rect.rect())
    }
}

impl From<Quad> for Region {
    fn from(quad: Quad) -> Self {
        Region::Quad(quad)
    }
}

impl From<(f64, f64)> for Region {
    fn from(point: (f64, f64)) -> Self {
        Region::Point(point.into())
    }
}

impl From<[f64; 2]> for Region {
    fn from(point: [f64; 2]) -> Self {
        Region::Point(point.into())
    }
}

impl From<[f64; 4]> for Region {
    fn from(rect: [f64; 4]) -> Self {
        Region::Rect(rect.into())
    }
}

impl From<[f64; 8]> for Region {
    fn from(quad: [f64; 8]) -> Self {
        Region::Quad(quad.into())
    }
}

/// Picks the shape by the length of the sequence: 2, 4 or 8 values.
impl TryFrom<&[f64]> for Region {
    type Error = crate::Error;

    fn try_from(values: &[f64]) -> crate::Result<Self> {
        match values.len() {
            2 => Ok(Region::Point(Point::try_from(values)?)),
            4 => Ok(Region::Rect(Rect::try_from(values)?)),
            8 => Ok(Region::Quad(Quad::try_from(values)?)),
            got => {
                tracing::debug!(got, "rejecting region-like sequence");
                Err(crate::error::RegionArity { got }.build().into())
            }
        }
    }
}
