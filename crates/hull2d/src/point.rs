//! The 2D point value type and its adapters.
//!
//! `Point<T>` is the single concrete point shape used by every algorithm.
//! Callers holding other shapes (tuples, arrays, nalgebra points/vectors)
//! convert through the `From` impls below.

use std::ops::Sub;

use nalgebra::{Point2, Scalar, Vector2};

use crate::numeric::Coord;

/// An immutable 2D point. Equality is coordinate-wise numeric `equals`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Coord> Point<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// `x² + y²`, the squared distance to the origin.
    #[inline]
    pub fn square_norm(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.x.equals(other.x) && self.y.equals(other.y)
    }

    /// Squared distance between `self` and `other`.
    #[inline]
    pub fn square_distance(&self, other: &Self) -> T {
        (*self - *other).square_norm()
    }
}

impl<T: Coord> PartialEq for Point<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Coord> Sub for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn sub(self, rhs: Point<T>) -> Self::Output {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Coord> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: Coord> From<Point<T>> for (T, T) {
    #[inline]
    fn from(p: Point<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T: Coord> From<[T; 2]> for Point<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T: Coord> From<Point<T>> for [T; 2] {
    #[inline]
    fn from(p: Point<T>) -> Self {
        [p.x, p.y]
    }
}

impl<T: Coord + Scalar> From<Point2<T>> for Point<T> {
    #[inline]
    fn from(p: Point2<T>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl<T: Coord + Scalar> From<Point<T>> for Point2<T> {
    #[inline]
    fn from(p: Point<T>) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl<T: Coord + Scalar> From<Vector2<T>> for Point<T> {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl<T: Coord + Scalar> From<Point<T>> for Vector2<T> {
    #[inline]
    fn from(p: Point<T>) -> Self {
        Vector2::new(p.x, p.y)
    }
}

/// Collect any iterator of point-like values into `Point<T>`s.
pub fn to_points<T, P, I>(items: I) -> Vec<Point<T>>
where
    T: Coord,
    P: Into<Point<T>>,
    I: IntoIterator<Item = P>,
{
    items.into_iter().map(Into::into).collect()
}
