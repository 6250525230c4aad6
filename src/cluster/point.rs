//! Points and the deduplicated sample store.
//!
//! Every value that enters the engine, whether a bare scalar or a sequence of
//! components, is normalized into a [`Point`] at the boundary. Internal code only
//! ever handles that one shape.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

/// An ordered, fixed-length sequence of numeric components.
///
/// Equality and hashing are by value. `0.0` and `-0.0` are the same component,
/// and all NaNs are equal to each other, so points can live in hash maps.
#[derive(Clone, Debug, Default)]
pub struct Point(Vec<f64>);

impl Point {
    /// Create a point from its components.
    pub fn new(components: Vec<f64>) -> Self {
        Self(components)
    }

    /// Create a length-1 point from a bare scalar.
    pub fn scalar(value: f64) -> Self {
        Self(vec![value])
    }

    /// Number of components.
    #[inline]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// The components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterate over the components.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// The bare value of a length-1 point, for presentation.
    pub fn as_scalar(&self) -> Option<f64> {
        match self.0.as_slice() {
            [x] => Some(*x),
            _ => None,
        }
    }

    /// Consume the point, returning its components.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

#[inline]
fn canonical_bits(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| canonical_bits(*a) == canonical_bits(*b))
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.len().hash(state);
        for x in &self.0 {
            canonical_bits(*x).hash(state);
        }
    }
}

impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl<'a> IntoIterator for &'a Point {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Length-1 points print as their bare value, everything else as a tuple.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(x) = self.as_scalar() {
            return write!(f, "{x}");
        }
        write!(f, "(")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}

/// A numeric type usable as a point component.
///
/// 64-bit and pointer-sized integers convert with `as`, so magnitudes above
/// 2^53 round to the nearest representable `f64`.
pub trait Component: Copy {
    /// The component as `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_component {
    ($via:ident: $($t:ty),*) => {
        $(
            impl Component for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    impl_component!(@convert $via, self)
                }
            }

            impl From<$t> for Point {
                fn from(value: $t) -> Self {
                    Self::scalar(value.to_f64())
                }
            }
        )*
    };
    (@convert lossless, $v:expr) => { f64::from($v) };
    (@convert cast, $v:expr) => { $v as f64 };
}

impl_component!(lossless: f64, f32, i32, u32, i16, u16, i8, u8);
impl_component!(cast: i64, u64, isize, usize);

impl<T: Component> From<Vec<T>> for Point {
    fn from(components: Vec<T>) -> Self {
        Self(components.into_iter().map(Component::to_f64).collect())
    }
}

impl<T: Component> From<&[T]> for Point {
    fn from(components: &[T]) -> Self {
        Self(components.iter().map(|&x| x.to_f64()).collect())
    }
}

impl<T: Component, const N: usize> From<[T; N]> for Point {
    fn from(components: [T; N]) -> Self {
        Self(components.into_iter().map(Component::to_f64).collect())
    }
}

impl From<&Point> for Point {
    fn from(point: &Point) -> Self {
        point.clone()
    }
}

/// Deduplicated collection of sample points, iterated in insertion order.
#[derive(Clone, Debug, Default)]
pub struct SampleSet {
    points: Vec<Point>,
    index: HashMap<Point, usize>,
}

impl SampleSet {
    /// Create an empty sample set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a point, returning its position and whether it was new.
    pub fn insert(&mut self, point: Point) -> (usize, bool) {
        if let Some(&pos) = self.index.get(&point) {
            return (pos, false);
        }
        let pos = self.points.len();
        self.index.insert(point.clone(), pos);
        self.points.push(point);
        (pos, true)
    }

    /// Position of a point, if it is stored.
    pub fn position(&self, point: &Point) -> Option<usize> {
        self.index.get(point).copied()
    }

    /// Whether a value-equal point is stored.
    pub fn contains(&self, point: &Point) -> bool {
        self.index.contains_key(point)
    }

    /// Number of distinct points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in insertion order.
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Discard every point.
    pub fn clear(&mut self) {
        self.points.clear();
        self.index.clear();
    }
}
