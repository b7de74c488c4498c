//! Ordered `(x, y)` point sequences produced over a [`Grid`].

use std::ops::Index;

use serde::Serialize;

use crate::{Float, core::grid::Grid};

/// A single `(x, y)` sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub x: Float,
    pub y: Float,
}

/// Point sequence over a grid, stored as two parallel arrays.
///
/// One entry per grid index, in increasing `x` order. The series is immutable
/// once built and owned by whoever requested the computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSeries {
    x: Vec<Float>,
    y: Vec<Float>,
}

impl SampleSeries {
    /// Pair the grid abscissae with already computed ordinates.
    ///
    /// Panics if `y` does not hold exactly one value per grid point.
    pub(crate) fn from_values(grid: &Grid, y: Vec<Float>) -> Self {
        assert_eq!(y.len(), grid.len(), "one ordinate per grid point");
        Self {
            x: grid.abscissae().collect(),
            y,
        }
    }

    /// Evaluate `g` at every abscissa.
    pub(crate) fn tabulate(grid: &Grid, g: impl FnMut(Float) -> Float) -> Self {
        let y = grid.abscissae().map(g).collect();
        Self::from_values(grid, y)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Abscissae.
    pub fn xs(&self) -> &[Float] {
        &self.x
    }

    /// Ordinates.
    pub fn ys(&self) -> &[Float] {
        &self.y
    }

    pub fn get(&self, i: usize) -> Option<Sample> {
        Some(Sample {
            x: *self.x.get(i)?,
            y: *self.y.get(i)?,
        })
    }

    pub fn first(&self) -> Option<Sample> {
        self.get(0)
    }

    pub fn last(&self) -> Option<Sample> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Copy of the first `count` samples, or of the whole series if it is shorter.
    pub fn head(&self, count: usize) -> SampleSeries {
        let n = count.min(self.len());
        SampleSeries {
            x: self.x[..n].to_vec(),
            y: self.y[..n].to_vec(),
        }
    }

    /// Iterate over the stored samples.
    pub fn iter(&self) -> SampleIter<'_> {
        SampleIter {
            x_iter: self.x.iter(),
            y_iter: self.y.iter(),
        }
    }

    /// Split into the parallel `(x, y)` arrays.
    pub fn into_parts(self) -> (Vec<Float>, Vec<Float>) {
        (self.x, self.y)
    }
}

/// Indexing yields the ordinate `y_i`.
impl Index<usize> for SampleSeries {
    type Output = Float;

    fn index(&self, i: usize) -> &Self::Output {
        &self.y[i]
    }
}

impl<'a> IntoIterator for &'a SampleSeries {
    type Item = Sample;
    type IntoIter = SampleIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the samples of a [`SampleSeries`].
pub struct SampleIter<'a> {
    x_iter: std::slice::Iter<'a, Float>,
    y_iter: std::slice::Iter<'a, Float>,
}

impl Iterator for SampleIter<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Self::Item> {
        match (self.x_iter.next(), self.y_iter.next()) {
            (Some(&x), Some(&y)) => Some(Sample { x, y }),
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.x_iter.size_hint()
    }
}

impl ExactSizeIterator for SampleIter<'_> {}
