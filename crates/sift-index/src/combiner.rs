//! Match combiners.
//!
//! When several segments at one level of a query match the same key, their
//! weights are reduced to a single weight by a [`MatchCombiner`].

use sift_query::Segment;

/// Reduces the weights collected for one key into a final weight.
///
/// `weights` is never empty. `siblings` is the full list of segments at the
/// level being reduced, which lets a combiner account for query structure.
/// The result must be finite and greater than zero.
pub trait MatchCombiner {
    /// Combines the weights of one key.
    fn combine(&self, weights: &[f32], siblings: &[Segment]) -> f32;
}

impl<F> MatchCombiner for F
where
    F: Fn(&[f32], &[Segment]) -> f32,
{
    fn combine(&self, weights: &[f32], siblings: &[Segment]) -> f32 {
        self(weights, siblings)
    }
}

/// Adds the weights together.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumCombiner;

impl MatchCombiner for SumCombiner {
    fn combine(&self, weights: &[f32], _siblings: &[Segment]) -> f32 {
        weights.iter().sum()
    }
}

/// Keeps the largest weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxCombiner;

impl MatchCombiner for MaxCombiner {
    fn combine(&self, weights: &[f32], _siblings: &[Segment]) -> f32 {
        weights.iter().copied().fold(f32::MIN, f32::max)
    }
}

/// Averages the weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanCombiner;

impl MatchCombiner for MeanCombiner {
    fn combine(&self, weights: &[f32], _siblings: &[Segment]) -> f32 {
        weights.iter().sum::<f32>() / weights.len() as f32
    }
}

/// A built-in combiner selected by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CombinerKind {
    /// See [`SumCombiner`].
    #[default]
    Sum,
    /// See [`MaxCombiner`].
    Max,
    /// See [`MeanCombiner`].
    Mean,
}

impl MatchCombiner for CombinerKind {
    fn combine(&self, weights: &[f32], siblings: &[Segment]) -> f32 {
        match self {
            Self::Sum => SumCombiner.combine(weights, siblings),
            Self::Max => MaxCombiner.combine(weights, siblings),
            Self::Mean => MeanCombiner.combine(weights, siblings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_adds_weights() {
        assert!((SumCombiner.combine(&[1.0, 2.5], &[]) - 3.5).abs() < f32::EPSILON);
    }

    #[test]
    fn max_keeps_largest() {
        assert!((MaxCombiner.combine(&[1.0, 2.5, 0.5], &[]) - 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn mean_averages() {
        assert!((MeanCombiner.combine(&[1.0, 2.0], &[]) - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn single_weight_is_unchanged() {
        for kind in [CombinerKind::Sum, CombinerKind::Max, CombinerKind::Mean] {
            assert!((kind.combine(&[0.75], &[]) - 0.75).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn closures_are_combiners() {
        let per_sibling = |weights: &[f32], siblings: &[Segment]| {
            weights.iter().sum::<f32>() / siblings.len().max(1) as f32
        };
        let siblings = [
            Segment::StandardValue("a".into()),
            Segment::StandardValue("b".into()),
        ];
        assert!((per_sibling.combine(&[1.0, 3.0], &siblings) - 2.0).abs() < f32::EPSILON);
    }
}
