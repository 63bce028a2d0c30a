//! Regression tree for salary-on-year fits
//!
//! A depth-bounded binary tree over the single year feature. Splits are
//! chosen by squared-error reduction; leaves predict the mean salary of
//! their members.
//!
//! ## How It Works
//!
//! 1. Sort the (year, salary) pairs by year
//! 2. At each node, try every boundary between distinct years and keep the
//!    split with the lowest combined squared error
//! 3. Stop at the depth bound, on tiny nodes, or when no split helps
//!
//! The depth bound keeps the tree from memorizing the handful of points a
//! salary series usually has.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};
use crate::metrics::r_squared;
use crate::regression::{check_observations, Regressor};

/// A fitted tree node
#[derive(Debug, Clone, Serialize, Deserialize)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn eval(&self, x: f64) -> f64 {
        match self {
            Node::Leaf { value } => *value,
            Node::Split {
                threshold,
                left,
                right,
            } => {
                if x <= *threshold {
                    left.eval(x)
                } else {
                    right.eval(x)
                }
            }
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Depth-bounded regression tree
///
/// # Example
///
/// ```rust
/// use analytics::regression::{RegressionTree, Regressor};
///
/// let years = vec![2018.0, 2019.0, 2020.0, 2021.0, 2022.0];
/// let salaries = vec![80_000.0, 82_000.0, 95_000.0, 97_000.0, 99_000.0];
///
/// let mut model = RegressionTree::new(5).unwrap();
/// model.fit(&years, &salaries).unwrap();
/// let forecast = model.predict(&[2023.0]).unwrap();
/// assert!(forecast[0] >= 95_000.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionTree {
    /// Maximum tree depth
    max_depth: usize,
    /// Fitted root node
    root: Option<Node>,
    /// R-squared on training data
    r_squared: f64,
}

impl RegressionTree {
    /// Create a new regression tree
    ///
    /// # Arguments
    ///
    /// * `max_depth` - Depth bound, at least 1
    pub fn new(max_depth: usize) -> Result<Self> {
        if max_depth < 1 {
            return Err(AnalyticsError::InvalidParameter {
                name: "max_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            max_depth,
            root: None,
            r_squared: 0.0,
        })
    }

    /// Depth bound
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Depth of the fitted tree
    pub fn fitted_depth(&self) -> usize {
        self.root.as_ref().map_or(0, Node::depth)
    }

    fn build(pairs: &[(f64, f64)], depth: usize, max_depth: usize) -> Node {
        let mean = pairs.iter().map(|(_, y)| y).sum::<f64>() / pairs.len() as f64;

        if depth >= max_depth || pairs.len() < 2 {
            return Node::Leaf { value: mean };
        }

        let Some((split_idx, threshold)) = best_split(pairs) else {
            return Node::Leaf { value: mean };
        };

        let (left, right) = pairs.split_at(split_idx);
        Node::Split {
            threshold,
            left: Box::new(Self::build(left, depth + 1, max_depth)),
            right: Box::new(Self::build(right, depth + 1, max_depth)),
        }
    }
}

/// Best boundary between distinct x values, by squared-error reduction
///
/// Input must be sorted by x. Returns the split index (start of the right
/// half) and the threshold midpoint, or `None` when no split improves on
/// the parent node.
fn best_split(pairs: &[(f64, f64)]) -> Option<(usize, f64)> {
    let n = pairs.len();

    let sse = |slice: &[(f64, f64)]| -> f64 {
        let mean = slice.iter().map(|(_, y)| y).sum::<f64>() / slice.len() as f64;
        slice.iter().map(|(_, y)| (y - mean).powi(2)).sum()
    };

    let parent_sse = sse(pairs);
    let mut best: Option<(usize, f64, f64)> = None;

    for i in 1..n {
        // Only split between distinct x values
        if pairs[i].0 <= pairs[i - 1].0 {
            continue;
        }

        let candidate_sse = sse(&pairs[..i]) + sse(&pairs[i..]);
        if best.map_or(true, |(_, _, s)| candidate_sse < s) {
            let threshold = (pairs[i - 1].0 + pairs[i].0) / 2.0;
            best = Some((i, threshold, candidate_sse));
        }
    }

    match best {
        Some((idx, threshold, split_sse)) if split_sse < parent_sse - 1e-12 => {
            Some((idx, threshold))
        }
        _ => None,
    }
}

impl Regressor for RegressionTree {
    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        check_observations(x, y)?;

        let mut pairs: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let root = Self::build(&pairs, 0, self.max_depth);

        let predicted: Vec<f64> = x.iter().map(|&v| root.eval(v)).collect();
        self.r_squared = r_squared(y, &predicted);
        self.root = Some(root);
        Ok(())
    }

    fn predict(&self, xs: &[f64]) -> Result<Vec<f64>> {
        let root = self.root.as_ref().ok_or(AnalyticsError::NotFitted)?;
        Ok(xs.iter().map(|&x| root.eval(x)).collect())
    }

    fn r_squared(&self) -> f64 {
        self.r_squared
    }

    fn is_fitted(&self) -> bool {
        self.root.is_some()
    }
}
