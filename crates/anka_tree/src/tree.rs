//! The full tree for one birth date.

use anka_math::BirthDate;

use crate::error::TreeError;
use crate::path::{PATH_COUNT, TreePath, compute_paths, significant_paths};
use crate::pillar::{PillarBalance, pillar_balance};
use crate::sephirah::SephirothValues;

/// Node values and path values for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeOfLife {
    date: BirthDate,
    nodes: SephirothValues,
    paths: [TreePath; PATH_COUNT],
}

impl TreeOfLife {
    pub fn compute(date: &BirthDate) -> Self {
        let nodes = SephirothValues::compute(date);
        Self {
            date: *date,
            nodes,
            paths: compute_paths(&nodes),
        }
    }

    /// Parse a `YYYY-MM-DD` date and build its tree.
    pub fn from_raw(date: &str) -> Result<Self, TreeError> {
        let date = BirthDate::parse(date)?;
        Ok(Self::compute(&date))
    }

    pub fn date(&self) -> &BirthDate {
        &self.date
    }

    pub fn nodes(&self) -> &SephirothValues {
        &self.nodes
    }

    /// All paths, 11 through 32.
    pub fn paths(&self) -> &[TreePath; PATH_COUNT] {
        &self.paths
    }

    /// The `n` highest-valued paths; see [`significant_paths`].
    pub fn significant_paths(&self, n: usize) -> Vec<TreePath> {
        significant_paths(&self.paths, n)
    }

    pub fn pillar_balance(&self) -> PillarBalance {
        pillar_balance(&self.nodes)
    }
}
