//! Run reports: a canonical, hashable record of one search run.
//!
//! Canonical JSON admits integers only, so the path cost is carried through
//! [`cost_value`]: a fixed-precision decimal string (`"418.000000"`), or
//! `null` when the run did not end in a solution.

use wayfind_search::{SearchPolicy, SearchResult, SearchStats, Strategy};

use crate::canon::{canonical_json_bytes, cost_value, CanonError};
use crate::contract::World;
use crate::digest::{canonical_hash, ContentHash, DOMAIN_RUN_REPORT};

/// Everything a run produced that is worth comparing across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub world_id: String,
    pub strategy: Strategy,
    /// Outcome kind: `solution`, `failure`, `cutoff` or `cancelled`.
    pub outcome: &'static str,
    /// Root-to-goal states, rendered by the world. Empty unless solved.
    pub path: Vec<serde_json::Value>,
    /// `+inf` unless solved.
    pub path_cost: f64,
    pub stats: SearchStats,
    /// Number of distinct states the run reached.
    pub reached: usize,
    pub policy: SearchPolicy,
    pub world: serde_json::Value,
}

impl RunReport {
    /// Build a report from a finished run.
    #[must_use]
    pub fn from_result<W: World>(
        world: &W,
        strategy: Strategy,
        policy: &SearchPolicy,
        result: &SearchResult<W::State, W::Action>,
    ) -> Self {
        let path = result
            .outcome
            .path_states()
            .iter()
            .map(|s| world.state_json(s))
            .collect();
        Self {
            world_id: world.world_id().to_string(),
            strategy,
            outcome: result.outcome.kind(),
            path,
            path_cost: result.outcome.path_cost(),
            stats: result.stats,
            reached: result.reached.len(),
            policy: *policy,
            world: world.describe(),
        }
    }

    /// Number of actions on the solution path; `None` unless solved.
    #[must_use]
    pub fn path_len(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// Path cost formatted for the report, `None` unless solved.
    #[must_use]
    pub fn path_cost_text(&self) -> Option<String> {
        cost_value(self.path_cost).as_str().map(str::to_owned)
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "outcome": self.outcome,
            "path": self.path,
            "path_cost": cost_value(self.path_cost),
            "policy": {
                "max_depth": self.policy.max_depth,
                "max_expansions": self.policy.max_expansions,
            },
            "reached": self.reached,
            "schema_version": "run_report.v1",
            "stats": {
                "expansions": self.stats.expansions,
                "frontier_high_water": self.stats.frontier_high_water,
                "generated": self.stats.generated,
                "reinserted": self.stats.reinserted,
            },
            "strategy": self.strategy.name(),
            "world": self.world,
            "world_id": self.world_id,
        })
    }

    /// Canonical JSON bytes of [`Self::to_json_value`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the world description contains a
    /// non-integer number.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical report bytes.
    ///
    /// # Errors
    ///
    /// Same as [`Self::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_RUN_REPORT, &bytes))
    }
}
