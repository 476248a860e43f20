//! Erdős–Rényi random population.
//!
//! Every candidate pair (see [`Variant::candidate_pairs`](crate::Variant::candidate_pairs))
//! independently receives an edge with probability `p`; the weight is drawn
//! uniformly from `[min_weight, max_weight]`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::edge::Weight;
use crate::error::GraphError;
use crate::graph::Graph;

/// Parameters for random edge generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Probability that a candidate pair receives an edge.
    ///
    /// Default: 0.5
    pub probability: f64,

    /// Smallest weight drawn (inclusive).
    ///
    /// Default: 1
    pub min_weight: Weight,

    /// Largest weight drawn (inclusive).
    ///
    /// Default: 10
    pub max_weight: Weight,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            probability: 0.5,
            min_weight: 1,
            max_weight: 10,
        }
    }
}

impl GenerationConfig {
    /// Creates a config from its three parameters.
    pub fn new(probability: f64, min_weight: Weight, max_weight: Weight) -> Self {
        Self {
            probability,
            min_weight,
            max_weight,
        }
    }

    /// Checks that the probability lies in `[0, 1]` and the weight range is non-empty.
    pub fn validate(&self) -> Result<(), GraphError> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(GraphError::InvalidProbability(self.probability));
        }
        if self.min_weight > self.max_weight {
            return Err(GraphError::InvalidWeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        Ok(())
    }
}

impl Graph {
    /// Adds random edges using the thread-local generator.
    ///
    /// Returns the number of edge calls made; for undirected graphs each
    /// one stores two entries.
    pub fn generate_random(&mut self, config: &GenerationConfig) -> Result<usize, GraphError> {
        self.generate_random_with(config, &mut rand::rng())
    }

    /// Adds random edges drawing from `rng`.
    ///
    /// Candidate pairs are visited in row-major order. For each one a value
    /// in `[0, 1)` is drawn and, when it is below the probability, a weight is
    /// drawn and the edge is added. Works in whichever form is active.
    ///
    /// Nothing is changed if `config` is rejected.
    pub fn generate_random_with<R: Rng>(
        &mut self,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> Result<usize, GraphError> {
        config.validate()?;

        let mut added = 0;
        for (i, j) in self.variant().candidate_pairs(self.vertex_count()) {
            if rng.random::<f64>() < config.probability {
                let weight = rng.random_range(config.min_weight..=config.max_weight);
                self.add_edge(i, j, weight);
                added += 1;
            }
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "generated {added} random {:?} edges (p={}, V={})",
            self.variant(),
            config.probability,
            self.vertex_count()
        );

        Ok(added)
    }
}
