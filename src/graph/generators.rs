use crate::graph::{DirectedGraph, Graph, MutableGraph};
use crate::{Error, NodeId, Result, Weight};
use log::debug;
use rand::prelude::*;

/// What to do when a random edge draw picks the source node itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelfLoopPolicy {
    /// Drop the draw without replacement. Realized out-degree may fall below
    /// the drawn degree.
    #[default]
    Skip,
    /// Draw targets only among the other nodes, with the degree capped at
    /// `n - 1`, so every draw produces an edge.
    Redraw,
}

/// Parameters for random graph generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Upper bound of the per-node out-degree draw (lower bound is 1)
    pub max_out_degree: usize,
    /// Smallest edge weight, inclusive
    pub min_weight: Weight,
    /// Largest edge weight, inclusive
    pub max_weight: Weight,
    pub self_loop_policy: SelfLoopPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_out_degree: 5,
            min_weight: 1,
            max_weight: 100,
            self_loop_policy: SelfLoopPolicy::Skip,
        }
    }
}

impl GeneratorConfig {
    fn validate(&self) -> Result<()> {
        if self.max_out_degree == 0 {
            return Err(Error::InvalidGeneratorConfig(
                "max_out_degree must be at least 1".to_string(),
            ));
        }
        if self.min_weight < 0 {
            return Err(Error::InvalidGeneratorConfig(format!(
                "min_weight must be non-negative, got {}",
                self.min_weight
            )));
        }
        if self.min_weight > self.max_weight {
            return Err(Error::InvalidGeneratorConfig(format!(
                "min_weight {} exceeds max_weight {}",
                self.min_weight, self.max_weight
            )));
        }
        Ok(())
    }
}

/// Builds random directed graphs with integer weights
#[derive(Debug, Clone, Default)]
pub struct GraphGenerator {
    config: GeneratorConfig,
}

impl GraphGenerator {
    /// Creates a generator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with a custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a graph with `node_count` nodes using the thread-local RNG
    pub fn generate(&self, node_count: usize) -> Result<DirectedGraph> {
        self.generate_with_rng(node_count, &mut rand::thread_rng())
    }

    /// Generates a graph with `node_count` nodes drawing from `rng`.
    ///
    /// Every node draws an out-degree `k` from `1..=max_out_degree` and then
    /// `k` random targets. Repeated targets overwrite the earlier weight. No
    /// connectivity guarantee is made.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        node_count: usize,
        rng: &mut R,
    ) -> Result<DirectedGraph> {
        if node_count < 2 {
            return Err(Error::InvalidNodeCount(node_count));
        }
        self.config.validate()?;

        let mut graph = DirectedGraph::with_nodes(node_count);
        let mut skipped_self_loops = 0usize;

        for from in 0..node_count {
            let max_degree = match self.config.self_loop_policy {
                SelfLoopPolicy::Skip => self.config.max_out_degree,
                SelfLoopPolicy::Redraw => self.config.max_out_degree.min(node_count - 1),
            };
            let num_edges = rng.gen_range(1..=max_degree);

            for _ in 0..num_edges {
                let to = match self.config.self_loop_policy {
                    SelfLoopPolicy::Skip => {
                        let to = rng.gen_range(0..node_count);
                        if to == from {
                            skipped_self_loops += 1;
                            continue;
                        }
                        to
                    }
                    SelfLoopPolicy::Redraw => draw_other_node(rng, from, node_count),
                };
                let weight = rng.gen_range(self.config.min_weight..=self.config.max_weight);
                graph.add_edge(from, to, weight)?;
            }
        }

        debug!(
            "Generated graph with {} nodes and {} edges ({} self-loop draws skipped)",
            node_count,
            graph.edge_count(),
            skipped_self_loops
        );

        Ok(graph)
    }
}

/// Uniform draw from `0..node_count` excluding `from`
fn draw_other_node<R: Rng + ?Sized>(rng: &mut R, from: NodeId, node_count: usize) -> NodeId {
    let to = rng.gen_range(0..node_count - 1);
    if to >= from {
        to + 1
    } else {
        to
    }
}

/// Generates a random graph with the default configuration
pub fn generate(node_count: usize) -> Result<DirectedGraph> {
    GraphGenerator::new().generate(node_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn draw_other_node_never_returns_source() {
        let mut rng = StdRng::seed_from_u64(7);
        for from in 0..4 {
            for _ in 0..200 {
                let to = draw_other_node(&mut rng, from, 4);
                assert_ne!(to, from);
                assert!(to < 4);
            }
        }
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let zero_degree = GeneratorConfig {
            max_out_degree: 0,
            ..Default::default()
        };
        let inverted = GeneratorConfig {
            min_weight: 10,
            max_weight: 5,
            ..Default::default()
        };
        let negative = GeneratorConfig {
            min_weight: -1,
            ..Default::default()
        };

        for config in [zero_degree, inverted, negative] {
            let result = GraphGenerator::with_config(config).generate(5);
            assert!(matches!(result, Err(Error::InvalidGeneratorConfig(_))));
        }
    }

    #[test]
    fn node_count_is_checked_before_config() {
        let config = GeneratorConfig {
            max_out_degree: 0,
            ..Default::default()
        };
        assert_eq!(
            GraphGenerator::with_config(config).generate(1).unwrap_err(),
            Error::InvalidNodeCount(1)
        );
    }
}
