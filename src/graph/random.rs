use rand::prelude::*;

use super::graph::Graph;
use super::matrix::EdgeMatrix;

/// Default seed, so generated graphs are reproducible run to run.
pub const DEFAULT_SEED: u64 = 999;

/// Parameters for [`Graph::random`].
#[derive(Debug, Clone)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertices: usize,
    /// Largest multiplicity drawn for any vertex pair (inclusive).
    pub max_parallel_edges: u32,
    /// Random seed for reproducibility (None = random).
    pub seed: Option<u64>,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            vertices: 0,
            max_parallel_edges: 0,
            seed: Some(DEFAULT_SEED),
        }
    }
}

impl RandomGraphConfig {
    pub fn new(vertices: usize, max_parallel_edges: u32) -> Self {
        Self {
            vertices,
            max_parallel_edges,
            ..Default::default()
        }
    }

    /// Create config with custom seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draw from system entropy instead of a fixed seed.
    pub fn unseeded(mut self) -> Self {
        self.seed = None;
        self
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Graph {
    /// Generates a random multigraph as described by `config`.
    pub fn random(config: &RandomGraphConfig) -> Self {
        let mut rng = config.rng();
        Self::random_with(config.vertices, config.max_parallel_edges, &mut rng)
    }

    /// Generates a random multigraph from an existing random stream.
    ///
    /// Every unordered pair `{i, j}`, self-loops included, gets a multiplicity
    /// drawn uniformly from `0..=max_parallel_edges`.
    pub fn random_with<R: Rng + ?Sized>(
        vertices: usize,
        max_parallel_edges: u32,
        rng: &mut R,
    ) -> Self {
        let mut edges = EdgeMatrix::new(vertices);
        if max_parallel_edges > 0 {
            for i in 0..vertices {
                for j in i..vertices {
                    let count = rng.gen_range(0..=max_parallel_edges);
                    edges.set(i, j, count);
                    edges.set(j, i, count);
                }
            }
        }
        Self::from_symmetric(edges)
    }
}
