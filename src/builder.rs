//! Configuration layer for constructing graphs.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::GraphError;
use crate::generate::GenerationConfig;
use crate::graph::Graph;
use crate::storage::Form;
use crate::variant::Variant;

/// Default number of vertices, matching the bundled demo.
const DEFAULT_VERTEX_COUNT: usize = 5;

/// Builder for configuring a [`Graph`].
///
/// # Example
///
/// ```
/// use dualgraph::{Form, GenerationConfig, GraphBuilder, Variant};
///
/// let graph = GraphBuilder::new(Variant::Undirected)
///     .vertices(6)
///     .random(GenerationConfig::new(1.0, 2, 2))
///     .seed(7)
///     .form(Form::Matrix)
///     .build()?;
///
/// assert!(graph.is_matrix());
/// assert_eq!(graph.edge_count(), 30);
/// # Ok::<(), dualgraph::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    variant: Variant,
    vertex_count: usize,
    form: Form,
    generation: Option<GenerationConfig>,
    seed: Option<u64>,
}

impl GraphBuilder {
    /// Creates a new builder with default settings.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            vertex_count: DEFAULT_VERTEX_COUNT,
            form: Form::List,
            generation: None,
            seed: None,
        }
    }

    /// Sets the number of vertices.
    ///
    /// Default: 5
    #[must_use]
    pub fn vertices(mut self, count: usize) -> Self {
        self.vertex_count = count;
        self
    }

    /// Sets the form the graph is left in after building.
    ///
    /// Default: [`Form::List`]
    #[must_use]
    pub fn form(mut self, form: Form) -> Self {
        self.form = form;
        self
    }

    /// Populates the graph with random edges when built.
    #[must_use]
    pub fn random(mut self, config: GenerationConfig) -> Self {
        self.generation = Some(config);
        self
    }

    /// Seeds the generator used by [`random`](Self::random).
    ///
    /// Without a seed the thread-local generator is used.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the graph.
    ///
    /// Random edges are generated in list form; the requested form is
    /// applied afterwards.
    pub fn build(self) -> Result<Graph, GraphError> {
        if self.vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let mut graph = Graph::new(self.vertex_count, self.variant);
        if let Some(config) = &self.generation {
            match self.seed {
                Some(seed) => {
                    graph.generate_random_with(config, &mut StdRng::seed_from_u64(seed))?;
                }
                None => {
                    graph.generate_random(config)?;
                }
            }
        }

        graph.convert_to(self.form);
        Ok(graph)
    }
}
