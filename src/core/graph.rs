use crate::models::ScoreMatrix;

/// Undirected simple graph over participant indices
///
/// An edge means "eligible to be paired" at the cutoff the graph was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityGraph {
    adjacency: Vec<Vec<usize>>,
    /// Every edge once as (smaller, larger, score), in insertion order
    weighted: Vec<(usize, usize, u32)>,
}

impl EligibilityGraph {
    /// Graph with `vertex_count` vertices and no edges
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            weighted: Vec::new(),
        }
    }

    /// Build the eligibility graph for a cutoff
    ///
    /// Edge (i, j) with i < j exists iff score[i][j] >= cutoff. A zero score
    /// marks an ineligible pair and never forms an edge, whatever the cutoff.
    pub fn build(matrix: &ScoreMatrix, cutoff: u32) -> Self {
        let threshold = cutoff.max(1);
        let mut graph = Self::empty(matrix.len());

        for i in 0..matrix.len() {
            for j in (i + 1)..matrix.len() {
                if matrix.get(i, j) >= threshold {
                    graph.push_edge(i, j, matrix.get(i, j));
                }
            }
        }

        tracing::debug!(
            "Eligibility graph at cutoff {}: {} vertices, {} edges",
            cutoff,
            graph.vertex_count(),
            graph.edge_count()
        );

        graph
    }

    /// Build from an explicit edge list, every edge scoring 1; self-loops,
    /// duplicates and out-of-range endpoints are ignored
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::empty(vertex_count);
        for &(a, b) in edges {
            if a != b && a < vertex_count && b < vertex_count && !graph.has_edge(a, b) {
                graph.push_edge(a.min(b), a.max(b), 1);
            }
        }
        graph
    }

    fn push_edge(&mut self, a: usize, b: usize, score: u32) {
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        self.weighted.push((a, b, score));
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.weighted.len()
    }

    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adjacency
            .get(a)
            .map(|adj| adj.contains(&b))
            .unwrap_or(false)
    }

    /// Each edge once, as (smaller, larger)
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(a, adj)| {
            adj.iter().copied().filter(move |&b| a < b).map(move |b| (a, b))
        })
    }

    /// Each edge once with the score it was built from, in insertion order
    pub fn weighted_edges(&self) -> &[(usize, usize, u32)] {
        &self.weighted
    }
}
