use std::collections::VecDeque;

use crate::core::graph::EligibilityGraph;
use crate::models::Matching;

/// Compute a maximum-cardinality matching on a general graph
///
/// Edmonds' blossom method: grow an alternating tree from every exposed
/// vertex, contract odd cycles (blossoms) into their base as they are found,
/// and augment along the first path reaching another exposed vertex.
/// Runs in O(V^3); every edge counts as weight 1.
pub fn maximum_matching(graph: &EligibilityGraph) -> Matching {
    let mut search = BlossomSearch::new(graph);
    search.greedy_seed();
    let augmentations = search.run();

    tracing::debug!(
        "Blossom matching: {} augmentations, {} pairs over {} vertices",
        augmentations,
        search.mate.iter().filter(|m| m.is_some()).count() / 2,
        graph.vertex_count()
    );

    Matching::from_partners(search.mate)
}

struct BlossomSearch<'g> {
    graph: &'g EligibilityGraph,
    mate: Vec<Option<usize>>,
    /// Predecessor of a vertex on its alternating path to the root
    parent: Vec<Option<usize>>,
    /// Base of the outermost blossom containing each vertex
    base: Vec<usize>,
    /// Vertices that have been queued as outer
    outer: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'g> BlossomSearch<'g> {
    fn new(graph: &'g EligibilityGraph) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            mate: vec![None; n],
            parent: vec![None; n],
            base: (0..n).collect(),
            outer: vec![false; n],
            queue: VecDeque::with_capacity(n),
        }
    }

    /// Start from a maximal matching, taking higher-scoring edges first
    ///
    /// Augmentation only runs while the matching is not yet maximum, so when
    /// the seed is already maximum its pairs are the ones reported.
    fn greedy_seed(&mut self) {
        let mut edges = self.graph.weighted_edges().to_vec();
        edges.sort_by(|a, b| b.2.cmp(&a.2));

        for (a, b, _) in edges {
            if self.mate[a].is_none() && self.mate[b].is_none() {
                self.mate[a] = Some(b);
                self.mate[b] = Some(a);
            }
        }
    }

    /// One search per exposed vertex; a root with no augmenting path
    /// never gains one later, so a single pass is enough
    fn run(&mut self) -> usize {
        let mut augmentations = 0;
        for root in 0..self.graph.vertex_count() {
            if self.mate[root].is_some() {
                continue;
            }
            if let Some(end) = self.find_augmenting_path(root) {
                self.augment(end);
                augmentations += 1;
            }
        }
        augmentations
    }

    fn reset(&mut self, root: usize) {
        self.outer.fill(false);
        self.parent.fill(None);
        for (i, b) in self.base.iter_mut().enumerate() {
            *b = i;
        }
        self.queue.clear();
        self.outer[root] = true;
        self.queue.push_back(root);
    }

    /// BFS over the alternating tree rooted at `root`; returns the exposed
    /// vertex that ends an augmenting path, if one exists
    fn find_augmenting_path(&mut self, root: usize) -> Option<usize> {
        let graph = self.graph;
        self.reset(root);

        while let Some(v) = self.queue.pop_front() {
            for &to in graph.neighbors(v) {
                if self.base[v] == self.base[to] || self.mate[v] == Some(to) {
                    continue;
                }

                let to_is_outer = to == root
                    || self.mate[to].is_some_and(|m| self.parent[m].is_some());

                if to_is_outer {
                    // Outer-outer edge inside the tree: odd cycle
                    let blossom_base = self.common_base(v, to);
                    self.contract(v, to, blossom_base);
                } else if self.parent[to].is_none() {
                    self.parent[to] = Some(v);
                    match self.mate[to] {
                        None => return Some(to),
                        Some(m) => {
                            self.outer[m] = true;
                            self.queue.push_back(m);
                        }
                    }
                }
            }
        }

        None
    }

    /// Lowest common blossom base of two outer vertices of the same tree
    fn common_base(&self, a: usize, b: usize) -> usize {
        let mut on_path = vec![false; self.base.len()];

        let mut a = a;
        loop {
            a = self.base[a];
            on_path[a] = true;
            match self.mate[a].and_then(|m| self.parent[m]) {
                Some(next) => a = next,
                None => break,
            }
        }

        let mut b = b;
        loop {
            b = self.base[b];
            if on_path[b] {
                return b;
            }
            match self.mate[b].and_then(|m| self.parent[m]) {
                Some(next) => b = next,
                None => return b,
            }
        }
    }

    /// Shrink the cycle closed by edge (v, to) into `blossom_base`
    fn contract(&mut self, v: usize, to: usize, blossom_base: usize) {
        let mut in_blossom = vec![false; self.base.len()];
        self.mark_path(v, blossom_base, to, &mut in_blossom);
        self.mark_path(to, blossom_base, v, &mut in_blossom);

        for i in 0..self.base.len() {
            if in_blossom[self.base[i]] {
                self.base[i] = blossom_base;
                if !self.outer[i] {
                    // Former inner vertices become outer inside the blossom
                    self.outer[i] = true;
                    self.queue.push_back(i);
                }
            }
        }
    }

    /// Walk from `v` down to the blossom base, flagging every blossom on the
    /// way and re-pointing parents so the cycle can later be expanded in
    /// either direction
    fn mark_path(&mut self, mut v: usize, blossom_base: usize, mut child: usize, in_blossom: &mut [bool]) {
        while self.base[v] != blossom_base {
            let Some(m) = self.mate[v] else { break };
            in_blossom[self.base[v]] = true;
            in_blossom[self.base[m]] = true;
            self.parent[v] = Some(child);
            child = m;
            match self.parent[m] {
                Some(next) => v = next,
                None => break,
            }
        }
    }

    /// Flip matched and unmatched edges along the path ending at `end`;
    /// blossoms are expanded implicitly by following parent pointers
    fn augment(&mut self, end: usize) {
        let mut v = Some(end);
        while let Some(current) = v {
            let Some(pv) = self.parent[current] else { break };
            let next = self.mate[pv];
            self.mate[current] = Some(pv);
            self.mate[pv] = Some(current);
            v = next;
        }
    }
}
