/// Directed edge with a non-negative cost.
///
/// Carrying `from` lets a path record's `last_edge` name the predecessor
/// without a separate parent array.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    pub from: u32,
    pub to: u32,
    pub cost: u64,
}

/// Immutable adjacency structure in CSR form.
///
/// Costs are unsigned, so edge non-negativity holds by construction.
/// The graph is never mutated during a shortest-path run; independent
/// runs may share one instance.
#[derive(Clone, Debug)]
pub struct DirectedGraph {
    vertex_count: usize,
    offsets: Vec<usize>,
    targets: Vec<(u32, u64)>,
}

impl DirectedGraph {
    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32, u64)]) -> Self {
        let mut out_deg = vec![0_usize; vertex_count];
        for &(from, to, _) in edges {
            assert!((from as usize) < vertex_count, "from vertex out of range");
            assert!((to as usize) < vertex_count, "to vertex out of range");
            out_deg[from as usize] += 1;
        }

        let mut offsets = vec![0_usize; vertex_count + 1];
        for v in 0..vertex_count {
            offsets[v + 1] = offsets[v] + out_deg[v];
        }

        let mut targets = vec![(0_u32, 0_u64); edges.len()];
        let mut cursor = offsets[..vertex_count].to_vec();
        for &(from, to, cost) in edges {
            let slot = cursor[from as usize];
            cursor[from as usize] += 1;
            targets[slot] = (to, cost);
        }

        Self {
            vertex_count,
            offsets,
            targets,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    pub fn out_degree(&self, v: usize) -> usize {
        self.offsets[v + 1] - self.offsets[v]
    }

    #[inline]
    pub fn out_edges(&self, v: usize) -> OutEdges<'_> {
        let start = self.offsets[v];
        let end = self.offsets[v + 1];
        OutEdges {
            from: v as u32,
            targets: &self.targets[start..end],
            idx: 0,
        }
    }
}

pub struct OutEdges<'a> {
    from: u32,
    targets: &'a [(u32, u64)],
    idx: usize,
}

impl Iterator for OutEdges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        let &(to, cost) = self.targets.get(self.idx)?;
        self.idx += 1;
        Some(Edge {
            from: self.from,
            to,
            cost,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remain = self.targets.len() - self.idx;
        (remain, Some(remain))
    }
}

impl ExactSizeIterator for OutEdges<'_> {}
