//! dual-representation undirected graph

/// An undirected graph stored both as an adjacency matrix and as adjacency
/// lists, so the same topology can be traversed through either
/// representation.
///
/// The matrix is one flat `n * n` buffer indexed with `i * n + j`. Both
/// representations always record the same edge set: `matrix[i][j] == 1`
/// exactly when `j` appears in `i`'s list, and the matrix is symmetric.
/// Self-loops are allowed and appear once in the owning vertex's list.
///
/// A graph is built in one shot by [`super::Generator`] and never mutated
/// afterwards; rebuilding means dropping it and generating a new one.
pub struct DualGraph {
    n: usize,
    matrix: Box<[u8]>,
    lists: Vec<Vec<usize>>,
}

impl DualGraph {
    /// all-zero graph with `n` vertices, filled in by the generator
    pub(crate) fn zeroed(n: usize) -> DualGraph {
        DualGraph {
            n,
            matrix: vec![0; n * n].into_boxed_slice(),
            lists: vec![Vec::new(); n],
        }
    }

    /// records the undirected edge (i, j) in both representations
    pub(crate) fn set_edge(&mut self, i: usize, j: usize) {
        self.matrix[i * self.n + j] = 1;
        self.matrix[j * self.n + i] = 1;
        self.lists[i].push(j);
        self.lists[j].push(i);
    }

    /// records a self-loop on `i` in both representations
    pub(crate) fn set_loop(&mut self, i: usize) {
        self.matrix[i * self.n + i] = 1;
        self.lists[i].push(i);
    }

    /// number of vertices
    pub fn order(&self) -> usize {
        self.n
    }

    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        assert!(i < self.n && j < self.n);
        self.matrix[i * self.n + j] == 1
    }

    /// neighbors of `i` in generation order
    pub fn neighbors(&self, i: usize) -> &[usize] {
        assert!(i < self.n);
        &self.lists[i]
    }

    /// all adjacency lists, indexed by vertex
    pub fn lists(&self) -> &[Vec<usize>] {
        &self.lists
    }

    /// number of distinct edges, self-loops included
    pub fn edge_count(&self) -> usize {
        let loops = self.loop_count();
        let endpoints: usize = self.lists.iter().map(|l| l.len()).sum();
        (endpoints - loops) / 2 + loops
    }

    /// number of self-loops
    pub fn loop_count(&self) -> usize {
        (0..self.n).filter(|&i| self.matrix[i * self.n + i] == 1).count()
    }

    /// copies the matrix out row by row for rendering
    pub fn matrix_rows(&self) -> Vec<Vec<i32>> {
        (0..self.n)
            .map(|i| {
                self.matrix[i * self.n..(i + 1) * self.n]
                    .iter()
                    .map(|&cell| cell as i32)
                    .collect()
            })
            .collect()
    }
}
