// walk.rs
// ──────────────────────────────────────────────────────────────────────────────
// A bounded, stack-disciplined sequence of vertices.  Vertices are only ever
// appended at the end or removed from the end, so a walk doubles as the
// working stack of a backtracking search and as the circuit it returns.
//
// A walk does not check that consecutive vertices are joined by an edge;
// that is up to whoever builds it.
// ──────────────────────────────────────────────────────────────────────────────
use std::fmt;

/// An ordered list of vertices with a fixed maximum size.
///
/// In a closed walk the first vertex is repeated at the end and is therefore
/// counted twice by [`Walk::len`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Walk {
    capacity: usize,
    vertices: Vec<usize>,
}

impl Walk {
    /// Creates an empty walk with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Maximum number of vertices the walk can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends `vertex` at the end of the walk.
    ///
    /// Returns `false` and leaves the walk untouched when it is already full.
    pub fn append(&mut self, vertex: usize) -> bool {
        if self.vertices.len() == self.capacity {
            return false;
        }
        self.vertices.push(vertex);
        true
    }

    /// Removes the last vertex. Returns `false` when the walk is empty.
    pub fn remove_last(&mut self) -> bool {
        self.vertices.pop().is_some()
    }

    /// Removes every vertex, keeping the capacity.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Returns the vertex at position `n`, or `None` past the end of the walk.
    pub fn vertex_at(&self, n: usize) -> Option<usize> {
        self.vertices.get(n).copied()
    }

    pub fn first(&self) -> Option<usize> {
        self.vertices.first().copied()
    }

    pub fn last(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// A trivial walk consists of a single vertex and no edges.
    pub fn is_trivial(&self) -> bool {
        self.vertices.len() == 1
    }

    /// A walk is closed when it is non-empty and ends where it started.
    pub fn is_closed(&self) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Number of vertices in the walk.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges traversed by the walk. Empty and trivial walks have none.
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices.iter().copied()
    }

    /// Iterates over the traversed edges as `(from, to)` pairs.
    pub fn steps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl fmt::Display for Walk {
    /// Vertices in traversal order, separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vertices = self.vertices.iter();
        if let Some(first) = vertices.next() {
            write!(f, "{}", first)?;
            for vertex in vertices {
                write!(f, " {}", vertex)?;
            }
        }
        Ok(())
    }
}
