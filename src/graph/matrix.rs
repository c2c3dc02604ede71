use std::fmt;

/// Dense, row-major square matrix of edge multiplicities.
///
/// Entry `(i, j)` is the number of parallel edges between vertex `i` and
/// vertex `j`. Indexing out of range panics; callers that cannot guarantee
/// the range go through [`EdgeMatrix::try_get`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeMatrix {
    order: usize,
    counts: Vec<u32>,
}

impl EdgeMatrix {
    /// Creates an `order` x `order` matrix filled with zeros.
    pub fn new(order: usize) -> Self {
        Self {
            order,
            counts: vec![0; order * order],
        }
    }

    /// Number of rows (and columns).
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.counts[row * self.order + col]
    }

    pub fn try_get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.order && col < self.order {
            Some(self.get(row, col))
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.counts[row * self.order + col] = value;
    }

    pub fn increment(&mut self, row: usize, col: usize) {
        self.counts[row * self.order + col] += 1;
    }

    pub fn decrement(&mut self, row: usize, col: usize) {
        self.counts[row * self.order + col] -= 1;
    }

    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.order;
        &self.counts[start..start + self.order]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        // chunks(0) panics, an empty matrix simply has no rows.
        self.counts.chunks(self.order.max(1))
    }

    /// `true` when entry `(i, j)` equals entry `(j, i)` everywhere.
    pub fn is_symmetric(&self) -> bool {
        self.first_asymmetry().is_none()
    }

    /// First `(i, j)` with `i < j` whose mirrored entry differs, in row-major order.
    pub fn first_asymmetry(&self) -> Option<(usize, usize)> {
        (0..self.order)
            .flat_map(|i| (i + 1..self.order).map(move |j| (i, j)))
            .find(|&(i, j)| self.get(i, j) != self.get(j, i))
    }
}

impl fmt::Display for EdgeMatrix {
    /// One row per line, entries separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line = row
                .iter()
                .map(|count| count.to_string())
                .collect::<Vec<String>>()
                .join(" ");
            f.write_str(&line)?;
        }
        Ok(())
    }
}
