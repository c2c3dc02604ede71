// reader.rs
// ──────────────────────────────────────────────────────────────────────────────
// Reads graphs from their textual description:
//
//     n
//     e(0,0) e(0,1) ... e(0,n-1)
//     ...
//     e(n-1,0)   ...   e(n-1,n-1)
//
// Tokens are whitespace separated and may be spread over lines in any way.
// Several descriptions may follow each other in one input.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use super::error::GraphError;
use super::graph::Graph;

/// Upper bound on rows reserved up front, so a bogus vertex count cannot
/// trigger a huge allocation before the input runs out.
const MAX_PREALLOCATED_ROWS: usize = 1024;

/// Pulls graph descriptions out of any buffered reader.
pub struct GraphReader<R> {
    input: R,
    line: String,
    tokens: VecDeque<String>,
    /// Set once the stream position can no longer be trusted.
    exhausted: bool,
}

impl<R: BufRead> GraphReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            tokens: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Next whitespace-separated token, or `None` at the end of the input.
    fn next_token(&mut self) -> Result<Option<String>, GraphError> {
        while self.tokens.is_empty() {
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.tokens
                .extend(self.line.split_whitespace().map(str::to_string));
        }
        Ok(self.tokens.pop_front())
    }

    fn next_int(&mut self) -> Result<Option<i64>, GraphError> {
        match self.next_token()? {
            Some(token) => token
                .parse::<i64>()
                .map(Some)
                .map_err(|_| GraphError::InvalidToken(token)),
            None => Ok(None),
        }
    }

    /// Reads the next graph description.
    ///
    /// Returns `Ok(None)` when the input is exhausted before a new
    /// description starts. When the matrix holds negative or asymmetric
    /// entries, all n x n entries are consumed before the error is returned,
    /// so the next call starts at the following description. After an
    /// `InvalidToken` or `UnexpectedEof` the position is inside the matrix
    /// and further reads are meaningless.
    ///
    /// # Errors
    /// `InvalidTopology` for a negative vertex count or a bad matrix,
    /// `InvalidToken` for a non-integer token, `UnexpectedEof` if the input
    /// ends inside the description, `Io` if reading fails.
    pub fn read_graph(&mut self) -> Result<Option<Graph>, GraphError> {
        let vertex_count = match self.next_int()? {
            Some(count) => count,
            None => return Ok(None),
        };
        if vertex_count < 0 {
            return Err(GraphError::InvalidTopology(format!(
                "Number of vertices must be non-negative, got {}",
                vertex_count
            )));
        }
        let order = usize::try_from(vertex_count).map_err(|_| {
            GraphError::InvalidTopology(format!("Number of vertices is too large: {}", vertex_count))
        })?;

        let mut rows = Vec::with_capacity(order.min(MAX_PREALLOCATED_ROWS));
        for i in 0..order {
            let mut row = Vec::with_capacity(order.min(MAX_PREALLOCATED_ROWS));
            for j in 0..order {
                match self.next_int()? {
                    Some(count) => row.push(count),
                    None => {
                        return Err(GraphError::UnexpectedEof {
                            missing: missing_entries(order, i, j),
                        })
                    }
                }
            }
            rows.push(row);
        }

        Graph::from_matrix(rows).map(Some)
    }

    /// Gives back the underlying reader.
    pub fn into_inner(self) -> R {
        self.input
    }
}

/// Matrix entries still unread when the input stops at row `i`, column `j`.
/// Saturates for vertex counts whose matrix does not fit in `usize`.
fn missing_entries(order: usize, i: usize, j: usize) -> usize {
    order
        .checked_mul(order - i)
        .and_then(|remaining| remaining.checked_sub(j))
        .unwrap_or(usize::MAX)
}

impl<R: BufRead> Iterator for GraphReader<R> {
    type Item = Result<Graph, GraphError>;

    /// Yields descriptions until the input ends.
    ///
    /// An `InvalidTopology` error leaves the reader at the next description,
    /// so iteration carries on after it. Any other error (bad token,
    /// truncated input, I/O failure) leaves the position inside a matrix;
    /// it is yielded once and the iteration ends.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.read_graph() {
            Ok(Some(graph)) => Some(Ok(graph)),
            Ok(None) => None,
            Err(e @ GraphError::InvalidTopology(_)) => Some(Err(e)),
            Err(e) => {
                self.exhausted = true;
                Some(Err(e))
            }
        }
    }
}

impl FromStr for Graph {
    type Err = GraphError;

    /// Parses exactly one graph description.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut reader = GraphReader::new(s.as_bytes());
        let graph = reader
            .read_graph()?
            .ok_or(GraphError::UnexpectedEof { missing: 1 })?;
        match reader.next_token()? {
            Some(token) => Err(GraphError::TrailingInput(token)),
            None => Ok(graph),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triangle() {
        let g: Graph = "3\n0 1 1\n1 0 1\n1 1 0\n".parse().unwrap();
        assert_eq!(g.total_vertices(), 3);
        assert_eq!(g.total_edges(), 3);
        assert_eq!(g.degrees(), &[2, 2, 2]);
    }

    #[test]
    fn tokens_may_span_lines_freely() {
        let g: Graph = "2 0\n2   2\n\n 0".parse().unwrap();
        assert_eq!(g.edge_count_between(0, 1), 2);
    }

    #[test]
    fn zero_vertices() {
        let g: Graph = "0".parse().unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn negative_vertex_count() {
        let err = "-1".parse::<Graph>().unwrap_err();
        assert!(matches!(err, GraphError::InvalidTopology(_)));
    }

    #[test]
    fn non_integer_token() {
        let err = "2 0 x 1 0".parse::<Graph>().unwrap_err();
        assert!(matches!(err, GraphError::InvalidToken(ref t) if t == "x"));
    }

    #[test]
    fn truncated_description() {
        let err = "2 0 1 1".parse::<Graph>().unwrap_err();
        assert!(matches!(err, GraphError::UnexpectedEof { missing: 1 }));
    }

    #[test]
    fn truncated_huge_description_reports_eof() {
        let err = "5000000000 0 1".parse::<Graph>().unwrap_err();
        assert!(matches!(err, GraphError::UnexpectedEof { missing: usize::MAX }));
    }

    #[test]
    fn missing_entries_counts_remaining_matrix() {
        assert_eq!(missing_entries(3, 0, 0), 9);
        assert_eq!(missing_entries(3, 2, 1), 2);
        assert_eq!(missing_entries(usize::MAX, 1, 0), usize::MAX);
    }

    #[test]
    fn bad_token_ends_iteration() {
        let input = "2 0 x 1 0\n1 0\n";
        let results: Vec<_> = GraphReader::new(input.as_bytes()).collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(GraphError::InvalidToken(ref t)) if t == "x"));
    }

    #[test]
    fn truncated_description_ends_iteration() {
        let mut reader = GraphReader::new("3 0 1".as_bytes());
        assert!(matches!(reader.next(), Some(Err(GraphError::UnexpectedEof { missing: 7 }))));
        assert!(reader.next().is_none());
    }

    #[test]
    fn iteration_continues_after_topology_error() {
        let input = "2 0 1 0 0\n1 0\n";
        let results: Vec<_> = GraphReader::new(input.as_bytes()).collect();
        assert_eq!(results.len(), 2);
        assert!(matches!(results[0], Err(GraphError::InvalidTopology(_))));
        assert_eq!(results[1].as_ref().unwrap().total_vertices(), 1);
    }

    #[test]
    fn trailing_input_rejected() {
        let err = "1 0 5".parse::<Graph>().unwrap_err();
        assert!(matches!(err, GraphError::TrailingInput(ref t) if t == "5"));
    }

    #[test]
    fn empty_input_yields_nothing() {
        let mut reader = GraphReader::new("  \n\n".as_bytes());
        assert!(reader.read_graph().unwrap().is_none());
    }

    #[test]
    fn bad_matrix_is_fully_consumed() {
        let input = "2 0 -1 -1 0\n2 0 1 0 0\n1 0\n";
        let mut reader = GraphReader::new(input.as_bytes());

        let negative = reader.read_graph().unwrap_err();
        assert!(matches!(negative, GraphError::InvalidTopology(_)));

        let asymmetric = reader.read_graph().unwrap_err();
        assert!(matches!(asymmetric, GraphError::InvalidTopology(_)));

        let g = reader.read_graph().unwrap().unwrap();
        assert_eq!(g.total_vertices(), 1);
        assert!(reader.read_graph().unwrap().is_none());
    }

    #[test]
    fn iterates_over_many_descriptions() {
        let input = "1 0\n2 0 1 1 0\n0\n";
        let graphs: Vec<Graph> = GraphReader::new(input.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(graphs.len(), 3);
        assert_eq!(graphs[1].total_edges(), 1);
        assert!(graphs[2].is_empty());
    }
}
