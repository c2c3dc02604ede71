//! Tallies of circuits found per graph source and over a whole run.

use super::processing::GraphOutcome;

/// Results for one source of graphs (a file or a random batch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    pub name: String,
    pub graphs: usize,
    /// Graphs for which the search returned a circuit.
    pub circuits_found: usize,
    /// Circuits that also passed validation.
    pub valid_circuits: usize,
    /// Number of Eulerian graphs the source is expected to contain.
    pub expected: Option<usize>,
}

impl SourceSummary {
    pub fn new(name: impl Into<String>, expected: Option<usize>) -> Self {
        Self {
            name: name.into(),
            graphs: 0,
            circuits_found: 0,
            valid_circuits: 0,
            expected,
        }
    }

    pub fn record(&mut self, outcome: &GraphOutcome) {
        self.graphs += 1;
        if outcome.circuit.is_some() {
            self.circuits_found += 1;
        }
        if outcome.has_valid_circuit() {
            self.valid_circuits += 1;
        }
    }

    /// `Some(true)` when the valid circuits match the expectation, `None`
    /// when nothing was expected.
    pub fn meets_expectation(&self) -> Option<bool> {
        self.expected.map(|expected| expected == self.valid_circuits)
    }

    /// The per-source line printed after its graphs.
    pub fn render(&self) -> String {
        match self.expected {
            Some(expected) => format!(
                "Eulerian circuits expected: {}, found: {}",
                expected, self.valid_circuits
            ),
            None => format!(
                "Eulerian circuits found: {} in {} graph(s)",
                self.valid_circuits, self.graphs
            ),
        }
    }
}

/// Results for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sources: Vec<SourceSummary>,
}

impl RunSummary {
    pub fn total_graphs(&self) -> usize {
        self.sources.iter().map(|s| s.graphs).sum()
    }

    pub fn total_valid_circuits(&self) -> usize {
        self.sources.iter().map(|s| s.valid_circuits).sum()
    }

    /// Circuits that were returned but failed validation.
    pub fn total_invalid_circuits(&self) -> usize {
        self.sources
            .iter()
            .map(|s| s.circuits_found - s.valid_circuits)
            .sum()
    }

    /// `(sources meeting their expectation, sources with an expectation)`.
    pub fn score(&self) -> (usize, usize) {
        self.sources
            .iter()
            .filter_map(SourceSummary::meets_expectation)
            .fold((0, 0), |(met, total), ok| (met + usize::from(ok), total + 1))
    }

    /// The closing summary line.
    pub fn render(&self) -> String {
        let mut line = format!(
            "Total: {} graph(s), {} valid Eulerian circuit(s)",
            self.total_graphs(),
            self.total_valid_circuits()
        );
        let invalid = self.total_invalid_circuits();
        if invalid > 0 {
            line.push_str(&format!(", {} invalid", invalid));
        }
        let (met, total) = self.score();
        if total > 0 {
            line.push_str(&format!(". Score: {} out of {}", met, total));
        }
        line.push('.');
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::processing::process_graph;
    use crate::graph::Graph;

    fn outcome(description: &str) -> GraphOutcome {
        let graph: Graph = description.parse().unwrap();
        process_graph(&graph, "test", false, true)
    }

    #[test]
    fn records_outcomes() {
        let mut source = SourceSummary::new("small", Some(1));
        source.record(&outcome("3 0 1 1 1 0 1 1 1 0"));
        source.record(&outcome("2 0 1 1 0"));
        assert_eq!(source.graphs, 2);
        assert_eq!(source.circuits_found, 1);
        assert_eq!(source.valid_circuits, 1);
        assert_eq!(source.meets_expectation(), Some(true));
        assert_eq!(source.render(), "Eulerian circuits expected: 1, found: 1");
    }

    #[test]
    fn run_score() {
        let mut met = SourceSummary::new("a", Some(0));
        met.record(&outcome("2 0 1 1 0"));
        let mut missed = SourceSummary::new("b", Some(2));
        missed.record(&outcome("1 2"));
        let free = SourceSummary::new("random", None);

        let run = RunSummary {
            sources: vec![met, missed, free],
        };
        assert_eq!(run.total_graphs(), 2);
        assert_eq!(run.total_valid_circuits(), 1);
        assert_eq!(run.score(), (1, 2));
        assert_eq!(
            run.render(),
            "Total: 2 graph(s), 1 valid Eulerian circuit(s). Score: 1 out of 2."
        );
    }
}
