//! Main application orchestrator.
//!
//! Coordinates a run:
//! 1. Checks the arguments and initializes logging.
//! 2. Reads every graph description from each input file in turn and hands
//!    each graph to `processing::process_graph`.
//! 3. Optionally generates a batch of random graphs and processes them too.
//! 4. Prints a report per graph, a tally per source and a final summary,
//!    and writes the report to a file when asked.
//!
//! A malformed description aborts the run, since the rest of that file can
//! no longer be trusted.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::summary::{RunSummary, SourceSummary};
use super::{verbose_eprintln, verbose_println};
use crate::graph::{Graph, RandomGraphConfig};

/// Console report, also kept in memory for `--output`.
struct Report {
    quiet_mode: bool,
    text: String,
}

impl Report {
    fn new(quiet_mode: bool) -> Self {
        Self {
            quiet_mode,
            text: String::new(),
        }
    }

    fn push(&mut self, text: &str) {
        if !self.quiet_mode {
            print!("{}", text);
        }
        self.text.push_str(text);
    }
}

/// Runs the whole application based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` for bad arguments, unreadable files, malformed graph
/// descriptions or a failure to write the report file.
pub fn run_app(cli: Cli) -> Result<RunSummary, AppError> {
    let quiet_mode = cli.quiet;

    if cli.graph_files.is_empty() && cli.random.is_none() {
        return Err(AppError::InvalidArguments(
            "no graph files given and --random not set".to_string(),
        ));
    }
    if cli.expected.len() > cli.graph_files.len() {
        return Err(AppError::InvalidArguments(format!(
            "{} --expected value(s) given for {} file(s)",
            cli.expected.len(),
            cli.graph_files.len()
        )));
    }

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let mut report = Report::new(quiet_mode);
    let mut summary = RunSummary::default();

    for (file_index, path) in cli.graph_files.iter().enumerate() {
        file_handler::validate_graph_file(path, quiet_mode)?;
        let name = path.display().to_string();
        verbose_println!(
            quiet_mode,
            "\n============================================================"
        );
        verbose_println!(quiet_mode, "Processing File: {}", name);
        verbose_println!(
            quiet_mode,
            "============================================================"
        );

        let mut source = SourceSummary::new(name.clone(), cli.expected.get(file_index).copied());
        report.push(&format!("\n=======  Test {}  =======\n", name));

        let reader = file_handler::open_graph_file(path)?;
        for (index, graph) in reader.enumerate() {
            let graph = match graph {
                Ok(graph) => graph,
                Err(e) => {
                    verbose_eprintln!(quiet_mode, "[ERROR] Graph #{} in {}: {}", index, name, e);
                    flush_log(quiet_mode);
                    return Err(AppError::MalformedGraph {
                        path: name,
                        index,
                        source: e,
                    });
                }
            };
            let label = format!("{}#{}", name, index);
            run_graph(&graph, &label, &cli, &mut source, &mut report);
        }

        report.push(&format!("\n{}\n", source.render()));
        summary.sources.push(source);
        flush_log(quiet_mode);
    }

    if let Some(vertices) = cli.random {
        let config = RandomGraphConfig::new(vertices, cli.max_parallel).with_seed(cli.seed);
        verbose_println!(
            quiet_mode,
            "\nGenerating {} random graph(s): {} vertices, up to {} parallel edges, seed {}",
            cli.count,
            config.vertices,
            config.max_parallel_edges,
            cli.seed
        );
        let mut rng = config.rng();
        let mut source = SourceSummary::new("random", None);
        report.push(&format!(
            "\n=======  Random graphs ({} vertices, max {} parallel edges)  =======\n",
            vertices, cli.max_parallel
        ));
        for index in 0..cli.count {
            let graph = Graph::random_with(config.vertices, config.max_parallel_edges, &mut rng);
            let label = format!("random#{}", index);
            run_graph(&graph, &label, &cli, &mut source, &mut report);
        }
        report.push(&format!("\n{}\n", source.render()));
        summary.sources.push(source);
        flush_log(quiet_mode);
    }

    let closing = summary.render();
    println!("{}", closing);
    report.text.push_str(&closing);
    report.text.push('\n');

    if let Some(output_path) = &cli.output {
        if let Err(e) = file_handler::write_content_to_file(output_path, &report.text) {
            verbose_eprintln!(
                quiet_mode,
                "[ERROR] Failed to write report ({}): {}",
                output_path.display(),
                e
            );
            flush_log(quiet_mode);
            return Err(AppError::Io(e));
        }
        verbose_println!(quiet_mode, "\n[INFO] Report written to {}", output_path.display());
    }

    flush_log(quiet_mode);
    Ok(summary)
}

fn run_graph(
    graph: &Graph,
    label: &str,
    cli: &Cli,
    source: &mut SourceSummary,
    report: &mut Report,
) {
    let outcome = processing::process_graph(graph, label, cli.connectivity, cli.quiet);
    report.push("\n");
    report.push(&processing::render_outcome(&outcome, !cli.hide_circuit));
    source.record(&outcome);
}

fn flush_log(quiet_mode: bool) {
    if quiet_mode {
        return;
    }
    if let Err(e) = logger::flush_global_logger() {
        // Log to stderr as the log file itself might be the one failing.
        eprintln!("[WARNING] Failed to flush verbose log: {}", e);
    }
}
