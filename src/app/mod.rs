mod cli;
mod error;
mod file_handler;
mod logger;
mod orchestrator;
mod processing;
mod summary;

pub use cli::Cli;
pub use error::AppError;
pub use orchestrator::run_app;
pub use processing::{process_graph, render_outcome, GraphOutcome};
pub use summary::{RunSummary, SourceSummary};

// Macros for use by child modules of app (orchestrator, processing, file_handler)
// These macros call functions from the app::logger module.
// `super::logger` resolves to `app::logger` from any sibling module.
macro_rules! verbose_println {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_message_args(format_args!($($arg)*));
        }
    };
}

macro_rules! verbose_eprintln {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_error_args(format_args!($($arg)*));
        }
    };
}

// These `use` statements bring the macros into scope for all sibling modules
// within the `app` module, allowing them to be called directly.
use verbose_eprintln;
use verbose_println;
