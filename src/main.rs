use clap::Parser;
use euler_circuit::app::{run_app, Cli};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run_app(cli)?;
    Ok(())
}
