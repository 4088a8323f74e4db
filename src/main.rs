// src/main.rs

use nvnodetop::{cli, logging, run};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("nvnodetop: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run_main() -> nvnodetop::errors::Result<()> {
    let args = cli::parse();
    logging::init_logging()?;
    run(args)
}
