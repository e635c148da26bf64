pub mod cli;
pub mod config;
pub mod constants;
pub mod env;
pub mod error;
pub mod pipeline;
pub mod project_identity;
pub mod resolver;
pub mod traits;
pub mod ui;

use clap::Parser;
use std::process::exit;

/// Run envgen CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Parse flags
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    // 2. Run against the fixed file names in the working directory
    let cfg = config::GeneratorConfig::default();
    ui::debug(&format!(
        "{} {}: input={} override={} output={}",
        project_identity::DISPLAY_NAME,
        env!("CARGO_PKG_VERSION"),
        cfg.input_file.display(),
        cfg.override_file.display(),
        cfg.output_file.display()
    ));

    if let Err(e) = pipeline::run_with_http(&cfg) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
