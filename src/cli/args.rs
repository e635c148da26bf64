use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "envgen",
    about = "Generate .env from .env.default, .env.override and the compatibility matrix",
    long_about = "Merges .env.default with the optional .env.override in the current directory, \
pins *_VERSION variables set to a role (prod, stage1) to the latest compatible release, \
and writes the result to .env",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Quiet mode (warnings and errors only)
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests;
