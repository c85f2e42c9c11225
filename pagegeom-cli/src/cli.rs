use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Most verbose log level written to stderr
    #[arg(long, global = true, default_value_t = tracing::Level::ERROR)]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Evaluate a geometry expression, e.g. `Rect(0, 0, 4, 2) * Matrix(2, 0, 0, 2, 0, 0)`
    Eval {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        expression: Vec<String>,
    },

    /// Print the page rectangle of a paper format, e.g. `A4` or `letter-l`
    Paper { name: String },

    /// Name the paper format closest to a page size in points
    Fit { width: f64, height: f64 },
}

pub fn parse() -> Cli {
    Cli::parse()
}
