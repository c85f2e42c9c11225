mod cli;
mod error;
mod expr;
mod value;

use pagegeom::paper;
use snafu::OptionExt;

use crate::cli::Command;
use crate::error::Result;

fn main() -> Result<()> {
    let cli = cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .init();

    println!("{}", run(cli.command)?);

    Ok(())
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Eval { expression } => expr::evaluate(&expression.join(" ")).map(|v| v.to_string()),
        Command::Paper { name } => {
            let rect = paper::paper_rect(&name).context(error::UnknownPaper { name: &name })?;

            Ok(rect.to_string())
        }
        Command::Fit { width, height } => Ok(paper::find_fit(width, height)),
    }
}
