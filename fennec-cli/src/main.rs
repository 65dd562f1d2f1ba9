//! Fennec CLI
//!
//! Builds an order-checked CSS selector from fragment and combinator tokens.
//!
//! ```text
//! fennec el=div id=main + el=table id=data
//! div#main + table#data
//! ```

mod assemble;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(name = "fennec", version, about = "Build an order-checked CSS selector")]
struct Cli {
    /// Print a JSON snapshot of the builder instead of the selector
    #[arg(long)]
    json: bool,

    /// Fragments as `kind=value` (element|el, id, class, attr|attribute,
    /// pseudo-class|pc, pseudo-element|pe) and combinators (`>`, `+`, `~`,
    /// or descendant, child, next-sibling, subsequent-sibling)
    #[arg(required = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn run(cli: &Cli) -> Result<String> {
    let selector = assemble::assemble(&cli.tokens)?;
    if cli.json {
        Ok(selector.to_json()?)
    } else {
        Ok(selector.stringify())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
