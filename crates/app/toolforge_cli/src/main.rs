//! Toolforge CLI — compile a tool specification into an MCP server scaffold.

// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

mod logging;

use std::path::PathBuf;

use clap::Parser;

use toolforge_core::Error as CompileError;

/// Compile a tool specification into a runnable MCP server scaffold.
#[derive(Parser)]
#[command(name = "toolforge", version, about)]
struct Cli {
    /// Path to the specification file.
    spec: PathBuf,

    /// Directory to write the generated scaffold into.
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();

    let source = std::fs::read_to_string(&args.spec)?;
    let model = toolforge_core::parse(&source)?;
    log::info!(
        "parsed {}: {} tool(s), server \"{}\"",
        args.spec.display(),
        model.tools.len(),
        model.server.name
    );

    let report = match toolforge_core::generate(&model, &args.out_dir) {
        Ok(report) => report,
        Err(e) => {
            // Partial output is left on disk; tell the caller what exists.
            if let CompileError::OutputWrite { written, .. } = &e {
                for file in written {
                    log::warn!("partial output left on disk: {file}");
                }
            }
            return Err(e.into());
        }
    };

    for file in &report.written {
        log::info!("wrote {}", args.out_dir.join(file).display());
    }
    log::info!(
        "generated {} file(s) under {}",
        report.written.len(),
        args.out_dir.display()
    );

    Ok(())
}
