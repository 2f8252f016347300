//! One huekit run, start to finish, and how it ends.

use std::fmt;
use std::io::Write;

use huekit_input::TerminalIO;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::color::Painter;
use crate::config::Config;
use crate::error::HuekitError;
use crate::generate::{GenerateReport, Generator};
use crate::prompts::{Frontend, PromptSequence, Prompted};

/// How a run ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Files were generated.
    Completed(GenerateReport),
    /// `--list` printed the catalog.
    Listed,
    /// The user backed out of a question before anything was written.
    Cancelled,
}

/// Loads the catalog, asks the questions, and generates.
///
/// Every failure propagates; nothing is retried.
pub fn run<T, W>(config: &Config, frontend: Frontend<T>, out: &mut W) -> Result<Outcome, HuekitError>
where
    T: TerminalIO + 'static,
    W: Write,
{
    let catalog = config.load_catalog()?;
    let painter = config.painter();

    if config.list_only {
        list_palettes(&catalog, &painter, out)?;
        return Ok(Outcome::Listed);
    }

    let assets = config.template_assets()?;
    let sequence = PromptSequence::new(&catalog, frontend, &config.base_dir, painter);
    let Prompted::Completed(selection) = sequence.run(&config.matches)? else {
        info!("prompt cancelled");
        return Ok(Outcome::Cancelled);
    };

    let report = Generator::new(&assets, &config.base_dir, painter).run(&selection, out)?;
    Ok(Outcome::Completed(report))
}

/// Prints `name: hues | mono` for every palette.
pub fn list_palettes<W: Write>(
    catalog: &Catalog,
    painter: &Painter,
    out: &mut W,
) -> Result<(), HuekitError> {
    for palette in catalog.palettes() {
        let mut line = format!("{}: {}", palette.name, painter.swatch(&palette.hues));
        if !palette.mono.is_empty() {
            line.push_str(" | ");
            line.push_str(&painter.swatch(&palette.mono));
        }
        writeln!(out, "{}", line).map_err(HuekitError::Output)?;
    }
    Ok(())
}

/// Reports the result of [`run`] and returns the process exit status.
///
/// Cancellation is a normal termination (status 0) with a notice on `out`;
/// any error is printed with its cause chain on `err` (status 1).
pub fn report<W: Write, E: Write>(
    result: Result<Outcome, HuekitError>,
    painter: &Painter,
    out: &mut W,
    err: &mut E,
) -> u8 {
    match result {
        Ok(Outcome::Cancelled) => {
            emit(
                out,
                format_args!(
                    "\n {}",
                    painter.failure("Prompt cancelled by user. Exiting...")
                ),
            );
            0
        }
        Ok(Outcome::Completed(_)) | Ok(Outcome::Listed) => 0,
        Err(error) => {
            emit(
                err,
                format_args!("Unexpected error: {:#}", anyhow::Error::new(error)),
            );
            1
        }
    }
}

/// Writes one final line. The exit status is already decided, so a failed
/// write only goes to the log.
fn emit<W: Write>(stream: &mut W, line: fmt::Arguments<'_>) {
    if let Err(error) = writeln!(stream, "{}", line) {
        warn!(%error, "could not write final status line");
    }
}
