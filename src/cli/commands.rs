use tracing::{debug, instrument};

use crate::application::{demo_catalog, render_report, ApplicationError};
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::exitcode;

/// Runs the command and maps the outcome to a process exit code.
///
/// Errors are reported on stderr before their code is returned.
pub fn run(cli: &Cli) -> i32 {
    match execute_command(cli) {
        Ok(()) => exitcode::OK,
        Err(e) => {
            output::error(&e);
            e.exit_code()
        }
    }
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    output::block(&command_output(cli)?);
    Ok(())
}

/// Everything the command writes to stdout: the effective settings as TOML
/// with `--show-config`, the catalog report otherwise.
#[instrument(level = "debug")]
pub fn command_output(cli: &Cli) -> CliResult<String> {
    let settings = effective_settings(cli)?;
    if cli.show_config {
        return Ok(settings.to_toml()?);
    }
    catalog_report(&settings)
}

/// Loaded settings with command line overrides applied.
#[instrument(level = "debug")]
pub fn effective_settings(cli: &Cli) -> CliResult<Settings> {
    if let Some(path) = &cli.config {
        if !path.is_file() {
            return Err(CliError::Usage(format!(
                "config file does not exist: {}",
                path.display()
            )));
        }
    }
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(style) = cli.style {
        settings.style = style;
    }
    if let Some(indent) = cli.indent {
        settings.indent = indent;
    }
    debug!(?settings, "effective settings");
    Ok(settings)
}

/// Listing of the demo catalog followed by its total price.
#[instrument(level = "debug")]
pub fn catalog_report(settings: &Settings) -> CliResult<String> {
    let (catalog, root) = demo_catalog().map_err(ApplicationError::from)?;
    Ok(render_report(&catalog, root, settings)?)
}
