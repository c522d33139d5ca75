use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::settings::{load_settings, settings_path};

pub(crate) fn run_settings() -> Result<(), CliError> {
    let path = settings_path();
    if path.exists() {
        log::info!(
            "Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let settings = load_settings()?;
    let format = settings.resolve_format(None);
    log::info!("  output.format:       {:?}", format);
    log::info!("  output.strict_dates: {}", settings.output.strict_dates);
    Ok(())
}
