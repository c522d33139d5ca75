use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use sauce_dump_core::{DataType, size_interpretation};

pub(crate) fn run_types() {
    log::info!("Known SAUCE data types:");
    crate::log_blank();

    for data_type in DataType::all() {
        log::info!(
            "{:>3} {}",
            data_type.code(),
            data_type
                .name()
                .if_supports_color(Stdout, |t| t.bold()),
        );

        let Some(file_types) = data_type.file_types() else {
            log::info!(
                "      {}",
                "(no file-type table)".if_supports_color(Stdout, |t| t.dimmed()),
            );
            continue;
        };

        for (code, name) in file_types.iter().enumerate() {
            let size = size_interpretation(data_type.code(), code as u8)
                .map(|rule| {
                    format!(
                        " [size in {}]",
                        rule.unit.name()
                    )
                    .if_supports_color(Stdout, |t| t.cyan())
                    .to_string()
                })
                .unwrap_or_default();
            log::info!("      {:>3} {}{}", code, name, size);
        }
    }
}
