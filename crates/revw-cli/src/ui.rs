use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    ));
}

fn resolve(flags: &GlobalFlags, stdout_tty: bool, stderr_tty: bool, no_color: bool) -> UiPrefs {
    let table = flags.format == OutputFormat::Table;
    let table_color = match flags.color {
        ColorMode::Always => table,
        ColorMode::Never => false,
        ColorMode::Auto => stdout_tty && table && !flags.quiet && !no_color,
    };

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    UiPrefs {
        table_color,
        progress: stderr_tty && !flags.quiet,
        term_width,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        progress: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat, color: ColorMode, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet,
            verbose: false,
            color,
        }
    }

    #[test]
    fn color_only_applies_to_tables() {
        let json = resolve(&flags(OutputFormat::Json, ColorMode::Always, false), true, true, false);
        assert!(!json.table_color);

        let table = resolve(&flags(OutputFormat::Table, ColorMode::Always, false), false, false, true);
        assert!(table.table_color);
    }

    #[test]
    fn auto_color_needs_a_terminal_and_no_no_color() {
        let table = flags(OutputFormat::Table, ColorMode::Auto, false);
        assert!(resolve(&table, true, true, false).table_color);
        assert!(!resolve(&table, false, true, false).table_color);
        assert!(!resolve(&table, true, true, true).table_color);
    }

    #[test]
    fn quiet_disables_progress() {
        let quiet = resolve(&flags(OutputFormat::Table, ColorMode::Never, true), true, true, false);
        assert!(!quiet.progress);
        assert!(!quiet.table_color);
    }
}
