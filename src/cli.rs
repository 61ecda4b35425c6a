use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand};

use crate::config::FormDefaults;
use crate::state::{DisplayConfig, MAX_OPACITY, MIN_OPACITY, WindowBackend, WindowStateController};

#[derive(Parser)]
#[command(
    name = "window-opacity",
    version,
    about = "Adjust opacity, click-through and always-on-top for any open window"
)]
pub struct Cli {
    /// Use this config file instead of ~/.config/window-opacity/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Runs the GUI when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List visible windows that have a title
    List,
    /// Apply opacity, click-through and always-on-top to a window by title
    Apply(ApplyArgs),
}

/// Arguments for the `apply` subcommand. Omitted values come from the
/// `[defaults]` section of the config file.
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Exact window title, as printed by `list`
    #[arg(long)]
    pub title: String,
    /// Opacity in percent
    #[arg(long, value_parser = clap::value_parser!(u8).range(MIN_OPACITY as i64..=MAX_OPACITY as i64))]
    pub opacity: Option<u8>,
    /// Let mouse clicks pass through the window
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub click_through: Option<bool>,
    /// Keep the window above all non-topmost windows
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub always_on_top: Option<bool>,
}

impl ApplyArgs {
    pub fn display_config(&self, defaults: &FormDefaults) -> DisplayConfig {
        DisplayConfig::new(
            self.opacity.unwrap_or(defaults.opacity),
            self.click_through.unwrap_or(defaults.click_through),
            self.always_on_top.unwrap_or(defaults.always_on_top),
        )
    }
}

/// Prints every enumerated window as `handle  title`, then a count.
pub fn list<B: WindowBackend>(backend: B, out: &mut impl Write) -> anyhow::Result<()> {
    let mut controller = WindowStateController::new(backend);
    let windows = controller.refresh().context("failed to enumerate windows")?;

    for entry in windows {
        writeln!(out, "{:<18} {}", entry.handle.to_string(), entry.title)?;
    }
    writeln!(out, "\n{} windows found", windows.len())?;
    Ok(())
}

/// Resolves `args.title` against a fresh snapshot and applies the
/// requested display config to it.
pub fn apply<B: WindowBackend>(
    backend: B,
    args: &ApplyArgs,
    defaults: &FormDefaults,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut controller = WindowStateController::new(backend);
    controller.refresh().context("failed to enumerate windows")?;

    let config = args.display_config(defaults);
    let handle = controller
        .resolve_selection(Some(&args.title))
        .and_then(|handle| controller.apply(handle, &config).map(|()| handle))
        .map_err(|e| anyhow!("{} ({e})", e.user_message()))?;

    writeln!(
        out,
        "Applied {}% (click-through: {}, always on top: {}) to {} \"{}\"",
        config.opacity, config.click_through, config.always_on_top, handle, args.title
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fake::FakeBackend;
    use crate::state::{ExStyle, WindowHandle};

    fn backend() -> FakeBackend {
        let fake = FakeBackend::new();
        fake.add_window(WindowHandle(0x10), "Notepad", ExStyle::default());
        fake.add_window(WindowHandle(0x20), "Calc", ExStyle::default());
        fake
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("window-opacity").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_means_gui() {
        let cli = parse(&[]);

        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn apply_flags_parse_with_and_without_values() {
        // Act
        let cli = parse(&["apply", "--title", "Calc", "--click-through", "--always-on-top=false"]);

        // Assert
        let Some(Commands::Apply(args)) = cli.command else {
            panic!("expected apply subcommand");
        };
        assert_eq!(args.title, "Calc");
        assert_eq!(args.opacity, None);
        assert_eq!(args.click_through, Some(true));
        assert_eq!(args.always_on_top, Some(false));
    }

    #[test]
    fn opacity_outside_range_is_rejected() {
        let result = Cli::try_parse_from(["window-opacity", "apply", "--title", "x", "--opacity", "5"]);

        assert!(result.is_err());
    }

    #[test]
    fn omitted_arguments_fall_back_to_config_defaults() {
        // Arrange
        let args = ApplyArgs {
            title: "Calc".into(),
            opacity: Some(40),
            click_through: None,
            always_on_top: None,
        };
        let defaults = FormDefaults {
            opacity: 90,
            click_through: true,
            always_on_top: true,
        };

        // Act
        let config = args.display_config(&defaults);

        // Assert
        assert_eq!(config, DisplayConfig::new(40, true, true));
    }

    #[test]
    fn list_prints_each_window_and_a_count() {
        // Arrange
        let fake = backend();
        let mut out = Vec::new();

        // Act
        list(&fake, &mut out).unwrap();

        // Assert
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("0x10"));
        assert!(text.contains("Notepad"));
        assert!(text.contains("Calc"));
        assert!(text.contains("2 windows found"));
    }

    #[test]
    fn apply_updates_the_window_matching_the_title() {
        // Arrange
        let fake = backend();
        let args = ApplyArgs {
            title: "Calc".into(),
            opacity: Some(50),
            click_through: Some(true),
            always_on_top: Some(true),
        };
        let mut out = Vec::new();

        // Act
        apply(&fake, &args, &FormDefaults::default(), &mut out).unwrap();

        // Assert
        let handle = WindowHandle(0x20);
        assert_eq!(fake.alpha(handle), Some(128));
        assert_eq!(fake.topmost(handle), Some(true));
        assert_eq!(
            fake.style(handle),
            Some(ExStyle::LAYERED | ExStyle::TRANSPARENT)
        );
        assert_eq!(fake.alpha(WindowHandle(0x10)), None);
    }

    #[test]
    fn apply_to_unknown_title_reports_select_window_warning() {
        // Arrange
        let fake = backend();
        let args = ApplyArgs {
            title: "Missing".into(),
            opacity: None,
            click_through: None,
            always_on_top: None,
        };
        let mut out = Vec::new();

        // Act
        let err = apply(&fake, &args, &FormDefaults::default(), &mut out).unwrap_err();

        // Assert
        assert!(err.to_string().contains("Select a window"));
        assert!(fake.calls().is_empty());
    }
}
