// SPDX-License-Identifier: MPL-2.0
use iced_knob::app::{self, Flags};
use iced_knob::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_knob - rotary knob mixer

USAGE:
  iced_knob [OPTIONS]

OPTIONS:
  --config-dir <DIR>           Directory holding settings.toml
  --theme <light|dark|system>  Override the configured theme
  -h, --help                   Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring --config-dir");
            None
        });
    let theme = args
        .opt_value_from_str::<_, ThemeMode>("--theme")
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring --theme");
            None
        });

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(Flags { config_dir, theme })
}
