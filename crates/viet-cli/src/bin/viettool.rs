use clap::{Parser, Subcommand};

use viet_cli::commands::{compose_ops, config_ops};
use viet_core::method::MethodKind;

#[derive(Parser)]
#[command(name = "viettool", about = "Vietnamese composition diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Type each word through the composer and print the result
    Compose {
        /// Keystrokes, words separated by whitespace
        text: String,
        /// Typing method (telex or vni)
        #[arg(long, default_value = "telex")]
        method: MethodKind,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the keystroke edit between two strings
    Diff {
        /// Text currently on screen
        previous: String,
        /// Text that should replace it
        next: String,
    },

    /// Show the output strategy chosen for an application id
    Strategy {
        /// Bundle or package identifier
        app_id: String,
    },

    /// Export or validate engine settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the built-in settings TOML
    Export,
    /// Check a settings file
    Validate {
        /// Path to the settings TOML
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Compose { text, method, json } => compose_ops::compose(&text, method, json),
        Command::Diff { previous, next } => compose_ops::diff(&previous, &next),
        Command::Strategy { app_id } => compose_ops::strategy(&app_id),
        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export(),
            SettingsAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
