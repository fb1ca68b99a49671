use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dakuten_cli::commands::{config_ops, convert_ops};

#[derive(Parser)]
#[command(name = "dakutool", about = "Detach dakuten and handakuten from kana")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write JSON trace logs to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply one converter (id like `de` or name like `external-dakuon`)
    Convert {
        /// Converter id or name
        converter: String,
        /// Input text (stdin if omitted)
        text: Option<String>,
        /// Mark every code point instead of every grapheme cluster
        #[arg(long)]
        codepoint: bool,
    },
    /// Show every configured conversion, formatted as a chat reply
    All {
        /// Input text (stdin if omitted)
        text: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the inline results for a query
    Inline {
        /// Query text
        query: String,
        /// Inline query id prefixed to each result id
        #[arg(long, default_value = "0")]
        id: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Dump a voicing table
    Table {
        /// `dakuon` or `handakuon`
        voicing: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = cli.trace_dir.as_deref() {
        dakuten_engine::trace_init::init_tracing(dir);
    }
    if let Some(file) = cli.settings.as_deref() {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Convert {
            converter,
            text,
            codepoint,
        } => convert_ops::convert_cmd(&converter, text, codepoint),
        Command::All { text, json } => convert_ops::all_cmd(text, json),
        Command::Inline { query, id, json } => convert_ops::inline_cmd(&id, &query, json),
        Command::Table { voicing, json } => convert_ops::table_cmd(&voicing, json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
