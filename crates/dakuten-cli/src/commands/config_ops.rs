use std::fs;
use std::process;

use dakuten_core::settings;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Install a custom settings file before any command reads the settings.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error in {file}: {}");
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    let order: Vec<&str> = s.converters().iter().map(|c| c.id()).collect();
    println!(
        "OK: engine.segmentation={:?}, message.max_chars={}, converters=[{}]",
        s.engine.segmentation,
        s.message.max_chars,
        order.join(", ")
    );
}
