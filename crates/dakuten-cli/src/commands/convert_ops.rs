use std::io::{self, Read};
use std::process;

use serde::Serialize;

use dakuten_core::kana::Voicing;
use dakuten_core::report::{inline_results, render_all, render_message, should_reply};
use dakuten_core::settings::settings;
use dakuten_core::{Converter, Segmentation};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Use `text` if given, otherwise all of stdin minus one trailing newline.
pub fn read_input(text: Option<String>) -> String {
    if let Some(t) = text {
        return t;
    }
    let mut buf = String::new();
    die!(
        io::stdin().read_to_string(&mut buf),
        "Error reading stdin: {}"
    );
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    buf
}

pub fn convert_cmd(converter: &str, text: Option<String>, codepoint: bool) {
    let converter: Converter = die!(converter.parse(), "Error: {}");
    let input = read_input(text);
    let segmentation = if codepoint {
        Segmentation::CodePoint
    } else {
        settings().engine.segmentation
    };
    println!("{}", converter.apply_with(&input, segmentation));
}

pub fn all_cmd(text: Option<String>, json: bool) {
    let input = read_input(text);
    let s = settings();
    if json {
        let renditions = render_all(&input, s.converters());
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&renditions), "Error: {}")
        );
        return;
    }
    if !should_reply(&input) {
        return;
    }
    let message = render_message(&input, s.converters(), s.message.max_chars)
        .unwrap_or_else(|| s.message.too_long.clone());
    print!("{message}");
}

pub fn inline_cmd(query_id: &str, query: &str, json: bool) {
    let s = settings();
    let results = inline_results(
        query_id,
        query,
        s.converters(),
        s.inline.description_max_bytes,
    );
    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&results), "Error: {}")
        );
        return;
    }
    for r in &results {
        println!("[{}] {}", r.id, r.title);
        println!("  {}", r.description);
    }
}

#[derive(Serialize)]
struct PairRow {
    base: char,
    marked: char,
}

pub fn table_cmd(voicing: &str, json: bool) {
    let voicing = match voicing {
        "dakuon" | "d" => Voicing::Dakuon,
        "handakuon" | "h" => Voicing::Handakuon,
        other => {
            eprintln!("Error: unknown voicing {other:?} (expected dakuon or handakuon)");
            process::exit(1);
        }
    };
    let table = voicing.table();
    if json {
        let rows: Vec<PairRow> = table
            .pairs()
            .iter()
            .map(|&(base, marked)| PairRow { base, marked })
            .collect();
        println!("{}", die!(serde_json::to_string_pretty(&rows), "Error: {}"));
        return;
    }
    for &(base, marked) in table.pairs() {
        println!(
            "{base} U+{:04X}  →  {marked} U+{:04X}",
            base as u32, marked as u32
        );
    }
    println!("{} pairs", table.len());
}
