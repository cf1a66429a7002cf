#![allow(dead_code)]
use hansard::logging::{LogLevel, MemoryLogger};
use std::path::Path;

pub fn fixtures_dir() -> String {
    format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

pub fn load_fixture(filename: &str) -> String {
    let path = Path::new(&fixtures_dir()).join(filename);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// A `<debate>` with the given title wrapping `body`.
pub fn debate_xml(title: &str, body: &str) -> String {
    format!("<debate><debateinfo><title>{title}</title></debateinfo>{body}</debate>")
}

pub fn subdebate_xml(level: u8, title: &str, body: &str) -> String {
    format!(
        "<subdebate.{level}><subdebateinfo><title>{title}</title></subdebateinfo>{body}</subdebate.{level}>"
    )
}

/// A full day document: header fields plus the given top-level sections.
pub fn day_xml(chamber: &str, date: &str, proof: &str, sections: &str) -> String {
    format!(
        "<?xml version=\"1.0\"?>\
         <hansard>\
         <session.header><date>{date}</date><chamber>{chamber}</chamber><proof>{proof}</proof></session.header>\
         {sections}\
         </hansard>"
    )
}

pub fn error_messages(logger: &MemoryLogger) -> Vec<String> {
    logger
        .entries()
        .into_iter()
        .filter(|(level, _)| *level == LogLevel::Error)
        .map(|(_, message)| message)
        .collect()
}
