pub mod brackets;
pub mod report;
pub mod schema;

use crate::declaration::Declaration;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read a declaration (JSON, or CSV by extension; stdin with "-").
pub fn read_declaration(path: &Path) -> anyhow::Result<Declaration> {
    if path.as_os_str() == "-" {
        return read_from_stdin();
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => Declaration::from_csv_reader(reader),
        _ => Declaration::from_json_reader(reader),
    }
}

fn read_from_stdin() -> anyhow::Result<Declaration> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    Declaration::from_json_reader(io::Cursor::new(buffer))
}
