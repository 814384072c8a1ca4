use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Serialize one record into its canonical text form: pretty-printed JSON
/// with 4-space indentation. The same form is used for filter matching and
/// for emission.
pub fn render_record(record: &Value) -> String {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record
        .serialize(&mut ser)
        .expect("JSON value serializes to an in-memory buffer");
    String::from_utf8(buf).expect("serde_json emits valid UTF-8")
}

/// Write the records to `out`, one pretty-printed object at a time with a
/// blank-line separator after each.
pub fn dumps<W: Write>(records: &[Value], out: &mut W) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", render_record(record))?;
        writeln!(out)?;
    }
    Ok(())
}

/// Write the records to the file at `path`, creating it if absent and
/// truncating it if present. Never appends.
pub fn dump_file(records: &[Value], path: &Path, verbose: bool) -> io::Result<()> {
    let mut file = File::create(path)?;
    dumps(records, &mut file)?;

    if verbose {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dir = path
            .parent()
            .map(|d| d.to_string_lossy().into_owned())
            .unwrap_or_default();
        eprintln!("File {name} has been dumped into {dir}");
    }

    Ok(())
}
