//! Canonical dictionary output.
//!
//! The writer emits the conventional case-file layout: `FoamFile` header
//! block, a starred separator, blank-line separated top-level entries,
//! and a starred footer. Entries keep their dictionary order, so a file
//! that was just parsed serializes with its original key order.
//!
//! File output goes through a sibling temp file followed by a rename, so
//! a failure mid-write never leaves a truncated case file behind.

use crate::dict::Dictionary;
use crate::error::{FoamError, FoamResult};
use crate::field::FieldFile;
use crate::value::{ListEntry, Value};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const INDENT: &str = "    ";
const KEY_COLUMN: usize = 16;

const SEPARATOR: &str =
    "// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * //";
const FOOTER: &str =
    "// ************************************************************************* //";

/// Render a complete case file.
pub fn serialize(file: &FieldFile) -> String {
    let mut out = String::new();
    write_entry(&mut out, "FoamFile", &Value::Dict(file.header.to_dictionary()), 0);
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push('\n');
    for (key, value) in file.body.iter() {
        write_entry(&mut out, key, value, 0);
        out.push('\n');
    }
    out.push_str(FOOTER);
    out.push('\n');
    out
}

/// Render a bare dictionary body (no header, no banner lines).
pub fn serialize_dictionary(dict: &Dictionary) -> String {
    let mut out = String::new();
    for (key, value) in dict.iter() {
        write_entry(&mut out, key, value, 0);
    }
    out
}

/// Serialize to `path`, writing a sibling temp file and renaming it into
/// place. The temp file is removed if anything fails.
pub fn write_file(path: impl AsRef<Path>, file: &FieldFile) -> FoamResult<()> {
    let path = path.as_ref();
    let text = serialize(file);

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("case-file");
    let tmp = path.with_file_name(format!(".{}.tmp", file_name));

    tracing::debug!(path = %path.display(), bytes = text.len(), "writing case file");
    if let Err(source) = fs::write(&tmp, &text) {
        let _ = fs::remove_file(&tmp);
        return Err(FoamError::Io {
            path: tmp.clone(),
            source,
        });
    }
    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(FoamError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// Write one `key value;` statement or `key { ... }` block.
fn write_entry(out: &mut String, key: &str, value: &Value, indent: usize) {
    let pad = INDENT.repeat(indent);
    match value {
        Value::Dict(dict) => {
            let _ = writeln!(out, "{}{}", pad, key);
            let _ = writeln!(out, "{}{{", pad);
            for (k, v) in dict.iter() {
                write_entry(out, k, v, indent + 1);
            }
            let _ = writeln!(out, "{}}}", pad);
        }
        Value::List(entries) if entries.iter().any(is_named) => {
            let _ = writeln!(out, "{}{}", pad, key);
            let _ = writeln!(out, "{}(", pad);
            for entry in entries {
                match entry {
                    ListEntry::Named(name, body) => {
                        write_entry(out, name, &Value::Dict(body.clone()), indent + 1);
                    }
                    ListEntry::Value(v) => {
                        let _ = writeln!(out, "{}{}{}", pad, INDENT, render_inline(v));
                    }
                }
            }
            let _ = writeln!(out, "{});", pad);
        }
        _ => {
            let _ = writeln!(
                out,
                "{}{:<width$} {};",
                pad,
                key,
                render_inline(value),
                width = KEY_COLUMN - 1
            );
        }
    }
}

fn is_named(entry: &ListEntry) -> bool {
    matches!(entry, ListEntry::Named(..))
}

/// Render a value that fits on one line.
fn render_inline(value: &Value) -> String {
    match value {
        Value::Number(n) => fmt_number(*n),
        Value::Word(w) => w.clone(),
        Value::Str(s) => format!("\"{}\"", s),
        Value::Vector(v) => format!(
            "({} {} {})",
            fmt_number(v[0]),
            fmt_number(v[1]),
            fmt_number(v[2])
        ),
        Value::Dimensions(d) => d.to_string(),
        Value::Uniform(inner) => format!("uniform {}", render_inline(inner)),
        Value::List(entries) => {
            let rendered: Vec<String> = entries
                .iter()
                .map(|e| match e {
                    ListEntry::Value(v) => render_inline(v),
                    // Multiline lists are handled by write_entry; a named
                    // entry never reaches this path from serialize().
                    ListEntry::Named(name, _) => name.clone(),
                })
                .collect();
            format!("({})", rendered.join(" "))
        }
        Value::Dict(_) => String::from("{}"),
    }
}

/// Integral values print without a decimal point, so dimension sets and
/// point counts round-trip byte-comparably.
fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
