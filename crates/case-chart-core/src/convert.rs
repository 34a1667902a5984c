// File: crates/case-chart-core/src/convert.rs
// Summary: CSV export -> JSON array converter producing the per-region input files.

use std::io;

use serde_json::{Map, Value};

/// Every CSV row becomes an object keyed by the header row, values kept as strings.
/// Short rows get `null` for their missing columns.
pub fn csv_to_json<R: io::Read>(reader: R) -> Result<Value, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let mut obj = Map::with_capacity(headers.len());
        for (i, h) in headers.iter().enumerate() {
            let v = rec.get(i).map_or(Value::Null, |s| Value::String(s.to_string()));
            obj.insert(h.to_string(), v);
        }
        rows.push(Value::Object(obj));
    }
    Ok(Value::Array(rows))
}

/// Pretty-print with a 4-space indent.
pub fn to_pretty_json(value: &Value) -> Result<String, serde_json::Error> {
    let mut out = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, fmt);
    serde::Serialize::serialize(value, &mut ser)?;
    // serde_json only ever writes UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}
