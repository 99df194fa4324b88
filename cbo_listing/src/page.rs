//! HTML rendering for the listing page.

use crate::CboDto;
use std::fmt::Write;

pub fn render_page(rows: &[CboDto]) -> String {
    let mut out = String::with_capacity(512 + rows.len() * 128);
    out.push_str(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>CBOs</title></head>\n<body>\n\
         <h1>CBOs</h1>\n<table>\n<thead><tr><th>Id</th><th>Code</th><th>Name</th><th>Type</th></tr></thead>\n<tbody>\n",
    );
    if rows.is_empty() {
        out.push_str("<tr><td colspan=\"4\">No records</td></tr>\n");
    }
    for row in rows {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            row.id,
            escape(row.code.as_deref().unwrap_or("")),
            escape(row.name.as_deref().unwrap_or("")),
            escape(row.kind.as_deref().unwrap_or("")),
        );
    }
    out.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
