use std::io::Write;

use serde_json::json;

use crate::error::Result;
use crate::export::format::OutputFormat;
use crate::graph::{ComponentHistogram, Diameter};

/// Write the component size histogram.
///
/// Human output is one `<size>\t<count>` line per size, ascending.
pub fn write_histogram<W: Write>(
    histogram: &ComponentHistogram,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for (size, count) in histogram.iter() {
                writeln!(out, "{}\t{}", size, count)?;
            }
        }
        OutputFormat::Json => {
            let sizes: Vec<_> = histogram
                .iter()
                .map(|(size, count)| json!({ "size": size, "count": count }))
                .collect();
            let value = json!({
                "components": histogram.component_count(),
                "nodes": histogram.node_count(),
                "sizes": sizes,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
    }
    Ok(())
}

/// Write the diameter report.
///
/// Human output is `<word length>:\t<depth>\t['a - b', ...]`, with the length
/// left empty when none was requested.
pub fn write_diameter<W: Write>(
    diameter: &Diameter,
    word_length: Option<usize>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            let length = word_length.map(|l| l.to_string()).unwrap_or_default();
            writeln!(
                out,
                "{}:\t{}\t{}",
                length,
                diameter.depth,
                format_routes(&diameter.routes)
            )?;
        }
        OutputFormat::Json => {
            let value = json!({
                "word_length": word_length,
                "diameter": diameter.depth,
                "routes": diameter.routes,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
    }
    Ok(())
}

/// Render routes as a quoted list, e.g. `['bid - cat', 'elk - elk']`.
///
/// A route containing `'` but no `"` is double-quoted instead of escaped.
fn format_routes(routes: &[String]) -> String {
    let quoted: Vec<String> = routes.iter().map(|route| quote_route(route)).collect();
    format!("[{}]", quoted.join(", "))
}

fn quote_route(route: &str) -> String {
    let escaped = route.replace('\\', "\\\\");
    if route.contains('\'') && !route.contains('"') {
        format!("\"{}\"", escaped)
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}
