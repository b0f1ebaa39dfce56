//! Markup (XML) export.
//!
//! One element per vehicle under a fixed root, one child per field. No XML
//! declaration is written, and an element is never collapsed into a
//! self-closing tag: an empty export renders as `<convoy></convoy>`.

use std::io::Write;
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

use convoy_model::IntegerTable;

use crate::common::{EXPORT_ROOT, EXPORT_ROW, create_export_file, ensure_element_names};
use crate::error::Result;

/// Options for the markup export.
#[derive(Debug, Clone)]
pub struct MarkupOptions {
    pub root: String,
    pub row: String,
    pub indent: usize,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            root: EXPORT_ROOT.to_string(),
            row: EXPORT_ROW.to_string(),
            indent: 2,
        }
    }
}

/// Write the markup export to `path`. Returns the number of vehicles written.
pub fn write_markup_export(
    path: &Path,
    table: &IntegerTable,
    options: &MarkupOptions,
) -> Result<usize> {
    let mut writer = render_markup(create_export_file(path)?, table, options)?;
    writer.flush()?;
    debug!(path = %path.display(), rows = table.row_count(), "markup export written");
    Ok(table.row_count())
}

/// Render the markup export into any writer and hand the writer back.
pub fn render_markup<W: Write>(
    inner: W,
    table: &IntegerTable,
    options: &MarkupOptions,
) -> Result<W> {
    ensure_element_names(
        [options.root.as_str(), options.row.as_str()]
            .into_iter()
            .chain(table.headers.iter().map(String::as_str)),
    )?;
    let mut xml = Writer::new_with_indent(inner, b' ', options.indent);

    xml.write_event(Event::Start(BytesStart::new(options.root.as_str())))?;
    if table.is_empty() {
        xml.write_event(Event::Text(BytesText::new("")))?;
    }
    for row in &table.rows {
        xml.write_event(Event::Start(BytesStart::new(options.row.as_str())))?;
        if table.headers.is_empty() {
            xml.write_event(Event::Text(BytesText::new("")))?;
        }
        for (field, value) in table.headers.iter().zip(row) {
            write_field(&mut xml, field, &value.to_string())?;
        }
        xml.write_event(Event::End(BytesEnd::new(options.row.as_str())))?;
    }
    xml.write_event(Event::End(BytesEnd::new(options.root.as_str())))?;
    Ok(xml.into_inner())
}

/// Open/close pair with text in between. An empty value still gets both tags.
fn write_field<W: Write>(xml: &mut Writer<W>, name: &str, value: &str) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(value)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
