//! Serialization and output - LocaleTable → JSON, LocaleTree → XML

use crate::error::LexpResult;
use crate::reader;
use crate::transform::{LocaleTable, LocaleTree};
use clap::ValueEnum;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Xml,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Xml => "xml",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Json => "JSON",
            OutputFormat::Xml => "XML",
        }
    }
}

/// Run the whole pipeline: read every requested sheet, pivot, serialize,
/// write the output file next to the input. Returns the output path.
///
/// All sheet reads complete before the output file is touched, so a read
/// failure never leaves a partial file behind.
pub fn export<P: AsRef<Path>>(
    input: P,
    format: OutputFormat,
    indices: &[usize],
) -> LexpResult<PathBuf> {
    let input = input.as_ref();
    let sheets = reader::load_sheets(input, indices)?;

    let rendered = match format {
        OutputFormat::Json => render_json(&LocaleTable::from_sheets(&sheets))?,
        OutputFormat::Xml => render_xml(&LocaleTree::from_sheets(&sheets))?,
    };

    let output = output_path(input, format);
    fs::write(&output, rendered)?;
    Ok(output)
}

/// Output path: the input path with its extension swapped for the format's.
pub fn output_path(input: &Path, format: OutputFormat) -> PathBuf {
    input.with_extension(format.extension())
}

/// Render the table as a UTF-8 JSON document: 4-space indentation, keys in
/// encounter order, non-ASCII text emitted literally, missing values as null.
pub fn render_json(table: &LocaleTable) -> LexpResult<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    table.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buf)?;
    json.push('\n');
    Ok(json)
}

/// Render the tree as a single-line UTF-8 XML document under a `<Root>`
/// element. No declaration, no indentation. Text content is escaped;
/// empty text produces a self-closing element.
pub fn render_xml(tree: &LocaleTree) -> LexpResult<String> {
    let mut writer = Writer::new(Vec::new());

    writer.write_event(Event::Start(BytesStart::new("Root")))?;

    for entry in &tree.entries {
        writer.write_event(Event::Start(BytesStart::new(entry.tag.as_str())))?;

        for node in &entry.nodes {
            if node.text.is_empty() {
                writer.write_event(Event::Empty(BytesStart::new(node.tag.as_str())))?;
            } else {
                writer.write_event(Event::Start(BytesStart::new(node.tag.as_str())))?;
                writer.write_event(Event::Text(BytesText::new(&node.text)))?;
                writer.write_event(Event::End(BytesEnd::new(node.tag.as_str())))?;
            }
        }

        writer.write_event(Event::End(BytesEnd::new(entry.tag.as_str())))?;
    }

    writer.write_event(Event::End(BytesEnd::new("Root")))?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}
