//! Read a generated report back into plain text.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::archive::OoxmlArchive;
use crate::error::Result;

/// Visible text of a report document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportText {
    /// First non-empty paragraph before the table
    pub title: Option<String>,
    /// Cell texts of the first table, row by row
    pub rows: Vec<Vec<String>>,
    /// Whether each cell declares borders, row by row
    pub bordered: Vec<Vec<bool>>,
}

impl ReportText {
    /// Read the report held in a DOCX package
    pub fn from_archive(archive: &OoxmlArchive) -> Result<Self> {
        let xml = String::from_utf8_lossy(archive.document_xml()?).into_owned();
        Self::from_document_xml(&xml)
    }

    /// Read the report from `word/document.xml` content
    pub fn from_document_xml(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        let mut report = ReportText::default();

        let mut table_depth = 0usize;
        let mut tables_seen = 0usize;
        let mut in_text = false;
        let mut paragraph = String::new();
        let mut row: Option<(Vec<String>, Vec<bool>)> = None;
        let mut cell: Option<(String, bool)> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"w:tbl" => {
                        table_depth += 1;
                        tables_seen += 1;
                    }
                    b"w:tr" if table_depth == 1 && tables_seen == 1 => {
                        row = Some((Vec::new(), Vec::new()));
                    }
                    b"w:tc" if row.is_some() => cell = Some((String::new(), false)),
                    b"w:tcBorders" => {
                        if let Some((_, ref mut bordered)) = cell {
                            *bordered = true;
                        }
                    }
                    b"w:p" if table_depth == 0 => paragraph.clear(),
                    b"w:t" => in_text = true,
                    _ => {}
                },
                Event::Text(t) if in_text => {
                    let text = t.unescape()?;
                    match cell {
                        Some((ref mut content, _)) => content.push_str(&text),
                        None if table_depth == 0 => paragraph.push_str(&text),
                        None => {}
                    }
                }
                Event::End(e) => match e.name().as_ref() {
                    b"w:t" => in_text = false,
                    b"w:tc" => {
                        if let (Some((text, bordered)), Some((texts, borders))) =
                            (cell.take(), row.as_mut())
                        {
                            texts.push(text);
                            borders.push(bordered);
                        }
                    }
                    b"w:tr" => {
                        if let Some((texts, borders)) = row.take() {
                            report.rows.push(texts);
                            report.bordered.push(borders);
                        }
                    }
                    b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                    b"w:p" if table_depth == 0 => {
                        if report.title.is_none() && tables_seen == 0 && !paragraph.trim().is_empty()
                        {
                            report.title = Some(std::mem::take(&mut paragraph));
                        }
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(report)
    }
}
