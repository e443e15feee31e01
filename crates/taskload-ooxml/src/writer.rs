//! DOCX Writer
//!
//! Renders a [`ReportLayout`] into a complete DOCX package. Every cell is
//! emitted once with the formatting its [`StyledCell`] already carries.
//!
//! # Example
//!
//! ```ignore
//! use taskload_ooxml::DocxWriter;
//!
//! let bytes = DocxWriter::generate(&layout)?;
//! std::fs::write("Report.docx", bytes)?;
//! ```

use taskload_core::{Alignment, ReportLayout, RowKind, StyledCell, StyledTable, Title};

use crate::archive::OoxmlArchive;
use crate::error::Result;
use crate::package::{
    core_properties_xml, styles_xml, CONTENT_TYPES_PATH, CONTENT_TYPES_XML, CORE_PROPS_PATH,
    DOCUMENT_PATH, DOCUMENT_RELS_PATH, DOCUMENT_RELS_XML, PACKAGE_RELS_PATH, PACKAGE_RELS_XML,
    STYLES_PATH,
};
use crate::xml::escape;

/// Blank paragraphs between the title and the table
const TITLE_SPACING_PARAGRAPHS: usize = 1;

/// DOCX Writer for report layouts
pub struct DocxWriter {
    /// XML output buffer
    output: String,
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxWriter {
    /// Create a new DocxWriter
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    /// Render `layout` into DOCX bytes
    pub fn generate(layout: &ReportLayout) -> Result<Vec<u8>> {
        Self::new().build_archive(layout).to_bytes()
    }

    /// Render `layout` into an in-memory package
    pub fn build_archive(mut self, layout: &ReportLayout) -> OoxmlArchive {
        let mut archive = OoxmlArchive::new();
        archive.set_string(CONTENT_TYPES_PATH, CONTENT_TYPES_XML);
        archive.set_string(PACKAGE_RELS_PATH, PACKAGE_RELS_XML);
        archive.set_string(DOCUMENT_RELS_PATH, DOCUMENT_RELS_XML);
        archive.set_string(
            STYLES_PATH,
            styles_xml(&layout.title.font, layout.table.body_size),
        );
        archive.set_string(CORE_PROPS_PATH, core_properties_xml(&layout.title.text));
        archive.set_string(DOCUMENT_PATH, self.generate_document_xml(layout));
        archive
    }

    /// Generate word/document.xml
    fn generate_document_xml(&mut self, layout: &ReportLayout) -> String {
        self.output.clear();
        self.output
            .push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
        self.output.push_str(
            "<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\" \
             xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\">\n",
        );
        self.output.push_str("<w:body>\n");

        self.generate_title(&layout.title);
        for _ in 0..TITLE_SPACING_PARAGRAPHS {
            self.output.push_str("<w:p/>\n");
        }
        self.generate_table(&layout.table);

        // A table may not be the last body element
        self.output.push_str("<w:p/>\n");
        self.generate_section_properties();

        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>\n");
        std::mem::take(&mut self.output)
    }

    fn generate_title(&mut self, title: &Title) {
        self.output.push_str("<w:p>\n");
        self.output.push_str("<w:pPr>\n");
        self.output.push_str(&format!(
            "<w:jc w:val=\"{}\"/>\n",
            alignment_value(title.align)
        ));
        self.output.push_str("</w:pPr>\n");
        self.generate_run(&title.text, &title.font, title.size, false, None);
        self.output.push_str("</w:p>\n");
    }

    /// Generate XML for the report table
    fn generate_table(&mut self, table: &StyledTable) {
        self.output.push_str("<w:tbl>\n");

        self.output.push_str("<w:tblPr>\n");
        self.output.push_str("<w:tblW w:w=\"0\" w:type=\"auto\"/>\n");
        self.output.push_str("<w:tblLayout w:type=\"fixed\"/>\n");
        self.output.push_str("</w:tblPr>\n");

        self.output.push_str("<w:tblGrid>\n");
        for width in &table.column_widths {
            self.output
                .push_str(&format!("<w:gridCol w:w=\"{}\"/>\n", width));
        }
        self.output.push_str("</w:tblGrid>\n");

        for row in &table.rows {
            self.output.push_str("<w:tr>\n");

            // Repeat the header row on every page
            if row.kind == RowKind::Header {
                self.output.push_str("<w:trPr>\n");
                self.output.push_str("<w:tblHeader/>\n");
                self.output.push_str("</w:trPr>\n");
            }

            for (index, cell) in row.cells.iter().enumerate() {
                let width = table.column_widths.get(index).copied();
                self.generate_cell(cell, width);
            }

            self.output.push_str("</w:tr>\n");
        }

        self.output.push_str("</w:tbl>\n");
    }

    fn generate_cell(&mut self, cell: &StyledCell, width: Option<u32>) {
        self.output.push_str("<w:tc>\n");

        self.output.push_str("<w:tcPr>\n");
        if let Some(width) = width {
            self.output
                .push_str(&format!("<w:tcW w:w=\"{}\" w:type=\"dxa\"/>\n", width));
        }
        if cell.borders {
            self.output.push_str("<w:tcBorders>\n");
            for side in ["top", "left", "bottom", "right"] {
                self.output.push_str(&format!(
                    "<w:{} w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\n",
                    side
                ));
            }
            self.output.push_str("</w:tcBorders>\n");
        }
        if let Some(ref fill) = cell.shading {
            self.output.push_str(&format!(
                "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>\n",
                escape(fill)
            ));
        }
        self.output.push_str("</w:tcPr>\n");

        // Every cell needs exactly one paragraph
        self.output.push_str("<w:p>\n");
        if let Some(align) = cell.align {
            self.output.push_str("<w:pPr>\n");
            self.output
                .push_str(&format!("<w:jc w:val=\"{}\"/>\n", alignment_value(align)));
            self.output.push_str("</w:pPr>\n");
        }
        if !cell.text.is_empty() {
            self.generate_run(
                &cell.text,
                &cell.font,
                cell.size,
                cell.bold,
                cell.color.as_deref(),
            );
        }
        self.output.push_str("</w:p>\n");

        self.output.push_str("</w:tc>\n");
    }

    fn generate_run(&mut self, text: &str, font: &str, size: u32, bold: bool, color: Option<&str>) {
        let font = escape(font);
        let half_points = size.saturating_mul(2);

        self.output.push_str("<w:r>\n");
        self.output.push_str("<w:rPr>\n");
        self.output.push_str(&format!(
            "<w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\" w:cs=\"{0}\"/>\n",
            font
        ));
        if bold {
            self.output.push_str("<w:b/>\n");
        }
        if let Some(color) = color {
            self.output
                .push_str(&format!("<w:color w:val=\"{}\"/>\n", escape(color)));
        }
        self.output
            .push_str(&format!("<w:sz w:val=\"{}\"/>\n", half_points));
        self.output
            .push_str(&format!("<w:szCs w:val=\"{}\"/>\n", half_points));
        self.output.push_str("</w:rPr>\n");
        self.output.push_str(&format!(
            "<w:t xml:space=\"preserve\">{}</w:t>\n",
            escape(text)
        ));
        self.output.push_str("</w:r>\n");
    }

    /// A4 portrait page with standard margins
    fn generate_section_properties(&mut self) {
        self.output.push_str("<w:sectPr>\n");
        self.output
            .push_str("<w:pgSz w:w=\"11906\" w:h=\"16838\"/>\n");
        self.output.push_str(
            "<w:pgMar w:top=\"1134\" w:right=\"850\" w:bottom=\"1134\" w:left=\"1701\" \
             w:header=\"708\" w:footer=\"708\" w:gutter=\"0\"/>\n",
        );
        self.output.push_str("</w:sectPr>\n");
    }
}

fn alignment_value(align: Alignment) -> &'static str {
    match align {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
    }
}
