//! PDF rendering adapter for report documents.
//!
//! Emits a small self-contained PDF (Helvetica, WinAnsi encoding, A4) from
//! the structured document description. No pack dependency covers PDF
//! generation, so the primitives are written out directly; the renderer
//! port keeps the rest of the system unaware of that.

use core::fmt::Write as _;

use litecatalog_report::{ReportBody, ReportDocument, ReportRenderer, ReportTable};

const PAGE_WIDTH: f64 = 595.0;
const PAGE_HEIGHT: f64 = 842.0;
const MARGIN_LEFT: f64 = 50.0;
const TOP_Y: f64 = 792.0;
const BOTTOM_Y: f64 = 50.0;

/// Table column x positions (Código, Nombre, Características, Precios).
const COLUMNS: [f64; 4] = [50.0, 130.0, 290.0, 450.0];

/// Stateless PDF renderer.
#[derive(Debug, Default, Clone)]
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for PdfRenderer {
    fn render(&self, document: &ReportDocument) -> anyhow::Result<Vec<u8>> {
        let pages = compose(document);
        Ok(assemble(&pages))
    }
}

/// Accumulates content streams, breaking pages when the baseline runs out.
struct Composer {
    pages: Vec<String>,
    current: String,
    y: f64,
}

impl Composer {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: String::new(),
            y: TOP_Y,
        }
    }

    fn ensure_room(&mut self, needed: f64) {
        if self.y - needed < BOTTOM_Y {
            self.break_page();
        }
    }

    fn break_page(&mut self) {
        self.pages.push(core::mem::take(&mut self.current));
        self.y = TOP_Y;
    }

    fn text(&mut self, x: f64, y: f64, font: &str, size: f64, s: &str) {
        let _ = writeln!(
            self.current,
            "BT /{font} {size} Tf {x:.1} {y:.1} Td ({text}) Tj ET",
            text = encode_text(s)
        );
    }

    fn line(&mut self, font: &str, size: f64, s: &str, advance: f64) {
        self.ensure_room(advance);
        self.y -= advance;
        self.text(MARGIN_LEFT, self.y, font, size, s);
    }

    /// One table row; the price cell may hold several lines.
    fn table_row(&mut self, cells: &[String], font: &str) {
        let price_lines: Vec<&str> = cells
            .get(3)
            .map(|c| c.split('\n').collect())
            .unwrap_or_default();
        let lines = price_lines.len().max(1);
        let height = 14.0 * lines as f64 + 4.0;
        self.ensure_room(height);

        let baseline = self.y - 14.0;
        for (i, cell) in cells.iter().take(3).enumerate() {
            self.text(COLUMNS[i], baseline, font, 10.0, cell);
        }
        for (j, line) in price_lines.iter().enumerate() {
            self.text(COLUMNS[3], baseline - 14.0 * j as f64, font, 10.0, line);
        }
        self.y -= height;
    }

    fn finish(mut self) -> Vec<String> {
        self.pages.push(self.current);
        self.pages
    }
}

fn compose(document: &ReportDocument) -> Vec<String> {
    let mut c = Composer::new();

    c.line("F2", 18.0, &document.title, 30.0);
    c.y -= 8.0;

    for (label, value) in &document.fields {
        c.ensure_room(16.0);
        c.y -= 16.0;
        c.text(MARGIN_LEFT, c.y, "F2", 11.0, &format!("{label}:"));
        c.text(170.0, c.y, "F1", 11.0, value);
    }
    c.y -= 12.0;

    match &document.body {
        ReportBody::Notice(notice) => {
            c.line("F1", 11.0, notice, 16.0);
        }
        ReportBody::Table { table, summary } => {
            compose_table(&mut c, table);
            c.line("F2", 11.0, summary, 22.0);
        }
    }

    c.finish()
}

fn compose_table(c: &mut Composer, table: &ReportTable) {
    c.table_row(&table.headers, "F2");
    for row in &table.rows {
        c.table_row(row, "F1");
    }
}

/// Escape PDF string delimiters and emit non-ASCII WinAnsi bytes as octal
/// escapes, keeping the content stream pure ASCII.
fn encode_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\\' => out.push_str("\\\\"),
            ' '..='~' => out.push(ch),
            ch if (ch as u32) < 256 => {
                let _ = write!(out, "\\{:03o}", ch as u32);
            }
            _ => out.push('?'),
        }
    }
    out
}

/// Serialize pages into a complete PDF file.
///
/// Object layout: 1 catalog, 2 page tree, 3/4 regular and bold Helvetica,
/// then an alternating (page, contents) pair per page.
fn assemble(pages: &[String]) -> Vec<u8> {
    let kids = (0..pages.len())
        .map(|i| format!("{} 0 R", 5 + 2 * i))
        .collect::<Vec<_>>()
        .join(" ");

    let mut bodies: Vec<String> = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{kids}] /Count {} >>",
            pages.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];

    for (i, content) in pages.iter().enumerate() {
        bodies.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH:.0} {PAGE_HEIGHT:.0}] \
             /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
            6 + 2 * i
        ));
        bodies.push(format!(
            "<< /Length {} >>\nstream\n{content}endstream",
            content.len()
        ));
    }

    let mut out: Vec<u8> = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(bodies.len());
    for (i, body) in bodies.iter().enumerate() {
        offsets.push(out.len());
        out.extend(format!("{} 0 obj\n{body}\nendobj\n", i + 1).into_bytes());
    }

    let xref_offset = out.len();
    out.extend(format!("xref\n0 {}\n", bodies.len() + 1).into_bytes());
    out.extend(b"0000000000 65535 f \n");
    for offset in &offsets {
        out.extend(format!("{offset:010} 00000 n \n").into_bytes());
    }
    out.extend(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            bodies.len() + 1
        )
        .into_bytes(),
    );

    out
}
