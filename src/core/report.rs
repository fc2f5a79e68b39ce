use crate::core::{BookRow, Result};
use crate::utils::error::LibraryError;

const HEADERS: [&str; 3] = ["Book Name", "Author", "Status"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

pub fn render(rows: &[BookRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Csv => render_csv(rows),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

/// 純文字表格：欄寬取標題與內容的最大值，欄與欄之間兩個空白
pub fn render_table(rows: &[BookRow]) -> String {
    let cells: Vec<[String; 3]> = rows
        .iter()
        .map(|r| [r.name.clone(), r.author.clone(), r.assigned.to_string()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(format_line(HEADERS.iter().copied(), &widths));
    lines.push(format_line(widths.iter().map(|w| "-".repeat(*w)), &widths));
    for row in &cells {
        lines.push(format_line(row.iter().map(String::as_str), &widths));
    }

    lines.join("\n")
}

fn format_line<I, S>(cells: I, widths: &[usize; 3]) -> String
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    cells
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn render_csv(rows: &[BookRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        writer.write_record(HEADERS)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| LibraryError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| LibraryError::InvalidInput {
        field: "csv".to_string(),
        reason: e.to_string(),
    })
}
