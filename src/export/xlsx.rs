// src/export/xlsx.rs

use crate::core::summary::RangeTotals;
use crate::errors::{AppError, AppResult};
use crate::export::excel_date::excel_serial;
use crate::export::model::get_headers;
use crate::export::notify_export_success;
use crate::models::day_summary::DailySummary;
use crate::models::driver::DriverRoster;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const MONEY_FORMAT: &str = "#,##0";
const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Export XLSX: banded rows, Excel dates, numeric amounts, a totals row and
/// auto-sized columns.
pub(crate) fn export_xlsx(
    rows: &[DailySummary],
    roster: &DriverRoster,
    totals: &RangeTotals,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Resumen").map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers(roster);

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(h.as_str())).collect();
    // Excel renders dates and grouped amounts wider than their header text
    for w in col_widths.iter_mut().take(headers.len() - 1) {
        *w = (*w).max(12);
    }

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, s) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let bg = if row_index % 2 == 0 { band1 } else { band2 };

        let mut amounts: Vec<f64> = s.produced.iter().map(|(_, v)| *v).collect();
        amounts.extend([s.expense, s.total_produced, s.net]);

        write_row(worksheet, row, excel_serial(s.date), &amounts, &s.note, bg)?;

        let note_col = headers.len() - 1;
        col_widths[note_col] = col_widths[note_col].max(UnicodeWidthStr::width(s.note.as_str()));
    }

    // ---------------------------
    // Totals
    // ---------------------------
    let total_row = (rows.len() + 1) as u32;
    let mut amounts: Vec<f64> = totals.per_driver.iter().map(|(_, v)| *v).collect();
    amounts.extend([totals.expense, totals.total_produced, totals.net]);

    let label_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin);
    worksheet
        .write_with_format(total_row, 0, "TOTAL", &label_format)
        .map_err(to_export_error)?;
    write_amounts(worksheet, total_row, &amounts, Color::RGB(0xD9D9D9), true)?;

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_row(
    worksheet: &mut Worksheet,
    row: u32,
    date_serial: f64,
    amounts: &[f64],
    note: &str,
    bg: Color,
) -> AppResult<()> {
    let date_fmt = cell_format(bg, false).set_num_format(DATE_FORMAT);
    worksheet
        .write_with_format(row, 0, date_serial, &date_fmt)
        .map_err(to_export_error)?;

    write_amounts(worksheet, row, amounts, bg, false)?;

    let note_col = (amounts.len() + 1) as u16;
    worksheet
        .write_with_format(row, note_col, note, &cell_format(bg, false))
        .map_err(to_export_error)?;

    Ok(())
}

/// Amount cells start at column 1 (right after the date).
fn write_amounts(
    worksheet: &mut Worksheet,
    row: u32,
    amounts: &[f64],
    bg: Color,
    bold: bool,
) -> AppResult<()> {
    let fmt = cell_format(bg, bold)
        .set_num_format(MONEY_FORMAT)
        .set_align(FormatAlign::Right);

    for (i, v) in amounts.iter().enumerate() {
        worksheet
            .write_with_format(row, (i + 1) as u16, *v, &fmt)
            .map_err(to_export_error)?;
    }

    Ok(())
}

fn cell_format(bg: Color, bold: bool) -> Format {
    let f = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    if bold { f.set_bold() } else { f }
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
