use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ledger::doc::{LedgerDoc, Row};
use crate::ledger::schema;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::io;
use std::path::Path;

/// Render a day's ledger to XLSX: one worksheet per partition, with the
/// partition's block layout and the status palette reproduced as cell
/// fills so spreadsheet readers see the same state encoding as the
/// persisted document.
pub(crate) fn export_xlsx(doc: &LedgerDoc, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    if doc.partitions.is_empty() {
        let worksheet = workbook.add_worksheet();
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_io_app_error)?;
        workbook.save(path_str(path)?).map_err(to_io_app_error)?;
        notify_export_success("XLSX (empty ledger)", path);
        return Ok(());
    }

    for partition in &doc.partitions {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&partition.name)
            .map_err(to_io_app_error)?;
        write_partition(worksheet, partition)?;
    }

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_partition(
    worksheet: &mut Worksheet,
    partition: &crate::ledger::doc::Partition,
) -> AppResult<()> {
    let title_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(schema::TITLE_FONT))
        .set_background_color(Color::RGB(schema::TITLE_FILL))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Center);

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(schema::HEADER_FONT))
        .set_background_color(Color::RGB(schema::HEADER_FILL))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let body_format = Format::new().set_border(FormatBorder::Thin);
    let seq_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    let last_col = (schema::COLUMNS.len() - 1) as u16;

    for (row_index, row) in partition.rows.iter().enumerate() {
        let r = row_index as u32;
        match row {
            Row::Title { text, .. } => {
                worksheet
                    .merge_range(r, 0, r, last_col, text, &title_format)
                    .map_err(to_io_app_error)?;
            }
            Row::Header { labels } => {
                for (col, label) in labels.iter().enumerate() {
                    worksheet
                        .write_with_format(r, col as u16, label, &header_format)
                        .map_err(to_io_app_error)?;
                }
            }
            Row::Member(m) => {
                worksheet
                    .write_with_format(r, 0, m.seq, &seq_format)
                    .map_err(to_io_app_error)?;
                worksheet
                    .write_with_format(r, 1, &m.name, &body_format)
                    .map_err(to_io_app_error)?;
                worksheet
                    .write_with_format(r, 2, &m.shift, &body_format)
                    .map_err(to_io_app_error)?;
                worksheet
                    .write_with_format(r, 3, &m.days, &body_format)
                    .map_err(to_io_app_error)?;

                let attendance_format = Format::new()
                    .set_font_color(Color::RGB(m.attendance.font))
                    .set_background_color(Color::RGB(m.attendance.fill))
                    .set_pattern(FormatPattern::Solid)
                    .set_border(FormatBorder::Thin)
                    .set_align(FormatAlign::Center);
                worksheet
                    .write_with_format(r, 4, &m.attendance.text, &attendance_format)
                    .map_err(to_io_app_error)?;
            }
        }
    }

    // Widths are fixed by column role, not content-driven.
    for (c, column) in schema::COLUMNS.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, column.width as f64)
            .map_err(to_io_app_error)?;
    }

    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
