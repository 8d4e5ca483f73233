//! Excel export functionality.

use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::timetable::{ClassItem, ClassSelection};
use crate::models::todo::TodoItem;

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin)
}

/// Export confirmed timetable classes to an Excel file.
/// Only classes still selected in `selection` are written.
pub fn export_timetable_to_excel(classes: &[ClassItem], selection: &ClassSelection, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Timetable")?;

    let header_format = header_format();

    let headers = ["Day", "Time", "Subject", "Room", "Elective"];
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_column_width(0, 12)?; // Day
    worksheet.set_column_width(1, 22)?; // Time
    worksheet.set_column_width(2, 45)?; // Subject
    worksheet.set_column_width(3, 12)?; // Room
    worksheet.set_column_width(4, 10)?; // Elective

    let rows: Vec<&ClassItem> = classes.iter().filter(|c| selection.is_selected(&c.id)).collect();

    for (idx, class) in rows.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, &class.day)?;
        worksheet.write_string(row, 1, &class.time)?;
        worksheet.write_string(row, 2, &class.subject)?;
        worksheet.write_string(row, 3, &class.room)?;
        worksheet.write_string(row, 4, if class.is_elective { "Yes" } else { "No" })?;
    }

    if !rows.is_empty() {
        worksheet.autofilter(0, 0, rows.len() as u32, 4)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Export tasks to an Excel file.
pub fn export_tasks_to_excel(tasks: &[&TodoItem], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Tasks")?;

    let header_format = header_format();

    let headers = ["Title", "Status", "Due", "Category", "Priority"];
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_column_width(0, 40)?; // Title
    worksheet.set_column_width(1, 12)?; // Status
    worksheet.set_column_width(2, 14)?; // Due
    worksheet.set_column_width(3, 14)?; // Category
    worksheet.set_column_width(4, 10)?; // Priority

    for (idx, task) in tasks.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, &task.title)?;
        worksheet.write_string(row, 1, if task.completed { "Done" } else { "Open" })?;
        worksheet.write_string(row, 2, &task.due_date)?;
        worksheet.write_string(row, 3, format!("{:?}", task.category))?;
        worksheet.write_string(row, 4, format!("{:?}", task.priority))?;
    }

    if !tasks.is_empty() {
        worksheet.autofilter(0, 0, tasks.len() as u32, 4)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Generate a timestamped export filename.
pub fn generate_export_filename(prefix: &str) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("{prefix}_{timestamp}.xlsx"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename_shape() {
        let name = generate_export_filename("timetable");
        let name = name.to_string_lossy();
        assert!(name.starts_with("timetable_"));
        assert!(name.ends_with(".xlsx"));
    }
}
