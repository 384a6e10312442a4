//! XLSX export: the ranked results as a worksheet plus an embedded column
//! chart of `sum_sd` by rank.

use blot_opt::{Ranking, ranking_to_rows};
use rust_xlsxwriter::{Chart, ChartType, Format, Workbook, XlsxError};
use std::path::Path;

const SHEET_NAME: &str = "Top Results";

pub fn write_xlsx_report(path: &Path, ranking: &Ranking, top_n: usize) -> Result<(), XlsxError> {
    let rows = ranking_to_rows(ranking, top_n);

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in ["Rank", "Sum_SD", "SDs", "Means", "Columns"]
        .iter()
        .enumerate()
    {
        worksheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for row in &rows {
        let r = row.rank as u32;
        worksheet.write_number(r, 0, row.rank as f64)?;
        worksheet.write_number(r, 1, row.sum_sd)?;
        worksheet.write_string(r, 2, &join_values(&row.sds))?;
        worksheet.write_string(r, 3, &join_values(&row.means))?;
        worksheet.write_string(r, 4, &render_columns(&row.columns))?;
    }

    worksheet.set_column_width(2, 24)?;
    worksheet.set_column_width(3, 24)?;
    worksheet.set_column_width(4, 40)?;

    if !rows.is_empty() {
        let last_row = rows.len() as u32;
        let mut chart = Chart::new(ChartType::Column);
        chart
            .add_series()
            .set_values((SHEET_NAME, 1, 1, last_row, 1))
            .set_categories((SHEET_NAME, 1, 0, last_row, 0))
            .set_name("Sum_SD");
        chart.title().set_name("Sum_SD by rank");
        chart.x_axis().set_name("Rank");
        chart.y_axis().set_name("Sum_SD");
        worksheet.insert_chart(1, 7, &chart)?;
    }

    workbook.save(path)?;
    Ok(())
}

fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{v:.3}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the grouped columns compactly: values within a column are
/// comma-separated, columns are separated by semicolons.
fn render_columns(columns: &[Vec<f64>]) -> String {
    columns
        .iter()
        .map(|col| format!("({})", join_values(col)))
        .collect::<Vec<_>>()
        .join("; ")
}
