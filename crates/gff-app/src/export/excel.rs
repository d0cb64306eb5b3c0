//! Excel export functionality

use std::path::Path;

use gff_domain::model::CostReport;
use gff_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

fn xlsx(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export a cost report to an Excel file
pub fn export_to_excel(report: &CostReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, report)?;

    let ingredients_sheet = workbook.add_worksheet();
    write_ingredients_sheet(ingredients_sheet, report)?;

    let packaging_sheet = workbook.add_worksheet();
    write_packaging_sheet(packaging_sheet, report)?;

    workbook.save(output_path).map_err(xlsx)?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &CostReport) -> Result<()> {
    sheet.set_name("Summary").map_err(xlsx)?;

    let header_format = Format::new().set_bold();
    let money = Format::new().set_num_format("#,##0.00");

    sheet
        .write_string_with_format(0, 0, "GFF Costing Report", &header_format)
        .map_err(xlsx)?;
    sheet.write_string(2, 0, "Batch:").map_err(xlsx)?;
    sheet.write_string(2, 1, &report.batch_no).map_err(xlsx)?;
    sheet.write_string(3, 0, "Batch Size (kg):").map_err(xlsx)?;
    sheet.write_number(3, 1, report.batch_size_kg).map_err(xlsx)?;

    let phases = report.phase_totals();
    let rows = [
        ("Ingredients Total", report.ingredient_total()),
        ("Oil Phase", phases.oil),
        ("Water Phase", phases.water),
        ("Ingredient Cost / Kg", report.ingredient_cost_per_kg()),
        ("Packaging Cost per Batch", report.batch.packaging_cost),
        ("Overhead per Batch", report.batch.overhead_cost),
        ("Grand Total", report.grand_total()),
        ("Final Cost / Kg", report.final_cost_per_kg()),
    ];
    let mut row = 5;
    for (label, value) in rows {
        sheet.write_string(row, 0, label).map_err(xlsx)?;
        sheet.write_number_with_format(row, 1, value, &money).map_err(xlsx)?;
        row += 1;
    }

    if !report.warnings.is_empty() {
        row += 1;
        sheet
            .write_string_with_format(row, 0, "Warnings", &header_format)
            .map_err(xlsx)?;
        for warning in &report.warnings {
            row += 1;
            sheet.write_string(row, 0, warning.to_string()).map_err(xlsx)?;
        }
    }

    sheet.set_column_width(0, 28).map_err(xlsx)?;
    sheet.set_column_width(1, 16).map_err(xlsx)?;
    Ok(())
}

fn write_ingredients_sheet(sheet: &mut Worksheet, report: &CostReport) -> Result<()> {
    sheet.set_name("Ingredients").map_err(xlsx)?;

    let header_format = Format::new().set_bold();
    let money = Format::new().set_num_format("#,##0.00");

    let headers = [
        "Item", "Phase", "%", "Kg", "Rate", "GST %", "Basic", "GST", "Total Amount",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx)?;
    }

    for (idx, line) in report.ingredients.lines.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write_string(row, 0, &line.name).map_err(xlsx)?;
        sheet.write_string(row, 1, line.phase.label()).map_err(xlsx)?;
        sheet.write_number(row, 2, line.percent).map_err(xlsx)?;
        sheet.write_number(row, 3, line.weight_kg).map_err(xlsx)?;
        sheet.write_number(row, 4, line.rate).map_err(xlsx)?;
        sheet.write_number(row, 5, line.tax_rate).map_err(xlsx)?;
        sheet.write_number_with_format(row, 6, line.basic, &money).map_err(xlsx)?;
        sheet.write_number_with_format(row, 7, line.tax, &money).map_err(xlsx)?;
        sheet.write_number_with_format(row, 8, line.total, &money).map_err(xlsx)?;
    }

    let total_row = (report.ingredients.lines.len() + 1) as u32;
    sheet
        .write_string_with_format(total_row, 0, "Total", &header_format)
        .map_err(xlsx)?;
    sheet
        .write_number_with_format(total_row, 8, report.ingredient_total(), &money)
        .map_err(xlsx)?;
    Ok(())
}

fn write_packaging_sheet(sheet: &mut Worksheet, report: &CostReport) -> Result<()> {
    sheet.set_name("Packaging").map_err(xlsx)?;

    let header_format = Format::new().set_bold();
    let money = Format::new().set_num_format("#,##0.00");

    let headers = [
        "Type", "Rules", "Product", "Packaging", "Overhead", "Box Cost", "Per Pc",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx)?;
    }

    for (idx, scenario) in report.scenarios.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write_string(row, 0, scenario.profile.title()).map_err(xlsx)?;
        sheet.write_string(row, 1, scenario.profile.rules()).map_err(xlsx)?;
        let values = [
            scenario.product_cost,
            scenario.packaging_cost,
            scenario.overhead_cost,
            scenario.total_cost,
            scenario.cost_per_unit,
        ];
        for (offset, value) in values.into_iter().enumerate() {
            sheet
                .write_number_with_format(row, 2 + offset as u16, value, &money)
                .map_err(xlsx)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::default_recipe;
    use gff_domain::service::calculate_recipe;

    #[test]
    fn test_export_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        let report = calculate_recipe(&default_recipe()).unwrap();
        export_to_excel(&report, &path).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
