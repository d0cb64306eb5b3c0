//! Output formatting module

use gff_domain::model::{CostReport, Recipe};
use gff_domain::service::ParsedReport;
use gff_types::OutputFormat;
use gff_types::Result;

pub fn output_report(output_format: OutputFormat, report: &CostReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("\nCosting Report");
    println!("==============");
    if !report.batch_no.is_empty() {
        println!("Batch:              {}", report.batch_no);
    }
    println!("Batch size:         {} kg", report.batch_size_kg);
    println!("Water (auto):       {:.3}%", report.auto_balanced_percent);

    println!("\n--- Ingredients ---");
    println!(
        "{:<14} {:>6} {:>8} {:>10} {:>8} {:>12} {:>10} {:>12}",
        "Name", "Phase", "%", "Kg", "Rate", "Basic", "Tax", "Total"
    );
    for line in &report.ingredients.lines {
        println!(
            "{:<14} {:>6} {:>8.3} {:>10.2} {:>8.2} {:>12.2} {:>10.2} {:>12.2}",
            line.name, line.phase.label(), line.percent, line.weight_kg, line.rate, line.basic, line.tax, line.total
        );
    }
    println!("-------------------");
    let phases = report.phase_totals();
    println!("Oil phase:          {:.2}", phases.oil);
    println!("Water phase:        {:.2}", phases.water);
    println!("Ingredients total:  {:.2}", report.ingredient_total());
    println!("Cost / kg:          {:.2}", report.ingredient_cost_per_kg());

    println!("\n--- Boxes (misc {:.2} per box) ---", report.misc_cost_per_box);
    for scenario in &report.scenarios {
        println!("{} [{}]", scenario.profile.title(), scenario.profile.rules());
        println!("  Product:          {:.2}", scenario.product_cost);
        println!("  Packaging:        {:.2}", scenario.packaging_cost);
        println!("  Overhead:         {:.2}", scenario.overhead_cost);
        println!("  Box total:        {:.2}", scenario.total_cost);
        println!("  Per piece:        {:.2}", scenario.cost_per_unit);
    }

    println!("\n--- Batch (packed in box {}) ---", report.batch.packing_profile);
    println!("Boxes needed:       {:.2}", report.batch.boxes_needed);
    println!("Packaging:          {:.2}", report.batch.packaging_cost);
    println!("Overhead:           {:.2}", report.batch.overhead_cost);
    println!("Grand total:        {:.2}", report.grand_total());
    println!("Final cost / kg:    {:.2}", report.final_cost_per_kg());

    let grand_total = report.grand_total();
    if grand_total > 0.0 {
        println!("\nCost share:");
        for share in report.cost_breakdown() {
            println!("  {:<10} {:>5.1}%", share.label, share.amount / grand_total * 100.0);
        }
    }

    for warning in &report.warnings {
        println!("\nWARNING: {}", warning);
    }

    Ok(())
}

pub fn output_recipe(output_format: OutputFormat, recipe: &Recipe, source: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(recipe)?);
        return Ok(());
    }

    println!("\nRecipe ({})", source);
    println!("==========");
    println!("Batch:              {}", recipe.batch.batch_no);
    println!("Batch size:         {} kg", recipe.batch.batch_size_kg);
    println!("Overhead:           {}%", recipe.batch.overhead_percent);
    println!("Misc per box:       {:.2}", recipe.batch.misc_cost_per_box());

    println!("\n--- Ingredients ---");
    for ingredient in &recipe.ingredients {
        let percent = if ingredient.auto_balanced {
            "auto".to_string()
        } else {
            format!("{}%", ingredient.percent)
        };
        println!(
            "{:<14} {:>6} {:>8} @ {:>8.2} + {}% tax",
            ingredient.name,
            ingredient.phase.label(),
            percent,
            ingredient.rate,
            ingredient.tax_rate
        );
    }

    println!("\n--- Packaging ---");
    for item in &recipe.packaging {
        println!(
            "{:<14} {:>8.2} / {:<3} + {}% tax = {:.2}",
            item.label,
            item.unit_cost,
            item.kind.unit(),
            item.tax_rate,
            item.tax_inclusive_rate()
        );
    }

    Ok(())
}

pub fn output_parsed_report(output_format: OutputFormat, parsed: &ParsedReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(parsed)?);
        return Ok(());
    }

    println!("\nParsed Report");
    println!("=============");
    if let Some(date) = parsed.generated_at {
        println!("Date:               {}", date.format("%Y-%m-%d %H:%M"));
    }
    println!("Batch:              {}", parsed.batch_no);
    println!("Batch size:         {} kg", parsed.batch_size_kg);
    println!("Ingredients total:  {:.2}", parsed.ingredient_total);
    println!("Oil phase:          {:.2}", parsed.oil_phase);
    println!("Water phase:        {:.2}", parsed.water_phase);
    println!("Packaging:          {:.2}", parsed.packaging_cost);
    println!("Grand total:        {:.2}", parsed.grand_total);
    println!("Final cost / kg:    {:.2}", parsed.final_cost_per_kg);

    Ok(())
}
