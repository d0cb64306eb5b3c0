//! Command handlers

use crate::cli::{BatchOverrides, Cli, Commands};
use crate::output::{output_parsed_report, output_recipe, output_report};
use chrono::Local;
use gff_app::app::{BatchEdit, CostingService, IngredientEdit};
use gff_app::config::Config;
use gff_app::export::{default_report_file_name, export_to_excel, read_text_report, write_text_report};
use gff_app::repository::open_recipe_repo;
use gff_domain::model::{CostReport, PackagingKind};
use gff_domain::repository::RecipeRepository;
use gff_infra::persistence::FileRecipeRepository;
use gff_types::{OutputFormat, Result};
use std::path::PathBuf;
use tracing::debug;

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!("Output format: {}", output_format);

    match cli.command {
        Commands::Calculate { overrides } => cmd_calculate(&config, &overrides, output_format),
        Commands::Export {
            overrides,
            output,
            excel,
        } => cmd_export(&config, &overrides, output, excel),
        Commands::ParseReport { file } => cmd_parse_report(file, output_format),
        Commands::Show => cmd_show(&config, output_format),
        Commands::SetIngredient {
            name,
            percent,
            rate,
            tax_rate,
        } => {
            let edit = IngredientEdit {
                percent,
                rate,
                tax_rate,
            };
            cmd_set_ingredient(&config, &name, &edit)
        }
        Commands::SetPackaging { kind, cost, tax_rate } => cmd_set_packaging(&config, kind, cost, tax_rate),
        Commands::SetBatch {
            batch_no,
            size,
            overhead,
            misc,
            labour,
            electricity,
            transport,
        } => {
            let edit = BatchEdit {
                batch_no,
                batch_size_kg: size,
                overhead_percent: overhead,
                misc_flat: misc,
                labour,
                electricity,
                transport,
            };
            cmd_set_batch(&config, &edit)
        }
        Commands::Import { file } => cmd_import(&config, file),
        Commands::Reset => cmd_reset(&config),
        Commands::Config {
            show,
            set_output,
            set_store_dir,
            set_report_dir,
            set_default_recipe,
            reset,
        } => cmd_config(show, set_output, set_store_dir, set_report_dir, set_default_recipe, reset),
    }
}

fn open_service(config: &Config) -> Result<CostingService<FileRecipeRepository>> {
    let repo = open_recipe_repo(config)?;
    debug!("Recipe store: {}", repo.store_path().display());
    Ok(CostingService::new(repo).with_default_recipe(config.default_recipe.clone()))
}

/// Cost the recipe picked by the overrides without saving anything
fn run_calculation<R: RecipeRepository>(service: &CostingService<R>, overrides: &BatchOverrides) -> Result<CostReport> {
    let mut recipe = match overrides.recipe {
        Some(ref path) => service.load_recipe(path)?,
        None => service.current_recipe()?.0,
    };
    let edit = overrides.batch_edit();
    if !edit.is_empty() {
        edit.apply(&mut recipe.batch)?;
    }
    service.calculate(&recipe)
}

fn cmd_calculate(config: &Config, overrides: &BatchOverrides, output_format: OutputFormat) -> Result<()> {
    let service = open_service(config)?;
    let report = run_calculation(&service, overrides)?;
    output_report(output_format, &report)
}

fn cmd_export(config: &Config, overrides: &BatchOverrides, output: Option<PathBuf>, excel: bool) -> Result<()> {
    let service = open_service(config)?;
    let report = run_calculation(&service, overrides)?;

    let output_path = output.unwrap_or_else(|| {
        let path = config.report_dir().join(default_report_file_name(&report.batch_no));
        if excel {
            path.with_extension("xlsx")
        } else {
            path
        }
    });

    if excel {
        export_to_excel(&report, &output_path)?;
    } else {
        write_text_report(&report, &output_path, Local::now().naive_local())?;
    }

    println!("Exported to: {}", output_path.display());
    Ok(())
}

fn cmd_parse_report(file: PathBuf, output_format: OutputFormat) -> Result<()> {
    let parsed = read_text_report(&file)?;
    output_parsed_report(output_format, &parsed)
}

fn cmd_show(config: &Config, output_format: OutputFormat) -> Result<()> {
    let service = open_service(config)?;
    let (recipe, source) = service.current_recipe()?;
    output_recipe(output_format, &recipe, &source.to_string())
}

fn cmd_set_ingredient(config: &Config, name: &str, edit: &IngredientEdit) -> Result<()> {
    let service = open_service(config)?;
    let recipe = service.set_ingredient(name, edit)?;
    if let Some(ingredient) = recipe.ingredient(name) {
        println!(
            "{}: {}% @ {:.2} + {}% tax",
            ingredient.name, ingredient.percent, ingredient.rate, ingredient.tax_rate
        );
    }
    println!("Recipe saved");
    Ok(())
}

fn cmd_set_packaging(config: &Config, kind: PackagingKind, cost: Option<f64>, tax_rate: Option<f64>) -> Result<()> {
    let service = open_service(config)?;
    let recipe = service.set_packaging(kind, cost, tax_rate)?;
    if let Some(item) = recipe.packaging_item(kind) {
        println!(
            "{}: {:.2} / {} + {}% tax = {:.2}",
            item.label,
            item.unit_cost,
            kind.unit(),
            item.tax_rate,
            item.tax_inclusive_rate()
        );
    }
    println!("Recipe saved");
    Ok(())
}

fn cmd_set_batch(config: &Config, edit: &BatchEdit) -> Result<()> {
    let service = open_service(config)?;
    let recipe = service.set_batch(edit)?;
    println!(
        "Batch {}: {} kg, overhead {}%, misc {:.2} per box",
        recipe.batch.batch_no,
        recipe.batch.batch_size_kg,
        recipe.batch.overhead_percent,
        recipe.batch.misc_cost_per_box()
    );
    println!("Recipe saved");
    Ok(())
}

fn cmd_import(config: &Config, file: PathBuf) -> Result<()> {
    let service = open_service(config)?;
    let recipe = service.import(&file)?;
    println!(
        "Imported {} ingredients and {} packaging items from {}",
        recipe.ingredients.len(),
        recipe.packaging.len(),
        file.display()
    );
    Ok(())
}

fn cmd_reset(config: &Config) -> Result<()> {
    let service = open_service(config)?;
    service.reset()?;
    println!("Saved recipe cleared");
    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_store_dir: Option<PathBuf>,
    set_report_dir: Option<PathBuf>,
    set_default_recipe: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(dir) = set_store_dir {
        config.store_dir = Some(dir);
        modified = true;
    }

    if let Some(dir) = set_report_dir {
        config.report_dir = Some(dir);
        modified = true;
    }

    if let Some(path) = set_default_recipe {
        config.default_recipe = Some(path);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
