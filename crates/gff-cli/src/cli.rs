//! CLI definition using clap

use clap::{Parser, Subcommand};
use gff_domain::model::PackagingKind;
use gff_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gff-costing")]
#[command(version)]
#[command(about = "Batch costing for the GFF fat-spread emulsion")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// One-off batch overrides for calculate/export; not saved
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BatchOverrides {
    /// Recipe file (.toml, or .csv for the ingredient table only)
    #[arg(long, short = 'r')]
    pub recipe: Option<PathBuf>,

    /// Batch identifier
    #[arg(long)]
    pub batch_no: Option<String>,

    /// Batch size in kg
    #[arg(long)]
    pub batch_size: Option<f64>,

    /// Overhead percentage
    #[arg(long)]
    pub overhead: Option<f64>,

    /// Flat misc charge per box
    #[arg(long)]
    pub misc: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate batch cost for the current recipe
    Calculate {
        #[command(flatten)]
        overrides: BatchOverrides,
    },

    /// Write the costing report to a text or Excel file
    Export {
        #[command(flatten)]
        overrides: BatchOverrides,

        /// Output file path (default: <report_dir>/<batch_no>_report.txt)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Write an Excel workbook instead of a text report
        #[arg(long)]
        excel: bool,
    },

    /// Read back figures from a text report
    ParseReport {
        /// Path to report file
        file: PathBuf,
    },

    /// Show the current recipe
    Show,

    /// Change an ingredient in the saved recipe
    SetIngredient {
        /// Ingredient name (case-insensitive)
        name: String,

        /// Percentage of batch weight
        #[arg(long, short = 'p')]
        percent: Option<f64>,

        /// Pre-tax cost per kg
        #[arg(long)]
        rate: Option<f64>,

        /// Tax percentage
        #[arg(long)]
        tax_rate: Option<f64>,
    },

    /// Change a packaging item in the saved recipe
    SetPackaging {
        /// wrapper, inner_carton, outer_carton or tape
        kind: PackagingKind,

        /// Pre-tax unit cost
        #[arg(long)]
        cost: Option<f64>,

        /// Tax percentage
        #[arg(long)]
        tax_rate: Option<f64>,
    },

    /// Change batch values in the saved recipe
    SetBatch {
        /// Batch identifier
        #[arg(long)]
        batch_no: Option<String>,

        /// Batch size in kg
        #[arg(long)]
        size: Option<f64>,

        /// Overhead percentage
        #[arg(long)]
        overhead: Option<f64>,

        /// Flat misc charge per box (replaces the itemised charges)
        #[arg(long, conflicts_with_all = ["labour", "electricity", "transport"])]
        misc: Option<f64>,

        /// Labour charge per box
        #[arg(long)]
        labour: Option<f64>,

        /// Electricity charge per box
        #[arg(long)]
        electricity: Option<f64>,

        /// Transport charge per box
        #[arg(long)]
        transport: Option<f64>,
    },

    /// Replace the saved recipe with a recipe file
    Import {
        /// Recipe file (.toml or .csv)
        file: PathBuf,
    },

    /// Discard the saved recipe
    Reset,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set directory for the saved recipe
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set directory for exported reports
        #[arg(long)]
        set_report_dir: Option<PathBuf>,

        /// Set recipe file used when nothing is saved
        #[arg(long)]
        set_default_recipe: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

impl BatchOverrides {
    pub fn batch_edit(&self) -> gff_app::app::BatchEdit {
        gff_app::app::BatchEdit {
            batch_no: self.batch_no.clone(),
            batch_size_kg: self.batch_size,
            overhead_percent: self.overhead,
            misc_flat: self.misc,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_set_packaging_alias() {
        let cli = Cli::try_parse_from(["gff-costing", "set-packaging", "mono", "--cost", "1.75"]).unwrap();
        match cli.command {
            Commands::SetPackaging { kind, cost, tax_rate } => {
                assert_eq!(kind, PackagingKind::InnerCarton);
                assert_eq!(cost, Some(1.75));
                assert_eq!(tax_rate, None);
            }
            _ => panic!("expected set-packaging"),
        }
    }

    #[test]
    fn test_parse_calculate_overrides() {
        let cli = Cli::try_parse_from([
            "gff-costing",
            "--format",
            "json",
            "calculate",
            "--batch-size",
            "1800",
            "--misc",
            "120",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Calculate { overrides } => {
                let edit = overrides.batch_edit();
                assert_eq!(edit.batch_size_kg, Some(1800.0));
                assert_eq!(edit.misc_flat, Some(120.0));
                assert!(overrides.recipe.is_none());
            }
            _ => panic!("expected calculate"),
        }
    }

    #[test]
    fn test_misc_conflicts_with_itemised() {
        let result = Cli::try_parse_from(["gff-costing", "set-batch", "--misc", "10", "--labour", "5"]);
        assert!(result.is_err());
    }
}
