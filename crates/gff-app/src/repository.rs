//! Repository adapters for persistence layer

use std::path::PathBuf;

use gff_infra::persistence::FileRecipeRepository;
use gff_types::Result;

use crate::config::Config;

/// Open the file-based recipe repository from config
pub fn open_recipe_repo(config: &Config) -> Result<FileRecipeRepository> {
    let store_dir = config.store_dir()?;
    FileRecipeRepository::open(store_dir)
}

/// Open the file-based recipe repository at a custom directory
pub fn open_recipe_repo_at(store_dir: PathBuf) -> Result<FileRecipeRepository> {
    FileRecipeRepository::open(store_dir)
}
