//! File-based recipe repository
//!
//! Keeps the latest edited recipe in `recipe.json` inside the store directory.
//! A snapshot is written to `recipe.json.tmp` and renamed into place, so a
//! failed write leaves the previous snapshot intact.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use gff_domain::model::Recipe;
use gff_domain::repository::RecipeRepository;
use gff_types::{Error, Result};

const STORE_FILE: &str = "recipe.json";
const TEMP_FILE: &str = "recipe.json.tmp";

/// File-based implementation of RecipeRepository
pub struct FileRecipeRepository {
    store_path: PathBuf,
    recipe: RefCell<Option<Recipe>>,
}

impl FileRecipeRepository {
    /// Create or load a recipe repository
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join(STORE_FILE);

        let recipe = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            Some(serde_json::from_reader(reader)?)
        } else {
            None
        };

        Ok(Self {
            store_path,
            recipe: RefCell::new(recipe),
        })
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    fn temp_path(&self) -> PathBuf {
        self.store_path.with_file_name(TEMP_FILE)
    }

    fn write_snapshot(&self, recipe: &Recipe) -> Result<()> {
        let temp_path = self.temp_path();
        let written = write_json(&temp_path, recipe).and_then(|()| {
            fs::rename(&temp_path, &self.store_path)?;
            Ok(())
        });
        if written.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        written
    }

    fn remove_snapshot(&self) -> Result<()> {
        if self.store_path.exists() {
            fs::remove_file(&self.store_path)?;
        }
        Ok(())
    }
}

fn write_json(path: &Path, recipe: &Recipe) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, recipe)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

impl RecipeRepository for FileRecipeRepository {
    fn load(&self) -> std::result::Result<Option<Recipe>, Error> {
        Ok(self.recipe.borrow().clone())
    }

    fn save(&self, recipe: &Recipe) -> std::result::Result<(), Error> {
        self.write_snapshot(recipe)?;
        *self.recipe.borrow_mut() = Some(recipe.clone());
        Ok(())
    }

    fn clear(&self) -> std::result::Result<(), Error> {
        self.remove_snapshot()?;
        *self.recipe.borrow_mut() = None;
        Ok(())
    }
}
