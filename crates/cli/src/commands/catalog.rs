//! gatekeeper catalog command

use clap::Args;
use gatekeeper_adapter::CatalogLoader;
use shared::{CatalogDefinition, GameConfig};

use crate::render::render_catalog_entry;

#[derive(Debug, Args)]
pub struct CatalogCommand {
    /// Print the catalog as JSON in the custom-catalog file format
    #[arg(long)]
    pub json: bool,
}

impl CatalogCommand {
    pub fn run(&self, config: &GameConfig) -> anyhow::Result<()> {
        let catalog = CatalogLoader::for_config(config)?;

        if self.json {
            let definition = CatalogDefinition::from(&catalog);
            println!("{}", serde_json::to_string_pretty(&definition)?);
            return Ok(());
        }

        println!("{} visitors\n", catalog.len());
        for visitor in catalog.all() {
            println!("{}", render_catalog_entry(visitor));
        }
        Ok(())
    }
}
