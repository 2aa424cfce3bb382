//! gatekeeper init command

use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::Args;
use gatekeeper_domain::Catalog;
use shared::{CatalogDefinition, GameConfig, DEFAULT_CONFIG_FILE};

/// File name of the exported catalog written by `--with-catalog`
pub const CATALOG_FILE: &str = "visitors.yaml";

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to initialize
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Also export the built-in catalog for editing
    #[arg(long)]
    pub with_catalog: bool,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        println!("Initializing gatekeeper config in {:?}", self.directory);
        std::fs::create_dir_all(&self.directory)?;

        let mut config = GameConfig::default();
        if self.with_catalog {
            self.write_catalog(&self.directory.join(CATALOG_FILE))?;
            config.catalog_path = Some(PathBuf::from(CATALOG_FILE));
        }

        let config_path = self.directory.join(DEFAULT_CONFIG_FILE);
        self.check_writable(&config_path)?;
        std::fs::write(&config_path, config.to_yaml()?)?;

        println!("✓ Wrote {}", config_path.display());
        Ok(())
    }

    fn write_catalog(&self, path: &Path) -> anyhow::Result<()> {
        self.check_writable(path)?;
        let definition = CatalogDefinition::from(&Catalog::builtin());
        std::fs::write(path, serde_yaml::to_string(&definition)?)?;
        println!("✓ Wrote {}", path.display());
        Ok(())
    }

    fn check_writable(&self, path: &Path) -> anyhow::Result<()> {
        if path.exists() && !self.force {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }
        Ok(())
    }
}
