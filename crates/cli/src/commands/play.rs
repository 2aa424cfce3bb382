//! gatekeeper play command

use clap::Args;
use shared::GameConfig;

use crate::interactive::InteractiveCli;

#[derive(Debug, Default, Args)]
pub struct PlayCommand {
    /// Fixed RNG seed, overriding the configuration
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PlayCommand {
    pub async fn run(&self, config: GameConfig) -> anyhow::Result<()> {
        let config = match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        };
        InteractiveCli::new(config).run().await
    }
}
