//! CLI Commands

pub mod catalog;
pub mod init;
pub mod play;
pub mod simulate;

pub use catalog::CatalogCommand;
pub use init::InitCommand;
pub use play::PlayCommand;
pub use simulate::SimulateCommand;
