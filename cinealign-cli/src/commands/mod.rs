//! CLI subcommand implementations.

pub mod generate;
pub mod inspect;

pub use generate::CmdGenerate;
pub use inspect::CmdInspect;
