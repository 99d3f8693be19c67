//! Value source adapters.

pub mod config_file;
pub mod memory;

pub use config_file::ConfigVarSource;
pub use memory::MemoryVarSource;
