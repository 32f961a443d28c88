//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::DataPaths;
pub use settings::Settings;
