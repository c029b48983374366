mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{
    BuildStepConfig, CONFIG_VERSION, Config, DEFAULT_SUBTITLE, DEFAULT_TITLE, FrameworkConfig,
    ReportConfig, default_frameworks,
};
pub use validation::validate_config;
