pub mod config;
pub mod logging;
pub mod mode_prompt;

pub use config::load_config;
pub use logging::init_logging;
pub use mode_prompt::resolve_mode;
