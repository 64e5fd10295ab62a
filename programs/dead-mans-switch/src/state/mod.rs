pub mod program_config;
pub mod switch;

pub use program_config::*;
pub use switch::*;
