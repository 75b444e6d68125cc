#[macro_use]
extern crate log;

pub mod resolver;
pub mod settings;
pub mod status_line;
pub mod table;
mod traits;

pub use resolver::{Resolution, StatusTextResolver};
pub use settings::{ResolverSettings, Settings};
pub use status_line::{StatusLineError, StatusLineWriter};
pub use traits::ReasonSource;
