pub mod console;
pub mod resolver;

pub use resolver::{run_authoritative, run_local};
