pub mod dns;

pub use dns::{LookupHostnameUseCase, Resolution, ResolutionSource, ResolveQueryUseCase};
