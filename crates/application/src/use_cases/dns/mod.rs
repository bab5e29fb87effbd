mod lookup_hostname;
mod resolve_query;

pub use lookup_hostname::LookupHostnameUseCase;
pub use resolve_query::{Resolution, ResolutionSource, ResolveQueryUseCase};
