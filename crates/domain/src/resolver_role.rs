use std::fmt;
use std::net::SocketAddr;

/// What a resolver does when a hostname is missing from its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverRole {
    /// Answer "not found".
    Authoritative,
    /// Ask `upstream` once and relay its answer.
    Forwarding { upstream: SocketAddr },
}

impl ResolverRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolverRole::Authoritative => "authoritative",
            ResolverRole::Forwarding { .. } => "forwarding",
        }
    }
}

impl fmt::Display for ResolverRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolverRole::Authoritative => f.write_str("authoritative"),
            ResolverRole::Forwarding { upstream } => write!(f, "forwarding to {}", upstream),
        }
    }
}
