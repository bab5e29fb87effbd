use tiered_dns_domain::{DomainError, Query, ResolverRole};
use std::net::SocketAddr;

#[test]
fn test_query_trims_surrounding_whitespace() {
    let query = Query::new("  shop.amazone.com \r\n");
    assert_eq!(query.hostname(), "shop.amazone.com");
    assert_eq!(query.as_bytes(), b"shop.amazone.com");
}

#[test]
fn test_parse_plain_hostname() {
    let query = Query::parse(b"cloud.amazone.com").unwrap();
    assert_eq!(query.hostname(), "cloud.amazone.com");
}

#[test]
fn test_parse_whitespace_only_is_empty_hostname() {
    let query = Query::parse(b" \t\n").unwrap();
    assert_eq!(query.hostname(), "");
}

#[test]
fn test_parse_invalid_utf8_is_not_fatal() {
    let err = Query::parse(&[0xc3, 0x28]).unwrap_err();
    assert!(matches!(err, DomainError::InvalidQuery(_)));
    assert!(!err.is_fatal());
}

#[test]
fn test_transport_errors_are_fatal() {
    assert!(DomainError::Transport("boom".to_string()).is_fatal());
    assert!(DomainError::TransportUnreachable {
        peer: "127.0.0.1:22000".to_string()
    }
    .is_fatal());
    assert!(DomainError::ChannelClosed.is_fatal());
}

#[test]
fn test_oversized_payload_is_not_fatal() {
    let err = DomainError::PayloadTooLarge {
        size: 5000,
        max: 4096,
    };
    assert!(!err.is_fatal());
}

#[test]
fn test_resolver_role_display() {
    let upstream: SocketAddr = "127.0.0.1:22000".parse().unwrap();

    assert_eq!(ResolverRole::Authoritative.as_str(), "authoritative");
    assert_eq!(
        ResolverRole::Forwarding { upstream }.to_string(),
        "forwarding to 127.0.0.1:22000"
    );
}
