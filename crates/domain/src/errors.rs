use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Unable to reach {peer}. It might not be up and running")]
    TransportUnreachable { peer: String },

    #[error("Socket error: {0}")]
    Transport(String),

    #[error("Datagram channel is not bound")]
    ChannelNotBound,

    #[error("Datagram channel is closed")]
    ChannelClosed,

    #[error("Payload of {size} bytes exceeds the {max} byte datagram limit")]
    PayloadTooLarge { size: usize, max: usize },
}

impl DomainError {
    /// Socket failures end the service; everything else is logged and the
    /// offending request dropped. An oversized payload is refused before it
    /// reaches the socket, so it is not a socket failure.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DomainError::TransportUnreachable { .. }
                | DomainError::Transport(_)
                | DomainError::ChannelNotBound
                | DomainError::ChannelClosed
        )
    }
}
