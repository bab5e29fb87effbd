use crate::ResourceRecord;

/// Payload sent when a hostname is absent from an authoritative table.
pub const NOT_FOUND: &str = "Record not found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Found(ResourceRecord),
    NotFound,
    /// Upstream reply bytes, passed back to the requester unchanged.
    Relayed(Vec<u8>),
}

impl Response {
    pub fn to_wire(&self) -> Vec<u8> {
        match self {
            Response::Found(record) => record.to_wire().into_bytes(),
            Response::NotFound => NOT_FOUND.as_bytes().to_vec(),
            Response::Relayed(payload) => payload.clone(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            Response::NotFound => true,
            Response::Relayed(payload) => payload == NOT_FOUND.as_bytes(),
            Response::Found(_) => false,
        }
    }
}
