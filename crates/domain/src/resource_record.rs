use std::fmt;

/// Header line printed above a table dump.
pub const TABLE_HEADER: &str = "record_number,name,type,result,ttl,static";

const ABSENT_TTL: &str = "None";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub sequence_number: u64,

    pub name: String,

    /// Opaque tag such as `A` or `NS`; never validated.
    pub record_type: String,

    /// An address literal or a delegation target hostname.
    pub result: String,

    pub ttl: Option<u32>,

    pub is_static: bool,
}

impl ResourceRecord {
    pub fn new(
        sequence_number: u64,
        name: impl Into<String>,
        record_type: impl Into<String>,
        result: impl Into<String>,
        ttl: Option<u32>,
        is_static: bool,
    ) -> Self {
        Self {
            sequence_number,
            name: name.into(),
            record_type: record_type.into(),
            result: result.into(),
            ttl,
            is_static,
        }
    }

    /// TTL as shown to the operator. Static records never show one.
    pub fn display_ttl(&self) -> Option<u32> {
        if self.is_static {
            None
        } else {
            self.ttl
        }
    }

    /// Response payload: `name,type,result,ttl|None,static`.
    pub fn to_wire(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.name,
            self.record_type,
            self.result,
            TtlField(self.ttl),
            static_flag(self.is_static)
        )
    }

    /// One row of the table dump, matching [`TABLE_HEADER`].
    pub fn display_row(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.sequence_number,
            self.name,
            self.record_type,
            self.result,
            TtlField(self.display_ttl()),
            static_flag(self.is_static)
        )
    }
}

struct TtlField(Option<u32>);

impl fmt::Display for TtlField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ttl) => write!(f, "{}", ttl),
            None => f.write_str(ABSENT_TTL),
        }
    }
}

fn static_flag(is_static: bool) -> u8 {
    u8::from(is_static)
}
