#![allow(dead_code)]
use tiered_dns_domain::ResourceRecord;

pub struct ResourceRecordBuilder {
    sequence_number: u64,
    name: String,
    record_type: String,
    result: String,
    ttl: Option<u32>,
    is_static: bool,
}

impl ResourceRecordBuilder {
    pub fn new() -> Self {
        Self {
            sequence_number: 1,
            name: "shop.amazone.com".to_string(),
            record_type: "A".to_string(),
            result: "3.33.147.88".to_string(),
            ttl: None,
            is_static: true,
        }
    }

    pub fn sequence_number(mut self, sequence_number: u64) -> Self {
        self.sequence_number = sequence_number;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn record_type(mut self, record_type: &str) -> Self {
        self.record_type = record_type.to_string();
        self
    }

    pub fn result(mut self, result: &str) -> Self {
        self.result = result.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn dynamic(mut self) -> Self {
        self.is_static = false;
        self
    }

    pub fn build(self) -> ResourceRecord {
        ResourceRecord::new(
            self.sequence_number,
            self.name,
            self.record_type,
            self.result,
            self.ttl,
            self.is_static,
        )
    }
}
