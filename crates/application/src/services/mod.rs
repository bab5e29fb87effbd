mod exchange;
mod record_table;

pub use exchange::exchange;
pub use record_table::RecordTable;
