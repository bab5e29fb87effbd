use std::io::Write;
use tiered_dns_application::ports::TableReporter;
use tiered_dns_domain::{ResourceRecord, TABLE_HEADER};
use tracing::warn;

/// Prints the whole table to stdout after each served request.
pub struct ConsoleTableReporter;

impl TableReporter for ConsoleTableReporter {
    fn report(&self, snapshot: &[ResourceRecord]) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout.write_all(render_table(snapshot).as_bytes()) {
            warn!(error = %e, "Failed to print record table");
        }
    }
}

pub fn render_table(snapshot: &[ResourceRecord]) -> String {
    let mut out = String::with_capacity(TABLE_HEADER.len() + 1 + snapshot.len() * 48);
    out.push_str(TABLE_HEADER);
    out.push('\n');
    for record in snapshot {
        out.push_str(&record.display_row());
        out.push('\n');
    }
    out
}
