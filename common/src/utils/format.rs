//! Two-column rows shared by the console table and the output file.

pub const IP_COLUMN_WIDTH: usize = 16;
pub const HOST_COLUMN_WIDTH: usize = 20;

/// Formats one result row: address left-justified to 16, host to 20.
pub fn row(ip: &str, host: &str) -> String {
    format!(
        "{:<ip_w$} {:<host_w$}",
        ip,
        host,
        ip_w = IP_COLUMN_WIDTH,
        host_w = HOST_COLUMN_WIDTH
    )
}

/// The column titles and the dashed rule printed before any result.
pub fn header(host_title: &str) -> [String; 2] {
    [row("IP Address", host_title), row("----------", "----")]
}
