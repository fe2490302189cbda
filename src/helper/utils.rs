use std::io::{Result as IoResult, Write};

use chrono::Local;
use itertools::Itertools;

pub fn log_line<W: Write>(writer: &mut W, message: &str) -> IoResult<()> {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S");
    writeln!(writer, "[{}] {}", now, message)?;
    writer.flush()?;
    Ok(())
}

/// Drops repeated items, keeping the first occurrence of each in order.
pub fn uniq_in_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    items.into_iter().unique().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniq_in_order() {
        let genes = ["b", "a", "b", "c", "a"].map(String::from);
        assert_eq!(uniq_in_order(genes), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_log_line_format() {
        let mut buf = Vec::new();
        log_line(&mut buf, "Scan finished").unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.starts_with('['));
        assert!(line.ends_with("] Scan finished\n"));
        assert_eq!(line.len(), "[2026-01-01 00:00:00] Scan finished\n".len());
    }
}
