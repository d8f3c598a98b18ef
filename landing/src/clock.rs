//! Wall-clock access for the footer.

use chrono::{Datelike, Local};

/// Calendar year in the host's local time zone, read at call time.
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_matches_chrono_now() {
        assert_eq!(current_year(), Local::now().year());
        assert!(current_year() >= 2025);
    }
}
