/// Format minutes as a compact human-readable duration, e.g. "2h 30m".
pub fn mins2readable(mins: i64) -> String {
    if mins <= 0 {
        return "0 min".to_string();
    }
    let h = mins / 60;
    let m = mins % 60;
    if h == 0 {
        format!("{m} min")
    } else {
        format!("{h}h {m:02}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_durations() {
        assert_eq!(mins2readable(0), "0 min");
        assert_eq!(mins2readable(45), "45 min");
        assert_eq!(mins2readable(150), "2h 30m");
    }
}
