/// renders a minute count for display: below one hour as "N minutes",
/// otherwise as "H hours M minutes".
pub fn format_minutes(minutes: f64) -> String {
    if minutes < 60.0 {
        format!("{} minutes", minutes.round() as i64)
    } else {
        let hours = (minutes / 60.0).floor() as i64;
        let remainder = (minutes % 60.0).round() as i64;
        format!("{hours} hours {remainder} minutes")
    }
}
