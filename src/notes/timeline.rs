//! Helpers tying video playback time to lap position

/// Playback progress through the clip, 0 when the duration is unknown
pub fn progress(current: f64, duration: f64) -> f64 {
    if duration > 0.0 && current.is_finite() {
        (current / duration).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Video time for a lap position, assuming the clip covers exactly one lap
pub fn time_for_pos(pos: f64, duration: f64) -> f64 {
    if pos.is_nan() || duration <= 0.0 {
        return 0.0;
    }
    pos.clamp(0.0, 1.0) * duration
}

/// Fraction along a scrubber of `width` for a pointer `offset` from its left edge
pub fn scrub_fraction(offset: f64, width: f64) -> f64 {
    if width > 0.0 && offset.is_finite() {
        (offset / width).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Format seconds as `m:ss`
pub fn format_time(t: f64) -> String {
    if !t.is_finite() || t < 0.0 {
        return "0:00".to_string();
    }
    let total = t.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        assert_eq!(progress(30.0, 120.0), 0.25);
        assert_eq!(progress(130.0, 120.0), 1.0);
        assert_eq!(progress(30.0, 0.0), 0.0);
    }

    #[test]
    fn test_time_for_pos() {
        assert_eq!(time_for_pos(0.5, 96.0), 48.0);
        assert_eq!(time_for_pos(-1.0, 96.0), 0.0);
        assert_eq!(time_for_pos(0.5, 0.0), 0.0);
    }

    #[test]
    fn test_scrub_fraction() {
        assert_eq!(scrub_fraction(50.0, 200.0), 0.25);
        assert_eq!(scrub_fraction(-10.0, 200.0), 0.0);
        assert_eq!(scrub_fraction(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.9), "1:05");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
    }
}
