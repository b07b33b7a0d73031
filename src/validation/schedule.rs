use crate::error::AppError;

/// Clock times travel as "HH:MM" strings; zero-padded, so lexicographic
/// order matches chronological order.
pub fn validate_clock_time(value: &str) -> Result<(), AppError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit();
    if !well_formed {
        return Err(AppError::validation(format!(
            "Invalid time \"{}\": expected HH:MM",
            value
        )));
    }
    let hours = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let minutes = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    if hours > 23 || minutes > 59 {
        return Err(AppError::validation(format!(
            "Invalid time \"{}\": expected HH:MM",
            value
        )));
    }
    Ok(())
}

pub fn validate_time_window(start: &str, end: &str) -> Result<(), AppError> {
    validate_clock_time(start)?;
    validate_clock_time(end)?;
    if start >= end {
        return Err(AppError::validation("Start time must be before end time"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_time_format() {
        assert!(validate_clock_time("08:00").is_ok());
        assert!(validate_clock_time("23:59").is_ok());
        assert!(validate_clock_time("24:00").is_err());
        assert!(validate_clock_time("08:60").is_err());
        assert!(validate_clock_time("8:00").is_err());
        assert!(validate_clock_time("08-00").is_err());
        assert!(validate_clock_time("").is_err());
    }

    #[test]
    fn window_requires_start_before_end() {
        assert!(validate_time_window("08:00", "14:00").is_ok());
        assert!(validate_time_window("14:00", "08:00").is_err());
        assert!(validate_time_window("08:00", "08:00").is_err());
    }
}
