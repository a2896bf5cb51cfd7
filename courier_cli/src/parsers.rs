use jiff::civil::Time;

/// Accepts `HH:MM`, `HH:MM:SS` or a bare hour such as `17`.
pub fn parse_time(input: &str) -> Result<Time, String> {
    if let Ok(time) = input.parse::<Time>() {
        return Ok(time);
    }

    if let Ok(hour) = input.parse::<i8>()
        && let Ok(time) = Time::new(hour, 0, 0, 0)
    {
        return Ok(time);
    }

    Err(format!("Invalid time of day: {input}"))
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("17:30:00"), Ok(time(17, 30, 0, 0)));
        assert_eq!(parse_time("08:05:30"), Ok(time(8, 5, 30, 0)));
        assert_eq!(parse_time("16"), Ok(time(16, 0, 0, 0)));
    }

    #[test]
    fn test_parse_time_rejects_garbage() {
        assert!(parse_time("25").is_err());
        assert!(parse_time("noon").is_err());
        assert!(parse_time("").is_err());
    }
}
