/// Convert a clock-time string to a second offset.
///
/// Two components are read as `M:SS` (`minutes*60 + seconds`), three as
/// `H:MM:SS` (`hours*3600 + minutes*60 + seconds`). Whitespace inside the
/// token is stripped before splitting. Any other component count, or a
/// non-numeric component, yields `None`; the caller decides whether that
/// becomes offset zero or a dropped entry.
pub fn parse_timecode(text: &str) -> Option<u32> {
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let parts: Vec<u32> = cleaned
        .split(':')
        .map(|part| part.parse::<u32>())
        .collect::<Result<_, _>>()
        .ok()?;

    match parts[..] {
        [minutes, seconds] => Some(minutes * 60 + seconds),
        [hours, minutes, seconds] => Some(hours * 3600 + minutes * 60 + seconds),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_part_timecode() {
        assert_eq!(parse_timecode("0:00"), Some(0));
        assert_eq!(parse_timecode("1:30"), Some(90));
        assert_eq!(parse_timecode("10:15"), Some(615));
        assert_eq!(parse_timecode("59:59"), Some(3599));
    }

    #[test]
    fn test_three_part_timecode() {
        assert_eq!(parse_timecode("1:00:00"), Some(3600));
        assert_eq!(parse_timecode("1:30:45"), Some(5445));
        assert_eq!(parse_timecode("12:00:01"), Some(43201));
    }

    #[test]
    fn test_inner_whitespace_is_stripped() {
        assert_eq!(parse_timecode(" 1:30 "), Some(90));
        assert_eq!(parse_timecode("1: 30"), Some(90));
    }

    #[test]
    fn test_malformed_timecode() {
        assert_eq!(parse_timecode("90"), None);
        assert_eq!(parse_timecode("1:2:3:4"), None);
        assert_eq!(parse_timecode("1:ab"), None);
        assert_eq!(parse_timecode(""), None);
    }
}
