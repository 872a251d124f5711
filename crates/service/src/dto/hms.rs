//! Serde codec for durations kept as whole seconds and exchanged as
//! `"HH:MM:SS"`. Input also accepts `"HH:MM"` and a `"D."` day prefix.

use serde::{de, Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(seconds: &i32, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format(*seconds))
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
    let raw = String::deserialize(d)?;
    parse(&raw).map_err(de::Error::custom)
}

pub fn format(seconds: i32) -> String {
    let s = seconds.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

pub fn parse(raw: &str) -> Result<i32, String> {
    let raw = raw.trim();
    let (days, clock) = match raw.split_once('.') {
        Some((d, rest)) if !d.contains(':') => (field(d, raw)?, rest),
        _ => (0, raw),
    };
    let parts: Vec<&str> = clock.split(':').collect();
    let (h, m, s) = match parts.as_slice() {
        [h, m] => (field(h, raw)?, field(m, raw)?, 0),
        [h, m, s] => (field(h, raw)?, field(m, raw)?, field(s, raw)?),
        _ => return Err(format!("invalid duration {raw:?}, expected HH:MM[:SS]")),
    };
    if m >= 60 || s >= 60 {
        return Err(format!("invalid duration {raw:?}, minutes and seconds must be < 60"));
    }
    let total = days * 86_400 + h * 3600 + m * 60 + s;
    i32::try_from(total).map_err(|_| format!("duration {raw:?} is too long"))
}

fn field(part: &str, raw: &str) -> Result<i64, String> {
    part.parse::<u32>()
        .map(i64::from)
        .map_err(|_| format!("invalid duration {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hours_minutes_seconds() {
        assert_eq!(format(3600), "01:00:00");
        assert_eq!(format(5430), "01:30:30");
        assert_eq!(format(90_000), "25:00:00");
    }

    #[test]
    fn parses_accepted_forms() {
        assert_eq!(parse("01:00:00"), Ok(3600));
        assert_eq!(parse("00:45"), Ok(2700));
        assert_eq!(parse("1.02:00:00"), Ok(93_600));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("1h").is_err());
        assert!(parse("01:60:00").is_err());
        assert!(parse("-01:00:00").is_err());
        assert!(parse("").is_err());
    }
}
