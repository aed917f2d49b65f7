//! Day/time duration text form used by `time'...'` literals:
//! `[-]P[nD][T[nH][nM][n[.n]S]]`, fraction allowed only on the seconds
//! component.

use chrono::Duration;

pub fn parse(text: &str) -> Option<Duration> {
    let (negative, text) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let text = text.strip_prefix('P')?;

    let (day_part, time_part) = match text.split_once('T') {
        Some((days, time)) => (days, Some(time)),
        None => (text, None),
    };

    // 'P' alone and a trailing bare 'T' are both malformed
    if day_part.is_empty() && time_part.map_or(true, str::is_empty) {
        return None;
    }

    let mut total = Duration::zero();

    if !day_part.is_empty() {
        // bare digits only; the sign is legal at the front of the whole
        // duration, nowhere else
        let digits = day_part.strip_suffix('D')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        total = Duration::try_days(digits.parse::<i64>().ok()?)?;
    }

    if let Some(time) = time_part {
        let mut rest = time;
        let mut matched = false;

        if let Some((num, tail)) = take_component(rest, 'H') {
            total = total.checked_add(&Duration::try_hours(num.parse::<i64>().ok()?)?)?;
            rest = tail;
            matched = true;
        }
        if let Some((num, tail)) = take_component(rest, 'M') {
            total = total.checked_add(&Duration::try_minutes(num.parse::<i64>().ok()?)?)?;
            rest = tail;
            matched = true;
        }
        if let Some((num, tail)) = take_component(rest, 'S') {
            total = total.checked_add(&parse_seconds(num)?)?;
            rest = tail;
            matched = true;
        }

        if !rest.is_empty() || !matched {
            return None;
        }
    }

    if negative {
        Duration::zero().checked_sub(&total)
    } else {
        Some(total)
    }
}

/// Splits a leading `<number><designator>` off `s`. The number may carry a
/// fraction; the per-component integer parses reject it where it is not
/// allowed.
fn take_component(s: &str, designator: char) -> Option<(&str, &str)> {
    let end = s.find(|c: char| !(c.is_ascii_digit() || c == '.'))?;
    if end > 0 && s[end..].starts_with(designator) {
        Some((&s[..end], &s[end + 1..]))
    } else {
        None
    }
}

fn parse_seconds(num: &str) -> Option<Duration> {
    match num.split_once('.') {
        None => Duration::try_seconds(num.parse::<i64>().ok()?),
        Some((secs, frac)) => {
            if frac.is_empty() || frac.len() > 9 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let secs = Duration::try_seconds(secs.parse::<i64>().ok()?)?;
            // at most nine fraction digits, so the scaled value stays below
            // one second's worth of nanos
            let nanos = frac.parse::<i64>().ok()? * 10_i64.pow((9 - frac.len()) as u32);
            secs.checked_add(&Duration::nanoseconds(nanos))
        }
    }
}

/// Canonical text: components in `D H M S` order, zero components dropped,
/// `PT0S` for the zero duration.
pub fn format(duration: &Duration) -> String {
    let negative = *duration < Duration::zero();
    let abs = if negative { -*duration } else { *duration };

    let total_secs = abs.num_seconds();
    let nanos = (abs - Duration::seconds(total_secs))
        .num_nanoseconds()
        .unwrap_or(0);

    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let secs = total_secs % 60;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push('P');
    if days != 0 {
        out.push_str(&format!("{days}D"));
    }

    let has_time = hours != 0 || minutes != 0 || secs != 0 || nanos != 0;
    if has_time || days == 0 {
        out.push('T');
        if hours != 0 {
            out.push_str(&format!("{hours}H"));
        }
        if minutes != 0 {
            out.push_str(&format!("{minutes}M"));
        }
        if secs != 0 || nanos != 0 || !has_time {
            if nanos != 0 {
                let frac = format!("{nanos:09}");
                out.push_str(&format!("{secs}.{}S", frac.trim_end_matches('0')));
            } else {
                out.push_str(&format!("{secs}S"));
            }
        }
    }

    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_full_form() {
        let expected = Duration::days(1)
            + Duration::hours(2)
            + Duration::minutes(3)
            + Duration::seconds(4);
        assert_eq!(Some(expected), parse("P1DT2H3M4S"));
    }

    #[test]
    fn parses_partial_forms() {
        assert_eq!(Some(Duration::days(2)), parse("P2D"));
        assert_eq!(
            Some(Duration::hours(12) + Duration::minutes(30)),
            parse("PT12H30M")
        );
        assert_eq!(Some(Duration::seconds(0)), parse("PT0S"));
    }

    #[test]
    fn parses_fractional_seconds() {
        let expected = Duration::seconds(4) + Duration::milliseconds(500);
        assert_eq!(Some(expected), parse("PT4.5S"));
    }

    #[test]
    fn parses_negative() {
        assert_eq!(Some(-Duration::minutes(90)), parse("-PT1H30M"));
    }

    #[test]
    fn rejects_malformed() {
        for input in ["", "P", "PT", "PT1", "1H", "PT1H2S3M", "PT1.5H", "PT.5S", "P1DT"] {
            assert_eq!(None, parse(input), "input {input:?}");
        }
    }

    #[test]
    fn rejects_embedded_signs() {
        for input in ["P-1D", "PT-1H", "PT-1M", "PT-1S", "PT1.-5S"] {
            assert_eq!(None, parse(input), "input {input:?}");
        }
        // the leading sign stays legal
        assert_eq!(Some(-Duration::days(1)), parse("-P1D"));
    }

    #[test]
    fn rejects_out_of_range_components() {
        for input in [
            "P200000000000D",
            "PT9223372036854775807S",
            "PT9999999999999H",
            "P100000000000DT2000000000000H",
        ] {
            assert_eq!(None, parse(input), "input {input:?}");
        }
    }

    #[test]
    fn formats_canonically() {
        assert_eq!("PT0S", format(&Duration::zero()));
        assert_eq!("P1D", format(&Duration::days(1)));
        assert_eq!(
            "P1DT2H3M4S",
            format(
                &(Duration::days(1)
                    + Duration::hours(2)
                    + Duration::minutes(3)
                    + Duration::seconds(4))
            )
        );
        assert_eq!(
            "PT4.5S",
            format(&(Duration::seconds(4) + Duration::milliseconds(500)))
        );
        assert_eq!("-PT1H30M", format(&-Duration::minutes(90)));
    }

    #[test]
    fn format_parse_round_trip() {
        let values = [
            Duration::zero(),
            Duration::seconds(5),
            Duration::minutes(90),
            Duration::days(3) + Duration::nanoseconds(1),
            -Duration::hours(26),
        ];
        for value in values {
            assert_eq!(Some(value), parse(&format(&value)), "value {value:?}");
        }
    }
}
