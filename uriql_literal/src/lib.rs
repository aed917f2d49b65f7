pub mod duration;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime};
use thiserror::Error;
use uuid::Uuid;

use uriql_edm::spatial::{SpatialError, SpatialParser, SpatialValue, WellKnownTextParser};
use uriql_edm::{PrimitiveKind, ProtocolVersion};

/// A literal token's decoded value. `Null` carries the type-name annotation
/// of the `null'TypeName'` form; a bare `null` has none, and the two are
/// distinct values.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Decimal(BigDecimal),
    Double(f64),
    Single(f32),
    String(String),
    DateTime(NaiveDateTime),
    DateTimeOffset(DateTime<FixedOffset>),
    Time(Duration),
    Guid(Uuid),
    Binary(Vec<u8>),
    Null(Option<String>),
    Geography(SpatialValue),
    Geometry(SpatialValue),
}

impl LiteralValue {
    /// Primitive kind of the value; `None` for null, which has no kind of
    /// its own.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            LiteralValue::Boolean(_) => Some(PrimitiveKind::Boolean),
            LiteralValue::Int32(_) => Some(PrimitiveKind::Int32),
            LiteralValue::Int64(_) => Some(PrimitiveKind::Int64),
            LiteralValue::Decimal(_) => Some(PrimitiveKind::Decimal),
            LiteralValue::Double(_) => Some(PrimitiveKind::Double),
            LiteralValue::Single(_) => Some(PrimitiveKind::Single),
            LiteralValue::String(_) => Some(PrimitiveKind::String),
            LiteralValue::DateTime(_) => Some(PrimitiveKind::DateTime),
            LiteralValue::DateTimeOffset(_) => Some(PrimitiveKind::DateTimeOffset),
            LiteralValue::Time(_) => Some(PrimitiveKind::Time),
            LiteralValue::Guid(_) => Some(PrimitiveKind::Guid),
            LiteralValue::Binary(_) => Some(PrimitiveKind::Binary),
            LiteralValue::Null(_) => None,
            LiteralValue::Geography(_) => Some(PrimitiveKind::Geography),
            LiteralValue::Geometry(_) => Some(PrimitiveKind::Geometry),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LiteralError {
    #[error("'{text}' is not a valid {kind} literal")]
    Format { kind: PrimitiveKind, text: String },

    #[error("'{0}' is not a recognized literal")]
    Unrecognized(String),

    #[error(
        "the literal '{text}' at position {position} in '{expression}' \
         is incompatible with type {expected}"
    )]
    TypeMismatch {
        expected: PrimitiveKind,
        text: String,
        position: usize,
        expression: String,
    },

    #[error("{kind} literals require protocol version {required}, but version {actual} is in effect")]
    VersionGated {
        kind: PrimitiveKind,
        required: ProtocolVersion,
        actual: ProtocolVersion,
    },

    #[error(transparent)]
    Spatial(#[from] SpatialError),
}

static WKT: WellKnownTextParser = WellKnownTextParser;

/// Converts literal text to typed values under one protocol version. Pure
/// configuration, cheap to copy; the spatial collaborator is passed in
/// explicitly.
#[derive(Clone, Copy)]
pub struct LiteralParser<'a> {
    version: ProtocolVersion,
    spatial: &'a dyn SpatialParser,
}

impl<'a> LiteralParser<'a> {
    pub fn new(version: ProtocolVersion) -> Self {
        Self {
            version,
            spatial: &WKT,
        }
    }

    pub fn with_spatial(version: ProtocolVersion, spatial: &'a dyn SpatialParser) -> Self {
        Self { version, spatial }
    }

    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// Decodes literal text. With a target kind the decoded value is
    /// verified against it (numeric literals re-parse through the target's
    /// own parser, so overflow and narrowing failures are real failures);
    /// without one the apparent kind of the text decides.
    pub fn parse(&self, text: &str, target: Option<PrimitiveKind>) -> Result<LiteralValue, LiteralError> {
        self.parse_at(text, text, 0, target)
    }

    /// Same as `parse`, with the enclosing expression and token position
    /// threaded into any type-mismatch diagnostic.
    pub fn parse_at(
        &self,
        expression: &str,
        text: &str,
        position: usize,
        target: Option<PrimitiveKind>,
    ) -> Result<LiteralValue, LiteralError> {
        let apparent = classify(text)?;

        if let Apparent::Value(kind) = apparent {
            self.check_version(kind)?;
        }

        match (apparent, target) {
            // a null literal, typed or bare, satisfies any target
            (Apparent::Null, _) => parse_null(text),
            (Apparent::Value(kind), None) => self.parse_as(kind, text),
            (Apparent::Value(kind), Some(target)) => {
                self.check_version(target)?;
                if kind == target || (kind.is_numeric() && target.is_numeric()) {
                    self.parse_as(target, text)
                } else {
                    Err(LiteralError::TypeMismatch {
                        expected: target,
                        text: text.to_owned(),
                        position,
                        expression: expression.to_owned(),
                    })
                }
            }
        }
    }

    fn check_version(&self, kind: PrimitiveKind) -> Result<(), LiteralError> {
        if self.version.supports(kind) {
            Ok(())
        } else {
            Err(LiteralError::VersionGated {
                kind,
                required: ProtocolVersion::required_for(kind),
                actual: self.version,
            })
        }
    }

    fn parse_as(&self, kind: PrimitiveKind, text: &str) -> Result<LiteralValue, LiteralError> {
        let format_err = || LiteralError::Format {
            kind,
            text: text.to_owned(),
        };

        match kind {
            PrimitiveKind::Boolean => {
                if text.eq_ignore_ascii_case("true") {
                    Ok(LiteralValue::Boolean(true))
                } else if text.eq_ignore_ascii_case("false") {
                    Ok(LiteralValue::Boolean(false))
                } else {
                    Err(format_err())
                }
            }

            PrimitiveKind::Int32 => numeric_body(text)
                .parse::<i32>()
                .map(LiteralValue::Int32)
                .map_err(|_| format_err()),

            PrimitiveKind::Int64 => numeric_body(text)
                .parse::<i64>()
                .map(LiteralValue::Int64)
                .map_err(|_| format_err()),

            PrimitiveKind::Decimal => numeric_body(text)
                .parse::<BigDecimal>()
                .map(LiteralValue::Decimal)
                .map_err(|_| format_err()),

            PrimitiveKind::Double => match text {
                "INF" | "INFf" | "INFF" => Ok(LiteralValue::Double(f64::INFINITY)),
                "-INF" | "-INFf" | "-INFF" => Ok(LiteralValue::Double(f64::NEG_INFINITY)),
                "NaN" | "NaNf" | "NaNF" => Ok(LiteralValue::Double(f64::NAN)),
                _ => numeric_body(text)
                    .parse::<f64>()
                    .map(LiteralValue::Double)
                    .map_err(|_| format_err()),
            },

            PrimitiveKind::Single => match text {
                "INF" | "INFf" | "INFF" => Ok(LiteralValue::Single(f32::INFINITY)),
                "-INF" | "-INFf" | "-INFF" => Ok(LiteralValue::Single(f32::NEG_INFINITY)),
                "NaN" | "NaNf" | "NaNF" => Ok(LiteralValue::Single(f32::NAN)),
                _ => numeric_body(text)
                    .parse::<f32>()
                    .map(LiteralValue::Single)
                    .map_err(|_| format_err()),
            },

            PrimitiveKind::String => unquote(text)
                .map(LiteralValue::String)
                .ok_or_else(format_err),

            PrimitiveKind::DateTime => {
                let inner = prefixed_inner(text, &["datetime"]).ok_or_else(format_err)?;
                NaiveDateTime::parse_from_str(inner, "%Y-%m-%dT%H:%M:%S%.f")
                    .or_else(|_| NaiveDateTime::parse_from_str(inner, "%Y-%m-%dT%H:%M"))
                    .map(LiteralValue::DateTime)
                    .map_err(|_| format_err())
            }

            PrimitiveKind::DateTimeOffset => {
                let inner = prefixed_inner(text, &["datetimeoffset"]).ok_or_else(format_err)?;
                // the offset is mandatory; both forms below refuse to parse
                // without one
                DateTime::parse_from_rfc3339(inner)
                    .or_else(|_| DateTime::parse_from_str(inner, "%Y-%m-%dT%H:%M%:z"))
                    .map(LiteralValue::DateTimeOffset)
                    .map_err(|_| format_err())
            }

            PrimitiveKind::Time => {
                let inner = prefixed_inner(text, &["time"]).ok_or_else(format_err)?;
                duration::parse(inner)
                    .map(LiteralValue::Time)
                    .ok_or_else(format_err)
            }

            PrimitiveKind::Guid => {
                let inner = prefixed_inner(text, &["guid"]).ok_or_else(format_err)?;
                // canonical grouped form only: 8-4-4-4-12
                if inner.len() != 36 {
                    return Err(format_err());
                }
                Uuid::parse_str(inner)
                    .map(LiteralValue::Guid)
                    .map_err(|_| format_err())
            }

            PrimitiveKind::Binary => {
                let body = prefixed_inner(text, &["binary", "x"])
                    .or_else(|| text.strip_prefix("0x"))
                    .or_else(|| text.strip_prefix("0X"))
                    .ok_or_else(format_err)?;
                hex::decode(body)
                    .map(LiteralValue::Binary)
                    .map_err(|_| format_err())
            }

            PrimitiveKind::Geography => {
                let inner = prefixed_inner(text, &["geography"]).ok_or_else(format_err)?;
                Ok(LiteralValue::Geography(self.spatial.parse(inner)?))
            }

            PrimitiveKind::Geometry => {
                let inner = prefixed_inner(text, &["geometry"]).ok_or_else(format_err)?;
                Ok(LiteralValue::Geometry(self.spatial.parse(inner)?))
            }
        }
    }
}

/// Canonical URI text of a value. Re-parsing the result with the value's
/// own kind yields an equal value.
pub fn to_uri_literal(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Boolean(b) => b.to_string(),
        LiteralValue::Int32(i) => i.to_string(),
        LiteralValue::Int64(i) => format!("{i}L"),
        LiteralValue::Decimal(d) => format!("{d}M"),
        LiteralValue::Double(d) => {
            if d.is_nan() {
                "NaN".to_owned()
            } else if *d == f64::INFINITY {
                "INF".to_owned()
            } else if *d == f64::NEG_INFINITY {
                "-INF".to_owned()
            } else {
                format!("{d}D")
            }
        }
        LiteralValue::Single(s) => {
            if s.is_nan() {
                "NaNf".to_owned()
            } else if *s == f32::INFINITY {
                "INFf".to_owned()
            } else if *s == f32::NEG_INFINITY {
                "-INFf".to_owned()
            } else {
                format!("{s}f")
            }
        }
        LiteralValue::String(s) => format!("'{}'", s.replace('\'', "''")),
        LiteralValue::DateTime(dt) => format!("datetime'{}'", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
        LiteralValue::DateTimeOffset(dt) => format!("datetimeoffset'{}'", dt.to_rfc3339()),
        LiteralValue::Time(d) => format!("time'{}'", duration::format(d)),
        LiteralValue::Guid(g) => format!("guid'{g}'"),
        LiteralValue::Binary(bytes) => format!("binary'{}'", hex::encode(bytes)),
        LiteralValue::Null(None) => "null".to_owned(),
        LiteralValue::Null(Some(name)) => format!("null'{name}'"),
        LiteralValue::Geography(v) => format!("geography'{}'", v.body()),
        LiteralValue::Geometry(v) => format!("geometry'{}'", v.body()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Apparent {
    Value(PrimitiveKind),
    Null,
}

/// Apparent kind of literal text, judged from its shape alone: quotes, a
/// type prefix, the `0x` form, keyword spellings, or a numeric suffix.
fn classify(text: &str) -> Result<Apparent, LiteralError> {
    if text.starts_with('\'') {
        return Ok(Apparent::Value(PrimitiveKind::String));
    }
    if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false") {
        return Ok(Apparent::Value(PrimitiveKind::Boolean));
    }
    if text == "null" || text.starts_with("null'") {
        return Ok(Apparent::Null);
    }
    match text {
        "INF" | "-INF" | "NaN" => return Ok(Apparent::Value(PrimitiveKind::Double)),
        "INFf" | "INFF" | "-INFf" | "-INFF" | "NaNf" | "NaNF" => {
            return Ok(Apparent::Value(PrimitiveKind::Single))
        }
        _ => {}
    }
    if text.starts_with("0x") || text.starts_with("0X") {
        return Ok(Apparent::Value(PrimitiveKind::Binary));
    }

    if let Some(idx) = text.find('\'') {
        if text.len() > idx + 1 && text.ends_with('\'') {
            let kind = match text[..idx].to_ascii_lowercase().as_str() {
                "datetime" => PrimitiveKind::DateTime,
                "datetimeoffset" => PrimitiveKind::DateTimeOffset,
                "time" => PrimitiveKind::Time,
                "guid" => PrimitiveKind::Guid,
                "binary" | "x" => PrimitiveKind::Binary,
                "geography" => PrimitiveKind::Geography,
                "geometry" => PrimitiveKind::Geometry,
                _ => return Err(LiteralError::Unrecognized(text.to_owned())),
            };
            return Ok(Apparent::Value(kind));
        }
        return Err(LiteralError::Unrecognized(text.to_owned()));
    }

    classify_numeric(text)
        .map(Apparent::Value)
        .ok_or_else(|| LiteralError::Unrecognized(text.to_owned()))
}

fn classify_numeric(text: &str) -> Option<PrimitiveKind> {
    let body = text.strip_prefix('-').unwrap_or(text);
    if !body.chars().next()?.is_ascii_digit() {
        return None;
    }
    Some(match body.chars().last()? {
        'm' | 'M' => PrimitiveKind::Decimal,
        'd' | 'D' => PrimitiveKind::Double,
        'l' | 'L' => PrimitiveKind::Int64,
        'f' | 'F' => PrimitiveKind::Single,
        _ if body.contains(['.', 'e', 'E']) => PrimitiveKind::Double,
        _ => PrimitiveKind::Int32,
    })
}

/// One trailing type-suffix character stripped, if present.
fn numeric_body(text: &str) -> &str {
    text.strip_suffix(&['m', 'M', 'd', 'D', 'l', 'L', 'f', 'F'][..])
        .unwrap_or(text)
}

/// Text between the delimiting quotes, doubled quotes collapsed. A stray
/// single quote inside is malformed.
fn unquote(text: &str) -> Option<String> {
    let inner = text.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.next() != Some('\'') {
                    return None;
                }
                out.push('\'');
            }
            c => out.push(c),
        }
    }
    Some(out)
}

/// Body of `prefix'body'` for any of the given prefixes, case-insensitively.
fn prefixed_inner<'t>(text: &'t str, prefixes: &[&str]) -> Option<&'t str> {
    for prefix in prefixes {
        let quoted = match text.get(..prefix.len()) {
            Some(head) if head.eq_ignore_ascii_case(prefix) => &text[prefix.len()..],
            _ => continue,
        };
        if quoted.len() >= 2 && quoted.starts_with('\'') && quoted.ends_with('\'') {
            return Some(&quoted[1..quoted.len() - 1]);
        }
    }
    None
}

/// `null` or `null'TypeName'`. The name is the slice between the quotes,
/// which for every accepted input coincides with the fixed-offset
/// arithmetic the grammar implies.
fn parse_null(text: &str) -> Result<LiteralValue, LiteralError> {
    if text == "null" {
        return Ok(LiteralValue::Null(None));
    }
    text.strip_prefix("null")
        .and_then(|quoted| quoted.strip_prefix('\''))
        .and_then(|quoted| quoted.strip_suffix('\''))
        .filter(|name| !name.is_empty() && !name.contains('\''))
        .map(|name| LiteralValue::Null(Some(name.to_owned())))
        .ok_or_else(|| LiteralError::Unrecognized(text.to_owned()))
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn v3() -> LiteralParser<'static> {
        LiteralParser::new(ProtocolVersion::V3)
    }

    fn guid() -> Uuid {
        Uuid::parse_str("0192e0a2-0000-4000-8000-000000000000").unwrap()
    }

    fn offset_value() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2012, 5, 29, 9, 13, 28)
            .unwrap()
    }

    #[test]
    fn round_trips() {
        let values = [
            LiteralValue::Boolean(true),
            LiteralValue::Boolean(false),
            LiteralValue::Int32(-17),
            LiteralValue::Int32(i32::MAX),
            LiteralValue::Int64(i64::MIN),
            LiteralValue::Decimal("3.75".parse().unwrap()),
            LiteralValue::Double(2.5),
            LiteralValue::Double(f64::INFINITY),
            LiteralValue::Double(f64::NEG_INFINITY),
            LiteralValue::Single(0.25),
            LiteralValue::Single(f32::NEG_INFINITY),
            LiteralValue::String("it's".to_owned()),
            LiteralValue::String(String::new()),
            LiteralValue::DateTime(
                NaiveDate::from_ymd_opt(2012, 5, 29)
                    .unwrap()
                    .and_hms_opt(9, 13, 28)
                    .unwrap(),
            ),
            LiteralValue::DateTimeOffset(offset_value()),
            LiteralValue::Time(Duration::hours(12) + Duration::minutes(30)),
            LiteralValue::Guid(guid()),
            LiteralValue::Binary(vec![0x1f, 0xa0, 0x00]),
            LiteralValue::Null(None),
            LiteralValue::Null(Some("Edm.String".to_owned())),
            LiteralValue::Geography(SpatialValue::new(Some(4326), "POINT(1 2)")),
            LiteralValue::Geometry(SpatialValue::new(None, "POINT(0 0)")),
        ];

        for value in values {
            let text = to_uri_literal(&value);
            // inferred
            assert_eq!(Ok(value.clone()), v3().parse(&text, None), "text {text}");
            // and against the value's own kind
            if let Some(kind) = value.primitive_kind() {
                assert_eq!(Ok(value.clone()), v3().parse(&text, Some(kind)), "text {text}");
            }
        }
    }

    #[test]
    fn nan_round_trips_as_nan() {
        let double = v3().parse(&to_uri_literal(&LiteralValue::Double(f64::NAN)), None);
        assert!(matches!(double, Ok(LiteralValue::Double(d)) if d.is_nan()));

        let single = v3().parse(&to_uri_literal(&LiteralValue::Single(f32::NAN)), None);
        assert!(matches!(single, Ok(LiteralValue::Single(s)) if s.is_nan()));
    }

    #[test]
    fn escaped_quote_string_decodes() {
        assert_eq!(
            Ok(LiteralValue::String("it's".to_owned())),
            v3().parse("'it''s'", Some(PrimitiveKind::String))
        );
    }

    #[test]
    fn stray_quote_inside_string_fails() {
        let got = v3().parse("'it's'", Some(PrimitiveKind::String));
        assert_eq!(
            Err(LiteralError::Format {
                kind: PrimitiveKind::String,
                text: "'it's'".to_owned(),
            }),
            got
        );
    }

    #[test]
    fn bare_and_typed_null_are_distinct() {
        let bare = v3().parse("null", None).unwrap();
        let typed = v3().parse("null'Edm.String'", None).unwrap();
        assert_eq!(LiteralValue::Null(None), bare);
        assert_eq!(LiteralValue::Null(Some("Edm.String".to_owned())), typed);
        assert_ne!(bare, typed);
    }

    #[test]
    fn null_satisfies_any_target() {
        assert_eq!(
            Ok(LiteralValue::Null(Some("Edm.Int32".to_owned()))),
            v3().parse("null'Edm.Int32'", Some(PrimitiveKind::String))
        );
    }

    #[test]
    fn malformed_typed_null_fails() {
        for input in ["null''", "null'a'b'", "nullx"] {
            assert!(v3().parse(input, None).is_err(), "input {input}");
        }
    }

    #[test]
    fn numeric_targets_widen_and_narrow() {
        assert_eq!(
            Ok(LiteralValue::Decimal("3".parse().unwrap())),
            v3().parse("3", Some(PrimitiveKind::Decimal))
        );
        assert_eq!(
            Ok(LiteralValue::Double(3.0)),
            v3().parse("3", Some(PrimitiveKind::Double))
        );
        assert_eq!(
            Ok(LiteralValue::Int64(3)),
            v3().parse("3", Some(PrimitiveKind::Int64))
        );
        // narrowing goes through the target's parser and can fail there
        assert_eq!(
            Err(LiteralError::Format {
                kind: PrimitiveKind::Int32,
                text: "3.5".to_owned(),
            }),
            v3().parse("3.5", Some(PrimitiveKind::Int32))
        );
    }

    #[test]
    fn int32_overflow_is_a_failure() {
        let got = v3().parse("4000000000", Some(PrimitiveKind::Int32));
        assert_eq!(
            Err(LiteralError::Format {
                kind: PrimitiveKind::Int32,
                text: "4000000000".to_owned(),
            }),
            got
        );
    }

    #[test]
    fn non_numeric_mismatch_carries_diagnostics() {
        let got = v3().parse_at(
            "Price eq 'abc'",
            "'abc'",
            9,
            Some(PrimitiveKind::Int32),
        );
        assert_eq!(
            Err(LiteralError::TypeMismatch {
                expected: PrimitiveKind::Int32,
                text: "'abc'".to_owned(),
                position: 9,
                expression: "Price eq 'abc'".to_owned(),
            }),
            got
        );
    }

    #[test]
    fn spatial_literals_are_version_gated() {
        let text = "geography'SRID=4326;POINT(1 2)'";
        let gated = LiteralParser::new(ProtocolVersion::V2).parse(text, None);
        assert_eq!(
            Err(LiteralError::VersionGated {
                kind: PrimitiveKind::Geography,
                required: ProtocolVersion::V3,
                actual: ProtocolVersion::V2,
            }),
            gated
        );

        let allowed = v3().parse(text, None).unwrap();
        assert_eq!(
            LiteralValue::Geography(SpatialValue::new(Some(4326), "POINT(1 2)")),
            allowed
        );
    }

    #[test]
    fn guid_requires_canonical_grouping() {
        let got = v3().parse("guid'0192e0a20000400080000000000000000'", None);
        assert!(matches!(
            got,
            Err(LiteralError::Format {
                kind: PrimitiveKind::Guid,
                ..
            })
        ));
    }

    #[test]
    fn binary_forms() {
        let expected = Ok(LiteralValue::Binary(vec![0x1f, 0xa0]));
        assert_eq!(expected, v3().parse("binary'1fA0'", None));
        assert_eq!(expected, v3().parse("X'1fa0'", None));
        assert_eq!(expected, v3().parse("x'1FA0'", None));
        assert_eq!(expected, v3().parse("0x1fa0", None));
    }

    #[test]
    fn odd_length_binary_fails() {
        let got = v3().parse("binary'1fa'", None);
        assert_eq!(
            Err(LiteralError::Format {
                kind: PrimitiveKind::Binary,
                text: "binary'1fa'".to_owned(),
            }),
            got
        );
    }

    #[test]
    fn out_of_range_time_literal_is_a_format_error() {
        let text = "time'P200000000000D'";
        assert_eq!(
            Err(LiteralError::Format {
                kind: PrimitiveKind::Time,
                text: text.to_owned(),
            }),
            v3().parse(text, None)
        );
    }

    #[test]
    fn datetime_profiles() {
        let base = NaiveDate::from_ymd_opt(2012, 5, 29).unwrap();
        assert_eq!(
            Ok(LiteralValue::DateTime(base.and_hms_opt(9, 13, 0).unwrap())),
            v3().parse("datetime'2012-05-29T09:13'", None)
        );
        assert_eq!(
            Ok(LiteralValue::DateTime(
                base.and_hms_milli_opt(9, 13, 28, 123).unwrap()
            )),
            v3().parse("datetime'2012-05-29T09:13:28.123'", None)
        );
        assert!(v3().parse("datetime'2012-13-29T09:13:28'", None).is_err());
    }

    #[test]
    fn datetimeoffset_requires_an_offset() {
        assert_eq!(
            Ok(LiteralValue::DateTimeOffset(offset_value())),
            v3().parse("datetimeoffset'2012-05-29T09:13:28+01:00'", None)
        );
        assert!(v3()
            .parse("datetimeoffset'2012-05-29T09:13:28'", None)
            .is_err());
    }

    #[test]
    fn boolean_parse_is_case_insensitive() {
        assert_eq!(
            Ok(LiteralValue::Boolean(true)),
            v3().parse("TRUE", Some(PrimitiveKind::Boolean))
        );
    }

    #[test]
    fn unrecognized_text_fails() {
        for input in ["", "@", "abc", "foo'bar'"] {
            assert!(
                matches!(v3().parse(input, None), Err(LiteralError::Unrecognized(_))),
                "input {input}"
            );
        }
    }
}
