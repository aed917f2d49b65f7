use thiserror::Error;

/// Decoded body of a geography/geometry literal: an optional spatial
/// reference id and the coordinate text it qualifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpatialValue {
    pub srid: Option<u32>,
    pub wkt: String,
}

impl SpatialValue {
    pub fn new(srid: Option<u32>, wkt: &str) -> Self {
        Self {
            srid,
            wkt: wkt.to_owned(),
        }
    }

    /// The SRID-qualified body as it appears between the literal's quotes.
    pub fn body(&self) -> String {
        match self.srid {
            Some(srid) => format!("SRID={srid};{}", self.wkt),
            None => self.wkt.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpatialError {
    #[error("invalid SRID in spatial literal: '{0}'")]
    InvalidSrid(String),
    #[error("spatial literal has no coordinate text")]
    EmptyCoordinateText,
}

/// Turns the body of a geography/geometry literal into a spatial value.
/// Passed explicitly to whatever needs it, never held as a global.
pub trait SpatialParser {
    fn parse(&self, body: &str) -> Result<SpatialValue, SpatialError>;
}

/// Default parser: splits an optional `SRID=n;` head off the coordinate
/// text and leaves the well-known-text tail uninterpreted.
#[derive(Debug, Default, Clone, Copy)]
pub struct WellKnownTextParser;

impl SpatialParser for WellKnownTextParser {
    fn parse(&self, body: &str) -> Result<SpatialValue, SpatialError> {
        let (srid, wkt) = match body.split_once(';') {
            Some((head, tail))
                if head.get(..5).is_some_and(|h| h.eq_ignore_ascii_case("SRID=")) =>
            {
                let srid = head[5..]
                    .parse::<u32>()
                    .map_err(|_| SpatialError::InvalidSrid(head.to_owned()))?;
                (Some(srid), tail)
            }
            _ => (None, body),
        };

        if wkt.trim().is_empty() {
            return Err(SpatialError::EmptyCoordinateText);
        }

        Ok(SpatialValue::new(srid, wkt))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn srid_qualified_body() {
        let got = WellKnownTextParser.parse("SRID=4326;POINT(-122.3 47.6)").unwrap();
        assert_eq!(got.srid, Some(4326));
        assert_eq!(got.wkt, "POINT(-122.3 47.6)");
        assert_eq!(got.body(), "SRID=4326;POINT(-122.3 47.6)");
    }

    #[test]
    fn bare_wkt_body() {
        let got = WellKnownTextParser.parse("POINT(1 2)").unwrap();
        assert_eq!(got.srid, None);
        assert_eq!(got.body(), "POINT(1 2)");
    }

    #[test]
    fn srid_prefix_is_case_insensitive() {
        let got = WellKnownTextParser.parse("srid=0;LINESTRING(0 0, 1 1)").unwrap();
        assert_eq!(got.srid, Some(0));
    }

    #[test]
    fn bad_srid_fails() {
        let got = WellKnownTextParser.parse("SRID=abc;POINT(1 2)");
        assert_eq!(got, Err(SpatialError::InvalidSrid("SRID=abc".to_owned())));
    }

    #[test]
    fn empty_coordinates_fail() {
        let got = WellKnownTextParser.parse("SRID=4326;");
        assert_eq!(got, Err(SpatialError::EmptyCoordinateText));
    }
}
