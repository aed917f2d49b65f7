use std::fmt::Display;

pub mod spatial;

/// The scalar type family of the entity data model. The full model (entity
/// types, complex types, containers) lives outside this workspace; the lexer
/// and literal converter only ever need to name one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Boolean,
    Int32,
    Int64,
    Decimal,
    Double,
    Single,
    String,
    DateTime,
    DateTimeOffset,
    Time,
    Guid,
    Binary,
    Geography,
    Geometry,
}

impl PrimitiveKind {
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "Edm.Boolean",
            PrimitiveKind::Int32 => "Edm.Int32",
            PrimitiveKind::Int64 => "Edm.Int64",
            PrimitiveKind::Decimal => "Edm.Decimal",
            PrimitiveKind::Double => "Edm.Double",
            PrimitiveKind::Single => "Edm.Single",
            PrimitiveKind::String => "Edm.String",
            PrimitiveKind::DateTime => "Edm.DateTime",
            PrimitiveKind::DateTimeOffset => "Edm.DateTimeOffset",
            PrimitiveKind::Time => "Edm.Time",
            PrimitiveKind::Guid => "Edm.Guid",
            PrimitiveKind::Binary => "Edm.Binary",
            PrimitiveKind::Geography => "Edm.Geography",
            PrimitiveKind::Geometry => "Edm.Geometry",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Int32
                | PrimitiveKind::Int64
                | PrimitiveKind::Decimal
                | PrimitiveKind::Double
                | PrimitiveKind::Single
        )
    }

    pub fn is_spatial(self) -> bool {
        matches!(self, PrimitiveKind::Geography | PrimitiveKind::Geometry)
    }
}

impl Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Version of the URI protocol in effect. Later versions admit more literal
/// forms; the ordering is the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProtocolVersion {
    V1,
    V2,
    V3,
}

impl ProtocolVersion {
    /// Lowest version in which literals of `kind` may appear in a URI.
    pub fn required_for(kind: PrimitiveKind) -> ProtocolVersion {
        if kind.is_spatial() {
            ProtocolVersion::V3
        } else {
            ProtocolVersion::V1
        }
    }

    pub fn supports(self, kind: PrimitiveKind) -> bool {
        self >= Self::required_for(kind)
    }
}

impl Display for ProtocolVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let val = match self {
            ProtocolVersion::V1 => "1.0",
            ProtocolVersion::V2 => "2.0",
            ProtocolVersion::V3 => "3.0",
        };
        write!(f, "{val}")
    }
}

/// A resolved type name, with its primitive kind when the type is scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub name: String,
    pub primitive: Option<PrimitiveKind>,
}

impl TypeRef {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self {
            name: kind.name().to_owned(),
            primitive: Some(kind),
        }
    }

    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            primitive: None,
        }
    }
}

/// Capability exposed by the model layer to the parsers built on top of the
/// lexer. Lookups answer with absence, never with an error.
pub trait TypeResolver {
    /// Element type of a named entity set.
    fn entity_set_element_type(&self, set_name: &str) -> Option<TypeRef>;

    /// Return type of a named service operation.
    fn operation_return_type(&self, operation_name: &str) -> Option<TypeRef>;

    /// Declared type of one parameter of a named service operation.
    fn operation_parameter_type(
        &self,
        operation_name: &str,
        parameter_name: &str,
    ) -> Option<TypeRef>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn spatial_requires_v3() {
        assert!(!ProtocolVersion::V2.supports(PrimitiveKind::Geography));
        assert!(ProtocolVersion::V3.supports(PrimitiveKind::Geometry));
        assert!(ProtocolVersion::V1.supports(PrimitiveKind::Guid));
    }

    #[test]
    fn qualified_names() {
        assert_eq!(PrimitiveKind::DateTimeOffset.to_string(), "Edm.DateTimeOffset");
        assert_eq!(TypeRef::primitive(PrimitiveKind::Int32).name, "Edm.Int32");
    }
}
