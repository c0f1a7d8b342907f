use crate::vocab::schema;
use oxiri::{Iri, IriParseError};
use oxrdf::NamedNode;
use std::fmt;

/// The namespace under which canonical union classes are minted.
///
/// ```
/// use oxschema::Namespace;
///
/// let namespace = Namespace::new("http://example.com/voc#")?;
/// assert_eq!(namespace.mint("BookOrMovie").as_str(), "http://example.com/voc#BookOrMovie");
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    iri: String,
}

impl Namespace {
    /// Validates the namespace IRI.
    pub fn new(iri: impl Into<String>) -> Result<Self, IriParseError> {
        Ok(Self {
            iri: Iri::parse(iri.into())?.into_inner(),
        })
    }

    /// Returns the namespace IRI.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.iri
    }

    /// Builds the IRI `{namespace}{local_name}`.
    ///
    /// Local names are taken from already valid IRIs so the concatenation stays a valid IRI.
    pub fn mint(&self, local_name: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("{}{local_name}", self.iri))
    }
}

impl Default for Namespace {
    /// The schema.org namespace.
    fn default() -> Self {
        Self {
            iri: schema::NAMESPACE.into(),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.iri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_schema_org() {
        assert_eq!(Namespace::default().as_str(), "http://schema.org/");
    }

    #[test]
    fn relative_namespace_is_rejected() {
        Namespace::new("voc/").unwrap_err();
    }

    #[test]
    fn mint_appends_local_name() {
        let namespace = Namespace::new("http://example.com/").unwrap();
        assert_eq!(
            namespace.mint("PersonOrOrganization"),
            NamedNode::new("http://example.com/PersonOrOrganization").unwrap()
        );
    }
}
