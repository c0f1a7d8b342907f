use crate::vocab::XSD_NAMESPACE;
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Graph, NamedOrBlankNodeRef, TripleRef};

/// Checks if `resource` denotes a scalar datatype in `graph`.
///
/// It is the case if its IRI is in the XSD namespace or if `graph` asserts `resource rdf:type rdfs:Datatype`.
/// The answer only depends on the graph passed in.
///
/// ```
/// use oxrdf::vocab::{rdf, rdfs, xsd};
/// use oxrdf::{Graph, NamedNodeRef, TripleRef};
/// use oxschema::is_datatype;
///
/// let mut graph = Graph::new();
/// assert!(is_datatype(xsd::STRING, &graph));
///
/// let css = NamedNodeRef::new("http://schema.org/CssSelectorType")?;
/// assert!(!is_datatype(css, &graph));
/// graph.insert(TripleRef::new(css, rdf::TYPE, rdfs::DATATYPE));
/// assert!(is_datatype(css, &graph));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn is_datatype<'a>(resource: impl Into<NamedOrBlankNodeRef<'a>>, graph: &Graph) -> bool {
    let resource = resource.into();
    if let NamedOrBlankNodeRef::NamedNode(node) = resource {
        if node.as_str().starts_with(XSD_NAMESPACE) {
            return true;
        }
    }
    graph.contains(TripleRef::new(resource, rdf::TYPE, rdfs::DATATYPE))
}
