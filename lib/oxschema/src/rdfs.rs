use crate::class_set::ClassSet;
use crate::datatype::is_datatype;
use crate::namespace::Namespace;
use crate::scalar::normalize_scalars;
use crate::vocab::schema;
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Graph, NamedNodeRef, NamedOrBlankNode, NamedOrBlankNodeRef, TripleRef};
use rustc_hash::FxHashSet;
use tracing::{info, warn};

/// Translates a schema.org style vocabulary into an RDFS vocabulary.
///
/// The output only uses `rdf:type`, `rdfs:subClassOf`, `rdfs:subPropertyOf`, `rdfs:domain` and `rdfs:range`:
/// * scalar types are first rewritten with [`normalize_scalars`];
/// * classes that are not datatypes are kept with their `rdfs:subClassOf` triples and their instances;
/// * properties are kept with their `rdfs:subPropertyOf` triples;
/// * the `schema:domainIncludes` (resp. `schema:rangeIncludes`) values of each property become a single
///   `rdfs:domain` (resp. `rdfs:range`) pointing to their [`ClassSet`] canonical class.
///   Union members become subclasses of the union.
///
/// Labels and comments are not carried over.
///
/// ```
/// use oxrdf::vocab::{rdf, rdfs};
/// use oxrdf::{Graph, NamedNodeRef, TripleRef};
/// use oxschema::vocab::schema;
/// use oxschema::{Namespace, to_rdfs};
///
/// let work_example = NamedNodeRef::new("http://schema.org/workExample")?;
/// let book = NamedNodeRef::new("http://schema.org/Book")?;
/// let movie = NamedNodeRef::new("http://schema.org/Movie")?;
/// let union = NamedNodeRef::new("http://schema.org/BookOrMovie")?;
///
/// let mut vocabulary = Graph::new();
/// vocabulary.insert(TripleRef::new(work_example, rdf::TYPE, rdf::PROPERTY));
/// vocabulary.insert(TripleRef::new(work_example, schema::RANGE_INCLUDES, book));
/// vocabulary.insert(TripleRef::new(work_example, schema::RANGE_INCLUDES, movie));
///
/// let output = to_rdfs(&vocabulary, &Namespace::default());
/// assert!(output.contains(TripleRef::new(work_example, rdfs::RANGE, union)));
/// assert!(output.contains(TripleRef::new(book, rdfs::SUB_CLASS_OF, union)));
/// assert!(output.contains(TripleRef::new(movie, rdfs::SUB_CLASS_OF, union)));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn to_rdfs(vocabulary: &Graph, namespace: &Namespace) -> Graph {
    let normalized = normalize_scalars(vocabulary);
    let mut output = Graph::new();

    let mut classes = 0;
    for class in normalized.subjects_for_predicate_object(rdf::TYPE, rdfs::CLASS) {
        if is_datatype(class, &normalized) {
            continue;
        }
        classes += 1;
        output.insert(TripleRef::new(class, rdf::TYPE, rdfs::CLASS));
        for super_class in normalized.objects_for_subject_predicate(class, rdfs::SUB_CLASS_OF) {
            output.insert(TripleRef::new(class, rdfs::SUB_CLASS_OF, super_class));
        }
        for instance in normalized.subjects_for_predicate_object(rdf::TYPE, class) {
            output.insert(TripleRef::new(instance, rdf::TYPE, class));
        }
    }

    let mut properties = 0;
    let mut unions = FxHashSet::default();
    for property in normalized.subjects_for_predicate_object(rdf::TYPE, rdf::PROPERTY) {
        properties += 1;
        output.insert(TripleRef::new(property, rdf::TYPE, rdf::PROPERTY));
        for super_property in
            normalized.objects_for_subject_predicate(property, rdfs::SUB_PROPERTY_OF)
        {
            output.insert(TripleRef::new(property, rdfs::SUB_PROPERTY_OF, super_property));
        }

        for (candidate, predicate) in [
            (schema::DOMAIN_INCLUDES, rdfs::DOMAIN),
            (schema::RANGE_INCLUDES, rdfs::RANGE),
        ] {
            let set = ClassSet::canonicalize(
                candidates(&normalized, property, candidate),
                namespace,
            );
            insert_class_set(&mut output, &normalized, property, predicate, &set);
            if set.is_union() {
                unions.insert(set.canonical().into_owned());
            }
        }
    }

    info!(
        classes,
        properties,
        unions = unions.len(),
        triples = output.len(),
        "built RDFS vocabulary"
    );
    output
}

/// The classes given as `predicate` values of `property`, in graph order.
fn candidates(
    graph: &Graph,
    property: NamedOrBlankNodeRef<'_>,
    predicate: NamedNodeRef<'_>,
) -> Vec<NamedOrBlankNode> {
    graph
        .objects_for_subject_predicate(property, predicate)
        .filter_map(|value| {
            let class = crate::as_resource(value);
            if class.is_none() {
                warn!(%property, %predicate, %value, "ignored a literal where a class is expected");
            }
            class.map(NamedOrBlankNodeRef::into_owned)
        })
        .collect()
}

/// Writes `property predicate canonical`, the canonical class type and the union subclass triples.
fn insert_class_set(
    output: &mut Graph,
    normalized: &Graph,
    property: NamedOrBlankNodeRef<'_>,
    predicate: NamedNodeRef<'_>,
    set: &ClassSet,
) {
    let canonical = set.canonical();
    output.insert(TripleRef::new(property, predicate, canonical));
    let kind = if is_datatype(canonical, normalized) {
        rdfs::DATATYPE
    } else {
        rdfs::CLASS
    };
    output.insert(TripleRef::new(canonical, rdf::TYPE, kind));
    for member in set.members() {
        output.insert(TripleRef::new(member, rdfs::SUB_CLASS_OF, canonical));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::vocab::xsd;
    use oxrdf::{Literal, NamedNode};

    fn term(name: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://schema.org/{name}"))
    }

    #[test]
    fn datatype_classes_are_not_classes() {
        let css = term("CssSelectorType");
        let book = term("Book");
        let mut input = Graph::new();
        input.insert(TripleRef::new(&css, rdf::TYPE, rdfs::CLASS));
        input.insert(TripleRef::new(&css, rdf::TYPE, schema::DATA_TYPE));
        input.insert(TripleRef::new(&book, rdf::TYPE, rdfs::CLASS));

        let output = to_rdfs(&input, &Namespace::default());
        assert!(!output.contains(TripleRef::new(&css, rdf::TYPE, rdfs::CLASS)));
        assert!(output.contains(TripleRef::new(&book, rdf::TYPE, rdfs::CLASS)));
    }

    #[test]
    fn enumeration_members_are_kept() {
        let day = term("DayOfWeek");
        let monday = term("Monday");
        let mut input = Graph::new();
        input.insert(TripleRef::new(&day, rdf::TYPE, rdfs::CLASS));
        input.insert(TripleRef::new(&day, rdfs::SUB_CLASS_OF, term("Enumeration").as_ref()));
        input.insert(TripleRef::new(&monday, rdf::TYPE, &day));

        let output = to_rdfs(&input, &Namespace::default());
        assert!(output.contains(TripleRef::new(&monday, rdf::TYPE, &day)));
        assert!(output.contains(TripleRef::new(
            &day,
            rdfs::SUB_CLASS_OF,
            term("Enumeration").as_ref()
        )));
    }

    #[test]
    fn empty_domain_is_resource() {
        let name = term("name");
        let mut input = Graph::new();
        input.insert(TripleRef::new(&name, rdf::TYPE, rdf::PROPERTY));
        input.insert(TripleRef::new(&name, rdfs::SUB_PROPERTY_OF, rdfs::LABEL));
        input.insert(TripleRef::new(&name, schema::RANGE_INCLUDES, schema::TEXT));

        let output = to_rdfs(&input, &Namespace::default());
        assert!(output.contains(TripleRef::new(&name, rdfs::DOMAIN, rdfs::RESOURCE)));
        assert!(output.contains(TripleRef::new(rdfs::RESOURCE, rdf::TYPE, rdfs::CLASS)));
        assert!(output.contains(TripleRef::new(&name, rdfs::RANGE, xsd::STRING)));
        assert!(output.contains(TripleRef::new(xsd::STRING, rdf::TYPE, rdfs::DATATYPE)));
        assert!(output.contains(TripleRef::new(&name, rdfs::SUB_PROPERTY_OF, rdfs::LABEL)));
        assert_eq!(output.triples_for_predicate(rdfs::SUB_CLASS_OF).count(), 0);
    }

    #[test]
    fn literal_candidates_are_ignored() {
        let about = term("about");
        let thing = term("Thing");
        let mut input = Graph::new();
        input.insert(TripleRef::new(&about, rdf::TYPE, rdf::PROPERTY));
        input.insert(TripleRef::new(&about, schema::DOMAIN_INCLUDES, &thing));
        input.insert(TripleRef::new(
            &about,
            schema::DOMAIN_INCLUDES,
            &Literal::new_simple_literal("Thing"),
        ));

        let output = to_rdfs(&input, &Namespace::default());
        assert!(output.contains(TripleRef::new(&about, rdfs::DOMAIN, &thing)));
        assert_eq!(output.triples_for_predicate(rdfs::DOMAIN).count(), 1);
    }

    #[test]
    fn inclusion_predicates_are_gone() {
        let author = term("author");
        let mut input = Graph::new();
        input.insert(TripleRef::new(&author, rdf::TYPE, rdf::PROPERTY));
        for domain in ["Book", "Movie", "Rating"] {
            input.insert(TripleRef::new(&author, schema::DOMAIN_INCLUDES, term(domain).as_ref()));
        }
        for range in ["Person", "Organization"] {
            input.insert(TripleRef::new(&author, schema::RANGE_INCLUDES, term(range).as_ref()));
        }

        let output = to_rdfs(&input, &Namespace::default());
        assert_eq!(output.triples_for_predicate(schema::DOMAIN_INCLUDES).count(), 0);
        assert_eq!(output.triples_for_predicate(schema::RANGE_INCLUDES).count(), 0);
        assert!(output.contains(TripleRef::new(
            &author,
            rdfs::DOMAIN,
            term("BookOrMovieOrRating").as_ref()
        )));
        assert!(output.contains(TripleRef::new(
            &author,
            rdfs::RANGE,
            term("OrganizationOrPerson").as_ref()
        )));
        assert_eq!(output.triples_for_predicate(rdfs::SUB_CLASS_OF).count(), 5);
    }
}
