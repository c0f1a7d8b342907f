use crate::collection::insert_list;
use crate::datatype::is_datatype;
use crate::namespace::Namespace;
use crate::rdfs::to_rdfs;
use crate::vocab::{owl, schema};
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Graph, NamedNodeRef, NamedOrBlankNode, NamedOrBlankNodeRef, TripleRef};
use tracing::info;

/// Translates a schema.org style vocabulary into an OWL ontology.
///
/// The [RDFS translation](to_rdfs) is computed first, then:
/// * every class becomes an `owl:Class`.
///   A class with subclasses is the `owl:disjointUnionOf` of all of them,
///   else a class with instances is the `owl:oneOf` of all of them;
/// * every property becomes an `owl:DatatypeProperty` if one of its ranges is a datatype,
///   else an `owl:ObjectProperty`, and keeps its domain, range and super properties;
/// * `schema:inverseOf` triples of `vocabulary` become `owl:inverseOf` triples.
///
/// The subclasses listed in a disjoint union are not declared pairwise disjoint on their own.
/// List members are sorted by IRI.
///
/// A union of datatypes, like `decimalOrdoubleOrfloat` minted for `schema:Number`, is typed as a class.
/// Properties ranging over it become object properties and the union lists XSD datatypes,
/// so the output is not a valid OWL 2 DL ontology when the vocabulary has such ranges.
///
/// ```
/// use oxrdf::vocab::rdf;
/// use oxrdf::{Graph, NamedNodeRef, TripleRef};
/// use oxschema::vocab::{owl, schema};
/// use oxschema::{Namespace, to_owl};
///
/// let author = NamedNodeRef::new("http://schema.org/author")?;
/// let person = NamedNodeRef::new("http://schema.org/Person")?;
///
/// let mut vocabulary = Graph::new();
/// vocabulary.insert(TripleRef::new(author, rdf::TYPE, rdf::PROPERTY));
/// vocabulary.insert(TripleRef::new(author, schema::RANGE_INCLUDES, person));
///
/// let output = to_owl(&vocabulary, &Namespace::default());
/// assert!(output.contains(TripleRef::new(author, rdf::TYPE, owl::OBJECT_PROPERTY)));
/// assert!(output.contains(TripleRef::new(person, rdf::TYPE, owl::CLASS)));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn to_owl(vocabulary: &Graph, namespace: &Namespace) -> Graph {
    let rdfs_graph = to_rdfs(vocabulary, namespace);
    let mut output = Graph::new();

    let (mut unions, mut enumerations) = (0, 0);
    for class in rdfs_graph.subjects_for_predicate_object(rdf::TYPE, rdfs::CLASS) {
        output.insert(TripleRef::new(class, rdf::TYPE, owl::CLASS));
        let subclasses =
            sorted(rdfs_graph.subjects_for_predicate_object(rdfs::SUB_CLASS_OF, class));
        if !subclasses.is_empty() {
            insert_class_list(&mut output, class, owl::DISJOINT_UNION_OF, &subclasses);
            unions += 1;
            continue;
        }
        let instances = sorted(rdfs_graph.subjects_for_predicate_object(rdf::TYPE, class));
        if !instances.is_empty() {
            insert_class_list(&mut output, class, owl::ONE_OF, &instances);
            enumerations += 1;
        }
    }

    let (mut object_properties, mut datatype_properties, mut inverses) = (0, 0, 0);
    for property in rdfs_graph.subjects_for_predicate_object(rdf::TYPE, rdf::PROPERTY) {
        let kind = if rdfs_graph
            .objects_for_subject_predicate(property, rdfs::RANGE)
            .filter_map(crate::as_resource)
            .any(|range| is_datatype(range, &rdfs_graph))
        {
            datatype_properties += 1;
            owl::DATATYPE_PROPERTY
        } else {
            object_properties += 1;
            owl::OBJECT_PROPERTY
        };
        output.insert(TripleRef::new(property, rdf::TYPE, kind));
        output.extend(rdfs_graph.triples_for_subject(property).filter(|triple| {
            [rdfs::DOMAIN, rdfs::RANGE, rdfs::SUB_PROPERTY_OF].contains(&triple.predicate)
        }));
        // The RDFS translation does not keep schema:inverseOf
        for inverse in vocabulary
            .objects_for_subject_predicate(property, schema::INVERSE_OF)
            .filter_map(crate::as_resource)
        {
            output.insert(TripleRef::new(property, owl::INVERSE_OF, inverse));
            inverses += 1;
        }
    }

    info!(
        unions,
        enumerations,
        object_properties,
        datatype_properties,
        inverses,
        triples = output.len(),
        "built OWL ontology"
    );
    output
}

fn insert_class_list(
    output: &mut Graph,
    class: NamedOrBlankNodeRef<'_>,
    predicate: NamedNodeRef<'_>,
    items: &[NamedOrBlankNode],
) {
    let head = insert_list(
        output,
        &[crate::identifier(class), predicate.as_str()],
        items,
    );
    output.insert(TripleRef::new(class, predicate, &head));
}

fn sorted<'a>(resources: impl Iterator<Item = NamedOrBlankNodeRef<'a>>) -> Vec<NamedOrBlankNode> {
    let mut resources = resources.collect::<Vec<_>>();
    resources.sort_by_key(|resource| {
        (
            matches!(resource, NamedOrBlankNodeRef::BlankNode(_)),
            crate::identifier(*resource),
        )
    });
    resources
        .into_iter()
        .map(NamedOrBlankNodeRef::into_owned)
        .collect()
}
