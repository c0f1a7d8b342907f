use crate::vocab::schema;
use oxrdf::vocab::{rdf, rdfs, xsd};
use oxrdf::{Graph, NamedNodeRef, NamedOrBlankNodeRef, TermRef, Triple, TripleRef};
use rustc_hash::FxHashMap;
use tracing::info;

/// Rewrites the schema.org scalar types into XSD datatypes.
///
/// The `schema:rangeIncludes` values are mapped this way:
///
/// | value | condition | new values |
/// |---|---|---|
/// | `schema:Boolean` | | `xsd:boolean` |
/// | `schema:Text` | only value | `xsd:string` |
/// | `schema:Text` and `schema:URL` | exactly these two values | `xsd:anyURI` |
/// | `schema:URL` | only value | `rdfs:Resource` |
/// | `schema:Number` | | `xsd:decimal`, `xsd:float`, `xsd:double` |
/// | `schema:Float` | | `xsd:float`, `xsd:double` |
/// | `schema:Integer` | | `xsd:decimal` |
/// | `schema:Date`, `schema:DateTime`, `schema:Time` | | `xsd:date`, `xsd:dateTime`, `xsd:time` |
///
/// The conditions are checked against the property ranges in `input`.
/// Every resource typed `schema:DataType` is also typed `rdfs:Datatype`.
/// Then all the triples about the nine built-in scalar types are dropped.
/// Any other triple is copied as is.
///
/// ```
/// use oxrdf::vocab::xsd;
/// use oxrdf::{Graph, NamedNodeRef, TripleRef};
/// use oxschema::normalize_scalars;
/// use oxschema::vocab::schema;
///
/// let url = NamedNodeRef::new("http://schema.org/url")?;
/// let mut input = Graph::new();
/// input.insert(TripleRef::new(url, schema::RANGE_INCLUDES, schema::TEXT));
/// input.insert(TripleRef::new(url, schema::RANGE_INCLUDES, schema::URL));
///
/// let output = normalize_scalars(&input);
/// assert_eq!(output.len(), 1);
/// assert!(output.contains(TripleRef::new(url, schema::RANGE_INCLUDES, xsd::ANY_URI)));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn normalize_scalars(input: &Graph) -> Graph {
    let mut output = Graph::new();
    output.extend(
        input
            .iter()
            .filter(|triple| triple.predicate != schema::RANGE_INCLUDES),
    );

    let mut ranges = FxHashMap::<NamedOrBlankNodeRef<'_>, Vec<TermRef<'_>>>::default();
    for triple in input.triples_for_predicate(schema::RANGE_INCLUDES) {
        ranges.entry(triple.subject).or_default().push(triple.object);
    }
    let mut rewritten = 0;
    for (property, values) in &ranges {
        for value in values {
            if let Some(targets) = value_targets(*value, values) {
                rewritten += 1;
                for target in targets {
                    output.insert(TripleRef::new(*property, schema::RANGE_INCLUDES, *target));
                }
            } else {
                output.insert(TripleRef::new(*property, schema::RANGE_INCLUDES, *value));
            }
        }
    }

    for datatype in input.subjects_for_predicate_object(rdf::TYPE, schema::DATA_TYPE) {
        output.insert(TripleRef::new(datatype, rdf::TYPE, rdfs::DATATYPE));
    }

    for scalar in schema::SCALARS {
        let about = output
            .triples_for_subject(scalar)
            .map(TripleRef::into_owned)
            .collect::<Vec<Triple>>();
        for triple in &about {
            output.remove(triple);
        }
    }

    info!(
        triples = output.len(),
        rewritten_ranges = rewritten,
        "normalized scalar types"
    );
    output
}

/// The values replacing the range `value` of a property whose ranges are `range`, if it is a built-in scalar.
fn value_targets(
    value: TermRef<'_>,
    range: &[TermRef<'_>],
) -> Option<&'static [NamedNodeRef<'static>]> {
    let TermRef::NamedNode(value) = value else {
        return None;
    };
    if value == schema::BOOLEAN {
        Some(&[xsd::BOOLEAN])
    } else if value == schema::TEXT || value == schema::URL {
        if is_only(range, &[schema::TEXT, schema::URL]) {
            Some(&[xsd::ANY_URI])
        } else if !is_only(range, &[value]) {
            None
        } else if value == schema::TEXT {
            Some(&[xsd::STRING])
        } else {
            Some(&[rdfs::RESOURCE])
        }
    } else if value == schema::NUMBER {
        Some(&[xsd::DECIMAL, xsd::FLOAT, xsd::DOUBLE])
    } else if value == schema::FLOAT {
        Some(&[xsd::FLOAT, xsd::DOUBLE])
    } else if value == schema::INTEGER {
        Some(&[xsd::DECIMAL])
    } else if value == schema::DATE {
        Some(&[xsd::DATE])
    } else if value == schema::DATE_TIME {
        Some(&[xsd::DATE_TIME])
    } else if value == schema::TIME {
        Some(&[xsd::TIME])
    } else {
        None
    }
}

/// Checks that `range` is exactly the set `expected`.
fn is_only(range: &[TermRef<'_>], expected: &[NamedNodeRef<'_>]) -> bool {
    range.len() == expected.len()
        && expected
            .iter()
            .all(|expected| range.contains(&TermRef::NamedNode(*expected)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::NamedNode;

    fn property(name: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://schema.org/{name}"))
    }

    fn ranges(graph: &Graph, property: &NamedNode) -> Vec<String> {
        let mut ranges = graph
            .objects_for_subject_predicate(property, schema::RANGE_INCLUDES)
            .map(|o| o.to_string())
            .collect::<Vec<_>>();
        ranges.sort();
        ranges
    }

    fn with_ranges(values: &[NamedNodeRef<'_>]) -> (Graph, NamedNode) {
        let p = property("value");
        let mut graph = Graph::new();
        for value in values {
            graph.insert(TripleRef::new(&p, schema::RANGE_INCLUDES, *value));
        }
        (graph, p)
    }

    #[test]
    fn boolean_is_mapped() {
        let (input, p) = with_ranges(&[schema::BOOLEAN]);
        assert_eq!(
            ranges(&normalize_scalars(&input), &p),
            ["<http://www.w3.org/2001/XMLSchema#boolean>"]
        );
    }

    #[test]
    fn text_alone_is_string() {
        let (input, p) = with_ranges(&[schema::TEXT]);
        assert_eq!(
            ranges(&normalize_scalars(&input), &p),
            ["<http://www.w3.org/2001/XMLSchema#string>"]
        );
    }

    #[test]
    fn url_alone_is_resource() {
        let (input, p) = with_ranges(&[schema::URL]);
        assert_eq!(
            ranges(&normalize_scalars(&input), &p),
            ["<http://www.w3.org/2000/01/rdf-schema#Resource>"]
        );
    }

    #[test]
    fn text_and_url_merge_into_any_uri() {
        let (input, p) = with_ranges(&[schema::URL, schema::TEXT]);
        assert_eq!(
            ranges(&normalize_scalars(&input), &p),
            ["<http://www.w3.org/2001/XMLSchema#anyURI>"]
        );
    }

    #[test]
    fn text_with_a_class_is_kept() {
        let person = property("Person");
        let (input, p) = with_ranges(&[schema::TEXT, person.as_ref()]);
        assert_eq!(
            ranges(&normalize_scalars(&input), &p),
            ["<http://schema.org/Person>", "<http://schema.org/Text>"]
        );
    }

    #[test]
    fn number_fans_out() {
        let (input, p) = with_ranges(&[schema::NUMBER]);
        assert_eq!(
            ranges(&normalize_scalars(&input), &p),
            [
                "<http://www.w3.org/2001/XMLSchema#decimal>",
                "<http://www.w3.org/2001/XMLSchema#double>",
                "<http://www.w3.org/2001/XMLSchema#float>"
            ]
        );
    }

    #[test]
    fn float_fans_out() {
        let (input, p) = with_ranges(&[schema::FLOAT]);
        assert_eq!(
            ranges(&normalize_scalars(&input), &p),
            [
                "<http://www.w3.org/2001/XMLSchema#double>",
                "<http://www.w3.org/2001/XMLSchema#float>"
            ]
        );
    }

    #[test]
    fn temporal_types_and_integer_are_mapped() {
        let (input, p) = with_ranges(&[
            schema::DATE,
            schema::DATE_TIME,
            schema::TIME,
            schema::INTEGER,
        ]);
        assert_eq!(
            ranges(&normalize_scalars(&input), &p),
            [
                "<http://www.w3.org/2001/XMLSchema#date>",
                "<http://www.w3.org/2001/XMLSchema#dateTime>",
                "<http://www.w3.org/2001/XMLSchema#decimal>",
                "<http://www.w3.org/2001/XMLSchema#time>"
            ]
        );
    }

    #[test]
    fn scalar_descriptions_are_dropped() {
        let css = property("CssSelectorType");
        let mut input = Graph::new();
        input.insert(TripleRef::new(schema::TEXT, rdf::TYPE, schema::DATA_TYPE));
        input.insert(TripleRef::new(schema::TEXT, rdf::TYPE, rdfs::CLASS));
        input.insert(TripleRef::new(schema::INTEGER, rdfs::SUB_CLASS_OF, schema::NUMBER));
        input.insert(TripleRef::new(&css, rdf::TYPE, schema::DATA_TYPE));
        input.insert(TripleRef::new(&css, rdfs::SUB_CLASS_OF, schema::TEXT));

        let output = normalize_scalars(&input);
        for scalar in schema::SCALARS {
            assert_eq!(output.triples_for_subject(scalar).count(), 0);
        }
        assert!(output.contains(TripleRef::new(&css, rdf::TYPE, rdfs::DATATYPE)));
        assert!(output.contains(TripleRef::new(&css, rdf::TYPE, schema::DATA_TYPE)));
        assert!(output.contains(TripleRef::new(&css, rdfs::SUB_CLASS_OF, schema::TEXT)));
        assert_eq!(output.len(), 3);
    }

    #[test]
    fn input_is_left_untouched() {
        let (input, p) = with_ranges(&[schema::NUMBER]);
        normalize_scalars(&input);
        assert_eq!(ranges(&input, &p), ["<http://schema.org/Number>"]);
    }
}
