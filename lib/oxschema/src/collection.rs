//! [RDF collections](https://www.w3.org/TR/rdf11-mt/#rdf-collections) with reproducible blank nodes.

use oxrdf::vocab::rdf;
use oxrdf::{BlankNode, Graph, NamedOrBlankNode, NamedOrBlankNodeRef, Term, TripleRef};
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Builds a blank node whose id only depends on `seed` and `position`.
///
/// Two runs over the same input then produce equal graphs and not only isomorphic ones.
pub(crate) fn stable_blank_node(seed: &[&str], position: u64) -> BlankNode {
    let mut hasher = FxHasher::default();
    seed.hash(&mut hasher);
    BlankNode::new_from_unique_id((u128::from(hasher.finish()) << 64) | u128::from(position))
}

/// Inserts into `graph` an `rdf:first`/`rdf:rest` chain holding `items` in order and returns its head.
///
/// `seed` identifies the list for blank node generation. An empty list is `rdf:nil`.
pub(crate) fn insert_list(graph: &mut Graph, seed: &[&str], items: &[NamedOrBlankNode]) -> Term {
    let mut current = Term::NamedNode(rdf::NIL.into_owned());
    // Build list from back to front
    for (position, item) in items.iter().enumerate().rev() {
        let cell = stable_blank_node(seed, position as u64);
        graph.insert(TripleRef::new(&cell, rdf::FIRST, item));
        graph.insert(TripleRef::new(&cell, rdf::REST, &current));
        current = Term::BlankNode(cell);
    }
    current
}

/// Reads back the items of the list starting at `head`.
///
/// Stops at the first malformed cell.
pub fn read_list<'a>(graph: &'a Graph, head: NamedOrBlankNodeRef<'a>) -> Vec<NamedOrBlankNodeRef<'a>> {
    let mut items = Vec::new();
    let mut current = head;
    while current != NamedOrBlankNodeRef::from(rdf::NIL) && items.len() <= graph.len() {
        let Some(first) = graph
            .object_for_subject_predicate(current, rdf::FIRST)
            .and_then(crate::as_resource)
        else {
            break;
        };
        items.push(first);
        let Some(rest) = graph
            .object_for_subject_predicate(current, rdf::REST)
            .and_then(crate::as_resource)
        else {
            break;
        };
        current = rest;
    }
    items
}
