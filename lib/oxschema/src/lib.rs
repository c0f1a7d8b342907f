#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod class_set;
mod collection;
mod datatype;
mod error;
pub mod io;
mod namespace;
mod owl;
mod rdfs;
mod scalar;
pub mod vocab;

pub use crate::class_set::{ClassSet, canonical_name, local_name};
pub use crate::collection::read_list;
pub use crate::datatype::is_datatype;
pub use crate::error::{LoadError, UnresolvedResourceError};
pub use crate::namespace::Namespace;
pub use crate::owl::to_owl;
pub use crate::rdfs::to_rdfs;
pub use crate::scalar::normalize_scalars;
use oxrdf::{Graph, NamedOrBlankNodeRef, TermRef};
use std::fmt;

/// The kind of ontology to build from a vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// A plain RDFS vocabulary, see [`to_rdfs`].
    #[default]
    Rdfs,
    /// An OWL ontology, see [`to_owl`].
    Owl,
}

impl Target {
    /// Runs the translation.
    ///
    /// ```
    /// use oxrdf::Graph;
    /// use oxschema::{Namespace, Target};
    ///
    /// let output = Target::Owl.transform(&Graph::new(), &Namespace::default());
    /// assert!(output.is_empty());
    /// ```
    pub fn transform(self, vocabulary: &Graph, namespace: &Namespace) -> Graph {
        match self {
            Self::Rdfs => to_rdfs(vocabulary, namespace),
            Self::Owl => to_owl(vocabulary, namespace),
        }
    }

    /// The name of the target, `RDFS` or `OWL`.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rdfs => "RDFS",
            Self::Owl => "OWL",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The term as a resource if it is not a literal.
pub(crate) fn as_resource(term: TermRef<'_>) -> Option<NamedOrBlankNodeRef<'_>> {
    if let TermRef::NamedNode(node) = term {
        Some(node.into())
    } else if let TermRef::BlankNode(node) = term {
        Some(node.into())
    } else {
        None
    }
}

/// The IRI or the blank node id.
pub(crate) fn identifier(resource: NamedOrBlankNodeRef<'_>) -> &str {
    match resource {
        NamedOrBlankNodeRef::NamedNode(node) => node.as_str(),
        NamedOrBlankNodeRef::BlankNode(node) => node.as_str(),
    }
}
