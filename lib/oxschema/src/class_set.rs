use crate::collection::stable_blank_node;
use crate::error::UnresolvedResourceError;
use crate::identifier;
use crate::namespace::Namespace;
use oxrdf::vocab::rdfs;
use oxrdf::{NamedOrBlankNode, NamedOrBlankNodeRef};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Separator between member local names in a canonical union class name.
const SEPARATOR: &str = "Or";

/// The classes declared as domain or range of the same property, with the class standing for all of them.
///
/// * no member: the canonical class is `rdfs:Resource`;
/// * one member: the canonical class is that member and [`members`](Self::members) is empty;
/// * two members or more: the canonical class is minted in the namespace from the sorted member local names
///   joined by `Or`, and the members are its subclasses.
///
/// ```
/// use oxrdf::NamedNode;
/// use oxschema::{ClassSet, Namespace};
///
/// let set = ClassSet::canonicalize(
///     [
///         NamedNode::new("http://schema.org/Movie")?.into(),
///         NamedNode::new("http://schema.org/Book")?.into(),
///     ],
///     &Namespace::default(),
/// );
/// assert_eq!(set.canonical().to_string(), "<http://schema.org/BookOrMovie>");
/// assert_eq!(set.members().len(), 2);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSet {
    members: Vec<NamedOrBlankNode>,
    canonical: NamedOrBlankNode,
}

impl ClassSet {
    /// Computes the canonical class of `members` after deduplication.
    ///
    /// If a union member has no local name, the union class is a blank node derived from the member identifiers.
    /// No member is dropped in this case.
    pub fn canonicalize(
        members: impl IntoIterator<Item = NamedOrBlankNode>,
        namespace: &Namespace,
    ) -> Self {
        let mut seen = FxHashSet::default();
        let mut members = members
            .into_iter()
            .filter(|member| seen.insert(member.clone()))
            .collect::<Vec<_>>();
        match members.len() {
            0 => Self {
                members,
                canonical: rdfs::RESOURCE.into_owned().into(),
            },
            1 => Self {
                canonical: members.remove(0),
                members,
            },
            _ => {
                members.sort_by(|a, b| compare_members(a.as_ref(), b.as_ref()));
                let canonical = match canonical_name(&members) {
                    Ok(name) => {
                        let canonical = namespace.mint(&name);
                        debug!(union = %canonical, members = members.len(), "minted union class");
                        canonical.into()
                    }
                    Err(error) => {
                        let ids = members
                            .iter()
                            .map(|member| identifier(member.as_ref()))
                            .collect::<Vec<_>>();
                        let canonical = stable_blank_node(&ids, 0);
                        warn!(%error, union = %canonical, "union class left anonymous");
                        canonical.into()
                    }
                };
                Self { members, canonical }
            }
        }
    }

    /// The class standing for the whole set.
    #[inline]
    pub fn canonical(&self) -> NamedOrBlankNodeRef<'_> {
        self.canonical.as_ref()
    }

    /// The subclasses of the [canonical](Self::canonical) class, sorted by local name.
    ///
    /// Empty unless a union class has been built.
    #[inline]
    pub fn members(&self) -> &[NamedOrBlankNode] {
        &self.members
    }

    /// Whether the canonical class is a union built for this set.
    #[inline]
    pub fn is_union(&self) -> bool {
        !self.members.is_empty()
    }
}

/// Builds the union class local name of `members`: their local names, sorted, joined by `Or`.
///
/// Ties between equal local names are broken with the full IRIs.
pub fn canonical_name(members: &[NamedOrBlankNode]) -> Result<String, UnresolvedResourceError> {
    let mut members = members.iter().map(NamedOrBlankNode::as_ref).collect::<Vec<_>>();
    members.sort_by(|a, b| compare_members(*a, *b));
    let names = members
        .into_iter()
        .map(|member| {
            local_name(member).ok_or_else(|| UnresolvedResourceError::new(member.into_owned()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names.join(SEPARATOR))
}

/// The part of the IRI after its last `/`, `#` or `:`.
///
/// Blank nodes and IRIs ending with one of these characters have none.
pub fn local_name(resource: NamedOrBlankNodeRef<'_>) -> Option<&str> {
    let NamedOrBlankNodeRef::NamedNode(node) = resource else {
        return None;
    };
    let iri = node.as_str();
    let start = iri.rfind(['/', '#', ':']).map_or(0, |i| i + 1);
    Some(&iri[start..]).filter(|name| !name.is_empty())
}

/// Named members first, by local name then by IRI.
fn compare_members(a: NamedOrBlankNodeRef<'_>, b: NamedOrBlankNodeRef<'_>) -> Ordering {
    let (a_name, b_name) = (local_name(a), local_name(b));
    a_name
        .is_none()
        .cmp(&b_name.is_none())
        .then_with(|| a_name.cmp(&b_name))
        .then_with(|| is_blank(a).cmp(&is_blank(b)))
        .then_with(|| identifier(a).cmp(identifier(b)))
}

fn is_blank(resource: NamedOrBlankNodeRef<'_>) -> bool {
    matches!(resource, NamedOrBlankNodeRef::BlankNode(_))
}
