use oxiri::IriParseError;
use oxrdf::NamedOrBlankNode;
use oxrdfio::RdfParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// An error raised while loading the source vocabulary.
///
/// It is always fatal: no partial graph is returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The source file could not be opened or read.
    #[error("Unable to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The source content is not valid in the declared or detected syntax.
    #[error(transparent)]
    Parse(#[from] RdfParseError),
    /// The remote source could not be fetched.
    #[error("Unable to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: io::Error,
    },
    /// The syntax was not given and could not be guessed from the media type or the file extension.
    #[error("Unable to guess the syntax of {location}, please give it explicitly")]
    UndetectedFormat { location: String },
    /// The source location is a URI that is neither a local file nor an HTTP(S) resource.
    #[error(
        "The source URI {0} is not supported, only local paths, file: URIs and http(s): URIs can be loaded"
    )]
    UnsupportedScheme(String),
    /// The base IRI given to resolve relative IRIs is invalid.
    #[error("Invalid base IRI {iri}: {source}")]
    InvalidBaseIri {
        iri: String,
        #[source]
        source: IriParseError,
    },
}

/// A resource that takes part in a union class but has no local name to build the union name from.
///
/// Blank nodes and IRIs ending with `/` or `#` are in this case.
#[derive(Debug, Clone, Error)]
#[error("The resource {resource} has no local name usable in a canonical class name")]
pub struct UnresolvedResourceError {
    resource: NamedOrBlankNode,
}

impl UnresolvedResourceError {
    #[inline]
    pub(crate) fn new(resource: NamedOrBlankNode) -> Self {
        Self { resource }
    }

    /// The resource without a usable local name.
    #[inline]
    pub fn resource(&self) -> &NamedOrBlankNode {
        &self.resource
    }
}

