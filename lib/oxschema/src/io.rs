//! Reading vocabularies and writing ontologies with [`oxrdfio`].

use crate::error::LoadError;
use crate::namespace::Namespace;
use crate::vocab::{RDF_NAMESPACE, RDFS_NAMESPACE, XSD_NAMESPACE, owl, schema};
use oxrdf::{Graph, Triple};
pub use oxrdfio::RdfFormat;
use oxrdfio::{RdfParser, RdfSerializer};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Parses a graph serialized in `format`.
///
/// Relative IRIs are resolved against `base_iri` if given.
/// Named graphs are rejected: the vocabulary must be a single graph.
///
/// ```
/// use oxschema::io::{RdfFormat, parse_graph};
///
/// let graph = parse_graph(
///     "<http://schema.org/Book> a <http://www.w3.org/2000/01/rdf-schema#Class> .".as_bytes(),
///     RdfFormat::Turtle,
///     None,
/// )?;
/// assert_eq!(graph.len(), 1);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn parse_graph(
    read: impl Read,
    format: RdfFormat,
    base_iri: Option<&str>,
) -> Result<Graph, LoadError> {
    let mut parser = RdfParser::from_format(format).without_named_graphs();
    if let Some(base_iri) = base_iri {
        parser = parser
            .with_base_iri(base_iri)
            .map_err(|source| LoadError::InvalidBaseIri {
                iri: base_iri.into(),
                source,
            })?;
    }
    let mut graph = Graph::new();
    for quad in parser.for_reader(read) {
        graph.insert(&Triple::from(quad?));
    }
    Ok(graph)
}

/// Media types sent in the `Accept` header of HTTP requests.
#[cfg(feature = "http-client")]
const ACCEPTED_MEDIA_TYPES: &str = "text/turtle, application/n-triples, application/rdf+xml;q=0.9, application/ld+json;q=0.8, text/n3;q=0.7";

#[cfg(feature = "http-client")]
const REDIRECTION_LIMIT: usize = 8;

/// Where a vocabulary is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A local file.
    File(PathBuf),
    /// An `http:` or `https:` URL.
    Http(Url),
}

/// Loads the graph stored at `location`, a file path, a `file:` URI or an `http(s):` URL.
///
/// If `format` is not given, it is guessed from the `Content-Type` of HTTP responses
/// or else from the extension of the path.
/// Relative IRIs in remote documents are resolved against their URL when `base_iri` is not given.
pub fn load_graph(
    location: &str,
    format: Option<RdfFormat>,
    base_iri: Option<&str>,
) -> Result<Graph, LoadError> {
    match resolve_source(location)? {
        Source::File(path) => {
            let format = match format {
                Some(format) => format,
                None => format_from_path(&path).ok_or_else(|| LoadError::UndetectedFormat {
                    location: location.into(),
                })?,
            };
            debug!(path = %path.display(), format = format.name(), "loading vocabulary");
            let file = File::open(&path).map_err(|source| LoadError::Io { path, source })?;
            parse_graph(file, format, base_iri)
        }
        #[cfg(feature = "http-client")]
        Source::Http(url) => {
            let http_error = |source| LoadError::Http {
                url: url.to_string(),
                source,
            };
            debug!(%url, "fetching vocabulary");
            let (content_type, body) = fetch(&url).map_err(http_error)?;
            let format = match format {
                Some(format) => format,
                None => content_type
                    .as_deref()
                    .and_then(RdfFormat::from_media_type)
                    .or_else(|| format_from_path(Path::new(url.path())))
                    .ok_or_else(|| LoadError::UndetectedFormat {
                        location: location.into(),
                    })?,
            };
            debug!(%url, format = format.name(), "loading vocabulary");
            parse_graph(body, format, Some(base_iri.unwrap_or(url.as_str())))
        }
        #[cfg(not(feature = "http-client"))]
        Source::Http(_) => Err(LoadError::UnsupportedScheme(location.into())),
    }
}

/// Finds out where `location` points to.
///
/// Locations that are not URIs are taken as paths as is.
/// Single letter schemes are taken as Windows drive letters.
///
/// ```
/// use oxschema::io::{Source, resolve_source};
///
/// assert!(matches!(
///     resolve_source("https://schema.org/version/latest/schemaorg-current-https.ttl")?,
///     Source::Http(_)
/// ));
/// assert!(matches!(resolve_source("schema.ttl")?, Source::File(_)));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn resolve_source(location: &str) -> Result<Source, LoadError> {
    match Url::parse(location) {
        Ok(url) if url.scheme() == "file" => url
            .to_file_path()
            .map(Source::File)
            .map_err(|()| LoadError::UnsupportedScheme(location.into())),
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Source::Http(url)),
        Ok(url) if url.scheme().len() > 1 => Err(LoadError::UnsupportedScheme(location.into())),
        _ => Ok(Source::File(PathBuf::from(location))),
    }
}

#[cfg(feature = "http-client")]
fn http_request(url: &Url) -> io::Result<oxhttp::model::Request<()>> {
    oxhttp::model::Request::builder()
        .uri(url.as_str())
        .header(oxhttp::model::header::ACCEPT, ACCEPTED_MEDIA_TYPES)
        .body(())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
}

/// Returns the `Content-Type` of the response if any, and its body.
#[cfg(feature = "http-client")]
fn fetch(url: &Url) -> io::Result<(Option<String>, oxhttp::model::Body)> {
    let client = oxhttp::Client::new()
        .with_redirection_limit(REDIRECTION_LIMIT)
        .with_user_agent(concat!("oxschema/", env!("CARGO_PKG_VERSION")))
        .map_err(io::Error::other)?;
    let response = client.request(http_request(url)?)?;
    let status = response.status();
    if !status.is_success() {
        return Err(io::Error::other(format!(
            "Error {status} returned by {url} with payload:\n{}",
            response.into_body().to_string()?
        )));
    }
    let content_type = response
        .headers()
        .get(oxhttp::model::header::CONTENT_TYPE)
        .map(|value| {
            value
                .to_str()
                .map(ToOwned::to_owned)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        })
        .transpose()?;
    Ok((content_type, response.into_body()))
}

/// Guesses the serialization format from the file extension.
pub fn format_from_path(path: &Path) -> Option<RdfFormat> {
    path.extension()
        .and_then(OsStr::to_str)
        .and_then(RdfFormat::from_extension)
}

/// Writes `graph` to `writer` in `format`.
///
/// Triples are sorted to get the same output for the same graph.
/// The usual prefixes and the `namespace` one are declared when the format supports them.
///
/// ```
/// use oxrdf::vocab::{rdf, rdfs};
/// use oxrdf::{Graph, NamedNodeRef, TripleRef};
/// use oxschema::Namespace;
/// use oxschema::io::{RdfFormat, serialize_graph};
///
/// let mut graph = Graph::new();
/// graph.insert(TripleRef::new(
///     NamedNodeRef::new("http://schema.org/Book")?,
///     rdf::TYPE,
///     rdfs::CLASS,
/// ));
/// let turtle = serialize_graph(&graph, RdfFormat::Turtle, &Namespace::default(), Vec::new())?;
/// assert!(String::from_utf8(turtle)?.contains("schema:Book a rdfs:Class"));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn serialize_graph<W: Write>(
    graph: &Graph,
    format: RdfFormat,
    namespace: &Namespace,
    writer: W,
) -> io::Result<W> {
    let mut serializer = RdfSerializer::from_format(format);
    for (name, iri) in [
        ("rdf", RDF_NAMESPACE),
        ("rdfs", RDFS_NAMESPACE),
        ("xsd", XSD_NAMESPACE),
        ("owl", owl::NAMESPACE),
        ("schema", schema::NAMESPACE),
    ] {
        serializer = serializer.with_prefix(name, iri).map_err(io::Error::other)?;
    }
    if namespace.as_str() != schema::NAMESPACE {
        serializer = serializer
            .with_prefix("ns", namespace.as_str())
            .map_err(io::Error::other)?;
    }

    let mut triples = graph.iter().collect::<Vec<_>>();
    triples.sort_by_cached_key(ToString::to_string);
    let mut serializer = serializer.for_writer(writer);
    for triple in triples {
        serializer.serialize_triple(triple)?;
    }
    serializer.finish()
}
