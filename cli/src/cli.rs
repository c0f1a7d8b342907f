use clap::{Parser, ValueEnum, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "oxschema")]
/// Translates a schema.org style vocabulary into an RDFS vocabulary or an OWL ontology
pub struct Args {
    /// Kind of vocabulary to build
    #[arg(long, value_enum, ignore_case = true, default_value_t = Vocabulary::Rdfs)]
    pub vocabulary: Vocabulary,
    /// Namespace in which the union classes are created
    ///
    /// The union of schema:Book and schema:Movie is named `{namespace}BookOrMovie`.
    #[arg(long, default_value = "http://schema.org/", value_hint = ValueHint::Url)]
    pub namespace: String,
    /// File or URL to read the source vocabulary from
    ///
    /// It can be a path, a file: URI or an http(s): URL. Use `-` to read from stdin.
    /// In this case, the content format must be specified using the --input-syntax option.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub input: String,
    /// The syntax of the source vocabulary
    ///
    /// It can be an extension like "ttl", a MIME type like "text/turtle" or a name like "RDF/XML".
    ///
    /// By default, the syntax is guessed from the Content-Type of HTTP responses or from the input file extension.
    #[arg(long)]
    pub input_syntax: Option<String>,
    /// Base IRI of the file to read
    #[arg(long, value_hint = ValueHint::Url)]
    pub input_base: Option<String>,
    /// File to write the result to
    ///
    /// If no file is given, stdout is used.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
    /// The syntax of the result
    ///
    /// It can be an extension like "nt", a MIME type like "application/n-triples" or a name like "N-Triples".
    ///
    /// By default, the syntax is guessed from the output file extension and falls back to Turtle.
    #[arg(long)]
    pub output_syntax: Option<String>,
    /// Format of the log lines written to stderr
    ///
    /// The log level is set with the RUST_LOG environment variable and defaults to "warn".
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Vocabulary {
    /// Plain RDFS with union classes as domains and ranges
    #[value(name = "RDFS")]
    Rdfs,
    /// OWL with disjoint unions, enumerations and typed properties
    #[value(name = "OWL")]
    Owl,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// Human readable lines
    Text,
    /// One JSON object per line
    Json,
}
