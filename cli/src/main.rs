use crate::cli::{Args, LogFormat, Vocabulary};
use anyhow::{Context, bail};
use clap::Parser;
use oxschema::io::{RdfFormat, format_from_path, load_graph, parse_graph, serialize_graph};
use oxschema::{Namespace, Target};
use std::fs::File;
use std::io::{self, BufWriter, Write, stderr, stdin, stdout};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_format);

    let namespace = Namespace::new(args.namespace.as_str())
        .with_context(|| format!("The namespace {} is not a valid IRI", args.namespace))?;
    let target = match args.vocabulary {
        Vocabulary::Rdfs => Target::Rdfs,
        Vocabulary::Owl => Target::Owl,
    };

    let input_format = args
        .input_syntax
        .as_deref()
        .map(rdf_format_from_name)
        .transpose()?;
    let vocabulary = if args.input == "-" {
        let Some(format) = input_format else {
            bail!("The --input-syntax option must be set when reading from stdin")
        };
        parse_graph(stdin().lock(), format, args.input_base.as_deref())
    } else {
        load_graph(&args.input, input_format, args.input_base.as_deref())
    }
    .with_context(|| format!("Failed to load the vocabulary {}", args.input))?;
    info!(triples = vocabulary.len(), "loaded vocabulary");

    let output = target.transform(&vocabulary, &namespace);

    let output_format = if let Some(name) = &args.output_syntax {
        rdf_format_from_name(name)?
    } else if let Some(format) = args.output.as_deref().and_then(format_from_path) {
        format
    } else {
        debug!("no output syntax given or guessed, using Turtle");
        RdfFormat::Turtle
    };
    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("Failed to create the output file {}", path.display()))?;
        close_file_writer(serialize_graph(
            &output,
            output_format,
            &namespace,
            BufWriter::new(file),
        )?)?;
    } else {
        serialize_graph(&output, output_format, &namespace, stdout().lock())?.flush()?;
    }
    info!(
        vocabulary = %target,
        triples = output.len(),
        syntax = output_format.name(),
        "wrote result"
    );
    Ok(())
}

fn init_logging(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Reads a syntax given as a file extension, a media type or a syntax name like `RDF/XML`.
fn rdf_format_from_name(name: &str) -> anyhow::Result<RdfFormat> {
    if let Some(t) = RdfFormat::from_extension(name) {
        return Ok(t);
    }
    if let Some(t) = RdfFormat::from_media_type(name) {
        return Ok(t);
    }
    // Names are compared without case and punctuation: "N-Triples", "ntriples" and "NTRIPLES" match
    let key = syntax_name_key(name);
    if let Some(t) = ["ttl", "nt", "nq", "trig", "n3", "rdf", "jsonld"]
        .into_iter()
        .filter_map(RdfFormat::from_extension)
        .find(|format| syntax_name_key(format.name()) == key)
    {
        return Ok(t);
    }
    bail!("The syntax '{name}' is unknown")
}

fn syntax_name_key(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn close_file_writer(writer: BufWriter<File>) -> io::Result<()> {
    let mut file = writer
        .into_inner()
        .map_err(io::IntoInnerError::into_error)?;
    file.flush()?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_names() {
        assert_eq!(rdf_format_from_name("ttl").unwrap(), RdfFormat::Turtle);
        assert_eq!(
            rdf_format_from_name("application/n-triples").unwrap(),
            RdfFormat::NTriples
        );
        assert_eq!(rdf_format_from_name("rdf").unwrap(), RdfFormat::RdfXml);
        rdf_format_from_name("foo").unwrap_err();
    }

    #[test]
    fn syntax_display_names() {
        assert_eq!(rdf_format_from_name("Turtle").unwrap(), RdfFormat::Turtle);
        assert_eq!(rdf_format_from_name("TURTLE").unwrap(), RdfFormat::Turtle);
        assert_eq!(rdf_format_from_name("RDF/XML").unwrap(), RdfFormat::RdfXml);
        assert_eq!(rdf_format_from_name("rdf/xml").unwrap(), RdfFormat::RdfXml);
        assert_eq!(rdf_format_from_name("N-Triples").unwrap(), RdfFormat::NTriples);
        assert_eq!(rdf_format_from_name("N-Quads").unwrap(), RdfFormat::NQuads);
        assert_eq!(rdf_format_from_name("TriG").unwrap(), RdfFormat::TriG);
        assert_eq!(rdf_format_from_name("N3").unwrap(), RdfFormat::N3);
        assert!(matches!(
            rdf_format_from_name("JSON-LD").unwrap(),
            RdfFormat::JsonLd { .. }
        ));
        rdf_format_from_name("RDF/JSON").unwrap_err();
    }
}
