//! Provides ready to use [`NamedNodeRef`]s for the vocabularies the translation reads and writes.
//!
//! The RDF, RDFS and XSD terms come from [`oxrdf::vocab`].

pub mod schema {
    //! [schema.org](https://schema.org/) terms that drive the translation.
    use oxrdf::NamedNodeRef;

    /// The schema.org namespace, also the default namespace of minted union classes.
    pub const NAMESPACE: &str = "http://schema.org/";

    /// The schema.org marker class of scalar data types.
    pub const DATA_TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://schema.org/DataType");
    /// Boolean: True or False.
    pub const BOOLEAN: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/Boolean");
    /// Data type: Text.
    pub const TEXT: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/Text");
    /// Data type: URL.
    pub const URL: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/URL");
    /// Data type: Number.
    pub const NUMBER: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/Number");
    /// Data type: Floating number.
    pub const FLOAT: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/Float");
    /// Data type: Integer.
    pub const INTEGER: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/Integer");
    /// A date value in ISO 8601 date format.
    pub const DATE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/Date");
    /// A combination of date and time of day.
    pub const DATE_TIME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://schema.org/DateTime");
    /// A point in time recurring on multiple days.
    pub const TIME: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/Time");

    /// Relates a property to a class that is (one of) the type(s) the property is expected to be used on.
    pub const DOMAIN_INCLUDES: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://schema.org/domainIncludes");
    /// Relates a property to a class that constitutes (one of) the expected type(s) for values of the property.
    pub const RANGE_INCLUDES: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://schema.org/rangeIncludes");
    /// Relates a property to a property that is its inverse.
    pub const INVERSE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://schema.org/inverseOf");

    /// The built-in scalar types rewritten by the scalar normalizer.
    pub const SCALARS: [NamedNodeRef<'_>; 9] = [
        BOOLEAN, TEXT, URL, NUMBER, FLOAT, INTEGER, DATE, DATE_TIME, TIME,
    ];
}

pub mod owl {
    //! [OWL 2](https://www.w3.org/TR/owl2-rdf-based-semantics/) terms emitted by the OWL synthesizer.
    use oxrdf::NamedNodeRef;

    /// The OWL namespace.
    pub const NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";

    /// The class of OWL classes.
    pub const CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Class");
    /// The class of properties relating individuals to individuals.
    pub const OBJECT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");
    /// The class of properties relating individuals to literals.
    pub const DATATYPE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DatatypeProperty");
    /// The class is the union of the pairwise disjoint classes in the list.
    pub const DISJOINT_UNION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#disjointUnionOf");
    /// The class is made of exactly the individuals in the list.
    pub const ONE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#oneOf");
    /// The two properties are inverse of each other.
    pub const INVERSE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#inverseOf");
}

/// The namespace of the [RDF compatible XSD datatypes](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-compatible-xsd-types).
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

/// The namespace of the RDF vocabulary.
pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// The namespace of the RDFS vocabulary.
pub const RDFS_NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";
