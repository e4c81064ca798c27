//! Built-in vocabulary tables.
//!
//! Each function builds one catalog as plain data: simple names, the
//! class/property split, and the historic alternative spellings that must
//! keep resolving to the current term. [`register_defaults`] loads them in a
//! fixed order; since the registry keeps the earlier registration on key
//! collisions, that order is the tie-break (e.g. a bare `country` stays
//! Darwin Core, a bare `Identifier` stays the GBIF row type).

use vocab_model::{Term, VocabularyCatalog};

use crate::registry::TermRegistry;

/// Prefix of the open bibliography namespace.
pub const BIB_PREFIX: &str = "bib";
/// Namespace under which bibliography spellings fabricate their terms.
pub const BIB_NAMESPACE: &str = "http://bibtex.org/";

/// Loads every built-in vocabulary into the given registry.
pub fn register_defaults(registry: &TermRegistry) {
    registry.register_vocabulary(&darwin_core(), &[]);
    registry.register_vocabulary(&dublin_core(), &["dct"]);
    registry.register_vocabulary(&dublin_core_elements(), &[]);
    registry.register_vocabulary(&gbif(), &[]);
    registry.register_vocabulary(&iucn(), &[]);
    registry.register_vocabulary(&gadm(), &[]);
    registry.register_vocabulary(&dwc_archive(), &[]);
    registry.register_open_namespace(BIB_PREFIX, BIB_NAMESPACE);
    registry.register_term(&bibliography_class());
}

/// Darwin Core, <http://rs.tdwg.org/dwc/terms/>.
pub fn darwin_core() -> VocabularyCatalog {
    let mut v = VocabularyCatalog::new("dwc", "dwc", "http://rs.tdwg.org/dwc/terms/");

    // class terms, in quick-reference-guide order
    v.class("Occurrence", &["DarwinCore", "SimpleDarwinCore"]);
    v.class("Organism", &[]);
    v.class("MaterialSample", &[]);
    v.class("Event", &[]);
    v.class("GeologicalContext", &[]);
    v.class("Identification", &[]);
    v.class("Taxon", &[]);
    v.class("MeasurementOrFact", &[]);
    v.class("ResourceRelationship", &[]);

    // record-level
    v.property("institutionID", &[]);
    v.property("collectionID", &[]);
    v.property("datasetID", &[]);
    v.property("institutionCode", &[]);
    v.property("collectionCode", &[]);
    v.property("datasetName", &[]);
    v.property("ownerInstitutionCode", &[]);
    v.property("basisOfRecord", &[]);
    v.property("informationWithheld", &[]);
    v.property("dataGeneralizations", &[]);
    v.property("dynamicProperties", &[]);

    // occurrence
    v.property("occurrenceID", &[]);
    v.property("catalogNumber", &["catalogNumberNumeric"]);
    v.property("recordNumber", &["collectorNumber"]);
    v.property("recordedBy", &["collector"]);
    v.property(
        "recordedByID",
        &["gbif:recordedByID", "http://rs.gbif.org/terms/1.0/recordedByID"],
    );
    v.property("individualCount", &[]);
    v.property("organismQuantity", &[]);
    v.property("organismQuantityType", &[]);
    v.property("sex", &[]);
    v.property("lifeStage", &[]).vocabulary();
    v.property("reproductiveCondition", &[]);
    v.property("behavior", &[]);
    v.property("establishmentMeans", &[]).vocabulary();
    v.property("degreeOfEstablishment", &[]).vocabulary();
    v.property("pathway", &[]).vocabulary();
    v.property("georeferenceVerificationStatus", &[]);
    v.property("occurrenceStatus", &[]);
    v.property("preparations", &[]);
    v.property("disposition", &[]);
    v.property("associatedMedia", &[]);
    v.property("associatedOccurrences", &[]);
    v.property("associatedReferences", &[]);
    v.property("associatedSequences", &[]);
    v.property("associatedTaxa", &[]);
    v.property("otherCatalogNumbers", &[]);
    v.property("occurrenceRemarks", &[]);

    // organism
    v.property("organismID", &["individualID"]);
    v.property("organismName", &[]);
    v.property("organismScope", &[]);
    v.property("associatedOrganisms", &[]);
    v.property("previousIdentifications", &[]);
    v.property("organismRemarks", &[]);

    // material sample
    v.property("materialSampleID", &[]);

    // event
    v.property("eventID", &[]);
    v.property("parentEventID", &[]);
    v.property("fieldNumber", &[]);
    v.property("eventDate", &["earliestDateCollected", "latestDateCollected"]);
    v.property("eventTime", &[]);
    v.property("startDayOfYear", &[]);
    v.property("endDayOfYear", &[]);
    v.property("year", &[]);
    v.property("month", &[]);
    v.property("day", &[]);
    v.property("verbatimEventDate", &[]);
    v.property("habitat", &[]);
    v.property("samplingProtocol", &[]);
    v.property("sampleSizeValue", &[]);
    v.property("sampleSizeUnit", &[]);
    v.property("samplingEffort", &[]);
    v.property("fieldNotes", &[]);
    v.property("eventRemarks", &[]);

    // location
    v.property("locationID", &[]);
    v.property("higherGeographyID", &[]);
    v.property("higherGeography", &[]);
    v.property("continent", &[]);
    v.property("waterBody", &[]);
    v.property("islandGroup", &[]);
    v.property("island", &[]);
    v.property("country", &[]);
    v.property("countryCode", &[]);
    v.property("stateProvince", &["state", "province"]);
    v.property("county", &[]);
    v.property("municipality", &["city"]);
    v.property("locality", &[]);
    v.property("verbatimLocality", &[]);
    v.property("minimumElevationInMeters", &[]);
    v.property("maximumElevationInMeters", &[]);
    v.property("verbatimElevation", &[]);
    v.property("verticalDatum", &[]);
    v.property("minimumDepthInMeters", &[]);
    v.property("maximumDepthInMeters", &[]);
    v.property("verbatimDepth", &[]);
    v.property("minimumDistanceAboveSurfaceInMeters", &[]);
    v.property("maximumDistanceAboveSurfaceInMeters", &[]);
    v.property("locationAccordingTo", &[]);
    v.property("locationRemarks", &[]);
    v.property("decimalLatitude", &["latitude"]);
    v.property("decimalLongitude", &["longitude"]);
    v.property("geodeticDatum", &["datum", "horizontaldatum"]);
    v.property("coordinateUncertaintyInMeters", &[]);
    v.property("coordinatePrecision", &[]);
    v.property("pointRadiusSpatialFit", &[]);
    v.property("verbatimCoordinates", &[]);
    v.property("verbatimLatitude", &[]);
    v.property("verbatimLongitude", &[]);
    v.property("verbatimCoordinateSystem", &[]);
    v.property("verbatimSRS", &[]);
    v.property("footprintWKT", &[]);
    v.property("footprintSRS", &[]);
    v.property("footprintSpatialFit", &[]);
    v.property("georeferencedBy", &[]);
    v.property("georeferencedDate", &[]);
    v.property("georeferenceProtocol", &[]);
    v.property("georeferenceSources", &[]);
    v.property("georeferenceRemarks", &[]);

    // geological context
    v.property("geologicalContextID", &[]);
    v.property("lithostratigraphicTerms", &[]);
    v.property("group", &[]);
    v.property("formation", &[]);
    v.property("member", &[]);
    v.property("bed", &[]);

    // identification
    v.property("identificationID", &[]);
    v.property("verbatimIdentification", &[]);
    v.property("identificationQualifier", &[]);
    v.property("typeStatus", &[]);
    v.property("identifiedBy", &[]);
    v.property(
        "identifiedByID",
        &["gbif:identifiedByID", "http://rs.gbif.org/terms/1.0/identifiedByID"],
    );
    v.property("dateIdentified", &[]);
    v.property("identificationReferences", &[]);
    v.property("identificationVerificationStatus", &[]);
    v.property("identificationRemarks", &[]);

    // taxon
    v.property("taxonID", &["nameUsageID"]);
    v.property("scientificNameID", &["nameID"]);
    v.property("acceptedNameUsageID", &["acceptedTaxonID"]);
    v.property("parentNameUsageID", &["higherNameUsageID", "parentTaxonID"]);
    v.property("originalNameUsageID", &["originalNameID", "basionymID"]);
    v.property("nameAccordingToID", &["taxonAccordingToID"]);
    v.property("namePublishedInID", &[]);
    v.property("taxonConceptID", &[]);
    v.property("scientificName", &[]);
    v.property("acceptedNameUsage", &["acceptedTaxon"]);
    v.property("parentNameUsage", &["parentTaxon", "higherTaxon", "higherNameUsage"]);
    v.property("originalNameUsage", &["originalName", "originalTaxon", "basionym"]);
    v.property("nameAccordingTo", &["taxonAccordingTo"]);
    v.property("namePublishedIn", &[]);
    v.property("namePublishedInYear", &[]);
    v.property("higherClassification", &[]);
    v.property("kingdom", &[]);
    v.property("phylum", &[]);
    v.property("class", &[]);
    v.property("order", &[]);
    v.property("family", &[]);
    v.property("subfamily", &[]);
    v.property("genus", &[]);
    v.property(
        "genericName",
        &["gbif:genericName", "http://rs.gbif.org/terms/1.0/genericName"],
    );
    v.property("subgenus", &[]);
    v.property("infragenericEpithet", &[]);
    v.property("specificEpithet", &[]);
    v.property("infraspecificEpithet", &[]);
    v.property("cultivarEpithet", &[]);
    v.property("taxonRank", &["rank"]);
    v.property("verbatimTaxonRank", &[]);
    v.property("scientificNameAuthorship", &[]);
    v.property("vernacularName", &[]);
    v.property("nomenclaturalCode", &[]);
    v.property("taxonomicStatus", &[]);
    v.property("nomenclaturalStatus", &[]);
    v.property("taxonRemarks", &["taxonRemark"]);

    // measurement or fact
    v.property("measurementID", &[]);
    v.property("measurementType", &[]);
    v.property("measurementValue", &[]);
    v.property("measurementAccuracy", &[]);
    v.property("measurementUnit", &[]);
    v.property("measurementDeterminedBy", &[]);
    v.property("measurementDeterminedDate", &[]);
    v.property("measurementMethod", &[]);
    v.property("measurementRemarks", &[]);

    // resource relationship
    v.property("resourceRelationshipID", &[]);
    v.property("resourceID", &[]);
    v.property("relationshipOfResourceID", &[]);
    v.property("relatedResourceID", &[]);
    v.property("relationshipOfResource", &[]);
    v.property("relationshipAccordingTo", &[]);
    v.property("relationshipEstablishedDate", &[]);
    v.property("relationshipRemarks", &[]);

    v
}

/// Dublin Core terms, <http://purl.org/dc/terms/>. Registered with the
/// alternate prefix `dct` alongside its own `dcterms`.
pub fn dublin_core() -> VocabularyCatalog {
    let mut v = VocabularyCatalog::new("dcterms", "dcterms", "http://purl.org/dc/terms/");
    v.class("Location", &[]);
    for name in [
        "abstract",
        "accessRights",
        "accrualMethod",
        "accrualPeriodicity",
        "accrualPolicy",
        "alternative",
        "audience",
        "available",
        "bibliographicCitation",
        "conformsTo",
        "contributor",
        "coverage",
        "created",
        "creator",
        "date",
        "dateAccepted",
        "dateCopyrighted",
        "dateSubmitted",
        "description",
        "educationLevel",
        "extent",
        "format",
        "hasFormat",
        "hasPart",
        "hasVersion",
        "instructionalMethod",
        "isFormatOf",
        "isPartOf",
        "isReferencedBy",
        "isReplacedBy",
        "isRequiredBy",
        "isVersionOf",
        "issued",
        "language",
        "license",
        "mediator",
        "medium",
        "modified",
        "provenance",
        "publisher",
        "references",
        "relation",
        "replaces",
        "requires",
        "rights",
        "rightsHolder",
        "source",
        "spatial",
        "subject",
        "tableOfContents",
        "temporal",
        "title",
        "type",
        "valid",
    ] {
        v.property(name, &[]);
    }
    v.property("identifier", &["ID"]);
    v
}

/// The legacy Dublin Core element set, <http://purl.org/dc/elements/1.1/>.
pub fn dublin_core_elements() -> VocabularyCatalog {
    let mut v = VocabularyCatalog::new("dc", "dc", "http://purl.org/dc/elements/1.1/");
    for name in [
        "contributor",
        "coverage",
        "creator",
        "date",
        "description",
        "format",
        "identifier",
        "language",
        "publisher",
        "relation",
        "rights",
        "source",
        "subject",
        "title",
        "type",
    ] {
        v.property(name, &[]);
    }
    v
}

/// GBIF extension terms, <http://rs.gbif.org/terms/1.0/>.
pub fn gbif() -> VocabularyCatalog {
    let mut v = VocabularyCatalog::new("gbif", "gbif", "http://rs.gbif.org/terms/1.0/");

    // extension row types
    v.class("Description", &[]);
    v.class("Distribution", &[]);
    v.class("Identifier", &[]);
    v.class("Image", &["Images"]);
    v.class("Multimedia", &[]);
    v.class("Reference", &["References"]);
    v.class(
        "SpeciesProfile",
        &["SpeciesMiniProfile", "SpeciesInfo", "SpeciesData", "SpeciesFactsheet"],
    );
    v.class("TypesAndSpecimen", &["Specimen", "Types", "TypeDesignation"]);
    v.class("VernacularName", &["VernacularNames", "Vernacular", "Vernaculars"]);

    v.property("datasetKey", &[]);
    v.property("publishingCountry", &[]);
    v.property("protocol", &[]);
    v.property("lastParsed", &[]);
    v.property("lastCrawled", &[]);
    v.property("lastInterpreted", &[]);
    v.property("coordinateAccuracy", &[]).deprecated();
    v.property("elevation", &[]);
    v.property("elevationAccuracy", &[]);
    v.property("depth", &[]);
    v.property("depthAccuracy", &[]);
    v.property("distanceAboveSurface", &[]).deprecated();
    v.property("distanceAboveSurfaceAccuracy", &[]).deprecated();
    v.property("distanceFromCentroidInMeters", &[]);
    v.property("isMarine", &[]);
    v.property("isTerrestrial", &[]);
    v.property("isFreshwater", &[]);
    v.property("isHybrid", &[]);
    v.property("isExtinct", &[]);
    v.property("livingPeriod", &["timePeriod"]);
    v.property("lifeForm", &[]);
    v.property("ageInDays", &[]);
    v.property("sizeInMillimeter", &[]);
    v.property("massInGram", &["weightInGram"]);
    v.property("organismPart", &[]);
    v.property("isPlural", &[]);
    v.property("isPreferredName", &[]);
    v.property("appendixCITES", &[]);
    v.property("numberOfOccurrences", &[]);

    v
}

/// IUCN Red List terms, <http://iucn.org/terms/>.
pub fn iucn() -> VocabularyCatalog {
    let mut v = VocabularyCatalog::new("iucn", "iucn", "http://iucn.org/terms/");
    v.property("threatStatus", &[]);
    v
}

/// GADM administrative-area terms, <http://rs.gbif.org/terms/gadm/3.0/>.
pub fn gadm() -> VocabularyCatalog {
    let mut v = VocabularyCatalog::new("gadm", "gadm", "http://rs.gbif.org/terms/gadm/3.0/");
    for name in [
        "level0Gid",
        "level0Name",
        "level1Gid",
        "level1Name",
        "level2Gid",
        "level2Name",
        "level3Gid",
        "level3Name",
    ] {
        v.property(name, &[]);
    }
    v
}

/// The archive core-ID vocabulary, <http://rs.tdwg.org/dwc/text/>.
pub fn dwc_archive() -> VocabularyCatalog {
    let mut v = VocabularyCatalog::new("dwca", "dwca", "http://rs.tdwg.org/dwc/text/");
    v.property("ID", &[]);
    v
}

/// The class term anchoring the open bibliography namespace.
pub fn bibliography_class() -> Term {
    Term::known(BIB_PREFIX, BIB_NAMESPACE, "BibTeX", true)
}
