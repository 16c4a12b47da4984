//! The compiled-in CGCore to ISO 19115 field table.
//!
//! This list is the interop contract with downstream ISO 19115 consumers.
//! Entries are kept in declaration order; when two fields share a path, the
//! later entry is the one the reverse direction resolves to.

/// (CGCore field, ISO 19115 path) pairs.
pub const CGCORE_ISO19115_FIELDS: &[(&str, &str)] = &[
    (
        "title",
        "identificationInfo/MD_DataIdentification/citation/CI_Citation/title",
    ),
    (
        "creator",
        "identificationInfo/MD_DataIdentification/citation/CI_Citation/citedResponsibleParty/CI_ResponsibleParty/individualName",
    ),
    (
        "subject",
        "identificationInfo/MD_DataIdentification/topicCategory",
    ),
    (
        "description",
        "identificationInfo/MD_DataIdentification/abstract",
    ),
    (
        "publisher",
        "identificationInfo/MD_DataIdentification/citation/CI_Citation/citedResponsibleParty/CI_ResponsibleParty/organisationName",
    ),
    (
        "date",
        "identificationInfo/MD_DataIdentification/citation/CI_Citation/date/CI_Date/date",
    ),
    (
        "type",
        "identificationInfo/MD_DataIdentification/resourceFormat",
    ),
    (
        "format",
        "distributionInfo/MD_Distribution/transferOptions/MD_DigitalTransferOptions/onLine/CI_OnlineResource/applicationProfile",
    ),
    (
        "identifier",
        "identificationInfo/MD_DataIdentification/citation/CI_Citation/identifier/MD_Identifier/code",
    ),
    (
        "language",
        "identificationInfo/MD_DataIdentification/language",
    ),
    (
        "spatial_extent",
        "identificationInfo/MD_DataIdentification/extent/EX_Extent/geographicElement/EX_GeographicBoundingBox",
    ),
    (
        "temporal_extent",
        "identificationInfo/MD_DataIdentification/extent/EX_Extent/temporalElement/EX_TemporalExtent/extent",
    ),
];
