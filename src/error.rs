//! Error types for the IFC to eLCA exporter.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and parsing an IFC file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input file could not be read.
    #[error("could not read '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input has no usable STEP structure.
    #[error("invalid STEP file: {message}")]
    InvalidStep { message: String },
}

/// Errors raised while resolving a single record field from the model graph.
///
/// These never abort a run: the record assembler catches them at the field
/// boundary, logs the element and leaves the field empty.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A relationship points at an entity id the model does not contain.
    #[error("reference to missing entity #{0}")]
    MissingEntity(u64),

    /// A material set entry carries no material reference.
    #[error("material set #{0} contains an entry without a material")]
    IncompleteMaterialSet(u64),

    /// A referenced entity does not have the shape the relationship requires.
    #[error("entity #{id} is not a {expected}")]
    UnexpectedShape { id: u64, expected: &'static str },

    /// A property value exists but has a type the caller cannot use.
    #[error("property '{set}.{name}' has unexpected type {found}")]
    UnexpectedType {
        set: String,
        name: String,
        found: &'static str,
    },
}

/// Errors that can occur while writing the output files.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output file could not be created.
    #[error("could not create '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Flushing buffered output failed.
    #[error("could not write output: {message}")]
    WriteError { message: String },

    /// Turning the records into JSON failed.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// A CSV row could not be written.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
