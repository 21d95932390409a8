//! The in-memory protocol document model.
//!
//! A protocol document enumerates, per protocol version, the data types
//! exchanged on the wire and the actions (request/response pairs) clients may
//! invoke. The model is decoded once per run and is immutable afterwards;
//! every rule and the compatibility diff only read it.
//!
//! Maps are `BTreeMap` rather than `HashMap` so that sequential rule
//! execution produces report entries in a reproducible order.

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;

/// The version identifier reserved for experimental, not-yet-stabilized
/// definitions. Compatibility rules are relaxed for it: violations and
/// removals downgrade to warnings.
pub const EXPERIMENTAL_VERSION: &str = "v0";

/// A complete protocol document: candidate (from stdin) or baseline (fetched).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Protocol {
    /// Document format revision. Must be non-empty.
    pub doc_version: String,
    /// Build information about the producer. Informational only.
    pub version: VersionInfo,
    /// Free-form description. Informational only.
    pub info: String,
    /// Declared types: version -> type name -> definition.
    pub types: BTreeMap<String, BTreeMap<String, TypeDef>>,
    /// Declared actions: version -> action name -> definition.
    pub actions: BTreeMap<String, BTreeMap<String, Action>>,
}

/// Build metadata block emitted by the document producer. Not consumed by any
/// rule.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VersionInfo {
    pub name: String,
    pub version: String,
    pub branch: String,
    pub commit: String,
}

/// A declared data type within one version.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TypeDef {
    /// Field name -> field definition.
    pub fields: BTreeMap<String, DataType>,
    pub doc: String,
    pub deprecated: bool,
    /// Marks this type as usable in an action's error list.
    #[serde(rename = "error")]
    pub is_error: bool,
}

/// A field definition: a reference to a declared type or a builtin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DataType {
    /// Name of the referenced type, or a builtin such as `"String"`.
    #[serde(rename = "type")]
    pub ty: String,
    /// Whether the field is a list of the referenced type.
    #[serde(rename = "list")]
    pub is_list: bool,
    /// Version that defines the referenced type. Empty means "same version as
    /// the owning entity".
    pub version: String,
    pub doc: String,
    pub example: String,
}

impl DataType {
    /// The version this field's type reference resolves in: the explicit
    /// `version` attribute, or the owning version when that is empty.
    pub fn effective_version<'a>(&'a self, owning_version: &'a str) -> &'a str {
        if self.version.is_empty() {
            owning_version
        } else {
            &self.version
        }
    }
}

/// A request/response pair, with its possible error cases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Action {
    pub fn_name: String,
    /// Name of the request type.
    pub request: String,
    pub request_fields: BTreeMap<String, DataType>,
    /// Name of the response type; empty means no response body.
    pub response: String,
    pub doc: String,
    pub deprecated: bool,
    pub errors: Vec<ErrorRef>,
}

impl Action {
    /// Whether this action declares the named error case.
    pub fn has_error(&self, name: &str) -> bool {
        self.errors.iter().any(|e| e.name == name)
    }
}

/// A reference from an action to an error type in the same version.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorRef {
    pub name: String,
    pub doc: String,
}

impl Protocol {
    /// Decode a protocol document from a reader (e.g. stdin).
    pub fn from_reader(reader: impl Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// Decode a protocol document from bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Look up a type by version and name.
    pub fn get_type(&self, version: &str, name: &str) -> Option<&TypeDef> {
        self.types.get(version)?.get(name)
    }
}
