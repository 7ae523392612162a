// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::collections::BTreeMap;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// A key/value pair naming an object in Operations.
///
/// Identifiers flagged as part of uniqueness take part in identity comparisons,
/// the others are descriptive only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    key: String,
    value: String,
    is_part_of_uniqueness: bool,
}

impl Identifier {
    /// Descriptive identifier, not part of the object identity.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            is_part_of_uniqueness: false,
        }
    }

    pub fn unique(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            is_part_of_uniqueness: true,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_part_of_uniqueness(&self) -> bool {
        self.is_part_of_uniqueness
    }
}

/// Filter sent as-is to the catalog query endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceQuery {
    /// Candidate display names, any of which may match.
    pub name: Vec<String>,
    pub adapter_kind: Vec<String>,
    pub resource_kind: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_value: Option<String>,
}

impl ResourceQuery {
    pub fn new(name: &str, adapter_kind: &str, resource_kind: &str) -> Self {
        Self {
            name: vec![name.to_string()],
            adapter_kind: vec![adapter_kind.to_string()],
            resource_kind: vec![resource_kind.to_string()],
            property_name: None,
            property_value: None,
        }
    }

    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.property_name = Some(name.to_string());
        self.property_value = Some(value.to_string());
        self
    }
}

/// A resource as returned by the Operations catalog.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResource {
    /// Internal identity token (a UUID) used by the relationship endpoints.
    pub identifier: String,
    pub resource_key: ResourceKey,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceKey {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub adapter_kind_key: String,
    #[serde(default)]
    pub resource_kind_key: String,
    #[serde(default)]
    pub resource_identifiers: Vec<ResourceIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceIdentifier {
    pub identifier_type: IdentifierType,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierType {
    pub name: String,
    #[serde(default)]
    pub is_part_of_uniqueness: bool,
}

impl CatalogResource {
    /// Translate the catalog identifiers into `Identifier` values.
    pub fn identifiers(&self) -> Vec<Identifier> {
        self.resource_key
            .resource_identifiers
            .iter()
            .map(|id| Identifier {
                key: id.identifier_type.name.clone(),
                value: id.value.clone(),
                is_part_of_uniqueness: id.identifier_type.is_part_of_uniqueness,
            })
            .collect()
    }

    /// True when the resource carries an identifier named like `identifier`
    /// with a different value. A resource without such an identifier never
    /// conflicts.
    pub fn conflicts_with(&self, identifier: &Identifier) -> bool {
        self.resource_key
            .resource_identifiers
            .iter()
            .any(|id| id.identifier_type.name == identifier.key && id.value != identifier.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    pub key: String,
    pub value: f64,
}

impl MetricSample {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertySample {
    pub key: String,
    pub value: PropertyValue,
}

impl PropertySample {
    pub fn new(key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One object of the collection result, with its nested children.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultObject {
    pub adapter_kind: String,
    pub resource_kind: String,
    pub name: String,
    pub identifiers: Vec<Identifier>,
    pub metrics: BTreeMap<String, f64>,
    pub properties: BTreeMap<String, PropertyValue>,
    pub children: Vec<ResultObject>,
}

impl ResultObject {
    pub fn new(adapter_kind: &str, resource_kind: &str, name: &str, identifiers: Vec<Identifier>) -> Self {
        Self {
            adapter_kind: adapter_kind.to_string(),
            resource_kind: resource_kind.to_string(),
            name: name.to_string(),
            identifiers,
            metrics: BTreeMap::new(),
            properties: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Record a metric, replacing any earlier sample with the same key.
    pub fn add_metric(&mut self, sample: MetricSample) {
        self.metrics.insert(sample.key, sample.value);
    }

    pub fn add_property(&mut self, sample: PropertySample) {
        self.properties.insert(sample.key, sample.value);
    }

    pub fn add_child(&mut self, child: ResultObject) {
        self.children.push(child);
    }

    pub fn metric(&self, key: &str) -> Option<f64> {
        self.metrics.get(key).copied()
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a ResultObject>) {
        out.push(self);
        for child in &self.children {
            child.collect_into(out);
        }
    }
}

/// Result of one collection cycle.
///
/// Objects added before a failure are kept; only the most recent error
/// message is retained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionOutcome {
    objects: Vec<ResultObject>,
    error: Option<String>,
}

impl CollectionOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: ResultObject) {
        self.objects.push(object);
    }

    pub fn record_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Top-level objects, one per collected transport node.
    pub fn objects(&self) -> &[ResultObject] {
        &self.objects
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Every object of the cycle, each child listed as an entry of its own
    /// right after its parent.
    pub fn all_objects(&self) -> Vec<&ResultObject> {
        let mut out = Vec::new();
        for object in &self.objects {
            object.collect_into(&mut out);
        }
        out
    }
}

/// Flat view of an object, children referenced by name.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FlatObject<'a> {
    adapter_kind: &'a str,
    resource_kind: &'a str,
    name: &'a str,
    identifiers: &'a [Identifier],
    metrics: &'a BTreeMap<String, f64>,
    properties: &'a BTreeMap<String, PropertyValue>,
    children: Vec<&'a str>,
}

impl<'a> From<&'a ResultObject> for FlatObject<'a> {
    fn from(object: &'a ResultObject) -> Self {
        Self {
            adapter_kind: &object.adapter_kind,
            resource_kind: &object.resource_kind,
            name: &object.name,
            identifiers: &object.identifiers,
            metrics: &object.metrics,
            properties: &object.properties,
            children: object.children.iter().map(|c| c.name.as_str()).collect(),
        }
    }
}

impl Serialize for CollectionOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let flat: Vec<FlatObject<'_>> = self.all_objects().into_iter().map(FlatObject::from).collect();

        let mut state = serializer.serialize_struct("CollectionOutcome", 3)?;
        state.serialize_field("objects", &self.objects)?;
        state.serialize_field("flattened", &flat)?;
        state.serialize_field("errorMessage", &self.error)?;
        state.end()
    }
}
