//! Externally sourced map layers.
//!
//! Layers can be declared inline (the definition travels with the story) or
//! pulled from a layer catalog by dataset id. Resolution is best effort: a
//! failed catalog lookup logs a warning and omits the layer, it never aborts
//! the story. Resolved layers are re-keyed by slug so chapter opacity steps
//! address them by a stable name.

use anyhow::{anyhow, Context, Result};
use hashbrown::HashMap;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a declared layer's definition comes from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerOrigin {
    /// The definition is embedded in the declaration.
    #[default]
    Inline,
    /// The definition is fetched from the layer catalog by dataset id.
    Catalog,
}

/// A layer as declared in the story document.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalLayerDescriptor {
    /// Inline layer id, or catalog dataset id.
    pub id: String,
    /// Stable name chapter steps use; falls back to `id`.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, rename = "source")]
    pub origin: LayerOrigin,
    /// Inline definition payload; ignored for catalog layers.
    #[serde(default)]
    pub definition: Value,
    /// Raster decode parameters merged into a fetched definition.
    #[serde(default)]
    pub decode_params: Option<Value>,
}

/// A resolved layer ready for the host to mount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExternalLayer {
    pub id: String,
    pub definition: Value,
}

/// Resolved external layers plus their story-driven opacity state.
///
/// The host owns mounting these into its map; chapter opacity steps that
/// address a registered key land here instead of in paint properties.
#[derive(Debug, Default)]
pub struct ExternalLayerRegistry {
    layers: HashMap<String, ExternalLayer>,
    opacity: HashMap<String, f64>,
}

impl ExternalLayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, layer: ExternalLayer) {
        self.layers.insert(key.into(), layer);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.layers.contains_key(key)
    }

    pub fn layer(&self, key: &str) -> Option<&ExternalLayer> {
        self.layers.get(key)
    }

    pub fn layers(&self) -> impl Iterator<Item = (&str, &ExternalLayer)> {
        self.layers.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Last write wins; the host reads the table back when it renders.
    pub fn set_opacity(&mut self, key: &str, opacity: f64) {
        if self.layers.contains_key(key) {
            self.opacity.insert(key.to_string(), opacity);
        }
    }

    pub fn opacity(&self, key: &str) -> Option<f64> {
        self.opacity.get(key).copied()
    }

    pub fn opacities(&self) -> impl Iterator<Item = (&str, f64)> {
        self.opacity.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Looks up a layer definition by dataset id.
pub trait CatalogLookup {
    fn layer_definition(&mut self, dataset_id: &str) -> Result<Value>;
}

/// HTTP layer-catalog client.
///
/// `layer_definition` fetches `{base}/v1/dataset/{id}/layer` and takes the
/// first entry of the response's `data` array.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl CatalogLookup for CatalogClient {
    fn layer_definition(&mut self, dataset_id: &str) -> Result<Value> {
        let url = format!(
            "{}/v1/dataset/{dataset_id}/layer",
            self.base_url.trim_end_matches('/')
        );
        let body: Value = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("GET {url}"))?
            .json()
            .with_context(|| format!("decode {url}"))?;
        first_layer(body).ok_or_else(|| anyhow!("dataset {dataset_id} has no layers"))
    }
}

fn first_layer(mut body: Value) -> Option<Value> {
    let data = body.get_mut("data")?.as_array_mut()?;
    if data.is_empty() {
        return None;
    }
    Some(data.swap_remove(0))
}

/// Resolve declared layers into a registry, keyed by slug.
///
/// Catalog failures and empty datasets warn and omit the layer.
pub fn resolve_external_layers(
    descriptors: &[ExternalLayerDescriptor],
    catalog: &mut dyn CatalogLookup,
) -> ExternalLayerRegistry {
    let mut registry = ExternalLayerRegistry::new();
    for descriptor in descriptors {
        let key = descriptor.slug.clone().unwrap_or_else(|| descriptor.id.clone());
        let definition = match descriptor.origin {
            LayerOrigin::Inline => descriptor.definition.clone(),
            LayerOrigin::Catalog => match catalog.layer_definition(&descriptor.id) {
                Ok(mut definition) => {
                    if let Some(params) = &descriptor.decode_params {
                        merge_decode_params(&mut definition, params);
                    }
                    definition
                }
                Err(err) => {
                    warn!("layer {key}: catalog lookup failed, omitting: {err:#}");
                    continue;
                }
            },
        };
        registry.insert(
            key,
            ExternalLayer {
                id: descriptor.id.clone(),
                definition,
            },
        );
    }
    registry
}

fn merge_decode_params(definition: &mut Value, params: &Value) {
    if let Some(config) = definition
        .pointer_mut("/attributes/layerConfig")
        .and_then(Value::as_object_mut)
    {
        config.insert("decodeParams".to_string(), params.clone());
    }
}
