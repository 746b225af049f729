//! Provider-specific settings that sit next to a resource's own fields.
//!
//! Several resources carry a provider discriminator (`type`, `connectorType`,
//! `integrationType`) and a `params` object whose shape depends on it. Each
//! resource models the pair as one enum, flattened into the resource with
//! `#[serde(flatten, with = "crate::provider")]`.
//!
//! Known providers whose params do not decode are an error. Unknown
//! providers are kept as raw JSON so the resource can be written back
//! unchanged.

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::{Error as _, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

const PARAMS: &str = "params";

/// Adjacently tagged provider enum with a raw fallback variant
pub(crate) trait ProviderParams: Serialize + DeserializeOwned {
    /// Key of the provider discriminator on the owning resource
    const TAG: &'static str;

    /// Fallback for a provider this crate does not model
    fn other(provider: String, params: Option<Value>) -> Self;

    /// Parts of the fallback variant, `None` for modelled providers
    fn as_other(&self) -> Option<(&str, Option<&Value>)>;
}

fn tagged<P: ProviderParams>(provider: &str, params: Value) -> Value {
    let mut object = Map::new();
    object.insert(P::TAG.to_string(), Value::String(provider.to_string()));
    object.insert(PARAMS.to_string(), params);
    Value::Object(object)
}

pub(crate) fn serialize<S, P>(params: &Option<P>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    P: ProviderParams,
{
    let mut map = serializer.serialize_map(None)?;
    let Some(params) = params else {
        return map.end();
    };

    if let Some((provider, raw)) = params.as_other() {
        map.serialize_entry(P::TAG, provider)?;
        if let Some(raw) = raw.filter(|raw| !raw.is_null()) {
            map.serialize_entry(PARAMS, raw)?;
        }
        return map.end();
    }

    let mut value = serde_json::to_value(params).map_err(S::Error::custom)?;
    let object = value
        .as_object_mut()
        .ok_or_else(|| S::Error::custom("provider params must serialize to an object"))?;
    if let Some(provider) = object.remove(P::TAG) {
        map.serialize_entry(P::TAG, &provider)?;
    }
    if let Some(raw) = object.remove(PARAMS).filter(|raw| !raw.is_null()) {
        map.serialize_entry(PARAMS, &raw)?;
    }
    map.end()
}

pub(crate) fn deserialize<'de, D, P>(deserializer: D) -> Result<Option<P>, D::Error>
where
    D: Deserializer<'de>,
    P: ProviderParams,
{
    let mut fields = Map::<String, Value>::deserialize(deserializer)?;

    let provider = match fields.remove(P::TAG) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(provider)) => provider,
        Some(other) => {
            return Err(D::Error::custom(format!(
                "invalid {}: expected a string, got {other}",
                P::TAG
            )))
        }
    };
    let raw = fields.remove(PARAMS).unwrap_or(Value::Null);

    match serde_json::from_value::<P>(tagged::<P>(&provider, raw.clone())) {
        Ok(params) => Ok(Some(params)),
        // Every modelled provider accepts null params, so a failure there
        // means the provider itself is unknown.
        Err(_) if serde_json::from_value::<P>(tagged::<P>(&provider, Value::Null)).is_err() => {
            let raw = Some(raw).filter(|raw| !raw.is_null());
            Ok(Some(P::other(provider, raw)))
        }
        Err(err) => Err(D::Error::custom(format!("{provider} {PARAMS}: {err}"))),
    }
}
