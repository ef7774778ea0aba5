use crate::RenderError;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// An opt-in record of the decisions made while rendering a single card.
///
/// A diagnostics context is created per request and passed by reference to
/// whatever should report into it. When disabled, recording is a no-op and
/// nothing is serialized.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    enabled: bool,
    sections: BTreeMap<String, Value>,
}

impl Diagnostics {
    /// A context that keeps everything recorded into it
    pub fn enabled() -> Diagnostics {
        Diagnostics {
            enabled: true,
            sections: BTreeMap::new(),
        }
    }

    /// A context that drops everything recorded into it
    pub fn disabled() -> Diagnostics {
        Diagnostics::default()
    }

    /// Whether recording does anything. Lets callers skip building values
    /// nobody will see.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Store `value` under `key`, replacing any previous section of that name
    pub fn record<T: Serialize>(&mut self, key: &str, value: T) {
        if !self.enabled {
            return;
        }
        match serde_json::to_value(value) {
            Ok(value) => {
                self.sections.insert(key.to_string(), value);
            }
            Err(err) => tracing::warn!(key, %err, "dropping unserializable diagnostics"),
        }
    }

    /// Append `value` to the list stored under `key`
    pub fn push<T: Serialize>(&mut self, key: &str, value: T) {
        if !self.enabled {
            return;
        }
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "dropping unserializable diagnostics");
                return;
            }
        };
        let section = self
            .sections
            .entry(key.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        match section {
            Value::Array(items) => items.push(value),
            other => *other = Value::Array(vec![other.take(), value]),
        }
    }

    /// The section stored under `key`, if any was recorded
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.sections.get(key)
    }

    /// Every recorded section as a pretty-printed JSON object
    pub fn to_json_pretty(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(&self.sections)?)
    }
}
