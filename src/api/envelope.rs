//! Response envelope returned by every Canonical API call
//!
//! Every response wraps its payload in the same shape: an `errors` list plus
//! either a single `item` or an `items` page. The envelope itself is typed;
//! the business object fields inside `item`/`items` stay dynamic because
//! they depend on the addressed resource.

use crate::api::Method;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// One `{key, value}` entry of the `errors` list.
///
/// Decoded from any JSON value so an odd entry still counts as an error
/// instead of spoiling the whole envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct EnvelopeError {
    pub key: String,
    pub value: String,
}

impl From<Value> for EnvelopeError {
    fn from(entry: Value) -> Self {
        fn text(field: Option<&Value>) -> String {
            match field {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            }
        }

        match &entry {
            Value::Object(map) => Self {
                key: text(map.get("key")),
                value: text(map.get("value")),
            },
            other => Self {
                key: String::new(),
                value: text(Some(other)),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// `None` when the field is missing or null, which marks a malformed response
    pub errors: Option<Vec<EnvelopeError>>,
    pub item: Option<Value>,
    pub items: Option<Vec<Value>>,
    /// Paging fields are informational only and kept as sent
    pub page_returned: Option<Value>,
    pub items_per_page: Option<Value>,
}

/// What a response body turned out to contain.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// A single resource came back
    Item,
    /// A collection came back, possibly empty
    Items(usize),
    /// No errors and no payload expected (delete)
    Acknowledged,
    /// The server reported business errors
    Rejected(Vec<EnvelopeError>),
    /// Empty body, not JSON, or no `errors` field
    Malformed,
    /// Well-formed but neither `item` nor `items` present
    Unhandled,
}

impl Classification {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Classification::Item | Classification::Items(_) | Classification::Acknowledged
        )
    }
}

/// Which payload counts as success for a given verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    ItemOrItems,
    ItemOnly,
    NoPayload,
}

impl Expectation {
    pub fn for_method(method: Method) -> Self {
        match method {
            Method::Get | Method::Post => Expectation::ItemOrItems,
            Method::Patch => Expectation::ItemOnly,
            Method::Delete => Expectation::NoPayload,
        }
    }
}

impl Envelope {
    pub fn parse(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<Envelope>(text) {
            Ok(envelope) => Some(envelope),
            Err(e) => {
                debug!(target: "envelope", "Response is not a valid envelope: {}", e);
                None
            }
        }
    }

    pub fn classify(&self, expectation: Expectation) -> Classification {
        let errors = match &self.errors {
            Some(errors) => errors,
            None => return Classification::Malformed,
        };

        if !errors.is_empty() {
            return Classification::Rejected(errors.clone());
        }

        if expectation == Expectation::NoPayload {
            return Classification::Acknowledged;
        }

        if self.item.as_ref().is_some_and(|item| !item.is_null()) {
            return Classification::Item;
        }

        if expectation == Expectation::ItemOrItems {
            if let Some(items) = &self.items {
                return Classification::Items(items.len());
            }
        }

        Classification::Unhandled
    }
}

/// Classify a raw response body.
pub fn classify_response(text: &str, expectation: Expectation) -> Classification {
    let classification = match Envelope::parse(text) {
        Some(envelope) => envelope.classify(expectation),
        None => Classification::Malformed,
    };

    match &classification {
        Classification::Rejected(errors) => {
            for error in errors {
                warn!(target: "envelope", "Server error {}: {}", error.key, error.value);
            }
        }
        Classification::Malformed => {
            warn!(target: "envelope", "Empty or malformed response envelope");
        }
        Classification::Unhandled => {
            warn!(target: "envelope", "Envelope carried neither item nor items");
        }
        _ => {}
    }

    classification
}

/// Boolean verdict for a raw response body using the generic item/items rule.
pub fn is_success(text: &str) -> bool {
    classify_response(text, Expectation::ItemOrItems).is_success()
}
