use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Hotels,
    Businesses,
    Bookings,
}

impl ResourceKind {
    /// Name of the sub-list the backend wraps the collection in.
    pub fn key(&self) -> &'static str {
        match self {
            ResourceKind::Hotels => "hotels",
            ResourceKind::Businesses => "businesses",
            ResourceKind::Bookings => "bookings",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Hotels => "/api/hotels/my-hotels",
            ResourceKind::Businesses => "/api/businesses/my-businesses",
            ResourceKind::Bookings => "/api/bookings/my-bookings",
        }
    }

    pub fn load_error(&self) -> &'static str {
        match self {
            ResourceKind::Hotels => "Error al cargar hoteles",
            ResourceKind::Businesses => "Error al cargar negocios",
            ResourceKind::Bookings => "Error al cargar reservas",
        }
    }
}

/// A loaded collection. `items` is always a list; `error` is set when the
/// list is empty because loading failed.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct Collection<T> {
    pub items: Vec<T>,
    pub error: Option<String>,
}

impl<T> Collection<T> {
    pub fn loaded(items: Vec<T>) -> Self {
        Self { items, error: None }
    }

    pub fn failed(kind: ResourceKind) -> Self {
        Self {
            items: Vec::new(),
            error: Some(kind.load_error().to_string()),
        }
    }

    /// The role may not see this collection, so it was never requested.
    pub fn not_requested() -> Self {
        Self::loaded(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Picks the list out of a listing payload: the named sub-list when it is an
/// array, else the payload itself when it is an array.
pub fn extract_list(payload: Value, key: &str) -> Option<Vec<Value>> {
    match payload {
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        Value::Array(items) => Some(items),
        _ => None,
    }
}

pub fn normalize_collection<T: DeserializeOwned>(
    payload: Value,
    kind: ResourceKind,
) -> Collection<T> {
    let Some(items) = extract_list(payload, kind.key()) else {
        warn!("Response for {} is not a list, defaulting to empty", kind.key());
        return Collection::failed(kind);
    };

    let items = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Dropping malformed entry in {} due to: {}", kind.key(), e);
                None
            }
        })
        .collect();

    Collection::loaded(items)
}
