pub mod firebase_parser;
pub mod rest_parser;

use serde::Deserialize;

use crate::constants::REQUEST_TIMEOUT;
use crate::data_types::firebase_data_types::FirebaseRestaurant;
use crate::data_types::rest_data_types::RestRestaurant;
use crate::data_types::{Backend, GatewayError, Restaurant, RestaurantDraft, RestaurantMenu};

/// The two list shapes the client has had to read across backend
/// revisions, resolved at parse time. A keyed object is the
/// document-store collection, an array is the REST list; callers only
/// ever see canonical records.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum RestaurantListPayload {
    Keyed(std::collections::BTreeMap<String, FirebaseRestaurant>),
    Listed(Vec<RestRestaurant>),
}

impl RestaurantListPayload {
    pub(crate) fn into_restaurants(self) -> Vec<Restaurant> {
        match self {
            RestaurantListPayload::Keyed(docs) => docs
                .into_iter()
                .map(|(key, doc)| doc.into_restaurant(&key))
                .collect(),
            RestaurantListPayload::Listed(list) => list.into_iter().map(Into::into).collect(),
        }
    }
}

/// The only component that knows backend wire shapes. Screens go through
/// this and receive canonical records or a typed error.
pub struct RestaurantGateway {
    client: reqwest::Client,
    base_url: String,
    backend: Backend,
    timeout: std::time::Duration,
}

impl RestaurantGateway {
    pub fn new(backend: Backend, base_url: &str) -> Self {
        Self::with_timeout(backend, base_url, REQUEST_TIMEOUT)
    }

    /// Same gateway with a custom request deadline.
    pub fn with_timeout(backend: Backend, base_url: &str, timeout: std::time::Duration) -> Self {
        RestaurantGateway {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            backend,
            timeout,
        }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .timeout(self.timeout)
    }

    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .timeout(self.timeout)
    }

    /// Reads the full restaurant collection. An empty collection is an
    /// empty vec, never an error.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, GatewayError> {
        match self.backend {
            Backend::Firebase => firebase_parser::list_restaurants(self).await,
            Backend::Rest => rest_parser::list_restaurants(self).await,
        }
    }

    /// Assembles the composite the detail screen needs. `NotFound` when
    /// the id has no record, `Fetch` for transport/parse trouble.
    pub async fn get_menu(&self, restaurant_id: &str) -> Result<RestaurantMenu, GatewayError> {
        match self.backend {
            Backend::Firebase => firebase_parser::get_menu(self, restaurant_id).await,
            Backend::Rest => rest_parser::get_menu(self, restaurant_id).await,
        }
    }

    /// Sends one creation request. The backend assigns the id; nothing
    /// about the created record comes back.
    pub async fn add_restaurant(&self, draft: &RestaurantDraft) -> Result<(), GatewayError> {
        match self.backend {
            Backend::Firebase => firebase_parser::add_restaurant(self, draft).await,
            Backend::Rest => rest_parser::add_restaurant(self, draft).await,
        }
    }
}
