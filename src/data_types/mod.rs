pub mod firebase_data_types;
pub mod rest_data_types;

use thiserror::Error;

/// Which backend flavor the gateway talks to. Selects endpoint paths only;
/// response bodies are shape-detected at parse time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Backend {
    Firebase,
    Rest,
}

/// Backend-agnostic restaurant record. Every screen consumes this shape
/// regardless of which wire format produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Absent when the backend carries no photo. The placeholder is
    /// substituted at render time, never here.
    pub image: Option<String>,
    pub rating: f64,
    pub minimum_basket_amount: f64,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub dishes: Vec<Dish>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    /// Present in the menu-service shape, absent in embedded categories.
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
}

/// User-entered restaurant data for the create flow. The id is assigned
/// server-side; the draft never carries one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantDraft {
    pub name: String,
    pub location: String,
    pub image: String,
}

/// Composite the detail screen renders: the restaurant header plus its
/// menu grouped by category.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantMenu {
    pub restaurant: Restaurant,
    pub categories: Vec<Category>,
}

#[derive(Error, Debug)]
pub enum GatewayError {
    /// Transport failure or a response that could not be parsed as either
    /// known shape.
    #[error("fetching restaurants failed: {0}")]
    Fetch(#[source] reqwest::Error),
    /// Well-formed response saying the restaurant does not exist. Distinct
    /// from `Fetch` so screens can tell "no such restaurant" from "network
    /// problem".
    #[error("no restaurant with id '{0}'")]
    NotFound(String),
    #[error("adding restaurant failed: {0}")]
    Write(#[source] reqwest::Error),
}
