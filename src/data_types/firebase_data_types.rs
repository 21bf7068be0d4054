use serde::{Deserialize, Serialize};

use crate::data_types::{Category, Dish, Restaurant};

/// One document of the `restourantlar` collection. Field names follow the
/// realtime database, mixed Turkish included; nothing outside this module
/// and the parser may see them.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FirebaseRestaurant {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub image: Option<String>,
    #[serde(default)]
    pub degerlendirme: f64,
    #[serde(default)]
    pub minimum_sepet_tutari: f64,
    #[serde(default)]
    pub categories: Vec<FirebaseCategory>,
    pub alias: Option<String>,
    pub servis_ucreti: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FirebaseCategory {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dishes: Vec<FirebaseDish>,
}

/// Embedded dish shape: no id, dish name under `name`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FirebaseDish {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    pub image: Option<String>,
}

impl FirebaseRestaurant {
    /// Normalizes a document into the canonical record, with the document
    /// key becoming the id.
    pub fn into_restaurant(self, key: &str) -> Restaurant {
        if self.name.is_empty() {
            log::warn!("restaurant document '{key}' has an empty name");
        }
        Restaurant {
            id: key.to_string(),
            name: self.name,
            location: self.location,
            image: self.image,
            rating: self.degerlendirme,
            minimum_basket_amount: self.minimum_sepet_tutari,
            categories: self.categories.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<FirebaseCategory> for Category {
    fn from(raw: FirebaseCategory) -> Self {
        Category {
            name: raw.name,
            dishes: raw.dishes.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<FirebaseDish> for Dish {
    fn from(raw: FirebaseDish) -> Self {
        Dish {
            id: None,
            name: raw.name,
            description: raw.description,
            price: raw.price,
            image: raw.image,
        }
    }
}

/// Body POSTed to create a document. The id field is sent empty and
/// overwritten server-side.
#[derive(Serialize, Debug)]
pub struct FirebaseRestaurantDraft {
    pub id: String,
    pub name: String,
    pub location: String,
    pub image: String,
}
