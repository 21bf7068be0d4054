use serde::{Deserialize, Serialize};

use crate::data_types::{Category, Dish, Restaurant};

/// List element of `GET /api/restaurants/`: integer primary key, address
/// and image under their REST names.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RestRestaurant {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub rating: f64,
}

/// Category element of `GET /api/menus/restaurant/<id>/`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RestMenuCategory {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub items: Vec<RestMenuItem>,
}

/// Menu-service dish shape: dish name under `title`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RestMenuItem {
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    pub image: Option<String>,
}

impl From<RestRestaurant> for Restaurant {
    fn from(raw: RestRestaurant) -> Self {
        if raw.name.is_empty() {
            log::warn!("restaurant {} has an empty name", raw.id);
        }
        Restaurant {
            id: raw.id.to_string(),
            name: raw.name,
            location: raw.address,
            image: raw.image_url,
            rating: raw.rating,
            // not carried by the REST list shape
            minimum_basket_amount: 0.0,
            categories: Vec::new(),
        }
    }
}

impl From<RestMenuCategory> for Category {
    fn from(raw: RestMenuCategory) -> Self {
        Category {
            name: raw.name,
            dishes: raw.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<RestMenuItem> for Dish {
    fn from(raw: RestMenuItem) -> Self {
        Dish {
            id: raw.id.map(|id| id.to_string()),
            name: raw.title,
            description: raw.description,
            price: raw.price,
            image: raw.image,
        }
    }
}

/// Creation body for `POST /api/restaurants/`. The empty id mirrors the
/// document-store draft; the server assigns the real one.
#[derive(Serialize, Debug)]
pub struct RestRestaurantDraft {
    pub id: String,
    pub name: String,
    pub address: String,
    pub image_url: String,
}
