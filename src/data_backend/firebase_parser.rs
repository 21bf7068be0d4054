//! Fetch + normalize against the realtime-database backend. Documents live
//! under the `restourantlar` collection; the database answers `null` for
//! anything that does not exist.

use std::time::Instant;

use crate::data_backend::{RestaurantGateway, RestaurantListPayload};
use crate::data_types::firebase_data_types::{FirebaseRestaurant, FirebaseRestaurantDraft};
use crate::data_types::{GatewayError, Restaurant, RestaurantDraft, RestaurantMenu};

pub(crate) async fn list_restaurants(
    gateway: &RestaurantGateway,
) -> Result<Vec<Restaurant>, GatewayError> {
    let now = Instant::now();
    let payload = gateway
        .get("/restourantlar.json")
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(GatewayError::Fetch)?
        // null body = collection was never written to
        .json::<Option<RestaurantListPayload>>()
        .await
        .map_err(GatewayError::Fetch)?;

    log::debug!("restourantlar read: {:.2?}", now.elapsed());

    Ok(payload.map_or_else(Vec::new, RestaurantListPayload::into_restaurants))
}

pub(crate) async fn get_menu(
    gateway: &RestaurantGateway,
    restaurant_id: &str,
) -> Result<RestaurantMenu, GatewayError> {
    let doc = gateway
        .get(&format!("/restourantlar/{restaurant_id}.json"))
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(GatewayError::Fetch)?
        .json::<Option<FirebaseRestaurant>>()
        .await
        .map_err(GatewayError::Fetch)?
        .ok_or_else(|| GatewayError::NotFound(restaurant_id.to_string()))?;

    let restaurant = doc.into_restaurant(restaurant_id);
    let categories = restaurant.categories.clone();

    Ok(RestaurantMenu {
        restaurant,
        categories,
    })
}

pub(crate) async fn add_restaurant(
    gateway: &RestaurantGateway,
    draft: &RestaurantDraft,
) -> Result<(), GatewayError> {
    let body = FirebaseRestaurantDraft {
        // assigned by the database, sent empty
        id: String::new(),
        name: draft.name.clone(),
        location: draft.location.clone(),
        image: draft.image.clone(),
    };

    gateway
        .post("/restourantlar.json")
        .json(&body)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(GatewayError::Write)?;

    log::info!("restaurant '{}' created", draft.name);
    Ok(())
}
