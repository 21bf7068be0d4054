//! Fetch + normalize against the REST backend revision, where menus live
//! in a separate service (`/api/menus/`) from the restaurant records
//! (`/api/restaurants/`).

use std::time::Instant;

use reqwest::StatusCode;

use crate::data_backend::{RestaurantGateway, RestaurantListPayload};
use crate::data_types::rest_data_types::{RestMenuCategory, RestRestaurantDraft};
use crate::data_types::{Category, GatewayError, Restaurant, RestaurantDraft, RestaurantMenu};

pub(crate) async fn list_restaurants(
    gateway: &RestaurantGateway,
) -> Result<Vec<Restaurant>, GatewayError> {
    let now = Instant::now();
    let payload = gateway
        .get("/api/restaurants/")
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(GatewayError::Fetch)?
        .json::<RestaurantListPayload>()
        .await
        .map_err(GatewayError::Fetch)?;

    log::debug!("restaurant list read: {:.2?}", now.elapsed());

    Ok(payload.into_restaurants())
}

/// There is no single-restaurant read in this shape, so the header record
/// is resolved from the list before the menu service is asked for the
/// categories.
pub(crate) async fn get_menu(
    gateway: &RestaurantGateway,
    restaurant_id: &str,
) -> Result<RestaurantMenu, GatewayError> {
    let restaurant = list_restaurants(gateway)
        .await?
        .into_iter()
        .find(|r| r.id == restaurant_id)
        .ok_or_else(|| GatewayError::NotFound(restaurant_id.to_string()))?;

    let response = gateway
        .get(&format!("/api/menus/restaurant/{restaurant_id}/"))
        .send()
        .await
        .map_err(GatewayError::Fetch)?;

    if response.status() == StatusCode::NOT_FOUND {
        return Err(GatewayError::NotFound(restaurant_id.to_string()));
    }

    let categories = response
        .error_for_status()
        .map_err(GatewayError::Fetch)?
        .json::<Vec<RestMenuCategory>>()
        .await
        .map_err(GatewayError::Fetch)?
        .into_iter()
        .map(Category::from)
        .collect();

    Ok(RestaurantMenu {
        restaurant,
        categories,
    })
}

pub(crate) async fn add_restaurant(
    gateway: &RestaurantGateway,
    draft: &RestaurantDraft,
) -> Result<(), GatewayError> {
    let body = RestRestaurantDraft {
        id: String::new(),
        name: draft.name.clone(),
        address: draft.location.clone(),
        image_url: draft.image.clone(),
    };

    gateway
        .post("/api/restaurants/")
        .json(&body)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(GatewayError::Write)?;

    log::info!("restaurant '{}' created", draft.name);
    Ok(())
}
