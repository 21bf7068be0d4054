use crate::constants::DEFAULT_IMAGE_URL;
use crate::data_types::{GatewayError, Restaurant};
use crate::screens::ScreenState;

/// One list entry. The image-failure flag is per-row render state; the
/// canonical record underneath is never written after fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantRow {
    pub restaurant: Restaurant,
    image_failed: bool,
}

impl RestaurantRow {
    fn new(restaurant: Restaurant) -> Self {
        RestaurantRow {
            restaurant,
            image_failed: false,
        }
    }

    /// URL to render for this row. Falls back to the placeholder when the
    /// record has no image or loading it failed.
    pub fn display_image(&self) -> &str {
        if self.image_failed {
            return DEFAULT_IMAGE_URL;
        }
        self.restaurant.image.as_deref().unwrap_or(DEFAULT_IMAGE_URL)
    }
}

pub struct RestaurantListScreen {
    state: ScreenState<Vec<RestaurantRow>>,
    mounted: bool,
}

impl RestaurantListScreen {
    /// Fresh screen instance, waiting on its one `list_restaurants` call.
    pub fn mount() -> Self {
        RestaurantListScreen {
            state: ScreenState::Loading,
            mounted: true,
        }
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn state(&self) -> &ScreenState<Vec<RestaurantRow>> {
        &self.state
    }

    /// Feeds the completed gateway call in. A completion arriving after
    /// teardown is dropped instead of updating a dead screen.
    pub fn resolve(&mut self, result: Result<Vec<Restaurant>, GatewayError>) {
        if !self.mounted {
            log::debug!("restaurant list resolved after unmount, dropping");
            return;
        }
        self.state
            .resolve(result.map(|list| list.into_iter().map(RestaurantRow::new).collect()));
    }

    /// Called when a row's image fails to load. Flips that row to the
    /// placeholder for subsequent renders.
    pub fn mark_image_failed(&mut self, index: usize) {
        if let ScreenState::Ready(rows) = &mut self.state {
            if let Some(row) = rows.get_mut(index) {
                log::warn!("image of '{}' failed to load", row.restaurant.name);
                row.image_failed = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: &str, image: Option<&str>) -> Restaurant {
        Restaurant {
            id: id.to_string(),
            name: format!("Restoran {id}"),
            location: "Antalya".to_string(),
            image: image.map(str::to_string),
            rating: 4.0,
            minimum_basket_amount: 100.0,
            categories: Vec::new(),
        }
    }

    #[test]
    fn resolve_populates_rows_once() {
        let mut screen = RestaurantListScreen::mount();
        assert!(screen.state().is_loading());

        screen.resolve(Ok(vec![restaurant("a", None)]));
        let ScreenState::Ready(rows) = screen.state() else {
            panic!("expected ready state");
        };
        assert_eq!(rows.len(), 1);

        // a second completion must not replace the rendered list
        screen.resolve(Ok(vec![]));
        let ScreenState::Ready(rows) = screen.state() else {
            panic!("expected ready state");
        };
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn resolve_after_unmount_is_a_noop() {
        let mut screen = RestaurantListScreen::mount();
        screen.unmount();
        screen.resolve(Ok(vec![restaurant("a", None)]));
        assert!(screen.state().is_loading());
    }

    #[test]
    fn missing_image_renders_placeholder_without_touching_record() {
        let mut screen = RestaurantListScreen::mount();
        screen.resolve(Ok(vec![restaurant("a", None)]));

        let ScreenState::Ready(rows) = screen.state() else {
            panic!("expected ready state");
        };
        assert_eq!(rows[0].display_image(), DEFAULT_IMAGE_URL);
        assert!(rows[0].restaurant.image.is_none());
    }

    #[test]
    fn failed_image_flips_to_placeholder_for_that_row_only() {
        let mut screen = RestaurantListScreen::mount();
        screen.resolve(Ok(vec![
            restaurant("a", Some("http://x/a.jpg")),
            restaurant("b", Some("http://x/b.jpg")),
        ]));
        screen.mark_image_failed(0);

        let ScreenState::Ready(rows) = screen.state() else {
            panic!("expected ready state");
        };
        assert_eq!(rows[0].display_image(), DEFAULT_IMAGE_URL);
        // canonical record keeps the original URL
        assert_eq!(rows[0].restaurant.image.as_deref(), Some("http://x/a.jpg"));
        assert_eq!(rows[1].display_image(), "http://x/b.jpg");
    }

    #[test]
    fn gateway_failure_becomes_user_visible_message() {
        let mut screen = RestaurantListScreen::mount();
        screen.resolve(Err(crate::data_types::GatewayError::NotFound(
            "x".to_string(),
        )));
        assert!(matches!(screen.state(), ScreenState::Failed(_)));
    }
}
