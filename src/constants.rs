use std::time::Duration;

/// Realtime-database instance the original deployment points at.
pub const FIREBASE_BASE_URL: &str =
    "https://yemek-sepeti-b9d10-default-rtdb.asia-southeast1.firebasedatabase.app";

/// Shown whenever a restaurant has no image or its image failed to load.
pub const DEFAULT_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// Upper bound for any single backend request. A request past this deadline
/// is cancelled and surfaces as a fetch error instead of hanging the
/// loading state.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Fixed row heights of the detail screen, in display points. The
// active-category calculation and the category-tap scroll targets both work
// on these.
pub const CATEGORY_HEADER_HEIGHT: f32 = 36.0;
pub const DISH_ROW_HEIGHT: f32 = 64.0;
