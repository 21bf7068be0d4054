use crate::constants::{CATEGORY_HEADER_HEIGHT, DISH_ROW_HEIGHT};
use crate::data_types::{GatewayError, RestaurantMenu};
use crate::screens::ScreenState;

#[derive(Debug, Clone, Copy, PartialEq)]
enum RowKind {
    Header,
    Dish,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct MenuRow {
    category: usize,
    kind: RowKind,
    top: f32,
    height: f32,
}

/// Vertical geometry of the menu list: one header row per category
/// followed by its dish rows, at fixed heights. Both the scroll-derived
/// active category and the category-tap scroll targets are answered from
/// this.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLayout {
    rows: Vec<MenuRow>,
}

impl MenuLayout {
    pub fn new(menu: &RestaurantMenu) -> Self {
        let mut rows = Vec::new();
        let mut top = 0.0;
        for (category, cat) in menu.categories.iter().enumerate() {
            rows.push(MenuRow {
                category,
                kind: RowKind::Header,
                top,
                height: CATEGORY_HEADER_HEIGHT,
            });
            top += CATEGORY_HEADER_HEIGHT;
            for _ in &cat.dishes {
                rows.push(MenuRow {
                    category,
                    kind: RowKind::Dish,
                    top,
                    height: DISH_ROW_HEIGHT,
                });
                top += DISH_ROW_HEIGHT;
            }
        }
        MenuLayout { rows }
    }

    /// The category whose dishes cover the largest share of the viewport.
    /// A dish row only counts when the majority of its height is visible,
    /// so a sliver at the top edge does not steal the highlight. `None`
    /// when no dish row qualifies.
    pub fn active_category(&self, scroll_offset: f32, viewport_height: f32) -> Option<usize> {
        let viewport_bottom = scroll_offset + viewport_height;
        let mut visible_per_category: Vec<(usize, f32)> = Vec::new();

        for row in self.rows.iter().filter(|r| r.kind == RowKind::Dish) {
            let overlap =
                (row.top + row.height).min(viewport_bottom) - row.top.max(scroll_offset);
            if overlap * 2.0 > row.height {
                match visible_per_category.iter_mut().find(|(c, _)| *c == row.category) {
                    Some((_, height)) => *height += row.height,
                    None => visible_per_category.push((row.category, row.height)),
                }
            }
        }

        // strict comparison keeps the earlier category on ties
        let mut best: Option<(usize, f32)> = None;
        for (category, height) in visible_per_category {
            if best.map_or(true, |(_, h)| height > h) {
                best = Some((category, height));
            }
        }
        best.map(|(category, _)| category)
    }

    /// Scroll offset of a category's first dish (its header when the
    /// category has no dishes).
    pub fn scroll_offset_for(&self, category: usize) -> Option<f32> {
        self.rows
            .iter()
            .find(|r| r.category == category && r.kind == RowKind::Dish)
            .or_else(|| self.rows.iter().find(|r| r.category == category))
            .map(|r| r.top)
    }
}

/// What the detail screen renders once the menu fetch completes.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    pub menu: RestaurantMenu,
    pub layout: MenuLayout,
    pub active_category: usize,
}

pub struct RestaurantDetailScreen {
    state: ScreenState<MenuView>,
    mounted: bool,
}

impl RestaurantDetailScreen {
    pub fn mount() -> Self {
        RestaurantDetailScreen {
            state: ScreenState::Loading,
            mounted: true,
        }
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn state(&self) -> &ScreenState<MenuView> {
        &self.state
    }

    pub fn resolve(&mut self, result: Result<RestaurantMenu, GatewayError>) {
        if !self.mounted {
            log::debug!("menu resolved after unmount, dropping");
            return;
        }
        self.state.resolve(result.map(|menu| {
            let layout = MenuLayout::new(&menu);
            MenuView {
                menu,
                layout,
                active_category: 0,
            }
        }));
    }

    /// Scroll-position update from the list. Re-derives the active
    /// category; keeps the previous one when nothing qualifies.
    pub fn set_scroll(&mut self, scroll_offset: f32, viewport_height: f32) {
        if let ScreenState::Ready(view) = &mut self.state {
            if let Some(active) = view.layout.active_category(scroll_offset, viewport_height) {
                view.active_category = active;
            }
        }
    }

    /// Category-heading tap: marks it active and hands back the offset the
    /// list should scroll to.
    pub fn select_category(&mut self, category: usize) -> Option<f32> {
        let ScreenState::Ready(view) = &mut self.state else {
            return None;
        };
        let target = view.layout.scroll_offset_for(category)?;
        view.active_category = category;
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::{Category, Dish, Restaurant, RestaurantMenu};

    fn dish(name: &str) -> Dish {
        Dish {
            id: None,
            name: name.to_string(),
            description: String::new(),
            price: 50.0,
            image: None,
        }
    }

    fn menu(dishes_per_category: &[usize]) -> RestaurantMenu {
        let categories: Vec<Category> = dishes_per_category
            .iter()
            .enumerate()
            .map(|(i, &n)| Category {
                name: format!("Kategori {i}"),
                dishes: (0..n).map(|d| dish(&format!("dish {i}.{d}"))).collect(),
            })
            .collect();
        RestaurantMenu {
            restaurant: Restaurant {
                id: "r1".to_string(),
                name: "Pizza Roma".to_string(),
                location: "Antalya".to_string(),
                image: None,
                rating: 4.5,
                minimum_basket_amount: 120.0,
                categories: categories.clone(),
            },
            categories,
        }
    }

    // layout with [2, 3] dishes:
    //   cat 0 header:   0..36
    //   cat 0 dishes:  36..100, 100..164
    //   cat 1 header: 164..200
    //   cat 1 dishes: 200..264, 264..328, 328..392

    #[test]
    fn top_of_list_activates_first_category() {
        let layout = MenuLayout::new(&menu(&[2, 3]));
        assert_eq!(layout.active_category(0.0, 200.0), Some(0));
    }

    #[test]
    fn category_covering_most_of_viewport_wins() {
        let layout = MenuLayout::new(&menu(&[2, 3]));
        // viewport 150..350: cat 0 contributes a sliver (100..164, only 14
        // visible, below majority), cat 1 has two fully visible dish rows
        assert_eq!(layout.active_category(150.0, 200.0), Some(1));
    }

    #[test]
    fn majority_threshold_ignores_barely_visible_rows() {
        let layout = MenuLayout::new(&menu(&[2, 3]));
        // viewport 130..230: dish 36..100 not visible, dish 100..164 shows
        // 34 of 64 (majority), dish 200..264 shows 30 of 64 (minority)
        assert_eq!(layout.active_category(130.0, 100.0), Some(0));
    }

    #[test]
    fn viewport_past_all_dishes_keeps_no_category() {
        let layout = MenuLayout::new(&menu(&[1]));
        assert_eq!(layout.active_category(500.0, 200.0), None);
    }

    #[test]
    fn scroll_target_is_first_dish_of_category() {
        let layout = MenuLayout::new(&menu(&[2, 3]));
        assert_eq!(layout.scroll_offset_for(1), Some(200.0));
    }

    #[test]
    fn empty_category_scroll_target_is_its_header() {
        let layout = MenuLayout::new(&menu(&[2, 0]));
        assert_eq!(layout.scroll_offset_for(1), Some(164.0));
        assert_eq!(layout.scroll_offset_for(9), None);
    }

    #[test]
    fn scrolling_updates_active_category_and_keeps_it_when_nothing_qualifies() {
        let mut screen = RestaurantDetailScreen::mount();
        screen.resolve(Ok(menu(&[2, 3])));

        screen.set_scroll(200.0, 200.0);
        let ScreenState::Ready(view) = screen.state() else {
            panic!("expected ready state");
        };
        assert_eq!(view.active_category, 1);

        // far past the content: nothing qualifies, highlight unchanged
        screen.set_scroll(1000.0, 200.0);
        let ScreenState::Ready(view) = screen.state() else {
            panic!("expected ready state");
        };
        assert_eq!(view.active_category, 1);
    }

    #[test]
    fn resolve_after_unmount_is_a_noop() {
        let mut screen = RestaurantDetailScreen::mount();
        screen.unmount();
        screen.resolve(Ok(menu(&[2, 3])));
        assert!(screen.state().is_loading());
    }

    #[test]
    fn selecting_category_returns_scroll_target() {
        let mut screen = RestaurantDetailScreen::mount();
        screen.resolve(Ok(menu(&[2, 3])));

        assert_eq!(screen.select_category(1), Some(200.0));
        let ScreenState::Ready(view) = screen.state() else {
            panic!("expected ready state");
        };
        assert_eq!(view.active_category, 1);
    }

    #[test]
    fn not_found_failure_renders_its_message() {
        let mut missing = RestaurantDetailScreen::mount();
        missing.resolve(Err(GatewayError::NotFound("r9".to_string())));
        let ScreenState::Failed(msg) = missing.state() else {
            panic!("expected failed state");
        };
        assert!(msg.contains("r9"));
    }
}
