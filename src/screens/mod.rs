pub mod add_restaurant;
pub mod restaurant_detail;
pub mod restaurant_list;

use std::fmt::Display;

/// Per-screen fetch lifecycle. Starts at `Loading`; the completing gateway
/// call moves it to `Ready` or `Failed` exactly once. There is no retry
/// transition, a fresh mount starts a fresh machine.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ScreenState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading)
    }

    /// Applies a completed fetch. Terminal states stay put, so a stray
    /// second completion cannot flip an already-rendered screen.
    pub fn resolve<E: Display>(&mut self, result: Result<T, E>) {
        if self.is_loading() {
            *self = match result {
                Ok(data) => ScreenState::Ready(data),
                Err(err) => ScreenState::Failed(err.to_string()),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_resolves_to_ready() {
        let mut state: ScreenState<u32> = ScreenState::Loading;
        state.resolve(Ok::<_, String>(5));
        assert_eq!(state, ScreenState::Ready(5));
    }

    #[test]
    fn loading_resolves_to_failed_with_message() {
        let mut state: ScreenState<u32> = ScreenState::Loading;
        state.resolve(Err::<u32, _>("connection refused"));
        assert_eq!(state, ScreenState::Failed("connection refused".to_string()));
    }

    #[test]
    fn terminal_states_ignore_later_completions() {
        let mut state: ScreenState<u32> = ScreenState::Loading;
        state.resolve(Ok::<_, String>(1));
        state.resolve(Ok::<_, String>(2));
        assert_eq!(state, ScreenState::Ready(1));

        let mut failed: ScreenState<u32> = ScreenState::Loading;
        failed.resolve(Err::<u32, _>("boom"));
        failed.resolve(Ok::<_, String>(3));
        assert_eq!(failed, ScreenState::Failed("boom".to_string()));
    }
}
