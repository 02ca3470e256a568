//! Top-level rendering coordinator.
//!
//! Rendering is two steps: [`AppState::compute_viewmodel`] turns state into
//! display-ready values, then the components print them with ANSI escapes.
//! Nothing here mutates state.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout for the state's current viewport.
///
/// Callers update [`AppState::viewport`] from the host's `rows`/`cols`
/// first so mouse hit-testing and drawing agree on the layout.
pub fn render(state: &AppState) {
    let viewmodel = state.compute_viewmodel();
    let layout = state.layout();

    components::render_screen(&viewmodel, &layout, &state.theme);
}
