/*
 * Responsibility
 * - shared context bound to the Router (AppState)
 * - nothing lives here yet; requests are fully self-contained
 * - Clone assumed (internals stay Arc/Clone cheap if anything is added)
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
