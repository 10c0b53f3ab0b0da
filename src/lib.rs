/*
 * Responsibility
 * - expose the crate's modules so integration tests can drive the
 *   assembled Router in-process (tower oneshot)
 */
pub mod api;
pub mod app;
pub mod config;
pub mod services;
pub mod state;
