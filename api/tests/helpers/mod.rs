pub mod app;

pub use app::{delete, get, make_test_app, post_json, post_raw, send, state_with, test_state};
