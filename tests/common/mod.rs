#![allow(dead_code)]

pub mod helpers;
pub mod test_app;

pub use helpers::{new_user, participants};
pub use store::CountingCollection;
pub use test_app::TestApp;
