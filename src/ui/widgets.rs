pub mod dashboard;
pub mod hud;
pub mod instruments;
pub mod menu;
pub mod readouts;
pub mod scene;
pub(crate) mod shared;
