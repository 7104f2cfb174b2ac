pub mod events;
pub mod instruments;
pub mod state;
