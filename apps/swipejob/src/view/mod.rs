// Search view: state transitions, page sessions and their controllers, templates, handlers.

pub mod about;
pub mod controller;
pub mod handlers;
pub mod render;
pub mod session;
pub mod state;
