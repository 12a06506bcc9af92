//! REST API controllers.

pub mod faq_controller;
pub mod health_controller;

pub use health_controller::*;
