//! Reusable UI components.
//!
//! # Components
//!
//! - [`Avatar`]: User avatar rendered as a background image

mod avatar;

pub use avatar::Avatar;
