//! Core types for agent-foundry.

pub mod event;
pub mod message;
pub mod request;
pub mod upstream;

pub use event::*;
pub use message::*;
pub use request::*;
pub use upstream::*;
