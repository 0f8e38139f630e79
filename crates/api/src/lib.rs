//! Request protocol for Grisaille
//!
//! Defines the types exchanged between the editing front-end and the
//! generation client: edit modes, generation/edit requests with their
//! validation rules, and the command enum an embedding UI drives the
//! session with.

pub mod commands;
pub mod error;
pub mod modes;
pub mod request;

pub use commands::*;
pub use error::*;
pub use modes::*;
pub use request::*;
