//! Client side of the notes application.
//!
//! - [`api`]: the HTTP boundary ([`api::NotesApi`] seam and the reqwest
//!   backed [`api::NotesClient`]).
//! - [`store`]: the authoritative in-memory copy of notes and tags.
//! - [`search`], [`markdown`], [`form`], [`card`], [`page`]: view models
//!   that the rendering layer binds to.

pub mod api;
pub mod card;
pub mod config;
pub mod error;
pub mod form;
pub mod markdown;
pub mod model;
pub mod page;
pub mod search;
pub mod store;

pub use api::{NotesApi, NotesClient};
pub use error::{ClientError, ClientResult};
pub use model::Note;
pub use store::{NotesState, NotesStore};
