// Host Data Model
//
// Canonical shapes exchanged with the host application: search results,
// load responses and playable links.

pub mod links;
pub mod media;

pub use links::*;
pub use media::*;
