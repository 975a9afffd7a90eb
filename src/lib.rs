//! Marshalling for closed sets of symbolic variants across IPC boundaries.
//!
//! See [`value::Interchange`] for the mechanism, [`transport`] for the
//! container side, and [`sort::SortOrder`] for the shipped configuration.

pub mod error;
pub mod resource;
pub mod sort;
pub mod transport;
pub mod value;

pub use error::Error;
pub use resource::{DisplayResources, IconKey, LabelKey};
pub use sort::SortOrder;
pub use transport::{Parcel, TokenSink, TokenSource};
pub use value::Interchange;
