//! Sort order selection shared between the core and the host UI.
//!
//! This is the shipped configuration of the interchange mechanism: three
//! payload-free variants, wire tokens equal to their declared names, and a
//! display-resource binding per variant.
//!
//! The wire tokens are a compatibility contract. Containers written by
//! earlier revisions (and by the non-Rust side of the boundary) carry these
//! exact names, so they must never change, even if variants are reordered
//! or new ones are added.

use crate::resource::{DisplayResources, IconKey, LabelKey};
use crate::value::Interchange;

/// The order in which the host presents a list of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
    /// Shuffled presentation; the permutation is chosen by the host.
    Random,
}

impl Interchange for SortOrder {
    const VARIANTS: &'static [Self] = &[Self::Ascending, Self::Descending, Self::Random];

    fn wire_name(&self) -> &'static str {
        match self {
            Self::Ascending => "ASCENDING",
            Self::Descending => "DESCENDING",
            Self::Random => "RANDOM",
        }
    }
}

impl DisplayResources for SortOrder {
    fn label_key(&self) -> LabelKey {
        match self {
            Self::Ascending => LabelKey::new("sort_order_ascending"),
            Self::Descending => LabelKey::new("sort_order_descending"),
            Self::Random => LabelKey::new("sort_order_random"),
        }
    }

    fn icon_key(&self) -> IconKey {
        match self {
            Self::Ascending => IconKey::new("sort_order_ascending"),
            Self::Descending => IconKey::new("sort_order_descending"),
            Self::Random => IconKey::new("sort_order_random"),
        }
    }
}
