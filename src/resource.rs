//! Host display-resource bindings.
//!
//! Variants are rendered by the host platform, not by this crate. Each
//! variant resolves to two opaque keys, one per host resource namespace:
//! a label key into the string table and an icon key into the image table.
//! Turning a key into an actual string or image is the host's job.
//!
//! Mappings are written as exhaustive `match` expressions with no wildcard
//! arm, so adding a variant without extending its mappings is a compile
//! error rather than a bad key at runtime.

/// An opaque key into the host's label (string) resource table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelKey(&'static str);

impl LabelKey {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

/// An opaque key into the host's icon (image) resource table.
///
/// Distinct from [`LabelKey`] so the two namespaces cannot be mixed up even
/// when the identifiers happen to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconKey(&'static str);

impl IconKey {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Resolution of a variant to its host display resources.
///
/// Both resolvers are total over the implementing enum's variant set and
/// pure; neither can fail at runtime.
pub trait DisplayResources {
    fn label_key(&self) -> LabelKey;
    fn icon_key(&self) -> IconKey;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_compare_by_identifier() {
        assert_eq!(LabelKey::new("sort_order"), LabelKey::new("sort_order"));
        assert_ne!(LabelKey::new("sort_order"), LabelKey::new("other"));
        assert_eq!(IconKey::new("sort_order").as_str(), "sort_order");
    }
}
