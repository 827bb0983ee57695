use serde::{Deserialize, Serialize};

/// A single gallery image record
///
/// `id` is the stable key used for selection and equality. `image` is an
/// opaque reference (URL or path) to displayable data. At most one record
/// in a collection carries `featured = true` at any time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageRecord {
    pub id: i64,
    pub image: String,
    pub featured: bool,
}

impl ImageRecord {
    pub fn new(id: i64, image: impl Into<String>, featured: bool) -> Self {
        Self {
            id,
            image: image.into(),
            featured,
        }
    }
}
