//! # Gallery State
//!
//! A headless gallery state management library.
//!
//! This crate holds the logic of an image gallery with a single "featured"
//! slot, independent of any rendering framework:
//! - Loading an ordered list of image records from a static JSON resource
//! - Tracking a set of checked records and deleting them in bulk
//! - Reordering records by drag gestures, including promoting a record
//!   into the featured slot
//! - Deriving the display order (featured record first)
//!
//! The rendering layer is expected to own a [`GalleryState`], mutate it only
//! through its methods, and re-derive its view after each operation.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use gallery_state::{GalleryLoader, GalleryState};
//!
//! let mut state = GalleryState::new();
//! let loader = GalleryLoader::new("http://localhost:8080/assets/gallery.json");
//!
//! if state.begin_load() {
//!     let result = loader.load().await;
//!     state.complete_load(result)?;
//! }
//! ```

pub mod loader;
pub mod models;
pub mod state;

pub use loader::{decode_records, GalleryLoader, LoadError};
pub use models::ImageRecord;
pub use state::GalleryState;
