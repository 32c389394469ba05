#![deny(missing_docs)]
#![doc = "Core data types for the prompt/schema version registry: versions, resources and the shared error surface."]

pub mod errors;
pub mod hash;
pub mod model;
pub mod rng;
pub mod serde;
pub mod version;

pub use errors::{ErrorInfo, PvrError};
pub use hash::ContentHash;
pub use model::{Field, FieldValue, Prompt, Resource, ResourceKind, Schema, Status, Versioned};
pub use rng::{derive_substream_seed, RngHandle};
pub use version::{Bump, Version};
