//! A file-based content store serving localized, versioned content items
//! from Markdown files with YAML frontmatter, with typed null-safe field
//! accessors layered on top.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod error;
pub mod field;
pub mod frontmatter;
pub mod id;
pub mod item;
pub mod language;
pub mod logging;
pub mod media;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::{read_config, StoreConfig};
pub use error::ContentError;
pub use field::{
    DateField, Field, FieldMap, ImageField, LinkField, MultilistField, ReferenceField,
    RichTextField, BOOLEAN_TRUE, MULTILIST_SEPARATOR,
};
pub use frontmatter::{generate_item, parse_item, FrontmatterError};
pub use id::ItemId;
pub use item::{FieldAccessors, Item, ItemFrontmatter};
pub use language::Language;
pub use logging::{init_logging, parse_rotation, LogConfig};
pub use media::MediaItem;
pub use store::Database;
