//! Content items and their typed field accessors.

mod accessors;
mod types;

pub use accessors::FieldAccessors;
pub use types::{Item, ItemFrontmatter};

#[cfg(test)]
pub(crate) mod fixtures;

#[cfg(test)]
#[path = "accessors_tests_1.rs"]
mod tests_1;
#[cfg(test)]
#[path = "accessors_tests_2.rs"]
mod tests_2;
