//! Data structures crossing the HTTP and store boundaries.
//!
//! Row structs map one-to-one onto table rows (`sqlx::FromRow`) and onto the
//! JSON response shapes; request structs only deserialize. Field names are
//! the wire names the browser client expects and must not be renamed.

pub mod market;
pub mod movement;
pub mod product;

pub use market::*;
pub use movement::*;
pub use product::*;
