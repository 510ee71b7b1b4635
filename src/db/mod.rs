//! Store access layer.
//!
//! One parameterized query per operation, executed against the shared
//! `SqlitePool`. No retries, no transactions; failures propagate to the
//! route handlers as `AppError`.

pub mod markets;
pub mod movements;
pub mod products;

pub use markets::*;
pub use movements::*;
pub use products::*;
