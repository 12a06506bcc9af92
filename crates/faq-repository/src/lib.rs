//! # FAQ Repository
//!
//! Store implementations behind the [`FaqRepository`] trait:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn FaqRepository>
//! MySqlFaqRepository  ──►  DatabasePool  ──►  MySQL
//! InMemoryFaqRepository    (local development and tests)
//! ```

pub mod memory;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use memory::*;
pub use mysql::*;
pub use pool::*;
pub use traits::*;
