//! Embedded municipality dataset
//!
//! The records are gzip-compressed at compile time and decompressed on first
//! access, then indexed by prefecture initial for the three lookups.
//!
//! # Usage
//!
//! ```rust
//! use muni::dataset::get_dataset;
//!
//! let index = get_dataset();
//!
//! for initial in index.municipality_initials("W") {
//!     println!("{}", initial);
//! }
//!
//! for record in index.municipalities_by_initial("T", "B") {
//!     println!("{}", record);
//! }
//! ```

mod embedded;
mod index;
mod types;

pub use embedded::{get_dataset, init_dataset};
pub use index::MunicipalityIndex;
pub use types::{DivisionName, Municipality, MunicipalityFile};
