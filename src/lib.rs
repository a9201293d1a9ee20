//! Read a JSON file from disk into a [`serde_json::Value`].
//!
//! ```no_run
//! let value = jread::read("data.json")?;
//! println!("{}", value["name"]);
//! # Ok::<(), jread::ReadError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod reader;

pub use error::{ParseCategory, ReadError};
pub use reader::{read, read_async};
