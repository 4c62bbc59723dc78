//! Pagination module
//!
//! Supports the API's two incompatible paging protocols behind one
//! client-facing abstraction:
//!
//! - numeric cursor with a string twin (v1.1 id lists), terminal at zero
//! - opaque token (v2 relationship lists), terminal when empty
//!
//! A wire shape implements [`Paged`] to split itself into items plus a
//! [`Continuation`]; the [`fetch_all`] driver loop is written once and never
//! inspects the concrete protocol. Adding a third protocol means adding a
//! `Continuation` variant and a `Paged` impl, not touching the driver.

mod driver;
mod types;

pub use driver::fetch_all;
pub use types::{Continuation, Endpoint, Page, Paged};
