//! Client-side synchronizer for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the crate fully deterministic and testable.
//!
//! # Design
//! - [`TodoClient`] is stateless — it holds only `base_url` — and exposes
//!   `build_*` / `parse_*` pairs per operation.
//! - [`TodoSync`] sits on top and owns the client cache: the transient,
//!   non-authoritative copy of the list, plus the loading/error state a
//!   presentation layer renders from. The cache only changes after a
//!   confirmed server response; there is no optimistic mutation.
//! - DTOs are defined independently from the server crate; the integration
//!   test catches schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod sync;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use sync::{LoadState, TodoSync};
pub use types::{CreateTodo, Deleted, EditTodo, Todo};
