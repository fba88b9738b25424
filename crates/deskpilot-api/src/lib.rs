//! # deskpilot API
//!
//! HTTP interface to the `computer` tool.
//!
//! Requests name an action and its parameters either in the query string
//! (`GET /?Action=MoveMouse&Version=2020-04-01&PositionX=10&PositionY=20`) or in a
//! JSON body (`POST /`). Every response is wrapped in an envelope:
//!
//! ```text
//! {
//!   "ResponseMetadata": {
//!     "RequestId": "...",
//!     "Action": "MoveMouse",
//!     "Version": "2020-04-01",
//!     "Error": { "Code": "InvalidParameter", "Message": "..." }   // on failure
//!   },
//!   "Result": ...
//! }
//! ```

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use http::envelope::{ErrorInfo, Envelope, ResponseMetadata, DEFAULT_VERSION};
pub use http::routes::create_router;
pub use server::{InterfaceConfig, InterfaceServer};
pub use state::AppState;
