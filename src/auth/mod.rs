//! Authentication module for managing the API session token.
//!
//! The remote API uses bearer token authentication. `Session` is the
//! explicit, cloneable credential slot threaded through the API client:
//! the token is attached to every outgoing request when present, and is
//! cleared as a side effect when the server answers 401.
//!
//! The token is persisted to disk so it survives restarts.

pub mod session;

pub use session::Session;
