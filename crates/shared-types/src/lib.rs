//! # Shared Types Crate
//!
//! Identifiers, content handles, and the `AuthenticatedMessage<T>` request
//! envelope used across the Peer Ledger workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Every cross-crate identifier is defined here.
//! - **Envelope Authority**: The envelope's `sender` is the only place the
//!   caller's identity comes from. Payloads never carry an actor field for
//!   the caller.
//! - **Opaque Content**: Paper and review bodies live in an external blob
//!   store; the ledger only ever sees a [`ContentRef`].

pub mod entities;
pub mod envelope;
pub mod errors;

pub use entities::*;
pub use envelope::AuthenticatedMessage;
pub use errors::*;
