//! Services the form delegates to.
//!
//! The send operation is the only asynchronous boundary of the composer.

pub mod send;

pub use send::{
    DEFAULT_LATENCY, OutgoingEmail, SIMULATED_CONFIRMATION, SendError, SendOutcome, Sender,
    SimulatedSender, Timeout,
};
