//! Hand-off point to the stages after parsing.
//!
//! Lowering, optimization and target code generation are not part of this
//! crate. The `Emitter` trait is the contract those stages implement; the
//! `ListingEmitter` is a placeholder that lists what a module declares.

pub mod emitter;
