#![warn(missing_docs)]

//! `tflite-ir` parses serialized TensorFlow Lite models into a strongly typed,
//! in-memory computation graph: a flat tensor store plus an ordered sequence
//! of operator nodes that reference tensors by handle. The graph is the
//! handoff point to a downstream execution engine; this crate never executes
//! an operator, never allocates or sizes tensor storage, and never validates
//! weight contents.
//!
//! The parse is a single synchronous pass over an already buffered model and
//! is all-or-nothing: a malformed buffer or an unsupported feature aborts
//! with a [`ParseError`] naming the violated invariant or the offending kind,
//! and no partial model is ever returned.

#[macro_use]
extern crate derive_new;

pub mod ir;

mod from_tflite;
mod node;
#[allow(missing_docs)]
pub mod schema;
mod tensor_store;

pub use from_tflite::{parse_buffer, ParseError};
pub use tensor_store::TensorStore;
