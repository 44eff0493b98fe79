//! Extractors for the supported operator kinds.
//!
//! Each submodule decodes one builtin operator's parameter table and binds
//! its operands to already materialized tensors by index. Extractors run
//! strictly after the tensor phase, never allocate or mutate tensors, and
//! follow a fixed positional convention per kind.

#[cfg(test)]
pub(crate) mod test_utils;

pub(crate) mod add;
pub(crate) mod conv2d;
pub(crate) mod depthwise_conv2d;
pub(crate) mod pad;

use crate::from_tflite::ParseError;
use crate::ir::TensorId;
use crate::schema;
use crate::tensor_store::TensorStore;

/// Resolve the tensor handle at `position` of the operator's input list.
pub(crate) fn input_at(
    op: schema::Operator,
    store: &TensorStore,
    position: usize,
) -> Result<TensorId, ParseError> {
    resolve(op.inputs(), store, position, ParseError::MissingInput(position))
}

/// Resolve the tensor handle at `position` of the operator's output list.
pub(crate) fn output_at(
    op: schema::Operator,
    store: &TensorStore,
    position: usize,
) -> Result<TensorId, ParseError> {
    resolve(op.outputs(), store, position, ParseError::MissingOutput(position))
}

fn resolve(
    list: Option<flatbuffers::Vector<i32>>,
    store: &TensorStore,
    position: usize,
    missing: ParseError,
) -> Result<TensorId, ParseError> {
    let index = match list {
        Some(list) if position < list.len() => list.get(position),
        _ => return Err(missing),
    };
    if index < 0 || index as usize >= store.len() {
        return Err(ParseError::TensorIndexOutOfRange {
            index,
            len: store.len(),
        });
    }
    Ok(index as usize)
}
