//! Extractor for the elementwise addition operator.

use crate::from_tflite::{activation, ParseError};
use crate::ir::Add;
use crate::schema;
use crate::tensor_store::TensorStore;

use super::{input_at, output_at};

/// Decode an `ADD` operator.
///
/// Input list convention: 0 = lhs, 1 = rhs. Output list: 0. The only
/// parameter is the fused activation.
pub(crate) fn extract(op: schema::Operator, store: &TensorStore) -> Result<Add, ParseError> {
    let options = op
        .builtin_options_as_add_options()
        .ok_or(ParseError::MissingOptions("AddOptions"))?;

    Ok(Add::new(
        input_at(op, store, 0)?,
        input_at(op, store, 1)?,
        output_at(op, store, 0)?,
        activation(options.fused_activation_function())?,
    ))
}
