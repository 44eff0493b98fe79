//! Extractor for the padding operator.

use crate::from_tflite::ParseError;
use crate::ir::Pad;
use crate::schema;
use crate::tensor_store::TensorStore;

use super::{input_at, output_at};

/// Decode a `PAD` operator.
///
/// Input list convention: 0 = input, 1 = paddings tensor. Output list: 0.
/// The paddings live in a tensor operand, so there is no options table to
/// read.
pub(crate) fn extract(op: schema::Operator, store: &TensorStore) -> Result<Pad, ParseError> {
    Ok(Pad::new(
        input_at(op, store, 0)?,
        input_at(op, store, 1)?,
        output_at(op, store, 0)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::store_of;
    use super::*;

    fn pad_op_buffer(inputs: &[i32], outputs: &[i32]) -> Vec<u8> {
        let mut fbb = flatbuffers::FlatBufferBuilder::new();
        let inputs = fbb.create_vector(inputs);
        let outputs = fbb.create_vector(outputs);
        let op = schema::create_operator(
            &mut fbb,
            0,
            Some(inputs),
            Some(outputs),
            schema::BuiltinOptions::NONE,
            None,
        );
        fbb.finish(op, None);
        fbb.finished_data().to_vec()
    }

    #[test]
    fn extracts_operands() {
        let buf = pad_op_buffer(&[0, 1], &[2]);
        let op = flatbuffers::root::<schema::Operator>(&buf).unwrap();

        let pad = extract(op, &store_of(3)).unwrap();
        assert_eq!(pad.input, 0);
        assert_eq!(pad.paddings, 1);
        assert_eq!(pad.output, 2);
    }

    #[test]
    fn missing_output_is_fatal() {
        let buf = pad_op_buffer(&[0, 1], &[]);
        let op = flatbuffers::root::<schema::Operator>(&buf).unwrap();

        assert!(matches!(
            extract(op, &store_of(3)),
            Err(ParseError::MissingOutput(0))
        ));
    }

    #[test]
    fn negative_operand_index_is_fatal() {
        let buf = pad_op_buffer(&[0, -1], &[2]);
        let op = flatbuffers::root::<schema::Operator>(&buf).unwrap();

        assert!(matches!(
            extract(op, &store_of(3)),
            Err(ParseError::TensorIndexOutOfRange { index: -1, .. })
        ));
    }
}
