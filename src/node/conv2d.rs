//! Extractor for the 2D convolution operator.

use crate::from_tflite::{activation, padding, ParseError};
use crate::ir::Conv2d;
use crate::schema;
use crate::tensor_store::TensorStore;

use super::{input_at, output_at};

/// Decode a `CONV_2D` operator.
///
/// Input list convention: 0 = input, 1 = filter, 2 = bias. Output list: 0.
pub(crate) fn extract(op: schema::Operator, store: &TensorStore) -> Result<Conv2d, ParseError> {
    let options = op
        .builtin_options_as_conv_2d_options()
        .ok_or(ParseError::MissingOptions("Conv2DOptions"))?;

    Ok(Conv2d::new(
        input_at(op, store, 0)?,
        input_at(op, store, 1)?,
        input_at(op, store, 2)?,
        output_at(op, store, 0)?,
        [options.stride_w(), options.stride_h()],
        [options.dilation_w_factor(), options.dilation_h_factor()],
        padding(options.padding())?,
        activation(options.fused_activation_function())?,
    ))
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::store_of;
    use super::*;
    use crate::ir::{ActivationFunction, Padding};

    fn conv_op_buffer(inputs: &[i32], outputs: &[i32], with_options: bool) -> Vec<u8> {
        let mut fbb = flatbuffers::FlatBufferBuilder::new();
        let options = with_options.then(|| {
            schema::create_conv_2d_options(
                &mut fbb,
                schema::Padding::VALID,
                2,
                3,
                schema::ActivationFunctionType::RELU,
                1,
                1,
            )
        });
        let inputs = fbb.create_vector(inputs);
        let outputs = fbb.create_vector(outputs);
        let op = schema::create_operator(
            &mut fbb,
            0,
            Some(inputs),
            Some(outputs),
            if with_options {
                schema::BuiltinOptions::Conv2DOptions
            } else {
                schema::BuiltinOptions::NONE
            },
            options.map(|o| o.as_union_value()),
        );
        fbb.finish(op, None);
        fbb.finished_data().to_vec()
    }

    #[test]
    fn extracts_operands_and_parameters() {
        let buf = conv_op_buffer(&[0, 1, 2], &[3], true);
        let op = flatbuffers::root::<schema::Operator>(&buf).unwrap();

        let conv = extract(op, &store_of(4)).unwrap();
        assert_eq!(conv.input, 0);
        assert_eq!(conv.filter, 1);
        assert_eq!(conv.bias, 2);
        assert_eq!(conv.output, 3);
        assert_eq!(conv.stride, [2, 3]);
        assert_eq!(conv.dilation, [1, 1]);
        assert_eq!(conv.padding, Padding::Valid);
        assert_eq!(conv.activation, ActivationFunction::Relu);
    }

    #[test]
    fn missing_options_table_is_fatal() {
        let buf = conv_op_buffer(&[0, 1, 2], &[3], false);
        let op = flatbuffers::root::<schema::Operator>(&buf).unwrap();

        assert!(matches!(
            extract(op, &store_of(4)),
            Err(ParseError::MissingOptions("Conv2DOptions"))
        ));
    }

    #[test]
    fn out_of_range_operand_index_is_fatal() {
        let buf = conv_op_buffer(&[0, 1, 7], &[3], true);
        let op = flatbuffers::root::<schema::Operator>(&buf).unwrap();

        assert!(matches!(
            extract(op, &store_of(4)),
            Err(ParseError::TensorIndexOutOfRange { index: 7, len: 4 })
        ));
    }

    #[test]
    fn short_input_list_is_fatal() {
        let buf = conv_op_buffer(&[0, 1], &[3], true);
        let op = flatbuffers::root::<schema::Operator>(&buf).unwrap();

        assert!(matches!(
            extract(op, &store_of(4)),
            Err(ParseError::MissingInput(2))
        ));
    }
}
