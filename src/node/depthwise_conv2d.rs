//! Extractor for the depthwise 2D convolution operator.

use crate::from_tflite::{activation, padding, ParseError};
use crate::ir::DepthwiseConv2d;
use crate::schema;
use crate::tensor_store::TensorStore;

use super::{input_at, output_at};

/// Decode a `DEPTHWISE_CONV_2D` operator.
///
/// Same operand convention as `CONV_2D`, plus a depth multiplier.
pub(crate) fn extract(
    op: schema::Operator,
    store: &TensorStore,
) -> Result<DepthwiseConv2d, ParseError> {
    let options = op
        .builtin_options_as_depthwise_conv_2d_options()
        .ok_or(ParseError::MissingOptions("DepthwiseConv2DOptions"))?;

    Ok(DepthwiseConv2d::new(
        input_at(op, store, 0)?,
        input_at(op, store, 1)?,
        input_at(op, store, 2)?,
        output_at(op, store, 0)?,
        options.depth_multiplier(),
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

    #[test]
    fn extracts_operands_and_parameters() {
        let mut fbb = flatbuffers::FlatBufferBuilder::new();
        let options = schema::create_depthwise_conv_2d_options(
            &mut fbb,
            schema::Padding::SAME,
            1,
            1,
            3,
            schema::ActivationFunctionType::RELU6,
            2,
            2,
        );
        let inputs = fbb.create_vector(&[0i32, 1, 2]);
        let outputs = fbb.create_vector(&[3i32]);
        let op = schema::create_operator(
            &mut fbb,
            0,
            Some(inputs),
            Some(outputs),
            schema::BuiltinOptions::DepthwiseConv2DOptions,
            Some(options.as_union_value()),
        );
        fbb.finish(op, None);
        let buf = fbb.finished_data().to_vec();
        let op = flatbuffers::root::<schema::Operator>(&buf).unwrap();

        let dwconv = extract(op, &store_of(4)).unwrap();
        assert_eq!(dwconv.input, 0);
        assert_eq!(dwconv.filter, 1);
        assert_eq!(dwconv.bias, 2);
        assert_eq!(dwconv.output, 3);
        assert_eq!(dwconv.depth_multiplier, 3);
        assert_eq!(dwconv.stride, [1, 1]);
        assert_eq!(dwconv.dilation, [2, 2]);
        assert_eq!(dwconv.padding, Padding::Same);
        assert_eq!(dwconv.activation, ActivationFunction::Relu6);
    }
}
