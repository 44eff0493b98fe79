//! End-to-end parsing tests over in-process built model buffers.

use flatbuffers::{FlatBufferBuilder, WIPOffset};

use tflite_ir::ir::{ActivationFunction, ElementType, Operator, Padding};
use tflite_ir::{parse_buffer, schema, ParseError};

fn float_tensor<'a>(
    fbb: &mut FlatBufferBuilder<'a>,
    name: &str,
    shape: &[i32],
    buffer: u32,
) -> WIPOffset<schema::Tensor<'a>> {
    let shape = fbb.create_vector(shape);
    let name = fbb.create_string(name);
    schema::create_tensor(
        fbb,
        Some(shape),
        schema::TensorType::FLOAT32,
        buffer,
        Some(name),
        None,
    )
}

fn conv2d_op<'a>(
    fbb: &mut FlatBufferBuilder<'a>,
    opcode_index: u32,
    inputs: &[i32],
    outputs: &[i32],
) -> WIPOffset<schema::Operator<'a>> {
    let options = schema::create_conv_2d_options(
        fbb,
        schema::Padding::SAME,
        1,
        1,
        schema::ActivationFunctionType::NONE,
        1,
        1,
    );
    let inputs = fbb.create_vector(inputs);
    let outputs = fbb.create_vector(outputs);
    schema::create_operator(
        fbb,
        opcode_index,
        Some(inputs),
        Some(outputs),
        schema::BuiltinOptions::Conv2DOptions,
        Some(options.as_union_value()),
    )
}

/// Assemble a model with one subgraph and return the finished bytes.
fn finish_single_subgraph<'a>(
    fbb: &mut FlatBufferBuilder<'a>,
    opcodes: Vec<WIPOffset<schema::OperatorCode<'a>>>,
    tensors: Vec<WIPOffset<schema::Tensor<'a>>>,
    operators: Vec<WIPOffset<schema::Operator<'a>>>,
    buffers: Vec<WIPOffset<schema::Buffer<'a>>>,
) -> Vec<u8> {
    let opcodes = fbb.create_vector(&opcodes);
    let tensors = fbb.create_vector(&tensors);
    let operators = fbb.create_vector(&operators);
    let subgraph = schema::create_sub_graph(fbb, Some(tensors), Some(operators));
    let subgraphs = fbb.create_vector(&[subgraph]);
    let buffers = if buffers.is_empty() {
        None
    } else {
        Some(fbb.create_vector(&buffers))
    };
    let model = schema::create_model(fbb, 3, Some(opcodes), Some(subgraphs), buffers);
    schema::finish_model_buffer(fbb, model);
    fbb.finished_data().to_vec()
}

#[test]
fn conv_model_end_to_end() {
    let mut fbb = FlatBufferBuilder::new();
    let opcode = schema::create_operator_code(&mut fbb, 0, None, schema::BuiltinOperator::CONV_2D);
    let tensors = vec![
        float_tensor(&mut fbb, "input", &[1, 4, 4, 3], 0),
        float_tensor(&mut fbb, "filter", &[8, 3, 3, 3], 0),
        float_tensor(&mut fbb, "bias", &[8], 0),
        float_tensor(&mut fbb, "output", &[1, 4, 4, 8], 0),
    ];
    let op = conv2d_op(&mut fbb, 0, &[0, 1, 2], &[3]);
    let buf = finish_single_subgraph(&mut fbb, vec![opcode], tensors, vec![op], vec![]);

    let model = parse_buffer(&buf).unwrap();
    assert_eq!(model.tensors.len(), 4);
    assert_eq!(model.operators.len(), 1);

    for tensor in model.tensors.iter() {
        assert_eq!(tensor.elem_type, ElementType::Float32);
        assert!(!tensor.is_constant());
        assert!(tensor.quantization.is_none());
    }
    // Declared [1, 4, 4, 3], stored innermost first.
    let extents: Vec<i32> = model.tensors[0].shape.iter().map(|d| d.extent).collect();
    assert_eq!(extents, vec![3, 4, 4, 1]);

    let conv = match &model.operators[0] {
        Operator::Conv2d(conv) => conv,
        other => panic!("expected Conv2d, got {other:?}"),
    };
    assert_eq!((conv.input, conv.filter, conv.bias, conv.output), (0, 1, 2, 3));
    assert_eq!(conv.stride, [1, 1]);
    assert_eq!(conv.dilation, [1, 1]);
    assert_eq!(conv.padding, Padding::Same);
    assert_eq!(conv.activation, ActivationFunction::None);

    assert_eq!(model.operators[0].inputs(), vec![0, 1, 2]);
    assert_eq!(model.operators[0].output(), 3);
    assert_eq!(model.tensor(conv.filter).name, "filter");
    assert_eq!(model.tensor(conv.output).rank(), 4);
}

#[test]
fn shapes_are_reversed_and_storage_left_unassigned() {
    let mut fbb = FlatBufferBuilder::new();
    let tensors = vec![float_tensor(&mut fbb, "t", &[2, 3, 4], 0)];
    let buf = finish_single_subgraph(&mut fbb, vec![], tensors, vec![], vec![]);

    let model = parse_buffer(&buf).unwrap();
    let tensor = &model.tensors[0];
    assert_eq!(tensor.rank(), 3);
    let extents: Vec<i32> = tensor.shape.iter().map(|d| d.extent).collect();
    assert_eq!(extents, vec![4, 3, 2]);
    for dim in &tensor.shape {
        assert_eq!(dim.offset, 0);
        assert_eq!(dim.stride, 0);
    }
}

#[test]
fn quantization_axis_is_reversed_and_sequences_copied() {
    let mut fbb = FlatBufferBuilder::new();
    let scale = fbb.create_vector(&[0.5f32, 0.25]);
    let zero_point = fbb.create_vector(&[1i64, 2]);
    let quantization =
        schema::create_quantization_parameters(&mut fbb, Some(scale), Some(zero_point), 3);
    let shape = fbb.create_vector(&[1i32, 4, 4, 2]);
    let name = fbb.create_string("q");
    let tensor = schema::create_tensor(
        &mut fbb,
        Some(shape),
        schema::TensorType::INT8,
        0,
        Some(name),
        Some(quantization),
    );
    let buf = finish_single_subgraph(&mut fbb, vec![], vec![tensor], vec![], vec![]);

    let model = parse_buffer(&buf).unwrap();
    let quantization = model.tensors[0].quantization.as_ref().unwrap();
    assert_eq!(quantization.axis, 1); // rank 4, declared axis 3
    assert_eq!(quantization.scale, vec![0.5, 0.25]);
    assert_eq!(quantization.zero_point, vec![1, 2]);
}

#[test]
fn empty_quantization_table_yields_empty_sequences() {
    let mut fbb = FlatBufferBuilder::new();
    let quantization = schema::create_quantization_parameters(&mut fbb, None, None, 0);
    let shape = fbb.create_vector(&[2i32, 2]);
    let name = fbb.create_string("q");
    let tensor = schema::create_tensor(
        &mut fbb,
        Some(shape),
        schema::TensorType::UINT8,
        0,
        Some(name),
        Some(quantization),
    );
    let buf = finish_single_subgraph(&mut fbb, vec![], vec![tensor], vec![], vec![]);

    let model = parse_buffer(&buf).unwrap();
    let quantization = model.tensors[0].quantization.as_ref().unwrap();
    assert_eq!(quantization.axis, 2);
    assert!(quantization.scale.is_empty());
    assert!(quantization.zero_point.is_empty());
}

#[test]
fn quantized_axis_past_the_rank_is_fatal() {
    let mut fbb = FlatBufferBuilder::new();
    let quantization = schema::create_quantization_parameters(&mut fbb, None, None, 5);
    let shape = fbb.create_vector(&[2i32]);
    let name = fbb.create_string("q");
    let tensor = schema::create_tensor(
        &mut fbb,
        Some(shape),
        schema::TensorType::INT8,
        0,
        Some(name),
        Some(quantization),
    );
    let buf = finish_single_subgraph(&mut fbb, vec![], vec![tensor], vec![], vec![]);

    assert!(matches!(
        parse_buffer(&buf),
        Err(ParseError::QuantizedAxisOutOfRange { axis: 5, rank: 1 })
    ));
}

#[test]
fn storage_slot_semantics() {
    let mut fbb = FlatBufferBuilder::new();
    let payload = fbb.create_vector(&[1u8, 2, 3, 4, 5]);
    let buffers = vec![
        schema::create_buffer(&mut fbb, None), // slot 0: reserved
        schema::create_buffer(&mut fbb, Some(payload)),
        schema::create_buffer(&mut fbb, None), // present but empty
    ];
    let tensors = vec![
        float_tensor(&mut fbb, "runtime", &[4], 0),
        float_tensor(&mut fbb, "weights", &[5], 1),
        float_tensor(&mut fbb, "reserved", &[4], 2),
    ];
    let buf = finish_single_subgraph(&mut fbb, vec![], tensors, vec![], buffers);

    let model = parse_buffer(&buf).unwrap();
    assert!(model.tensors[0].data.is_empty());
    assert_eq!(model.tensors[1].data, vec![1, 2, 3, 4, 5]);
    assert!(model.tensors[1].is_constant());
    assert!(model.tensors[2].data.is_empty());
}

#[test]
fn out_of_range_storage_slot_is_fatal() {
    let mut fbb = FlatBufferBuilder::new();
    let buffers = vec![schema::create_buffer(&mut fbb, None)];
    let tensors = vec![float_tensor(&mut fbb, "t", &[1], 9)];
    let buf = finish_single_subgraph(&mut fbb, vec![], tensors, vec![], buffers);

    assert!(matches!(
        parse_buffer(&buf),
        Err(ParseError::BufferOutOfRange { slot: 9, len: 1 })
    ));
}

#[test]
fn operators_keep_declaration_order() {
    let mut fbb = FlatBufferBuilder::new();
    let opcodes = vec![
        schema::create_operator_code(&mut fbb, 0, None, schema::BuiltinOperator::PAD),
        schema::create_operator_code(&mut fbb, 0, None, schema::BuiltinOperator::CONV_2D),
        schema::create_operator_code(&mut fbb, 0, None, schema::BuiltinOperator::DEPTHWISE_CONV_2D),
        schema::create_operator_code(&mut fbb, 0, None, schema::BuiltinOperator::ADD),
    ];
    let tensors = (0..7)
        .map(|i| float_tensor(&mut fbb, &format!("t{i}"), &[1], 0))
        .collect::<Vec<_>>();

    let pad_inputs = fbb.create_vector(&[0i32, 1]);
    let pad_outputs = fbb.create_vector(&[2i32]);
    let pad = schema::create_operator(
        &mut fbb,
        0,
        Some(pad_inputs),
        Some(pad_outputs),
        schema::BuiltinOptions::NONE,
        None,
    );

    let conv = conv2d_op(&mut fbb, 1, &[2, 3, 4], &[5]);

    let dw_options = schema::create_depthwise_conv_2d_options(
        &mut fbb,
        schema::Padding::VALID,
        1,
        1,
        1,
        schema::ActivationFunctionType::NONE,
        1,
        1,
    );
    let dw_inputs = fbb.create_vector(&[5i32, 3, 4]);
    let dw_outputs = fbb.create_vector(&[6i32]);
    let dwconv = schema::create_operator(
        &mut fbb,
        2,
        Some(dw_inputs),
        Some(dw_outputs),
        schema::BuiltinOptions::DepthwiseConv2DOptions,
        Some(dw_options.as_union_value()),
    );

    let add_options =
        schema::create_add_options(&mut fbb, schema::ActivationFunctionType::RELU);
    let add_inputs = fbb.create_vector(&[5i32, 6]);
    let add_outputs = fbb.create_vector(&[0i32]);
    let add = schema::create_operator(
        &mut fbb,
        3,
        Some(add_inputs),
        Some(add_outputs),
        schema::BuiltinOptions::AddOptions,
        Some(add_options.as_union_value()),
    );

    let buf =
        finish_single_subgraph(&mut fbb, opcodes, tensors, vec![pad, conv, dwconv, add], vec![]);

    let model = parse_buffer(&buf).unwrap();
    assert!(matches!(
        model.operators.as_slice(),
        [
            Operator::Pad(_),
            Operator::Conv2d(_),
            Operator::DepthwiseConv2d(_),
            Operator::Add(_),
        ]
    ));
}

#[test]
fn custom_operator_is_rejected_by_name() {
    let mut fbb = FlatBufferBuilder::new();
    let custom_code = fbb.create_string("MyVendorOp");
    let opcode = schema::create_operator_code(
        &mut fbb,
        0,
        Some(custom_code),
        schema::BuiltinOperator::CUSTOM,
    );
    let tensors = vec![float_tensor(&mut fbb, "t", &[1], 0)];
    let inputs = fbb.create_vector(&[0i32]);
    let outputs = fbb.create_vector(&[0i32]);
    let op = schema::create_operator(
        &mut fbb,
        0,
        Some(inputs),
        Some(outputs),
        schema::BuiltinOptions::NONE,
        None,
    );
    let buf = finish_single_subgraph(&mut fbb, vec![opcode], tensors, vec![op], vec![]);

    let err = parse_buffer(&buf).unwrap_err();
    assert!(matches!(err, ParseError::CustomOperator(_)));
    assert!(err.to_string().contains("MyVendorOp"));
}

#[test]
fn unsupported_builtin_kind_is_rejected_by_name() {
    let mut fbb = FlatBufferBuilder::new();
    let opcode = schema::create_operator_code(&mut fbb, 0, None, schema::BuiltinOperator::SOFTMAX);
    let tensors = vec![float_tensor(&mut fbb, "t", &[1], 0)];
    let inputs = fbb.create_vector(&[0i32]);
    let outputs = fbb.create_vector(&[0i32]);
    let op = schema::create_operator(
        &mut fbb,
        0,
        Some(inputs),
        Some(outputs),
        schema::BuiltinOptions::NONE,
        None,
    );
    let buf = finish_single_subgraph(&mut fbb, vec![opcode], tensors, vec![op], vec![]);

    let err = parse_buffer(&buf).unwrap_err();
    assert!(matches!(err, ParseError::UnsupportedOperator(_)));
    assert!(err.to_string().contains("SOFTMAX"));
}

#[test]
fn opcode_index_out_of_range_is_fatal() {
    let mut fbb = FlatBufferBuilder::new();
    let opcode = schema::create_operator_code(&mut fbb, 0, None, schema::BuiltinOperator::ADD);
    let tensors = vec![float_tensor(&mut fbb, "t", &[1], 0)];
    let inputs = fbb.create_vector(&[0i32]);
    let outputs = fbb.create_vector(&[0i32]);
    let op = schema::create_operator(
        &mut fbb,
        5,
        Some(inputs),
        Some(outputs),
        schema::BuiltinOptions::NONE,
        None,
    );
    let buf = finish_single_subgraph(&mut fbb, vec![opcode], tensors, vec![op], vec![]);

    assert!(matches!(
        parse_buffer(&buf),
        Err(ParseError::OpcodeIndexOutOfRange { index: 5, len: 1 })
    ));
}

#[test]
fn subgraph_count_must_be_exactly_one() {
    // Zero subgraphs.
    let mut fbb = FlatBufferBuilder::new();
    let subgraphs = fbb.create_vector::<WIPOffset<schema::SubGraph>>(&[]);
    let model = schema::create_model(&mut fbb, 3, None, Some(subgraphs), None);
    schema::finish_model_buffer(&mut fbb, model);
    let buf = fbb.finished_data().to_vec();
    assert!(matches!(parse_buffer(&buf), Err(ParseError::SubgraphCount(0))));

    // Two subgraphs, regardless of their contents.
    let mut fbb = FlatBufferBuilder::new();
    let first = schema::create_sub_graph(&mut fbb, None, None);
    let second = schema::create_sub_graph(&mut fbb, None, None);
    let subgraphs = fbb.create_vector(&[first, second]);
    let model = schema::create_model(&mut fbb, 3, None, Some(subgraphs), None);
    schema::finish_model_buffer(&mut fbb, model);
    let buf = fbb.finished_data().to_vec();
    assert!(matches!(parse_buffer(&buf), Err(ParseError::SubgraphCount(2))));
}

#[test]
fn empty_subgraph_parses_to_an_empty_model() {
    let mut fbb = FlatBufferBuilder::new();
    let subgraph = schema::create_sub_graph(&mut fbb, None, None);
    let subgraphs = fbb.create_vector(&[subgraph]);
    let model = schema::create_model(&mut fbb, 3, None, Some(subgraphs), None);
    schema::finish_model_buffer(&mut fbb, model);
    let buf = fbb.finished_data().to_vec();

    let model = parse_buffer(&buf).unwrap();
    assert!(model.tensors.is_empty());
    assert!(model.operators.is_empty());
}

#[test]
fn missing_identifier_is_fatal() {
    assert!(matches!(
        parse_buffer(b""),
        Err(ParseError::MissingIdentifier)
    ));

    // A well-formed buffer finished without the identifier is still rejected.
    let mut fbb = FlatBufferBuilder::new();
    let subgraph = schema::create_sub_graph(&mut fbb, None, None);
    let subgraphs = fbb.create_vector(&[subgraph]);
    let model = schema::create_model(&mut fbb, 3, None, Some(subgraphs), None);
    fbb.finish(model, None);
    let buf = fbb.finished_data().to_vec();
    assert!(matches!(
        parse_buffer(&buf),
        Err(ParseError::MissingIdentifier)
    ));
}

#[test]
fn corrupt_buffer_fails_verification_not_panics() {
    let mut buf = vec![0u8; 8];
    buf[4..8].copy_from_slice(b"TFL3");
    assert!(matches!(
        parse_buffer(&buf),
        Err(ParseError::InvalidBuffer(_))
    ));
}
