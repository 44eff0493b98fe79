//! Conversion from the TFLite flatbuffer format into the IR graph.
//!
//! The conversion is a single synchronous pass over an already buffered model:
//! validate the container shape, materialize every tensor in file order, then
//! materialize every operator in file order. Operators resolve their operands
//! by index into the tensor store, so the tensor phase must finish before the
//! operator phase starts. Any failure aborts the whole parse; callers never
//! observe a partially populated model.

use crate::ir::{
    self, ActivationFunction, Dim, ElementType, Operator, Padding, QuantizationInfo, Tensor,
};
use crate::node;
use crate::schema;
use crate::tensor_store::TensorStore;

/// Error raised while decoding a model buffer.
///
/// Every variant is fatal to the current parse. Structural variants indicate
/// a malformed or incompatible buffer; `Unsupported*` and `CustomOperator`
/// indicate a well-formed buffer using features this crate does not handle,
/// and name the offending kind or value so the two cases stay
/// distinguishable.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    /// The buffer failed flatbuffer verification.
    #[error("invalid flatbuffer: {0}")]
    InvalidBuffer(#[from] flatbuffers::InvalidFlatbuffer),

    /// The buffer does not start with the `TFL3` file identifier.
    #[error("buffer does not carry the `TFL3` file identifier")]
    MissingIdentifier,

    /// Multi-subgraph models are unsupported; zero subgraphs is malformed.
    #[error("expected exactly one subgraph, found {0}")]
    SubgraphCount(usize),

    /// An operator referenced a tensor slot outside the graph's tensor list.
    #[error("tensor index {index} out of range for a graph of {len} tensors")]
    TensorIndexOutOfRange {
        /// The out-of-range index as declared.
        index: i32,
        /// Number of tensors in the graph.
        len: usize,
    },

    /// An operator's input list is shorter than its kind requires.
    #[error("operator input list has no entry at position {0}")]
    MissingInput(usize),

    /// An operator's output list is shorter than its kind requires.
    #[error("operator output list has no entry at position {0}")]
    MissingOutput(usize),

    /// An operator referenced an opcode-table entry that does not exist.
    #[error("operator code index {index} out of range for {len} operator codes")]
    OpcodeIndexOutOfRange {
        /// The out-of-range opcode index.
        index: usize,
        /// Number of operator-code entries in the model.
        len: usize,
    },

    /// A tensor referenced a storage slot outside the model's buffer table.
    #[error("storage slot {slot} out of range for {len} buffers")]
    BufferOutOfRange {
        /// The out-of-range slot number.
        slot: u32,
        /// Number of storage slots in the model.
        len: usize,
    },

    /// A quantized dimension does not fit the tensor's rank.
    #[error("quantized dimension {axis} out of range for a rank-{rank} tensor")]
    QuantizedAxisOutOfRange {
        /// The declared (row-major) quantization axis.
        axis: i32,
        /// Rank of the tensor.
        rank: usize,
    },

    /// An operator's required builtin-options table is absent.
    #[error("operator is missing its {0} table")]
    MissingOptions(&'static str),

    /// Custom operators carry opaque vendor kernels and are rejected.
    #[error("custom operators are not supported (custom code {0:?})")]
    CustomOperator(String),

    /// A builtin operator kind with no extractor.
    #[error("unsupported operator {0:?}")]
    UnsupportedOperator(schema::BuiltinOperator),

    /// A tensor element type outside the known enumeration.
    #[error("unsupported tensor type {0:?}")]
    UnsupportedTensorType(schema::TensorType),

    /// A padding mode outside the known enumeration.
    #[error("unsupported padding mode {0:?}")]
    UnsupportedPadding(schema::Padding),

    /// A fused activation outside the known enumeration.
    #[error("unsupported fused activation {0:?}")]
    UnsupportedActivation(schema::ActivationFunctionType),
}

/// Map a wire element type to the internal closed set.
///
/// The wire enumeration is versioned and closed; a code outside the mapping
/// means the buffer was written by a newer schema revision and is rejected
/// rather than guessed at.
pub(crate) fn element_type(t: schema::TensorType) -> Result<ElementType, ParseError> {
    match t {
        schema::TensorType::FLOAT32 => Ok(ElementType::Float32),
        schema::TensorType::FLOAT16 => Ok(ElementType::Float16),
        schema::TensorType::FLOAT64 => Ok(ElementType::Float64),
        schema::TensorType::INT8 => Ok(ElementType::Int8),
        schema::TensorType::INT16 => Ok(ElementType::Int16),
        schema::TensorType::INT32 => Ok(ElementType::Int32),
        schema::TensorType::INT64 => Ok(ElementType::Int64),
        schema::TensorType::UINT8 => Ok(ElementType::UInt8),
        schema::TensorType::BOOL => Ok(ElementType::Bool),
        schema::TensorType::STRING => Ok(ElementType::String),
        schema::TensorType::COMPLEX64 => Ok(ElementType::Complex64),
        schema::TensorType::COMPLEX128 => Ok(ElementType::Complex128),
        other => Err(ParseError::UnsupportedTensorType(other)),
    }
}

/// Map a wire padding mode to the internal closed set.
pub(crate) fn padding(p: schema::Padding) -> Result<Padding, ParseError> {
    match p {
        schema::Padding::SAME => Ok(Padding::Same),
        schema::Padding::VALID => Ok(Padding::Valid),
        other => Err(ParseError::UnsupportedPadding(other)),
    }
}

/// Map a wire fused-activation kind to the internal closed set.
pub(crate) fn activation(a: schema::ActivationFunctionType) -> Result<ActivationFunction, ParseError> {
    match a {
        schema::ActivationFunctionType::NONE => Ok(ActivationFunction::None),
        schema::ActivationFunctionType::RELU => Ok(ActivationFunction::Relu),
        schema::ActivationFunctionType::RELU_N1_TO_1 => Ok(ActivationFunction::ReluN1To1),
        schema::ActivationFunctionType::RELU6 => Ok(ActivationFunction::Relu6),
        schema::ActivationFunctionType::TANH => Ok(ActivationFunction::Tanh),
        schema::ActivationFunctionType::SIGN_BIT => Ok(ActivationFunction::SignBit),
        other => Err(ParseError::UnsupportedActivation(other)),
    }
}

/// Effective builtin kind of an operator-code entry.
///
/// The builtin code moved to a wider field when the enumeration outgrew a
/// byte; writers of either generation fill one field and leave the other at
/// its smaller duplicate, so the effective kind is the larger of the two.
pub(crate) fn builtin_code(opcode: schema::OperatorCode) -> schema::BuiltinOperator {
    schema::BuiltinOperator(core::cmp::max(
        opcode.builtin_code().0,
        opcode.deprecated_builtin_code() as i32,
    ))
}

/// Decode per-axis quantization metadata.
///
/// The axis is re-derived under the dimension reversal applied during tensor
/// materialization: `internal = rank - external`.
fn quantization_info(
    q: schema::QuantizationParameters,
    rank: usize,
) -> Result<QuantizationInfo, ParseError> {
    let external = q.quantized_dimension();
    let axis = rank
        .checked_sub(external as usize)
        .ok_or(ParseError::QuantizedAxisOutOfRange {
            axis: external,
            rank,
        })?;
    let scale = q.scale().map(|s| s.iter().collect()).unwrap_or_default();
    let zero_point = q
        .zero_point()
        .map(|z| z.iter().collect())
        .unwrap_or_default();
    Ok(QuantizationInfo {
        axis,
        scale,
        zero_point,
    })
}

/// Accumulates the IR model over one pass of the source buffer.
struct GraphBuilder<'buf> {
    model: schema::Model<'buf>,
    tensors: TensorStore,
    operators: Vec<Operator>,
}

impl<'buf> GraphBuilder<'buf> {
    fn new(model: schema::Model<'buf>) -> Self {
        Self {
            model,
            tensors: TensorStore::default(),
            operators: Vec::new(),
        }
    }

    fn build(mut self) -> Result<ir::Model, ParseError> {
        let subgraph = match self.model.subgraphs() {
            Some(subgraphs) if subgraphs.len() == 1 => subgraphs.get(0),
            other => {
                return Err(ParseError::SubgraphCount(other.map_or(0, |s| s.len())));
            }
        };

        // All tensors must exist before any operator resolves an index.
        if let Some(tensors) = subgraph.tensors() {
            log::debug!("materializing {} tensors", tensors.len());
            for tensor in tensors.iter() {
                let tensor = self.materialize_tensor(tensor)?;
                self.tensors.push(tensor);
            }
        }

        if let Some(operators) = subgraph.operators() {
            log::debug!("materializing {} operators", operators.len());
            for op in operators.iter() {
                let op = self.materialize_operator(op)?;
                self.operators.push(op);
            }
        }

        Ok(ir::Model {
            tensors: self.tensors,
            operators: self.operators,
        })
    }

    /// Decode one tensor descriptor into an owned IR tensor.
    fn materialize_tensor(&self, tensor: schema::Tensor<'buf>) -> Result<Tensor, ParseError> {
        let elem_type = element_type(tensor.type_())?;
        let name = tensor.name().unwrap_or_default().to_string();

        // The file declares shapes row-major, outermost dimension first; the
        // IR stores dimensions innermost first. A descriptor without a shape
        // materializes as rank 0.
        let shape: Vec<Dim> = tensor
            .shape()
            .map(|extents| extents.iter().rev().map(Dim::with_extent).collect())
            .unwrap_or_default();

        let data = self.constant_data(tensor.buffer())?;
        let quantization = tensor
            .quantization()
            .map(|q| quantization_info(q, shape.len()))
            .transpose()?;

        Ok(Tensor {
            name,
            elem_type,
            shape,
            data,
            quantization,
        })
    }

    /// Constant payload of a tensor, looked up through its storage slot.
    ///
    /// Slot 0 is reserved to mean "no constant data". A slot that exists but
    /// carries no bytes yields an empty payload, not an error.
    fn constant_data(&self, slot: u32) -> Result<Vec<u8>, ParseError> {
        if slot == 0 {
            return Ok(Vec::new());
        }
        let buffers = self.model.buffers().ok_or(ParseError::BufferOutOfRange { slot, len: 0 })?;
        if slot as usize >= buffers.len() {
            return Err(ParseError::BufferOutOfRange {
                slot,
                len: buffers.len(),
            });
        }
        Ok(buffers
            .get(slot as usize)
            .data()
            .map(|data| data.bytes().to_vec())
            .unwrap_or_default())
    }

    /// Resolve an operator's builtin kind and dispatch to its extractor.
    fn materialize_operator(&self, op: schema::Operator<'buf>) -> Result<Operator, ParseError> {
        let index = op.opcode_index() as usize;
        let opcodes = self
            .model
            .operator_codes()
            .ok_or(ParseError::OpcodeIndexOutOfRange { index, len: 0 })?;
        if index >= opcodes.len() {
            return Err(ParseError::OpcodeIndexOutOfRange {
                index,
                len: opcodes.len(),
            });
        }
        let opcode = opcodes.get(index);
        let code = builtin_code(opcode);

        if code == schema::BuiltinOperator::CUSTOM {
            let custom = opcode.custom_code().unwrap_or_default().to_string();
            return Err(ParseError::CustomOperator(custom));
        }

        match code {
            schema::BuiltinOperator::CONV_2D => {
                Ok(Operator::Conv2d(node::conv2d::extract(op, &self.tensors)?))
            }
            schema::BuiltinOperator::DEPTHWISE_CONV_2D => Ok(Operator::DepthwiseConv2d(
                node::depthwise_conv2d::extract(op, &self.tensors)?,
            )),
            schema::BuiltinOperator::PAD => {
                Ok(Operator::Pad(node::pad::extract(op, &self.tensors)?))
            }
            schema::BuiltinOperator::ADD => {
                Ok(Operator::Add(node::add::extract(op, &self.tensors)?))
            }
            other => Err(ParseError::UnsupportedOperator(other)),
        }
    }
}

/// Parse a TFLite flatbuffer into an IR [`Model`](ir::Model).
///
/// The buffer must hold a complete model with the `TFL3` file identifier and
/// exactly one subgraph. Names, shapes and constant payloads are copied out,
/// so the returned model does not borrow from `buf`.
pub fn parse_buffer(buf: &[u8]) -> Result<ir::Model, ParseError> {
    // buffer_has_identifier reads bytes 4..8 unchecked.
    if buf.len() < 8 || !schema::model_buffer_has_identifier(buf) {
        return Err(ParseError::MissingIdentifier);
    }
    let model = schema::root_as_model(buf)?;

    log::info!("parsing TFLite model, schema version {}", model.version());
    log::debug!(
        "operator codes: {}",
        model.operator_codes().map_or(0, |c| c.len())
    );
    log::debug!("storage slots: {}", model.buffers().map_or(0, |b| b.len()));

    let graph = GraphBuilder::new(model).build()?;
    log::info!(
        "parsed {} tensors and {} operators",
        graph.tensors.len(),
        graph.operators.len()
    );
    Ok(graph)
}
