//! Intermediate representation of a parsed TFLite model.
//!
//! The IR is the handoff point to the execution engine: a flat,
//! index-addressable tensor store plus an ordered sequence of operator nodes
//! that reference tensors through [`TensorId`] handles. Operators are a closed
//! sum type, so dispatch over kinds is exhaustive at compile time.

use strum::Display;

use crate::tensor_store::TensorStore;

/// Handle into a [`Model`]'s tensor store.
///
/// Handles are assigned in declaration order, so a tensor's id equals its
/// index in the source subgraph's tensor list.
pub type TensorId = usize;

/// Element type of a tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ElementType {
    Float32,
    Float16,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    Bool,
    String,
    Complex64,
    Complex128,
}

/// Padding mode of a windowed operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Padding {
    /// Pad so the output covers every input position.
    Same,
    /// No padding; the window stays inside the input.
    Valid,
}

/// Activation function fused into an operator's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ActivationFunction {
    None,
    Relu,
    ReluN1To1,
    Relu6,
    Tanh,
    SignBit,
}

/// A single dimension of a tensor shape.
///
/// The parser only fills in the extent; offset and stride stay zeroed until
/// the execution engine assigns storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dim {
    /// Offset of the first addressable element.
    pub offset: i32,
    /// Number of elements along this dimension.
    pub extent: i32,
    /// Distance between consecutive elements, in elements.
    pub stride: i32,
}

impl Dim {
    /// A dimension with the given extent and unassigned storage.
    pub fn with_extent(extent: i32) -> Self {
        Self {
            offset: 0,
            extent,
            stride: 0,
        }
    }
}

/// Per-axis affine quantization metadata, embedded in a [`Tensor`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuantizationInfo {
    /// Shape dimension along which scale and zero point vary, counted in the
    /// IR's dimension order (innermost first).
    pub axis: usize,
    /// One scale per quantized channel, or a single entry for per-tensor
    /// quantization.
    pub scale: Vec<f32>,
    /// Zero points, parallel to `scale`.
    pub zero_point: Vec<i64>,
}

/// A tensor of the computation graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    /// Declared name, possibly empty.
    pub name: String,
    /// Element type.
    pub elem_type: ElementType,
    /// Shape with dimensions innermost first, i.e. reversed relative to the
    /// row-major order the model file declares.
    pub shape: Vec<Dim>,
    /// Constant payload, empty for tensors supplied at run time.
    pub data: Vec<u8>,
    /// Quantization metadata, absent for unquantized tensors.
    pub quantization: Option<QuantizationInfo>,
}

impl Tensor {
    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Whether the tensor carries a constant payload.
    pub fn is_constant(&self) -> bool {
        !self.data.is_empty()
    }
}

/// A 2D convolution node.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Conv2d {
    /// Input feature map.
    pub input: TensorId,
    /// Filter weights.
    pub filter: TensorId,
    /// Bias vector.
    pub bias: TensorId,
    /// Output feature map.
    pub output: TensorId,
    /// Stride as `[width, height]`.
    pub stride: [i32; 2],
    /// Dilation factors as `[width, height]`.
    pub dilation: [i32; 2],
    /// Padding mode.
    pub padding: Padding,
    /// Fused activation.
    pub activation: ActivationFunction,
}

/// A depthwise 2D convolution node.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DepthwiseConv2d {
    /// Input feature map.
    pub input: TensorId,
    /// Filter weights.
    pub filter: TensorId,
    /// Bias vector.
    pub bias: TensorId,
    /// Output feature map.
    pub output: TensorId,
    /// Number of output channels per input channel.
    pub depth_multiplier: i32,
    /// Stride as `[width, height]`.
    pub stride: [i32; 2],
    /// Dilation factors as `[width, height]`.
    pub dilation: [i32; 2],
    /// Padding mode.
    pub padding: Padding,
    /// Fused activation.
    pub activation: ActivationFunction,
}

/// A padding node. The paddings operand is a tensor, so it has no scalar
/// parameters of its own.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Pad {
    /// Input tensor.
    pub input: TensorId,
    /// Per-dimension before/after padding amounts.
    pub paddings: TensorId,
    /// Output tensor.
    pub output: TensorId,
}

/// An elementwise addition node.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Add {
    /// Left operand.
    pub lhs: TensorId,
    /// Right operand.
    pub rhs: TensorId,
    /// Output tensor.
    pub output: TensorId,
    /// Fused activation.
    pub activation: ActivationFunction,
}

/// A node of the computation graph.
///
/// One variant per supported builtin operator kind; extending the parser means
/// adding a variant here, an extractor module under `node`, and a dispatch arm
/// in the graph builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operator {
    /// 2D convolution.
    Conv2d(Conv2d),
    /// Depthwise 2D convolution.
    DepthwiseConv2d(DepthwiseConv2d),
    /// Padding.
    Pad(Pad),
    /// Elementwise addition.
    Add(Add),
}

impl Operator {
    /// Handles of the input tensors, in the operator's positional order.
    pub fn inputs(&self) -> Vec<TensorId> {
        match self {
            Operator::Conv2d(op) => vec![op.input, op.filter, op.bias],
            Operator::DepthwiseConv2d(op) => vec![op.input, op.filter, op.bias],
            Operator::Pad(op) => vec![op.input, op.paddings],
            Operator::Add(op) => vec![op.lhs, op.rhs],
        }
    }

    /// Handle of the output tensor.
    pub fn output(&self) -> TensorId {
        match self {
            Operator::Conv2d(op) => op.output,
            Operator::DepthwiseConv2d(op) => op.output,
            Operator::Pad(op) => op.output,
            Operator::Add(op) => op.output,
        }
    }
}

/// A parsed model: the tensor store and the operator sequence, in declared
/// execution order.
///
/// Every [`TensorId`] held by an operator indexes this model's store.
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// All tensors of the graph, addressable by [`TensorId`].
    pub tensors: TensorStore,
    /// Operator nodes in execution order.
    pub operators: Vec<Operator>,
}

impl Model {
    /// Tensor behind a handle held by one of this model's operators.
    pub fn tensor(&self, id: TensorId) -> &Tensor {
        &self.tensors[id]
    }
}
