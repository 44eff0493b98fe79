//! Hand-maintained flatbuffers bindings for the subset of the TensorFlow Lite
//! schema this crate reads.
//!
//! The TFLite container is a flatbuffer (`schema.fbs` in the TensorFlow
//! source tree). Unlike the protobuf route, `flatc` has no build-script
//! integration, and its generated bindings for the full schema run to tens of
//! thousands of lines, so the tables and enums the parser actually touches
//! are checked in here, written in the generated style (table wrappers over
//! [`flatbuffers::Table`] with `Follow`/`Verifiable` impls and `create_*`
//! builder functions). Vtable slot numbers follow `schema.fbs`; slots this
//! crate never reads are listed in comments next to each table.
#![allow(missing_docs)]

/// File identifier of a TFLite model buffer.
pub const MODEL_IDENTIFIER: &str = "TFL3";

macro_rules! wire_enum {
    ($name:ident, $repr:ty) => {
        impl<'a> flatbuffers::Follow<'a> for $name {
            type Inner = Self;
            #[inline]
            unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
                Self(flatbuffers::read_scalar_at::<$repr>(buf, loc))
            }
        }

        impl flatbuffers::Push for $name {
            type Output = $name;
            #[inline]
            unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
                flatbuffers::emplace_scalar::<$repr>(dst, self.0);
            }
        }

        impl flatbuffers::EndianScalar for $name {
            type Scalar = $repr;
            #[inline]
            fn to_little_endian(self) -> $repr {
                self.0.to_le()
            }
            #[inline]
            fn from_little_endian(v: $repr) -> Self {
                Self(<$repr>::from_le(v))
            }
        }

        impl flatbuffers::Verifiable for $name {
            #[inline]
            fn run_verifier(
                v: &mut flatbuffers::Verifier,
                pos: usize,
            ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
                <$repr as flatbuffers::Verifiable>::run_verifier(v, pos)
            }
        }

        impl flatbuffers::SimpleToVerifyInSlice for $name {}

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match self.variant_name() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "<UNKNOWN {}>", self.0),
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct TensorType(pub i8);

impl TensorType {
    pub const FLOAT32: Self = Self(0);
    pub const FLOAT16: Self = Self(1);
    pub const INT32: Self = Self(2);
    pub const UINT8: Self = Self(3);
    pub const INT64: Self = Self(4);
    pub const STRING: Self = Self(5);
    pub const BOOL: Self = Self(6);
    pub const INT16: Self = Self(7);
    pub const COMPLEX64: Self = Self(8);
    pub const INT8: Self = Self(9);
    pub const FLOAT64: Self = Self(10);
    pub const COMPLEX128: Self = Self(11);

    pub fn variant_name(self) -> Option<&'static str> {
        match self {
            Self::FLOAT32 => Some("FLOAT32"),
            Self::FLOAT16 => Some("FLOAT16"),
            Self::INT32 => Some("INT32"),
            Self::UINT8 => Some("UINT8"),
            Self::INT64 => Some("INT64"),
            Self::STRING => Some("STRING"),
            Self::BOOL => Some("BOOL"),
            Self::INT16 => Some("INT16"),
            Self::COMPLEX64 => Some("COMPLEX64"),
            Self::INT8 => Some("INT8"),
            Self::FLOAT64 => Some("FLOAT64"),
            Self::COMPLEX128 => Some("COMPLEX128"),
            _ => None,
        }
    }
}

wire_enum!(TensorType, i8);

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Padding(pub i8);

impl Padding {
    pub const SAME: Self = Self(0);
    pub const VALID: Self = Self(1);

    pub fn variant_name(self) -> Option<&'static str> {
        match self {
            Self::SAME => Some("SAME"),
            Self::VALID => Some("VALID"),
            _ => None,
        }
    }
}

wire_enum!(Padding, i8);

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ActivationFunctionType(pub i8);

impl ActivationFunctionType {
    pub const NONE: Self = Self(0);
    pub const RELU: Self = Self(1);
    pub const RELU_N1_TO_1: Self = Self(2);
    pub const RELU6: Self = Self(3);
    pub const TANH: Self = Self(4);
    pub const SIGN_BIT: Self = Self(5);

    pub fn variant_name(self) -> Option<&'static str> {
        match self {
            Self::NONE => Some("NONE"),
            Self::RELU => Some("RELU"),
            Self::RELU_N1_TO_1 => Some("RELU_N1_TO_1"),
            Self::RELU6 => Some("RELU6"),
            Self::TANH => Some("TANH"),
            Self::SIGN_BIT => Some("SIGN_BIT"),
            _ => None,
        }
    }
}

wire_enum!(ActivationFunctionType, i8);

/// Builtin operator kinds. The schema defines well over a hundred; only the
/// ones this crate dispatches on or commonly reports in diagnostics carry
/// named constants.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct BuiltinOperator(pub i32);

impl BuiltinOperator {
    pub const ADD: Self = Self(0);
    pub const AVERAGE_POOL_2D: Self = Self(1);
    pub const CONCATENATION: Self = Self(2);
    pub const CONV_2D: Self = Self(3);
    pub const DEPTHWISE_CONV_2D: Self = Self(4);
    pub const FULLY_CONNECTED: Self = Self(9);
    pub const MAX_POOL_2D: Self = Self(17);
    pub const MUL: Self = Self(18);
    pub const RELU: Self = Self(19);
    pub const RESHAPE: Self = Self(22);
    pub const SOFTMAX: Self = Self(25);
    pub const TANH: Self = Self(28);
    pub const CUSTOM: Self = Self(32);
    pub const PAD: Self = Self(34);

    pub fn variant_name(self) -> Option<&'static str> {
        match self {
            Self::ADD => Some("ADD"),
            Self::AVERAGE_POOL_2D => Some("AVERAGE_POOL_2D"),
            Self::CONCATENATION => Some("CONCATENATION"),
            Self::CONV_2D => Some("CONV_2D"),
            Self::DEPTHWISE_CONV_2D => Some("DEPTHWISE_CONV_2D"),
            Self::FULLY_CONNECTED => Some("FULLY_CONNECTED"),
            Self::MAX_POOL_2D => Some("MAX_POOL_2D"),
            Self::MUL => Some("MUL"),
            Self::RELU => Some("RELU"),
            Self::RESHAPE => Some("RESHAPE"),
            Self::SOFTMAX => Some("SOFTMAX"),
            Self::TANH => Some("TANH"),
            Self::CUSTOM => Some("CUSTOM"),
            Self::PAD => Some("PAD"),
            _ => None,
        }
    }
}

wire_enum!(BuiltinOperator, i32);

/// Tag of the `BuiltinOptions` union on an operator table.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct BuiltinOptions(pub u8);

#[allow(non_upper_case_globals)]
impl BuiltinOptions {
    pub const NONE: Self = Self(0);
    pub const Conv2DOptions: Self = Self(1);
    pub const DepthwiseConv2DOptions: Self = Self(2);
    pub const AddOptions: Self = Self(11);
    pub const PadOptions: Self = Self(22);

    pub fn variant_name(self) -> Option<&'static str> {
        match self {
            Self::NONE => Some("NONE"),
            Self::Conv2DOptions => Some("Conv2DOptions"),
            Self::DepthwiseConv2DOptions => Some("DepthwiseConv2DOptions"),
            Self::AddOptions => Some("AddOptions"),
            Self::PadOptions => Some("PadOptions"),
            _ => None,
        }
    }
}

wire_enum!(BuiltinOptions, u8);

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq)]
pub struct Model<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Model<'a> {
    type Inner = Model<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self {
            _tab: flatbuffers::Table::new(buf, loc),
        }
    }
}

impl<'a> Model<'a> {
    pub const VT_VERSION: flatbuffers::VOffsetT = 4;
    pub const VT_OPERATOR_CODES: flatbuffers::VOffsetT = 6;
    pub const VT_SUBGRAPHS: flatbuffers::VOffsetT = 8;
    // Slot 10 (description) and slots past 12 (metadata, signature defs) are
    // not read by this crate.
    pub const VT_BUFFERS: flatbuffers::VOffsetT = 12;

    #[inline]
    pub fn version(&self) -> u32 {
        unsafe { self._tab.get::<u32>(Model::VT_VERSION, Some(0)).unwrap() }
    }

    #[inline]
    pub fn operator_codes(
        &self,
    ) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<OperatorCode<'a>>>> {
        unsafe {
            self._tab.get::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<OperatorCode>>,
            >>(Model::VT_OPERATOR_CODES, None)
        }
    }

    #[inline]
    pub fn subgraphs(
        &self,
    ) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<SubGraph<'a>>>> {
        unsafe {
            self._tab.get::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<SubGraph>>,
            >>(Model::VT_SUBGRAPHS, None)
        }
    }

    #[inline]
    pub fn buffers(
        &self,
    ) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Buffer<'a>>>> {
        unsafe {
            self._tab.get::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Buffer>>,
            >>(Model::VT_BUFFERS, None)
        }
    }
}

impl flatbuffers::Verifiable for Model<'_> {
    #[inline]
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<u32>("version", Self::VT_VERSION, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<OperatorCode>>,
            >>("operator_codes", Self::VT_OPERATOR_CODES, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<SubGraph>>,
            >>("subgraphs", Self::VT_SUBGRAPHS, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<Buffer>>,
            >>("buffers", Self::VT_BUFFERS, false)?
            .finish();
        Ok(())
    }
}

pub fn create_model<'a>(
    fbb: &mut flatbuffers::FlatBufferBuilder<'a>,
    version: u32,
    operator_codes: Option<
        flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<OperatorCode<'a>>>>,
    >,
    subgraphs: Option<
        flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<SubGraph<'a>>>>,
    >,
    buffers: Option<
        flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Buffer<'a>>>>,
    >,
) -> flatbuffers::WIPOffset<Model<'a>> {
    let start = fbb.start_table();
    fbb.push_slot::<u32>(Model::VT_VERSION, version, 0);
    if let Some(x) = operator_codes {
        fbb.push_slot_always(Model::VT_OPERATOR_CODES, x);
    }
    if let Some(x) = subgraphs {
        fbb.push_slot_always(Model::VT_SUBGRAPHS, x);
    }
    if let Some(x) = buffers {
        fbb.push_slot_always(Model::VT_BUFFERS, x);
    }
    flatbuffers::WIPOffset::new(fbb.end_table(start).value())
}

/// Parse and verify the root model table of a buffer.
pub fn root_as_model(buf: &[u8]) -> Result<Model, flatbuffers::InvalidFlatbuffer> {
    flatbuffers::root::<Model>(buf)
}

/// Whether the buffer carries the `TFL3` file identifier.
///
/// The caller must ensure the buffer is at least 8 bytes; the identifier
/// occupies bytes 4..8.
pub fn model_buffer_has_identifier(buf: &[u8]) -> bool {
    flatbuffers::buffer_has_identifier(buf, MODEL_IDENTIFIER, false)
}

/// Finish a builder with `root` as the model table and the `TFL3` identifier.
pub fn finish_model_buffer<'a>(
    fbb: &mut flatbuffers::FlatBufferBuilder<'a>,
    root: flatbuffers::WIPOffset<Model<'a>>,
) {
    fbb.finish(root, Some(MODEL_IDENTIFIER));
}

#[derive(Clone, Copy, PartialEq)]
pub struct OperatorCode<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for OperatorCode<'a> {
    type Inner = OperatorCode<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self {
            _tab: flatbuffers::Table::new(buf, loc),
        }
    }
}

impl<'a> OperatorCode<'a> {
    // Slot 4 held the builtin code until the enum outgrew a byte; newer
    // writers fill slot 10 and keep slot 4 as a clamped duplicate.
    pub const VT_DEPRECATED_BUILTIN_CODE: flatbuffers::VOffsetT = 4;
    pub const VT_CUSTOM_CODE: flatbuffers::VOffsetT = 6;
    pub const VT_VERSION: flatbuffers::VOffsetT = 8;
    pub const VT_BUILTIN_CODE: flatbuffers::VOffsetT = 10;

    #[inline]
    pub fn deprecated_builtin_code(&self) -> i8 {
        unsafe {
            self._tab
                .get::<i8>(OperatorCode::VT_DEPRECATED_BUILTIN_CODE, Some(0))
                .unwrap()
        }
    }

    #[inline]
    pub fn custom_code(&self) -> Option<&'a str> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<&str>>(OperatorCode::VT_CUSTOM_CODE, None)
        }
    }

    #[inline]
    pub fn version(&self) -> i32 {
        unsafe { self._tab.get::<i32>(OperatorCode::VT_VERSION, Some(1)).unwrap() }
    }

    #[inline]
    pub fn builtin_code(&self) -> BuiltinOperator {
        unsafe {
            self._tab
                .get::<BuiltinOperator>(OperatorCode::VT_BUILTIN_CODE, Some(BuiltinOperator::ADD))
                .unwrap()
        }
    }
}

impl flatbuffers::Verifiable for OperatorCode<'_> {
    #[inline]
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<i8>("deprecated_builtin_code", Self::VT_DEPRECATED_BUILTIN_CODE, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>("custom_code", Self::VT_CUSTOM_CODE, false)?
            .visit_field::<i32>("version", Self::VT_VERSION, false)?
            .visit_field::<BuiltinOperator>("builtin_code", Self::VT_BUILTIN_CODE, false)?
            .finish();
        Ok(())
    }
}

pub fn create_operator_code<'a>(
    fbb: &mut flatbuffers::FlatBufferBuilder<'a>,
    deprecated_builtin_code: i8,
    custom_code: Option<flatbuffers::WIPOffset<&'a str>>,
    builtin_code: BuiltinOperator,
) -> flatbuffers::WIPOffset<OperatorCode<'a>> {
    let start = fbb.start_table();
    fbb.push_slot::<i8>(
        OperatorCode::VT_DEPRECATED_BUILTIN_CODE,
        deprecated_builtin_code,
        0,
    );
    if let Some(x) = custom_code {
        fbb.push_slot_always(OperatorCode::VT_CUSTOM_CODE, x);
    }
    fbb.push_slot::<BuiltinOperator>(
        OperatorCode::VT_BUILTIN_CODE,
        builtin_code,
        BuiltinOperator::ADD,
    );
    flatbuffers::WIPOffset::new(fbb.end_table(start).value())
}

#[derive(Clone, Copy, PartialEq)]
pub struct SubGraph<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for SubGraph<'a> {
    type Inner = SubGraph<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self {
            _tab: flatbuffers::Table::new(buf, loc),
        }
    }
}

impl<'a> SubGraph<'a> {
    pub const VT_TENSORS: flatbuffers::VOffsetT = 4;
    // Slots 6/8 (graph inputs/outputs) and 12 (name) are not read by this
    // crate; the execution engine takes its I/O bindings from the caller.
    pub const VT_OPERATORS: flatbuffers::VOffsetT = 10;

    #[inline]
    pub fn tensors(
        &self,
    ) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Tensor<'a>>>> {
        unsafe {
            self._tab.get::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Tensor>>,
            >>(SubGraph::VT_TENSORS, None)
        }
    }

    #[inline]
    pub fn operators(
        &self,
    ) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Operator<'a>>>> {
        unsafe {
            self._tab.get::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Operator>>,
            >>(SubGraph::VT_OPERATORS, None)
        }
    }
}

impl flatbuffers::Verifiable for SubGraph<'_> {
    #[inline]
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<Tensor>>,
            >>("tensors", Self::VT_TENSORS, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<Operator>>,
            >>("operators", Self::VT_OPERATORS, false)?
            .finish();
        Ok(())
    }
}

pub fn create_sub_graph<'a>(
    fbb: &mut flatbuffers::FlatBufferBuilder<'a>,
    tensors: Option<
        flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Tensor<'a>>>>,
    >,
    operators: Option<
        flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Operator<'a>>>>,
    >,
) -> flatbuffers::WIPOffset<SubGraph<'a>> {
    let start = fbb.start_table();
    if let Some(x) = tensors {
        fbb.push_slot_always(SubGraph::VT_TENSORS, x);
    }
    if let Some(x) = operators {
        fbb.push_slot_always(SubGraph::VT_OPERATORS, x);
    }
    flatbuffers::WIPOffset::new(fbb.end_table(start).value())
}

#[derive(Clone, Copy, PartialEq)]
pub struct Tensor<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Tensor<'a> {
    type Inner = Tensor<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self {
            _tab: flatbuffers::Table::new(buf, loc),
        }
    }
}

impl<'a> Tensor<'a> {
    pub const VT_SHAPE: flatbuffers::VOffsetT = 4;
    pub const VT_TYPE: flatbuffers::VOffsetT = 6;
    pub const VT_BUFFER: flatbuffers::VOffsetT = 8;
    pub const VT_NAME: flatbuffers::VOffsetT = 10;
    pub const VT_QUANTIZATION: flatbuffers::VOffsetT = 12;
    // Slots past 12 (is_variable, sparsity, shape_signature) are not read.

    #[inline]
    pub fn shape(&self) -> Option<flatbuffers::Vector<'a, i32>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, i32>>>(
                    Tensor::VT_SHAPE,
                    None,
                )
        }
    }

    #[inline]
    pub fn type_(&self) -> TensorType {
        unsafe {
            self._tab
                .get::<TensorType>(Tensor::VT_TYPE, Some(TensorType::FLOAT32))
                .unwrap()
        }
    }

    #[inline]
    pub fn buffer(&self) -> u32 {
        unsafe { self._tab.get::<u32>(Tensor::VT_BUFFER, Some(0)).unwrap() }
    }

    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<&str>>(Tensor::VT_NAME, None)
        }
    }

    #[inline]
    pub fn quantization(&self) -> Option<QuantizationParameters<'a>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<QuantizationParameters>>(
                    Tensor::VT_QUANTIZATION,
                    None,
                )
        }
    }
}

impl flatbuffers::Verifiable for Tensor<'_> {
    #[inline]
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, i32>>>(
                "shape",
                Self::VT_SHAPE,
                false,
            )?
            .visit_field::<TensorType>("type", Self::VT_TYPE, false)?
            .visit_field::<u32>("buffer", Self::VT_BUFFER, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<QuantizationParameters>>(
                "quantization",
                Self::VT_QUANTIZATION,
                false,
            )?
            .finish();
        Ok(())
    }
}

pub fn create_tensor<'a>(
    fbb: &mut flatbuffers::FlatBufferBuilder<'a>,
    shape: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, i32>>>,
    type_: TensorType,
    buffer: u32,
    name: Option<flatbuffers::WIPOffset<&'a str>>,
    quantization: Option<flatbuffers::WIPOffset<QuantizationParameters<'a>>>,
) -> flatbuffers::WIPOffset<Tensor<'a>> {
    let start = fbb.start_table();
    if let Some(x) = shape {
        fbb.push_slot_always(Tensor::VT_SHAPE, x);
    }
    fbb.push_slot::<TensorType>(Tensor::VT_TYPE, type_, TensorType::FLOAT32);
    fbb.push_slot::<u32>(Tensor::VT_BUFFER, buffer, 0);
    if let Some(x) = name {
        fbb.push_slot_always(Tensor::VT_NAME, x);
    }
    if let Some(x) = quantization {
        fbb.push_slot_always(Tensor::VT_QUANTIZATION, x);
    }
    flatbuffers::WIPOffset::new(fbb.end_table(start).value())
}

#[derive(Clone, Copy, PartialEq)]
pub struct QuantizationParameters<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for QuantizationParameters<'a> {
    type Inner = QuantizationParameters<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self {
            _tab: flatbuffers::Table::new(buf, loc),
        }
    }
}

impl<'a> QuantizationParameters<'a> {
    // Slots 4/6 (min/max) and 12/14 (details union) are not read.
    pub const VT_SCALE: flatbuffers::VOffsetT = 8;
    pub const VT_ZERO_POINT: flatbuffers::VOffsetT = 10;
    pub const VT_QUANTIZED_DIMENSION: flatbuffers::VOffsetT = 16;

    #[inline]
    pub fn scale(&self) -> Option<flatbuffers::Vector<'a, f32>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, f32>>>(
                    QuantizationParameters::VT_SCALE,
                    None,
                )
        }
    }

    #[inline]
    pub fn zero_point(&self) -> Option<flatbuffers::Vector<'a, i64>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, i64>>>(
                    QuantizationParameters::VT_ZERO_POINT,
                    None,
                )
        }
    }

    #[inline]
    pub fn quantized_dimension(&self) -> i32 {
        unsafe {
            self._tab
                .get::<i32>(QuantizationParameters::VT_QUANTIZED_DIMENSION, Some(0))
                .unwrap()
        }
    }
}

impl flatbuffers::Verifiable for QuantizationParameters<'_> {
    #[inline]
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, f32>>>(
                "scale",
                Self::VT_SCALE,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, i64>>>(
                "zero_point",
                Self::VT_ZERO_POINT,
                false,
            )?
            .visit_field::<i32>("quantized_dimension", Self::VT_QUANTIZED_DIMENSION, false)?
            .finish();
        Ok(())
    }
}

pub fn create_quantization_parameters<'a>(
    fbb: &mut flatbuffers::FlatBufferBuilder<'a>,
    scale: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f32>>>,
    zero_point: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, i64>>>,
    quantized_dimension: i32,
) -> flatbuffers::WIPOffset<QuantizationParameters<'a>> {
    let start = fbb.start_table();
    if let Some(x) = scale {
        fbb.push_slot_always(QuantizationParameters::VT_SCALE, x);
    }
    if let Some(x) = zero_point {
        fbb.push_slot_always(QuantizationParameters::VT_ZERO_POINT, x);
    }
    fbb.push_slot::<i32>(
        QuantizationParameters::VT_QUANTIZED_DIMENSION,
        quantized_dimension,
        0,
    );
    flatbuffers::WIPOffset::new(fbb.end_table(start).value())
}

#[derive(Clone, Copy, PartialEq)]
pub struct Operator<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Operator<'a> {
    type Inner = Operator<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self {
            _tab: flatbuffers::Table::new(buf, loc),
        }
    }
}

impl<'a> Operator<'a> {
    pub const VT_OPCODE_INDEX: flatbuffers::VOffsetT = 4;
    pub const VT_INPUTS: flatbuffers::VOffsetT = 6;
    pub const VT_OUTPUTS: flatbuffers::VOffsetT = 8;
    pub const VT_BUILTIN_OPTIONS_TYPE: flatbuffers::VOffsetT = 10;
    pub const VT_BUILTIN_OPTIONS: flatbuffers::VOffsetT = 12;
    // Slots past 12 (custom options, mutating inputs, intermediates) are not
    // read; custom operators are rejected before their payload matters.

    #[inline]
    pub fn opcode_index(&self) -> u32 {
        unsafe {
            self._tab
                .get::<u32>(Operator::VT_OPCODE_INDEX, Some(0))
                .unwrap()
        }
    }

    #[inline]
    pub fn inputs(&self) -> Option<flatbuffers::Vector<'a, i32>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, i32>>>(
                    Operator::VT_INPUTS,
                    None,
                )
        }
    }

    #[inline]
    pub fn outputs(&self) -> Option<flatbuffers::Vector<'a, i32>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, i32>>>(
                    Operator::VT_OUTPUTS,
                    None,
                )
        }
    }

    #[inline]
    pub fn builtin_options_type(&self) -> BuiltinOptions {
        unsafe {
            self._tab
                .get::<BuiltinOptions>(Operator::VT_BUILTIN_OPTIONS_TYPE, Some(BuiltinOptions::NONE))
                .unwrap()
        }
    }

    #[inline]
    pub fn builtin_options(&self) -> Option<flatbuffers::Table<'a>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<flatbuffers::Table<'a>>>(
                    Operator::VT_BUILTIN_OPTIONS,
                    None,
                )
        }
    }

    #[inline]
    pub fn builtin_options_as_conv_2d_options(&self) -> Option<Conv2DOptions<'a>> {
        if self.builtin_options_type() == BuiltinOptions::Conv2DOptions {
            self.builtin_options().map(|t| Conv2DOptions { _tab: t })
        } else {
            None
        }
    }

    #[inline]
    pub fn builtin_options_as_depthwise_conv_2d_options(
        &self,
    ) -> Option<DepthwiseConv2DOptions<'a>> {
        if self.builtin_options_type() == BuiltinOptions::DepthwiseConv2DOptions {
            self.builtin_options()
                .map(|t| DepthwiseConv2DOptions { _tab: t })
        } else {
            None
        }
    }

    #[inline]
    pub fn builtin_options_as_add_options(&self) -> Option<AddOptions<'a>> {
        if self.builtin_options_type() == BuiltinOptions::AddOptions {
            self.builtin_options().map(|t| AddOptions { _tab: t })
        } else {
            None
        }
    }
}

impl flatbuffers::Verifiable for Operator<'_> {
    #[inline]
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<u32>("opcode_index", Self::VT_OPCODE_INDEX, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, i32>>>(
                "inputs",
                Self::VT_INPUTS,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, i32>>>(
                "outputs",
                Self::VT_OUTPUTS,
                false,
            )?
            .visit_union::<BuiltinOptions, _>(
                "builtin_options_type",
                Self::VT_BUILTIN_OPTIONS_TYPE,
                "builtin_options",
                Self::VT_BUILTIN_OPTIONS,
                false,
                |key, v, pos| match key {
                    BuiltinOptions::Conv2DOptions => v
                        .verify_union_variant::<flatbuffers::ForwardsUOffset<Conv2DOptions>>(
                            "BuiltinOptions::Conv2DOptions",
                            pos,
                        ),
                    BuiltinOptions::DepthwiseConv2DOptions => v
                        .verify_union_variant::<flatbuffers::ForwardsUOffset<DepthwiseConv2DOptions>>(
                            "BuiltinOptions::DepthwiseConv2DOptions",
                            pos,
                        ),
                    BuiltinOptions::AddOptions => v
                        .verify_union_variant::<flatbuffers::ForwardsUOffset<AddOptions>>(
                            "BuiltinOptions::AddOptions",
                            pos,
                        ),
                    BuiltinOptions::PadOptions => v
                        .verify_union_variant::<flatbuffers::ForwardsUOffset<PadOptions>>(
                            "BuiltinOptions::PadOptions",
                            pos,
                        ),
                    _ => Ok(()),
                },
            )?
            .finish();
        Ok(())
    }
}

pub fn create_operator<'a>(
    fbb: &mut flatbuffers::FlatBufferBuilder<'a>,
    opcode_index: u32,
    inputs: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, i32>>>,
    outputs: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, i32>>>,
    builtin_options_type: BuiltinOptions,
    builtin_options: Option<flatbuffers::WIPOffset<flatbuffers::UnionWIPOffset>>,
) -> flatbuffers::WIPOffset<Operator<'a>> {
    let start = fbb.start_table();
    fbb.push_slot::<u32>(Operator::VT_OPCODE_INDEX, opcode_index, 0);
    if let Some(x) = inputs {
        fbb.push_slot_always(Operator::VT_INPUTS, x);
    }
    if let Some(x) = outputs {
        fbb.push_slot_always(Operator::VT_OUTPUTS, x);
    }
    fbb.push_slot::<BuiltinOptions>(
        Operator::VT_BUILTIN_OPTIONS_TYPE,
        builtin_options_type,
        BuiltinOptions::NONE,
    );
    if let Some(x) = builtin_options {
        fbb.push_slot_always(Operator::VT_BUILTIN_OPTIONS, x);
    }
    flatbuffers::WIPOffset::new(fbb.end_table(start).value())
}

#[derive(Clone, Copy, PartialEq)]
pub struct Buffer<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Buffer<'a> {
    type Inner = Buffer<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self {
            _tab: flatbuffers::Table::new(buf, loc),
        }
    }
}

impl<'a> Buffer<'a> {
    pub const VT_DATA: flatbuffers::VOffsetT = 4;

    #[inline]
    pub fn data(&self) -> Option<flatbuffers::Vector<'a, u8>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, u8>>>(
                    Buffer::VT_DATA,
                    None,
                )
        }
    }
}

impl flatbuffers::Verifiable for Buffer<'_> {
    #[inline]
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, u8>>>(
                "data",
                Self::VT_DATA,
                false,
            )?
            .finish();
        Ok(())
    }
}

pub fn create_buffer<'a>(
    fbb: &mut flatbuffers::FlatBufferBuilder<'a>,
    data: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, u8>>>,
) -> flatbuffers::WIPOffset<Buffer<'a>> {
    let start = fbb.start_table();
    if let Some(x) = data {
        fbb.push_slot_always(Buffer::VT_DATA, x);
    }
    flatbuffers::WIPOffset::new(fbb.end_table(start).value())
}

// ---------------------------------------------------------------------------
// Builtin option tables
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq)]
pub struct Conv2DOptions<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Conv2DOptions<'a> {
    type Inner = Conv2DOptions<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self {
            _tab: flatbuffers::Table::new(buf, loc),
        }
    }
}

impl<'a> Conv2DOptions<'a> {
    pub const VT_PADDING: flatbuffers::VOffsetT = 4;
    pub const VT_STRIDE_W: flatbuffers::VOffsetT = 6;
    pub const VT_STRIDE_H: flatbuffers::VOffsetT = 8;
    pub const VT_FUSED_ACTIVATION_FUNCTION: flatbuffers::VOffsetT = 10;
    pub const VT_DILATION_W_FACTOR: flatbuffers::VOffsetT = 12;
    pub const VT_DILATION_H_FACTOR: flatbuffers::VOffsetT = 14;

    #[inline]
    pub fn padding(&self) -> Padding {
        unsafe {
            self._tab
                .get::<Padding>(Conv2DOptions::VT_PADDING, Some(Padding::SAME))
                .unwrap()
        }
    }

    #[inline]
    pub fn stride_w(&self) -> i32 {
        unsafe {
            self._tab
                .get::<i32>(Conv2DOptions::VT_STRIDE_W, Some(0))
                .unwrap()
        }
    }

    #[inline]
    pub fn stride_h(&self) -> i32 {
        unsafe {
            self._tab
                .get::<i32>(Conv2DOptions::VT_STRIDE_H, Some(0))
                .unwrap()
        }
    }

    #[inline]
    pub fn fused_activation_function(&self) -> ActivationFunctionType {
        unsafe {
            self._tab
                .get::<ActivationFunctionType>(
                    Conv2DOptions::VT_FUSED_ACTIVATION_FUNCTION,
                    Some(ActivationFunctionType::NONE),
                )
                .unwrap()
        }
    }

    #[inline]
    pub fn dilation_w_factor(&self) -> i32 {
        unsafe {
            self._tab
                .get::<i32>(Conv2DOptions::VT_DILATION_W_FACTOR, Some(1))
                .unwrap()
        }
    }

    #[inline]
    pub fn dilation_h_factor(&self) -> i32 {
        unsafe {
            self._tab
                .get::<i32>(Conv2DOptions::VT_DILATION_H_FACTOR, Some(1))
                .unwrap()
        }
    }
}

impl flatbuffers::Verifiable for Conv2DOptions<'_> {
    #[inline]
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<Padding>("padding", Self::VT_PADDING, false)?
            .visit_field::<i32>("stride_w", Self::VT_STRIDE_W, false)?
            .visit_field::<i32>("stride_h", Self::VT_STRIDE_H, false)?
            .visit_field::<ActivationFunctionType>(
                "fused_activation_function",
                Self::VT_FUSED_ACTIVATION_FUNCTION,
                false,
            )?
            .visit_field::<i32>("dilation_w_factor", Self::VT_DILATION_W_FACTOR, false)?
            .visit_field::<i32>("dilation_h_factor", Self::VT_DILATION_H_FACTOR, false)?
            .finish();
        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
pub fn create_conv_2d_options<'a>(
    fbb: &mut flatbuffers::FlatBufferBuilder<'a>,
    padding: Padding,
    stride_w: i32,
    stride_h: i32,
    fused_activation_function: ActivationFunctionType,
    dilation_w_factor: i32,
    dilation_h_factor: i32,
) -> flatbuffers::WIPOffset<Conv2DOptions<'a>> {
    let start = fbb.start_table();
    fbb.push_slot::<Padding>(Conv2DOptions::VT_PADDING, padding, Padding::SAME);
    fbb.push_slot::<i32>(Conv2DOptions::VT_STRIDE_W, stride_w, 0);
    fbb.push_slot::<i32>(Conv2DOptions::VT_STRIDE_H, stride_h, 0);
    fbb.push_slot::<ActivationFunctionType>(
        Conv2DOptions::VT_FUSED_ACTIVATION_FUNCTION,
        fused_activation_function,
        ActivationFunctionType::NONE,
    );
    fbb.push_slot::<i32>(Conv2DOptions::VT_DILATION_W_FACTOR, dilation_w_factor, 1);
    fbb.push_slot::<i32>(Conv2DOptions::VT_DILATION_H_FACTOR, dilation_h_factor, 1);
    flatbuffers::WIPOffset::new(fbb.end_table(start).value())
}

#[derive(Clone, Copy, PartialEq)]
pub struct DepthwiseConv2DOptions<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for DepthwiseConv2DOptions<'a> {
    type Inner = DepthwiseConv2DOptions<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self {
            _tab: flatbuffers::Table::new(buf, loc),
        }
    }
}

impl<'a> DepthwiseConv2DOptions<'a> {
    pub const VT_PADDING: flatbuffers::VOffsetT = 4;
    pub const VT_STRIDE_W: flatbuffers::VOffsetT = 6;
    pub const VT_STRIDE_H: flatbuffers::VOffsetT = 8;
    pub const VT_DEPTH_MULTIPLIER: flatbuffers::VOffsetT = 10;
    pub const VT_FUSED_ACTIVATION_FUNCTION: flatbuffers::VOffsetT = 12;
    pub const VT_DILATION_W_FACTOR: flatbuffers::VOffsetT = 14;
    pub const VT_DILATION_H_FACTOR: flatbuffers::VOffsetT = 16;

    #[inline]
    pub fn padding(&self) -> Padding {
        unsafe {
            self._tab
                .get::<Padding>(DepthwiseConv2DOptions::VT_PADDING, Some(Padding::SAME))
                .unwrap()
        }
    }

    #[inline]
    pub fn stride_w(&self) -> i32 {
        unsafe {
            self._tab
                .get::<i32>(DepthwiseConv2DOptions::VT_STRIDE_W, Some(0))
                .unwrap()
        }
    }

    #[inline]
    pub fn stride_h(&self) -> i32 {
        unsafe {
            self._tab
                .get::<i32>(DepthwiseConv2DOptions::VT_STRIDE_H, Some(0))
                .unwrap()
        }
    }

    #[inline]
    pub fn depth_multiplier(&self) -> i32 {
        unsafe {
            self._tab
                .get::<i32>(DepthwiseConv2DOptions::VT_DEPTH_MULTIPLIER, Some(0))
                .unwrap()
        }
    }

    #[inline]
    pub fn fused_activation_function(&self) -> ActivationFunctionType {
        unsafe {
            self._tab
                .get::<ActivationFunctionType>(
                    DepthwiseConv2DOptions::VT_FUSED_ACTIVATION_FUNCTION,
                    Some(ActivationFunctionType::NONE),
                )
                .unwrap()
        }
    }

    #[inline]
    pub fn dilation_w_factor(&self) -> i32 {
        unsafe {
            self._tab
                .get::<i32>(DepthwiseConv2DOptions::VT_DILATION_W_FACTOR, Some(1))
                .unwrap()
        }
    }

    #[inline]
    pub fn dilation_h_factor(&self) -> i32 {
        unsafe {
            self._tab
                .get::<i32>(DepthwiseConv2DOptions::VT_DILATION_H_FACTOR, Some(1))
                .unwrap()
        }
    }
}

impl flatbuffers::Verifiable for DepthwiseConv2DOptions<'_> {
    #[inline]
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<Padding>("padding", Self::VT_PADDING, false)?
            .visit_field::<i32>("stride_w", Self::VT_STRIDE_W, false)?
            .visit_field::<i32>("stride_h", Self::VT_STRIDE_H, false)?
            .visit_field::<i32>("depth_multiplier", Self::VT_DEPTH_MULTIPLIER, false)?
            .visit_field::<ActivationFunctionType>(
                "fused_activation_function",
                Self::VT_FUSED_ACTIVATION_FUNCTION,
                false,
            )?
            .visit_field::<i32>("dilation_w_factor", Self::VT_DILATION_W_FACTOR, false)?
            .visit_field::<i32>("dilation_h_factor", Self::VT_DILATION_H_FACTOR, false)?
            .finish();
        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
pub fn create_depthwise_conv_2d_options<'a>(
    fbb: &mut flatbuffers::FlatBufferBuilder<'a>,
    padding: Padding,
    stride_w: i32,
    stride_h: i32,
    depth_multiplier: i32,
    fused_activation_function: ActivationFunctionType,
    dilation_w_factor: i32,
    dilation_h_factor: i32,
) -> flatbuffers::WIPOffset<DepthwiseConv2DOptions<'a>> {
    let start = fbb.start_table();
    fbb.push_slot::<Padding>(DepthwiseConv2DOptions::VT_PADDING, padding, Padding::SAME);
    fbb.push_slot::<i32>(DepthwiseConv2DOptions::VT_STRIDE_W, stride_w, 0);
    fbb.push_slot::<i32>(DepthwiseConv2DOptions::VT_STRIDE_H, stride_h, 0);
    fbb.push_slot::<i32>(
        DepthwiseConv2DOptions::VT_DEPTH_MULTIPLIER,
        depth_multiplier,
        0,
    );
    fbb.push_slot::<ActivationFunctionType>(
        DepthwiseConv2DOptions::VT_FUSED_ACTIVATION_FUNCTION,
        fused_activation_function,
        ActivationFunctionType::NONE,
    );
    fbb.push_slot::<i32>(
        DepthwiseConv2DOptions::VT_DILATION_W_FACTOR,
        dilation_w_factor,
        1,
    );
    fbb.push_slot::<i32>(
        DepthwiseConv2DOptions::VT_DILATION_H_FACTOR,
        dilation_h_factor,
        1,
    );
    flatbuffers::WIPOffset::new(fbb.end_table(start).value())
}

#[derive(Clone, Copy, PartialEq)]
pub struct AddOptions<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for AddOptions<'a> {
    type Inner = AddOptions<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self {
            _tab: flatbuffers::Table::new(buf, loc),
        }
    }
}

impl<'a> AddOptions<'a> {
    pub const VT_FUSED_ACTIVATION_FUNCTION: flatbuffers::VOffsetT = 4;

    #[inline]
    pub fn fused_activation_function(&self) -> ActivationFunctionType {
        unsafe {
            self._tab
                .get::<ActivationFunctionType>(
                    AddOptions::VT_FUSED_ACTIVATION_FUNCTION,
                    Some(ActivationFunctionType::NONE),
                )
                .unwrap()
        }
    }
}

impl flatbuffers::Verifiable for AddOptions<'_> {
    #[inline]
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<ActivationFunctionType>(
                "fused_activation_function",
                Self::VT_FUSED_ACTIVATION_FUNCTION,
                false,
            )?
            .finish();
        Ok(())
    }
}

pub fn create_add_options<'a>(
    fbb: &mut flatbuffers::FlatBufferBuilder<'a>,
    fused_activation_function: ActivationFunctionType,
) -> flatbuffers::WIPOffset<AddOptions<'a>> {
    let start = fbb.start_table();
    fbb.push_slot::<ActivationFunctionType>(
        AddOptions::VT_FUSED_ACTIVATION_FUNCTION,
        fused_activation_function,
        ActivationFunctionType::NONE,
    );
    flatbuffers::WIPOffset::new(fbb.end_table(start).value())
}

#[derive(Clone, Copy, PartialEq)]
pub struct PadOptions<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PadOptions<'a> {
    type Inner = PadOptions<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self {
            _tab: flatbuffers::Table::new(buf, loc),
        }
    }
}

impl flatbuffers::Verifiable for PadOptions<'_> {
    #[inline]
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?.finish();
        Ok(())
    }
}

pub fn create_pad_options<'a>(
    fbb: &mut flatbuffers::FlatBufferBuilder<'a>,
) -> flatbuffers::WIPOffset<PadOptions<'a>> {
    let start = fbb.start_table();
    flatbuffers::WIPOffset::new(fbb.end_table(start).value())
}
