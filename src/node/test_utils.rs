//! Helpers shared by the extractor unit tests.

use crate::ir::{Dim, ElementType, Tensor};
use crate::tensor_store::TensorStore;

/// A store of `n` rank-1 float tensors to resolve operand indices against.
pub(crate) fn store_of(n: usize) -> TensorStore {
    let mut store = TensorStore::default();
    for i in 0..n {
        store.push(Tensor {
            name: format!("t{i}"),
            elem_type: ElementType::Float32,
            shape: vec![Dim::with_extent(1)],
            data: Vec::new(),
            quantization: None,
        });
    }
    store
}
