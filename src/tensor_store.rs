//! Index-addressable tensor storage.
//!
//! The store is the single owner of all tensors in a model. Operators refer
//! to tensors through [`TensorId`] handles instead of pointers, which keeps
//! the graph relocatable and trivially cloneable.

use crate::ir::{Tensor, TensorId};

/// Append-only arena of tensors; insertion order defines the handle.
#[derive(Debug, Clone, Default)]
pub struct TensorStore {
    tensors: Vec<Tensor>,
}

impl TensorStore {
    /// Append a tensor and return its handle.
    pub(crate) fn push(&mut self, tensor: Tensor) -> TensorId {
        let id = self.tensors.len();
        self.tensors.push(tensor);
        id
    }

    /// Get a tensor by handle.
    pub fn get(&self, id: TensorId) -> Option<&Tensor> {
        self.tensors.get(id)
    }

    /// Number of tensors in the store.
    pub fn len(&self) -> usize {
        self.tensors.len()
    }

    /// Whether the store holds no tensors.
    pub fn is_empty(&self) -> bool {
        self.tensors.is_empty()
    }

    /// Iterate over the tensors in handle order.
    pub fn iter(&self) -> impl Iterator<Item = &Tensor> {
        self.tensors.iter()
    }
}

impl std::ops::Index<TensorId> for TensorStore {
    type Output = Tensor;

    fn index(&self, id: TensorId) -> &Tensor {
        &self.tensors[id]
    }
}
