use burn::module::Module;
use burn::tensor::{backend::Backend, Tensor};

/// Applies the logistic function element-wise:
///
/// `y = 1 / (1 + e^(-x))`
pub fn sigmoid<B: Backend, const D: usize>(tensor: Tensor<B, D>) -> Tensor<B, D> {
    (tensor.neg().exp() + 1.0).recip()
}

/// Normalizes scores along `dim` into a probability distribution:
///
/// `y_i = e^(x_i) / sum_j e^(x_j)`
///
/// The maximum along `dim` is subtracted before exponentiation so that large
/// scores cannot overflow the exponential.
pub fn softmax<B: Backend, const D: usize>(tensor: Tensor<B, D>, dim: usize) -> Tensor<B, D> {
    let tensor = tensor.clone() - tensor.max_dim(dim);
    let exp = tensor.exp();
    let sum = exp.clone().sum_dim(dim);

    exp / sum
}

/// Applies [sigmoid](sigmoid) as a module.
#[derive(Module, Clone, Debug, Default)]
pub struct Sigmoid {}

impl Sigmoid {
    /// Create the module.
    pub fn new() -> Self {
        Self {}
    }

    /// Applies the forward pass on the input tensor.
    ///
    /// # Shapes
    ///
    /// - input: `[..., any]`
    /// - output: `[..., any]`
    pub fn forward<B: Backend, const D: usize>(&self, input: Tensor<B, D>) -> Tensor<B, D> {
        sigmoid(input)
    }
}

/// Applies [softmax](softmax) over a fixed axis as a module.
#[derive(Module, Clone, Debug)]
pub struct Softmax {
    dim: usize,
}

impl Softmax {
    /// Create the module normalizing over the given axis.
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    /// Applies the forward pass on the input tensor.
    ///
    /// # Shapes
    ///
    /// - input: `[..., any]`
    /// - output: `[..., any]`, sums to 1 along the configured axis
    pub fn forward<B: Backend, const D: usize>(&self, input: Tensor<B, D>) -> Tensor<B, D> {
        softmax(input, self.dim)
    }
}
