use burn::tensor::{backend::Backend, Distribution, Tensor};

use crate::activation::{sigmoid, softmax};
use crate::data::NUM_CLASSES;

/// Number of input features once a `28x28` image is flattened.
pub const D_INPUT: usize = 784;
/// Size of the hidden layer.
pub const D_HIDDEN: usize = 256;

/// The two-layer perceptron written with nothing but weight matrices.
///
/// No module abstraction is involved: the fields are plain tensors and the
/// forward pass spells out every matrix product. [Mlp](crate::model::Mlp) is
/// the same network expressed through layers.
pub struct RawMlp<B: Backend> {
    /// Input-to-hidden weights, `[784, 256]`.
    pub w1: Tensor<B, 2>,
    /// Hidden bias, `[256]`.
    pub b1: Tensor<B, 1>,
    /// Hidden-to-output weights, `[256, 10]`.
    pub w2: Tensor<B, 2>,
    /// Output bias, `[10]`.
    pub b2: Tensor<B, 1>,
}

impl<B: Backend> RawMlp<B> {
    /// Initialize weights from the standard normal distribution and biases
    /// at zero.
    pub fn init(device: &B::Device) -> Self {
        Self {
            w1: Tensor::random([D_INPUT, D_HIDDEN], Distribution::Normal(0.0, 1.0), device),
            b1: Tensor::zeros([D_HIDDEN], device),
            w2: Tensor::random([D_HIDDEN, NUM_CLASSES], Distribution::Normal(0.0, 1.0), device),
            b2: Tensor::zeros([NUM_CLASSES], device),
        }
    }

    /// Applies the forward pass on a batch of images.
    ///
    /// # Shapes
    ///
    /// - images: `[batch_size, 1, 28, 28]`
    /// - output: `[batch_size, 10]`, one probability distribution per row
    pub fn forward(&self, images: Tensor<B, 4>) -> Tensor<B, 2> {
        let [batch_size, _, height, width] = images.dims();
        let x = images.reshape([batch_size, height * width]);

        let hidden = sigmoid(x.matmul(self.w1.clone()) + self.b1.clone().unsqueeze());
        let scores = hidden.matmul(self.w2.clone()) + self.b2.clone().unsqueeze();

        softmax(scores, 1)
    }
}
