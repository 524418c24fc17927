use burn::{
    config::Config,
    module::Module,
    nn::{Initializer, Linear, LinearConfig},
    tensor::{backend::Backend, Int, Tensor},
};

use crate::activation::{Sigmoid, Softmax};

/// Configuration to create the [module-based perceptron](Mlp).
#[derive(Config)]
pub struct MlpConfig {
    /// The number of input features once an image is flattened.
    #[config(default = 784)]
    pub d_input: usize,
    /// The size of the hidden layer.
    #[config(default = 256)]
    pub d_hidden: usize,
    /// The number of digit classes.
    #[config(default = 10)]
    pub num_classes: usize,
    /// Draw weights from the standard normal distribution instead of the
    /// default scheme of [Linear].
    #[config(default = false)]
    pub normal_init: bool,
}

/// The same network as [RawMlp](crate::raw::RawMlp), rebuilt from named
/// sub-modules composed sequentially in [forward](Mlp::forward).
#[derive(Module, Debug)]
pub struct Mlp<B: Backend> {
    /// Dense layer from pixels to the hidden features.
    pub hidden: Linear<B>,
    /// Non-linearity between the two dense layers.
    pub activation: Sigmoid,
    /// Dense layer from hidden features to class scores.
    pub output: Linear<B>,
    /// Turns class scores into per-image probabilities.
    pub softmax: Softmax,
}

impl MlpConfig {
    /// Initialize the network on the given device.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Mlp<B> {
        let mut hidden = LinearConfig::new(self.d_input, self.d_hidden);
        let mut output = LinearConfig::new(self.d_hidden, self.num_classes);

        if self.normal_init {
            hidden = hidden.with_initializer(Initializer::Normal {
                mean: 0.0,
                std: 1.0,
            });
            output = output.with_initializer(Initializer::Normal {
                mean: 0.0,
                std: 1.0,
            });
        }

        Mlp {
            hidden: hidden.init(device),
            activation: Sigmoid::new(),
            output: output.init(device),
            softmax: Softmax::new(1),
        }
    }
}

impl<B: Backend> Mlp<B> {
    /// Applies the forward pass on a batch of images.
    ///
    /// # Shapes
    ///
    /// - images: `[batch_size, 1, 28, 28]`
    /// - output: `[batch_size, num_classes]`, one probability distribution
    ///   per row
    pub fn forward(&self, images: Tensor<B, 4>) -> Tensor<B, 2> {
        let [batch_size, _, height, width] = images.dims();
        let x = images.reshape([batch_size, height * width]);

        let x = self.hidden.forward(x);
        let x = self.activation.forward(x);
        let x = self.output.forward(x);

        self.softmax.forward(x)
    }

    /// Index of the most probable class for each image in the batch.
    pub fn predict(&self, images: Tensor<B, 4>) -> Tensor<B, 1, Int> {
        self.forward(images).argmax(1).flatten(0, 1)
    }
}
