use burn::{
    data::{dataloader::batcher::Batcher, dataset::vision::MnistItem},
    tensor::{backend::Backend, ElementConversion, Int, Tensor, TensorData},
};

/// Width of an MNIST image in pixels.
pub const WIDTH: usize = 28;
/// Height of an MNIST image in pixels.
pub const HEIGHT: usize = 28;
/// One class per digit.
pub const NUM_CLASSES: usize = 10;

/// Collates MNIST items into tensors on a given device.
#[derive(Clone)]
pub struct MnistBatcher<B: Backend> {
    device: B::Device,
}

impl<B: Backend> MnistBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

/// A batch of images with their labels.
#[derive(Clone, Debug)]
pub struct MnistBatch<B: Backend> {
    /// Images of shape `[batch_size, 1, 28, 28]`, values in `[-1, 1]`.
    pub images: Tensor<B, 4>,
    /// One digit class (0-9) per image.
    pub targets: Tensor<B, 1, Int>,
}

impl<B: Backend> Batcher<MnistItem, MnistBatch<B>> for MnistBatcher<B> {
    fn batch(&self, items: Vec<MnistItem>) -> MnistBatch<B> {
        let images = items
            .iter()
            .map(|item| TensorData::from(item.image).convert::<B::FloatElem>())
            .map(|data| Tensor::<B, 2>::from_data(data, &self.device))
            .map(|tensor| tensor.reshape([1, 1, HEIGHT, WIDTH]))
            // Pixels come in as [0, 255]; center them so 0 maps to -1 and 255 to 1.
            .map(|tensor| tensor / 127.5 - 1.0)
            .collect();

        let targets = items
            .iter()
            .map(|item| {
                Tensor::<B, 1, Int>::from_data(
                    [(item.label as i64).elem::<B::IntElem>()],
                    &self.device,
                )
            })
            .collect();

        let images = Tensor::cat(images, 0);
        let targets = Tensor::cat(targets, 0);

        log::debug!(
            "batched {} images into {:?}",
            items.len(),
            images.dims()
        );

        MnistBatch { images, targets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestBackend = burn::backend::NdArray<f32>;

    fn item(fill: f32, label: u8) -> MnistItem {
        MnistItem {
            image: [[fill; WIDTH]; HEIGHT],
            label,
        }
    }

    #[test]
    fn batch_has_expected_shapes() {
        let device = Default::default();
        let batcher = MnistBatcher::<TestBackend>::new(device);

        let batch = batcher.batch(vec![item(0.0, 3), item(255.0, 7)]);

        assert_eq!(batch.images.dims(), [2, 1, HEIGHT, WIDTH]);
        assert_eq!(batch.targets.dims(), [2]);
    }

    #[test]
    fn pixels_are_scaled_to_unit_interval() {
        let device = Default::default();
        let batcher = MnistBatcher::<TestBackend>::new(device);

        let batch = batcher.batch(vec![item(0.0, 0), item(127.5, 1), item(255.0, 2)]);
        let values = batch.images.into_data().to_vec::<f32>().unwrap();

        let (black, rest) = values.split_at(HEIGHT * WIDTH);
        let (gray, white) = rest.split_at(HEIGHT * WIDTH);

        assert!(black.iter().all(|&v| v == -1.0));
        assert!(gray.iter().all(|&v| v == 0.0));
        assert!(white.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn labels_are_preserved_in_order() {
        let device = Default::default();
        let batcher = MnistBatcher::<TestBackend>::new(device);

        let batch = batcher.batch(vec![item(0.0, 9), item(0.0, 0), item(0.0, 4)]);
        let targets = batch.targets.into_data().to_vec::<i64>().unwrap();

        assert_eq!(targets, vec![9, 0, 4]);
    }
}
