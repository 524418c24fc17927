use burn::tensor::{backend::Backend, ElementConversion, Tensor};

use crate::model::Mlp;
use crate::raw::RawMlp;

/// Summary statistics of a parameter tensor.
#[derive(Clone, Debug, PartialEq)]
pub struct TensorStats {
    pub shape: Vec<usize>,
    pub min: f32,
    pub max: f32,
    pub mean: f32,
    pub std: f32,
}

impl TensorStats {
    /// Compute the statistics of any float tensor.
    pub fn of<B: Backend, const D: usize>(tensor: Tensor<B, D>) -> Self {
        let shape = tensor.dims().to_vec();
        let mean: f32 = tensor.clone().mean().into_scalar().elem();
        let std: f32 = tensor
            .clone()
            .sub_scalar(mean)
            .powf_scalar(2.0)
            .mean()
            .sqrt()
            .into_scalar()
            .elem();

        Self {
            shape,
            min: tensor.clone().min().into_scalar().elem(),
            max: tensor.max().into_scalar().elem(),
            mean,
            std,
        }
    }
}

impl core::fmt::Display for TensorStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:?} min {:+.4} max {:+.4} mean {:+.4} std {:.4}",
            self.shape, self.min, self.max, self.mean, self.std
        )
    }
}

/// Per-parameter statistics of the module-based network, keyed the way the
/// sub-modules are named.
pub fn describe<B: Backend>(mlp: &Mlp<B>) -> Vec<(String, TensorStats)> {
    let mut stats = vec![(
        "hidden.weight".to_string(),
        TensorStats::of(mlp.hidden.weight.val()),
    )];

    if let Some(bias) = &mlp.hidden.bias {
        stats.push(("hidden.bias".to_string(), TensorStats::of(bias.val())));
    }

    stats.push((
        "output.weight".to_string(),
        TensorStats::of(mlp.output.weight.val()),
    ));

    if let Some(bias) = &mlp.output.bias {
        stats.push(("output.bias".to_string(), TensorStats::of(bias.val())));
    }

    stats
}

/// Per-parameter statistics of the hand-built network.
pub fn describe_raw<B: Backend>(mlp: &RawMlp<B>) -> Vec<(String, TensorStats)> {
    vec![
        ("w1".to_string(), TensorStats::of(mlp.w1.clone())),
        ("b1".to_string(), TensorStats::of(mlp.b1.clone())),
        ("w2".to_string(), TensorStats::of(mlp.w2.clone())),
        ("b2".to_string(), TensorStats::of(mlp.b2.clone())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MlpConfig;

    type TestBackend = burn::backend::NdArray<f32>;

    #[test]
    fn stats_of_constant_tensor() {
        let device = Default::default();
        let tensor = Tensor::<TestBackend, 2>::full([3, 4], 2.5, &device);

        let stats = TensorStats::of(tensor);

        assert_eq!(stats.shape, vec![3, 4]);
        assert_eq!(stats.min, 2.5);
        assert_eq!(stats.max, 2.5);
        assert_eq!(stats.mean, 2.5);
        assert!(stats.std.abs() < 1e-6);
    }

    #[test]
    fn stats_of_ramp_tensor() {
        let device = Default::default();
        let tensor = Tensor::<TestBackend, 1>::from_floats([1.0, 2.0, 3.0, 4.0], &device);

        let stats = TensorStats::of(tensor);

        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.mean, 2.5);
        // Population standard deviation of 1..4.
        assert!((stats.std - 1.118034).abs() < 1e-5);
    }

    #[test]
    fn describe_names_every_parameter() {
        let device = Default::default();
        TestBackend::seed(0);
        let mlp = MlpConfig::new().init::<TestBackend>(&device);

        let names: Vec<_> = describe(&mlp).into_iter().map(|(name, _)| name).collect();

        assert_eq!(
            names,
            vec!["hidden.weight", "hidden.bias", "output.weight", "output.bias"]
        );
    }

    #[test]
    fn describe_raw_reports_the_fixed_shapes() {
        let device = Default::default();
        TestBackend::seed(0);
        let mlp = crate::raw::RawMlp::<TestBackend>::init(&device);

        let stats = describe_raw(&mlp);

        assert_eq!(stats[0].1.shape, vec![784, 256]);
        assert_eq!(stats[1].1.shape, vec![256]);
        assert_eq!(stats[2].1.shape, vec![256, 10]);
        assert_eq!(stats[3].1.shape, vec![10]);
    }
}
