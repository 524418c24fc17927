//! A walkthrough of building a feed-forward digit classifier twice: once
//! with raw weight matrices and hand-written activation functions, once with
//! the module abstraction ([Linear](burn::nn::Linear) layers, activation
//! modules, named sub-modules).
//!
//! No training happens here; the point is the shape of the data and of the
//! two network definitions.

pub mod activation;
pub mod data;
pub mod inspect;
pub mod model;
pub mod raw;
pub mod show;

use burn::config::Config;
use burn::data::dataloader::DataLoaderBuilder;
use burn::data::dataset::vision::MnistDataset;
use burn::module::Module;
use burn::tensor::backend::Backend;
use burn::tensor::ElementConversion;

use crate::data::{MnistBatcher, HEIGHT, WIDTH};
use crate::model::MlpConfig;
use crate::raw::RawMlp;

/// Settings of the walkthrough run.
#[derive(Config)]
pub struct WalkthroughConfig {
    /// How many images to pull per batch.
    #[config(default = 64)]
    pub batch_size: usize,
    #[config(default = 42)]
    pub seed: u64,
    /// Where rendered digits are written.
    #[config(default = "String::from(\"/tmp/mnist-mlp\")")]
    pub artifact_dir: String,
}

/// Runs the whole walkthrough on the given device.
pub fn run<B: Backend>(device: B::Device) {
    let config = WalkthroughConfig::new();
    B::seed(config.seed);

    // One batch of images, normalized to [-1, 1].
    let batcher = MnistBatcher::<B>::new(device.clone());
    let dataloader = DataLoaderBuilder::new(batcher)
        .batch_size(config.batch_size)
        .shuffle(config.seed)
        .num_workers(1)
        .build(MnistDataset::test());

    let batch = dataloader
        .iter()
        .next()
        .expect("The MNIST test split yields at least one batch");
    log::info!("loaded a batch of shape {:?}", batch.images.dims());

    println!("== Data ==");
    println!("images: {:?}", batch.images.dims());
    println!("targets: {:?}", batch.targets.dims());

    // The network built by hand: two weight matrices, two biases, and the
    // activations spelled out.
    println!("\n== Raw two-layer perceptron ==");
    let raw = RawMlp::<B>::init(&device);
    let output = raw.forward(batch.images.clone());
    let first_row_sum: f32 = output
        .clone()
        .slice([0..1])
        .sum()
        .into_scalar()
        .elem();
    println!("output: {:?}", output.dims());
    println!("first row sums to {first_row_sum:.6}");

    // The same network, rebuilt from named sub-modules.
    println!("\n== Module-based perceptron ==");
    let mlp = MlpConfig::new().init::<B>(&device);
    let output = mlp.forward(batch.images.clone());
    println!("output: {:?}", output.dims());
    println!("parameters: {}", mlp.num_params());

    // One image, its label, and what the untrained network makes of it.
    println!("\n== Inference on one digit ==");
    let image = batch.images.clone().slice([0..1]);
    let label: i64 = batch.targets.clone().slice([0..1]).into_scalar().elem();
    let predicted: i64 = mlp.predict(image.clone()).into_scalar().elem();

    let probabilities: Vec<f32> = mlp
        .forward(image.clone())
        .into_data()
        .convert::<f32>()
        .to_vec()
        .expect("a rank-2 float tensor converts to a vector");
    println!("label: {label}, predicted: {predicted} (untrained weights)");
    print!("{}", show::render_distribution(&probabilities));

    let path = format!("{}/digit-{label}.png", config.artifact_dir);
    let digit = image.reshape([HEIGHT, WIDTH]);
    match show::save_as_img(&digit, 8, &path) {
        Ok(()) => println!("digit written to {path}"),
        Err(err) => log::error!("could not write {path}: {err}"),
    }

    // How the two initialization schemes differ.
    println!("\n== Weight initialization ==");
    println!("raw (standard normal):");
    for (name, stats) in inspect::describe_raw(&raw) {
        println!("  {name:<14} {stats}");
    }
    println!("layers (default uniform):");
    for (name, stats) in inspect::describe(&mlp) {
        println!("  {name:<14} {stats}");
    }
    let normal = MlpConfig::new().with_normal_init(true).init::<B>(&device);
    println!("layers (standard normal):");
    for (name, stats) in inspect::describe(&normal) {
        println!("  {name:<14} {stats}");
    }
}
