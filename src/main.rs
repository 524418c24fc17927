#[cfg(feature = "ndarray")]
mod ndarray {
    use burn::backend::ndarray::{NdArray, NdArrayDevice};

    pub fn run() {
        mnist_mlp::run::<NdArray<f32>>(NdArrayDevice::Cpu);
    }
}

#[cfg(feature = "wgpu")]
mod wgpu {
    use burn::backend::wgpu::{Wgpu, WgpuDevice};

    pub fn run() {
        mnist_mlp::run::<Wgpu>(WgpuDevice::default());
    }
}

fn main() {
    #[cfg(feature = "ndarray")]
    ndarray::run();
    #[cfg(all(feature = "wgpu", not(feature = "ndarray")))]
    wgpu::run();
}
