use candle_core::Device;
use tracing::{debug, warn};

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::info;

/// Picks the first accelerator compiled in (Metal, then CUDA), else the CPU.
///
/// Never fails: an accelerator that cannot be opened is logged and skipped.
pub fn select_device() -> Device {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            info!("Embedding on Metal GPU");
            return device;
        }
        Err(e) => warn!(error = %e, "Metal device unavailable"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            info!("Embedding on CUDA GPU");
            return device;
        }
        Err(e) => warn!(error = %e, "CUDA device unavailable"),
    }

    if cfg!(any(feature = "metal", feature = "cuda")) {
        warn!("Falling back to CPU for embeddings");
    } else {
        debug!("No GPU backend compiled, embedding on CPU");
    }
    Device::Cpu
}
