pub mod spi;

pub use spi::{BitOrder, BusSettings, EncoderBus};
