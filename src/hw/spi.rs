// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Shared encoder bus contract.
//!
//! Both axis encoders sit on one SPI bus. The bus is not owned by the encoders and must be passed
//! in as `&mut B` so that the two devices share it sequentially. Board support implements
//! [`EncoderBus`] for its HAL SPI instance.

use embedded_hal::spi::{Mode, MODE_1};

/// Order in which bits of a word are shifted out on the bus.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// Fixed electrical settings for the encoder bus.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BusSettings {
    /// SCK frequency in Hz.
    pub clock_hz: u32,
    /// Clock polarity and phase.
    pub mode: Mode,
    pub bit_order: BitOrder,
}

impl BusSettings {
    /// 1 MHz, mode 1, MSB first.
    pub const DEFAULT: Self = Self {
        clock_hz: 1_000_000,
        mode: MODE_1,
        bit_order: BitOrder::MsbFirst,
    };
}

impl Default for BusSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A bus the encoders transact over.
pub trait EncoderBus {
    /// Error raised by a failed bus transaction.
    type Error: core::fmt::Debug;

    /// Open the bus with the given settings. Called once, before any encoder read.
    fn configure(&mut self, settings: &BusSettings) -> Result<(), Self::Error>;
}
