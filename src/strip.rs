//! Pixel strip interface.
//!
//! The physical ws281x driver (pin, frequency, DMA channel, brightness) is
//! configured outside of this crate and handed in as an already initialized
//! [`Strip`] implementation.

use crate::led::Rgb;
use thiserror::Error;

/// Errors reported by a strip driver.
#[derive(Error, Debug)]
pub enum HardwareError {
    /// Flushing the pixel buffer to the hardware failed.
    #[error("failed to flush the pixel buffer: {0}")]
    Flush(String),
}

/// Addressable pixel strip.
///
/// `set_pixel` only updates the driver-side buffer; nothing is visible until
/// [`show`](Strip::show) flushes the buffer to the hardware.
pub trait Strip: Send + 'static {
    /// Sets the buffered color of the pixel at `index`. Out-of-range indices
    /// are ignored.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Flushes the pixel buffer to the hardware.
    fn show(&mut self) -> Result<(), HardwareError>;

    /// Returns the number of pixels on the strip.
    fn num_pixels(&self) -> usize;
}

/// Strip implementation which only keeps the pixel buffer in memory.
pub struct Fake {
    pixels: Vec<Rgb>,
}

impl Fake {
    /// Creates a new [`Fake`] strip of `num_pixels` unlit pixels.
    #[must_use]
    pub fn new(num_pixels: usize) -> Self {
        Self { pixels: vec![Rgb::OFF; num_pixels] }
    }

    /// Returns the pixel buffer.
    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

impl Strip for Fake {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) -> Result<(), HardwareError> {
        log::trace!("strip: {:?}", self.pixels);
        Ok(())
    }

    fn num_pixels(&self) -> usize {
        self.pixels.len()
    }
}
