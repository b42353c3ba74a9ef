use speaker_leds::{
    led::Rgb,
    strip::{HardwareError, Strip},
};
use std::sync::{Arc, Mutex};

/// Shared log of every frame flushed to a [`Recording`] strip.
pub type Frames = Arc<Mutex<Vec<Vec<Rgb>>>>;

/// Strip which appends every flushed frame to a shared log.
pub struct Recording {
    pixels: Vec<Rgb>,
    frames: Frames,
}

impl Recording {
    pub fn new(num_pixels: usize) -> (Self, Frames) {
        let frames = Frames::default();
        let strip = Self { pixels: vec![Rgb::OFF; num_pixels], frames: Arc::clone(&frames) };
        (strip, frames)
    }
}

impl Strip for Recording {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) -> Result<(), HardwareError> {
        self.frames.lock().unwrap().push(self.pixels.clone());
        Ok(())
    }

    fn num_pixels(&self) -> usize {
        self.pixels.len()
    }
}

/// Strip whose flush starts failing after a number of successes, counting
/// every attempt.
#[allow(dead_code)]
pub struct Failing {
    num_pixels: usize,
    good_flushes: u64,
    attempts: Arc<Mutex<u64>>,
}

#[allow(dead_code)]
impl Failing {
    pub fn new(num_pixels: usize, good_flushes: u64) -> (Self, Arc<Mutex<u64>>) {
        let attempts = Arc::new(Mutex::new(0));
        let strip = Self { num_pixels, good_flushes, attempts: Arc::clone(&attempts) };
        (strip, attempts)
    }
}

/// Strip whose flush panics, simulating a crashed driver binding.
#[allow(dead_code)]
pub struct Crashing {
    num_pixels: usize,
}

#[allow(dead_code)]
impl Crashing {
    pub fn new(num_pixels: usize) -> Self {
        Self { num_pixels }
    }
}

impl Strip for Crashing {
    fn set_pixel(&mut self, _index: usize, _color: Rgb) {}

    fn show(&mut self) -> Result<(), HardwareError> {
        panic!("driver binding crashed");
    }

    fn num_pixels(&self) -> usize {
        self.num_pixels
    }
}

impl Strip for Failing {
    fn set_pixel(&mut self, _index: usize, _color: Rgb) {}

    fn show(&mut self) -> Result<(), HardwareError> {
        let mut attempts = self.attempts.lock().unwrap();
        *attempts += 1;
        if *attempts > self.good_flushes {
            Err(HardwareError::Flush("broken DMA channel".into()))
        } else {
            Ok(())
        }
    }

    fn num_pixels(&self) -> usize {
        self.num_pixels
    }
}
