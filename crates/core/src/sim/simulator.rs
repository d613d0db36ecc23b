//! Top-level simulation driver.

use crate::common::SimError;
use crate::config::Config;
use crate::core::Core;
use crate::sim::loader;

/// Owns a core and drives it cycle by cycle.
#[derive(Debug)]
pub struct Simulator {
    /// The core under simulation.
    pub core: Core,
}

impl Simulator {
    /// Creates a simulator from a configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            core: Core::new(config),
        }
    }

    /// Creates a simulator with a program image already loaded and the core
    /// reset.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`] if the image does not fit.
    pub fn with_image(config: &Config, image: &[u8]) -> Result<Self, SimError> {
        let mut sim = Self::new(config);
        loader::load_image_bytes(&mut sim.core, image)?;
        sim.core.reset();
        Ok(sim)
    }

    /// Advances one clock cycle.
    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Runs `cycles` clock cycles.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.core.tick();
        }
    }

    /// Ticks until `done` returns true or `max_cycles` elapse. Returns the
    /// number of cycles consumed.
    pub fn run_until(&mut self, max_cycles: u64, mut done: impl FnMut(&Core) -> bool) -> u64 {
        for n in 0..max_cycles {
            if done(&self.core) {
                return n;
            }
            self.core.tick();
        }
        max_cycles
    }
}
