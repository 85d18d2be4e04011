//! Audio output configuration
//!
//! The editor does not talk to the OS audio stack directly; it drives an
//! [`OutputDevice`] implementation. This module owns the configuration
//! state machine around it, in particular the rollback path when a
//! requested reconfiguration is refused by the backend.

use log::{error, info, warn};

use crate::error::{BrrError, Result};
use crate::playback::PlaybackEngine;

/// Output rates the editor offers.
pub const SUPPORTED_RATES: [u32; 4] = [32000, 44100, 48000, 96000];

/// Output buffer sizes the editor offers, in frames.
pub const SUPPORTED_BUFFER_SIZES: [u32; 4] = [256, 512, 1024, 2048];

/// Requested output device configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    pub rate: u32,
    pub buffer_frames: u32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            rate: 48000,
            buffer_frames: 1024,
        }
    }
}

impl DeviceConfig {
    pub fn new(rate: u32, buffer_frames: u32) -> Result<Self> {
        if !SUPPORTED_RATES.contains(&rate) {
            return Err(BrrError::DeviceConfig {
                reason: format!("unsupported rate {} Hz", rate),
            });
        }
        if !SUPPORTED_BUFFER_SIZES.contains(&buffer_frames) {
            return Err(BrrError::DeviceConfig {
                reason: format!("unsupported buffer size {}", buffer_frames),
            });
        }
        Ok(Self {
            rate,
            buffer_frames,
        })
    }
}

/// Backend seam for the platform audio output.
pub trait OutputDevice {
    /// Apply a new configuration. On error the backend keeps running with
    /// its previous configuration if it can.
    fn configure(&mut self, config: DeviceConfig) -> Result<()>;

    /// Tear the device down; no further calls are made after this.
    fn close(&mut self);
}

/// Owns the output device and the active configuration.
///
/// Reconfiguration is transactional from the caller's point of view:
/// either the new configuration takes effect, or the previous one is
/// restored. If even the restore fails the device is closed and playback
/// is dead until a new system is built.
pub struct AudioSystem<D: OutputDevice> {
    device: Option<D>,
    config: DeviceConfig,
}

impl<D: OutputDevice> AudioSystem<D> {
    pub fn new(mut device: D, config: DeviceConfig) -> Result<Self> {
        device.configure(config)?;
        info!(
            "audio device opened at {} Hz, {} frame buffer",
            config.rate, config.buffer_frames
        );
        Ok(Self {
            device: Some(device),
            config,
        })
    }

    pub fn config(&self) -> DeviceConfig {
        self.config
    }

    pub fn is_open(&self) -> bool {
        self.device.is_some()
    }

    /// Switch to a new configuration, rolling back on failure.
    ///
    /// The engine's device rate is kept in sync with whichever
    /// configuration ends up active.
    pub fn reconfigure(&mut self, engine: &mut PlaybackEngine, new: DeviceConfig) -> Result<()> {
        let device = self.device.as_mut().ok_or_else(|| BrrError::DeviceConfig {
            reason: "audio device is closed".into(),
        })?;

        match device.configure(new) {
            Ok(()) => {
                self.config = new;
                engine.set_device_rate(new.rate as f64);
                info!(
                    "audio device reconfigured to {} Hz, {} frame buffer",
                    new.rate, new.buffer_frames
                );
                Ok(())
            }
            Err(err) => {
                warn!("device rejected {:?}, restoring previous configuration", new);
                if let Err(restore_err) = device.configure(self.config) {
                    error!("restore failed too, closing audio device: {}", restore_err);
                    if let Some(mut dead) = self.device.take() {
                        dead.close();
                    }
                    return Err(BrrError::DeviceConfig {
                        reason: format!("reconfigure and rollback both failed: {}", err),
                    });
                }
                engine.set_device_rate(self.config.rate as f64);
                Err(err)
            }
        }
    }

    pub fn close(&mut self) {
        if let Some(mut device) = self.device.take() {
            device.close();
            info!("audio device closed");
        }
    }
}

impl<D: OutputDevice> Drop for AudioSystem<D> {
    fn drop(&mut self) {
        self.close();
    }
}
