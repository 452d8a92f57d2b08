//! Open connection to a jrk.

use crate::catalog::{self, var, ErrorFlags, Product, NOT_INITIALIZED, SETTINGS_SIZE, VARIABLES_SIZE};
use crate::codec::{decode_settings, decode_variables, encode_settings, encode_settings_into};
use crate::error::{message, Error, Result, SegmentError, TransportError};
use crate::settings::Settings;
use crate::variables::Variables;

use super::command;
use super::{GetVariablesFlags, Transport};

/// Largest target accepted by [`Handle::set_target`].
pub const MAX_TARGET: u16 = 4095;

/// Largest duty cycle magnitude accepted by the force commands.
pub const MAX_DUTY_CYCLE: i16 = 600;

/// Connection to one jrk.
///
/// Generic over the [`Transport`] that carries the control transfers. The
/// handle remembers which product it talks to so settings can be encoded
/// with the right layout.
pub struct Handle<T: Transport> {
    /// Underlying control-transfer channel.
    transport: T,

    /// Model of the connected device.
    product: Product,
}

impl<T: Transport> Handle<T> {
    /// Wraps a transport connected to a device of the given product.
    pub fn new(transport: T, product: Product) -> Self {
        Self { transport, product }
    }

    /// Product of the connected device.
    #[inline]
    pub fn product(&self) -> Product {
        self.product
    }

    /// Borrow the transport.
    #[inline]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the transport.
    #[inline]
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Releases the transport.
    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Sets the target, leaving any force mode.
    ///
    /// The target must be between 0 and [`MAX_TARGET`].
    pub fn set_target(&mut self, target: u16) -> Result<()> {
        debug!("set target {}", target);
        check(target <= MAX_TARGET, "The target must be between 0 and 4095.")
            .and_then(|()| self.write(command::SET_TARGET, target, 0, &[]))
            .map_err(|e| e.context("There was an error setting the target."))
    }

    /// Stops the motor and sets the "Awaiting command" error.
    pub fn stop_motor(&mut self) -> Result<()> {
        debug!("stop motor");
        self.write(command::STOP_MOTOR, 0, 0, &[])
            .map_err(|e| e.context("There was an error stopping the motor."))
    }

    /// Clears latched errors, including "Awaiting command", so the motor can run.
    pub fn run_motor(&mut self) -> Result<()> {
        debug!("run motor");
        self.write(command::RUN_MOTOR, 0, 0, &[])
            .map_err(|e| e.context("There was an error running the motor."))
    }

    /// Forces the duty cycle target, bypassing the PID computation.
    ///
    /// Acceleration and duty cycle limits still apply. Leave this mode with
    /// [`set_target`](Self::set_target).
    pub fn force_duty_cycle_target(&mut self, duty_cycle: i16) -> Result<()> {
        debug!("force duty cycle target {}", duty_cycle);
        check_duty_cycle(duty_cycle)
            .and_then(|()| self.write(command::FORCE_DUTY_CYCLE_TARGET, duty_cycle as u16, 0, &[]))
            .map_err(|e| e.context("There was an error forcing the duty cycle target."))
    }

    /// Forces the duty cycle, bypassing the PID computation and the
    /// acceleration and duty cycle limits.
    pub fn force_duty_cycle(&mut self, duty_cycle: i16) -> Result<()> {
        debug!("force duty cycle {}", duty_cycle);
        check_duty_cycle(duty_cycle)
            .and_then(|()| self.write(command::FORCE_DUTY_CYCLE, duty_cycle as u16, 0, &[]))
            .map_err(|e| e.context("There was an error forcing the duty cycle."))
    }

    /// Reads all variables in one transfer.
    pub fn get_variables(&mut self, flags: GetVariablesFlags) -> Result<Variables> {
        let mut buf = [0; VARIABLES_SIZE];
        self.read_segment(command::GET_VARIABLES, flags.bits(), 0, &mut buf, VARIABLES_SIZE)
            .map_err(|e| e.context("There was an error reading variables from the device."))?;
        Ok(decode_variables(&buf))
    }

    /// Reads `buf.len()` bytes of the variables buffer starting at `index`.
    pub fn get_variable_segment(
        &mut self,
        index: usize,
        buf: &mut [u8],
        flags: GetVariablesFlags,
    ) -> Result<()> {
        self.read_segment(command::GET_VARIABLES, flags.bits(), index, buf, VARIABLES_SIZE)
            .map_err(|e| e.context("There was an error reading variables from the device."))
    }

    /// Clears latched errors and returns the halting errors that were set.
    pub fn clear_errors(&mut self) -> Result<ErrorFlags> {
        let mut buf = [0; 2];
        self.read_segment(
            command::GET_VARIABLES,
            GetVariablesFlags::CLEAR_ERROR_FLAGS_HALTING.bits(),
            var::ERROR_FLAGS_HALTING,
            &mut buf,
            VARIABLES_SIZE,
        )
        .map_err(|e| e.context("There was an error clearing errors."))?;
        Ok(ErrorFlags::from_bits_retain(u16::from_le_bytes(buf)))
    }

    /// Reads the persistent settings.
    pub fn get_eeprom_settings(&mut self) -> Result<Settings> {
        let mut buf = [0; SETTINGS_SIZE];
        self.get_eeprom_settings_segment(0, &mut buf)
            .map_err(|e| e.context("There was an error reading settings from the device."))?;
        Ok(decode_settings(&buf, Some(self.product)))
    }

    /// Reads `buf.len()` bytes of the persistent settings starting at `index`.
    pub fn get_eeprom_settings_segment(&mut self, index: usize, buf: &mut [u8]) -> Result<()> {
        self.read_segment(command::GET_EEPROM_SETTINGS, 0, index, buf, SETTINGS_SIZE)
            .map_err(|e| e.context("There was an error reading EEPROM settings."))
    }

    /// Writes the persistent settings.
    ///
    /// A fixed copy of `settings` is written, one byte per request, and only
    /// bytes that differ from the device's current EEPROM are sent. The
    /// EEPROM is rated for about 100,000 write cycles, so do not call this in
    /// a loop. Call [`reinitialize`](Self::reinitialize) to apply the result.
    pub fn set_eeprom_settings(&mut self, settings: &Settings) -> Result<()> {
        self.write_eeprom_settings(settings)
            .map_err(|e| e.context("There was an error applying settings."))
    }

    fn write_eeprom_settings(&mut self, settings: &Settings) -> Result<()> {
        let fixed = self.fixed_copy(settings)?;

        let mut current = [0; SETTINGS_SIZE];
        self.get_eeprom_settings_segment(0, &mut current)?;

        let mut desired = current;
        encode_settings_into(&fixed, &mut desired);

        let mut written = 0usize;
        for segment in catalog::settings_segments(self.product) {
            for offset in segment {
                if desired[offset] != current[offset] {
                    self.set_eeprom_setting(offset, desired[offset])?;
                    written += 1;
                }
            }
        }
        debug!("wrote {} EEPROM bytes", written);
        Ok(())
    }

    fn set_eeprom_setting(&mut self, offset: usize, value: u8) -> Result<()> {
        SegmentError::check(offset, 1, SETTINGS_SIZE)?;
        self.write(command::SET_EEPROM_SETTING, u16::from(value), offset as u16, &[])
            .map_err(|e| e.context("There was an error writing to EEPROM."))
    }

    /// Reads the settings currently in effect.
    pub fn get_ram_settings(&mut self) -> Result<Settings> {
        let mut buf = [0; SETTINGS_SIZE];
        self.get_ram_settings_segment(0, &mut buf)
            .map_err(|e| e.context("There was an error reading settings from the device."))?;
        Ok(decode_settings(&buf, Some(self.product)))
    }

    /// Reads `buf.len()` bytes of the settings in effect starting at `index`.
    pub fn get_ram_settings_segment(&mut self, index: usize, buf: &mut [u8]) -> Result<()> {
        self.read_segment(command::GET_RAM_SETTINGS, 0, index, buf, SETTINGS_SIZE)
            .map_err(|e| e.context("There was an error reading RAM settings."))
    }

    /// Writes the settings in effect without touching EEPROM.
    ///
    /// A fixed copy of `settings` is written, one request per contiguous
    /// segment used by the product. The changes are lost on reset.
    pub fn set_ram_settings(&mut self, settings: &Settings) -> Result<()> {
        self.write_ram_settings(settings)
            .map_err(|e| e.context("There was an error applying settings."))
    }

    fn write_ram_settings(&mut self, settings: &Settings) -> Result<()> {
        let fixed = self.fixed_copy(settings)?;
        let buf = encode_settings(&fixed);
        for segment in catalog::settings_segments(self.product) {
            self.set_ram_settings_segment(segment.start, &buf[segment])?;
        }
        Ok(())
    }

    /// Writes `data` into the settings in effect starting at `index`.
    pub fn set_ram_settings_segment(&mut self, index: usize, data: &[u8]) -> Result<()> {
        SegmentError::check(index, data.len(), SETTINGS_SIZE)
            .map_err(Error::from)
            .and_then(|()| self.write(command::SET_RAM_SETTINGS, 0, index as u16, data))
            .map_err(|e| e.context("There was an error writing RAM settings."))
    }

    /// Reloads the settings from EEPROM, as after a reset.
    pub fn reinitialize(&mut self) -> Result<()> {
        debug!("reinitialize");
        self.write(command::REINITIALIZE, 0, 0, &[])
            .map_err(|e| e.context("There was an error reinitializing the device."))
    }

    /// Restores the factory default settings.
    pub fn restore_defaults(&mut self) -> Result<()> {
        debug!("restore defaults");
        self.set_eeprom_setting(NOT_INITIALIZED, 1)
            .and_then(|()| self.reinitialize())
            .map_err(|e| e.context("There was an error restoring the default settings."))
    }

    /// Resets the device into its bootloader.
    ///
    /// The device disconnects; the handle is of no further use.
    pub fn start_bootloader(&mut self) -> Result<()> {
        debug!("start bootloader");
        self.write(command::START_BOOTLOADER, 0, 0, &[])
            .map_err(|e| e.context("There was an error starting the bootloader."))
    }

    fn fixed_copy(&self, settings: &Settings) -> Result<Settings> {
        match settings.product() {
            Some(product) if product == self.product => {}
            Some(_) => {
                return Err(Error::InvalidArgument(message(
                    "The product of the settings does not match the device.",
                )))
            }
            None => {
                return Err(Error::InvalidArgument(message(
                    "The settings do not specify a product.",
                )))
            }
        }
        let mut fixed = settings.clone();
        fixed.fix();
        Ok(fixed)
    }

    fn write(&mut self, request: u8, value: u16, index: u16, data: &[u8]) -> Result<()> {
        self.transport
            .control_write(request, value, index, data)
            .map_err(Error::from)
    }

    fn read_segment(
        &mut self,
        request: u8,
        value: u16,
        index: usize,
        buf: &mut [u8],
        size: usize,
    ) -> Result<()> {
        SegmentError::check(index, buf.len(), size)?;
        let expected = buf.len();
        let received = self
            .transport
            .control_read(request, value, index as u16, buf)?;
        if received != expected {
            let mut text: heapless::String<64> = heapless::String::new();
            // 64 bytes hold the sentence for any two usize values
            let _ = core::fmt::write(
                &mut text,
                format_args!("Expected to read {} bytes, got {}.", expected, received),
            );
            return Err(TransportError::other(&text).into());
        }
        Ok(())
    }
}

fn check(condition: bool, text: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidArgument(message(text)))
    }
}

fn check_duty_cycle(duty_cycle: i16) -> Result<()> {
    check(
        (-MAX_DUTY_CYCLE..=MAX_DUTY_CYCLE).contains(&duty_cycle),
        "The duty cycle must be between -600 and 600.",
    )
}
