//! Simulated jrk for tests.
//!
//! Keeps EEPROM, RAM and variables images and answers the vendor requests the
//! way the firmware does, without moving a motor.

#![allow(dead_code)]

use jrk_g2::catalog::{var, ForceMode, NOT_INITIALIZED, SETTINGS_SIZE, VARIABLES_SIZE};
use jrk_g2::error::{ErrorCode, TransportError};
use jrk_g2::protocol::command;
use jrk_g2::{encode_settings, ErrorFlags, GetVariablesFlags, Product, Settings, Transport};

pub struct SimulatedJrk {
    pub product: Product,
    pub eeprom: [u8; SETTINGS_SIZE],
    pub ram: [u8; SETTINGS_SIZE],
    pub variables: [u8; VARIABLES_SIZE],
    /// Single-byte EEPROM writes received so far
    pub eeprom_writes: usize,
    /// Request codes received so far
    pub requests: Vec<u8>,
    pub connected: bool,
}

impl SimulatedJrk {
    /// A factory-fresh device that is waiting for a command.
    pub fn new(product: Product) -> Self {
        let eeprom = encode_settings(&Settings::with_defaults(product));
        let mut sim = Self {
            product,
            eeprom,
            ram: eeprom,
            variables: [0; VARIABLES_SIZE],
            eeprom_writes: 0,
            requests: Vec::new(),
            connected: true,
        };
        sim.set_halting(ErrorFlags::AWAITING_COMMAND);
        sim
    }

    pub fn halting(&self) -> ErrorFlags {
        ErrorFlags::from_bits_retain(self.u16_at(var::ERROR_FLAGS_HALTING))
    }

    pub fn set_halting(&mut self, flags: ErrorFlags) {
        self.put_u16(var::ERROR_FLAGS_HALTING, flags.bits());
    }

    pub fn set_scaled_feedback(&mut self, value: u16) {
        self.put_u16(var::SCALED_FEEDBACK, value);
    }

    pub fn u16_at(&self, at: usize) -> u16 {
        u16::from_le_bytes([self.variables[at], self.variables[at + 1]])
    }

    pub fn put_u16(&mut self, at: usize, value: u16) {
        self.variables[at..at + 2].copy_from_slice(&value.to_le_bytes());
    }

    fn set_force_mode(&mut self, mode: ForceMode) {
        let byte = &mut self.variables[var::FLAG_BYTE1];
        *byte = (*byte & !3) | mode.code();
    }

    fn clear_halting(&mut self, keep: ErrorFlags) {
        let flags = self.halting().intersection(keep);
        self.set_halting(flags);
    }

    fn reinitialize(&mut self) {
        if self.eeprom[NOT_INITIALIZED] != 0 {
            self.eeprom = encode_settings(&Settings::with_defaults(self.product));
        }
        self.ram = self.eeprom;
    }

    fn disconnected() -> TransportError {
        TransportError::new(ErrorCode::DeviceDisconnected, "The device is not connected.")
    }
}

impl Transport for SimulatedJrk {
    fn control_read(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
    ) -> Result<usize, TransportError> {
        if !self.connected {
            return Err(Self::disconnected());
        }
        self.requests.push(request);
        let start = usize::from(index);
        let end = start + buf.len();
        match request {
            command::GET_VARIABLES => {
                buf.copy_from_slice(&self.variables[start..end]);
                let flags = GetVariablesFlags::from_bits_retain(value);
                if flags.contains(GetVariablesFlags::CLEAR_ERROR_FLAGS_HALTING) {
                    self.clear_halting(ErrorFlags::AWAITING_COMMAND);
                }
                if flags.contains(GetVariablesFlags::CLEAR_ERROR_FLAGS_OCCURRED) {
                    self.put_u16(var::ERROR_FLAGS_OCCURRED, 0);
                }
                if flags.contains(GetVariablesFlags::CLEAR_CURRENT_CHOPPING_OCCURRENCE_COUNT) {
                    self.variables[var::CURRENT_CHOPPING_OCCURRENCE_COUNT] = 0;
                }
            }
            command::GET_EEPROM_SETTINGS => buf.copy_from_slice(&self.eeprom[start..end]),
            command::GET_RAM_SETTINGS => buf.copy_from_slice(&self.ram[start..end]),
            _ => return Err(TransportError::other("Unsupported request.")),
        }
        Ok(buf.len())
    }

    fn control_write(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
    ) -> Result<(), TransportError> {
        if !self.connected {
            return Err(Self::disconnected());
        }
        self.requests.push(request);
        let index = usize::from(index);
        match request {
            command::SET_TARGET => {
                self.put_u16(var::TARGET, value);
                self.set_force_mode(ForceMode::None);
                self.clear_halting(ErrorFlags::empty());
            }
            command::STOP_MOTOR => {
                let flags = self.halting() | ErrorFlags::AWAITING_COMMAND;
                self.set_halting(flags);
            }
            command::RUN_MOTOR => self.clear_halting(ErrorFlags::empty()),
            command::FORCE_DUTY_CYCLE_TARGET => {
                self.put_u16(var::DUTY_CYCLE_TARGET, value);
                self.set_force_mode(ForceMode::DutyCycleTarget);
                self.clear_halting(ErrorFlags::empty());
            }
            command::FORCE_DUTY_CYCLE => {
                self.put_u16(var::DUTY_CYCLE, value);
                self.set_force_mode(ForceMode::DutyCycle);
                self.clear_halting(ErrorFlags::empty());
            }
            command::SET_RAM_SETTINGS => {
                self.ram[index..index + data.len()].copy_from_slice(data);
            }
            command::SET_EEPROM_SETTING => {
                self.eeprom[index] = value as u8;
                self.eeprom_writes += 1;
            }
            command::REINITIALIZE => self.reinitialize(),
            command::START_BOOTLOADER => self.connected = false,
            _ => return Err(TransportError::other("Unsupported request.")),
        }
        Ok(())
    }
}
