use log::{debug, info};

use crate::cpu::Cpu;
use crate::error::ChipError;
use crate::font::{FONT_DATA, FONT_START_ADDRESS};
use crate::framebuffer::Framebuffer;
use crate::keypad::Keypad;
use crate::memory::{Memory, MEMORY_SIZE_BYTES};
use crate::rng::{RngSource, ThreadRngSource};
use crate::timer::Timer;

/// The rate, in Hz, at which the CPU executes instructions on a real COSMAC VIP-class machine.
pub const DEFAULT_CPU_HZ: u32 = 700;
/// The rate, in Hz, at which the delay and sound timers count down. Fixed by the CHIP-8
/// specification, but still exposed as a constant rather than hard-coded inline.
pub const DEFAULT_TIMER_HZ: u32 = 60;
/// The memory address at which ROMs are conventionally loaded.
pub const DEFAULT_PROGRAM_START_ADDRESS: u16 = 0x200;

/// Construction-time configuration for a [Vm].
///
/// There is no file, environment-variable or CLI surface for these values - a host that wants
/// non-default behaviour sets the fields directly before calling [`Vm::with_options`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// The rate, in Hz, at which CPU cycles are executed.
    pub cpu_hz: u32,
    /// The rate, in Hz, at which the delay and sound timers tick down.
    pub timer_hz: u32,
    /// The memory address at which [`Vm::load_rom`] writes ROM bytes.
    pub program_start_address: u16,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            cpu_hz: DEFAULT_CPU_HZ,
            timer_hz: DEFAULT_TIMER_HZ,
            program_start_address: DEFAULT_PROGRAM_START_ADDRESS,
        }
    }
}

/// The composite CHIP-8 virtual machine: owns memory, framebuffer, keypad, the two timers and
/// the CPU, and drives them from a single external time source via [`Vm::step`].
pub struct Vm {
    memory: Memory,
    framebuffer: Framebuffer,
    keypad: Keypad,
    delay_timer: Timer,
    sound_timer: Timer,
    cpu: Cpu,
    rng: Box<dyn RngSource>,
    options: Options,
    cpu_accumulator: f64,
    timer_accumulator: f64,
    paused: bool,
}

impl Default for Vm {
    fn default() -> Self {
        Vm::with_options(Options::default())
    }
}

impl Vm {
    /// Constructor that returns a [Vm] with default [Options] and a thread-local RNG source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructor that returns a [Vm] configured per the supplied [Options].
    pub fn with_options(options: Options) -> Self {
        let mut vm = Vm {
            memory: Memory::new(),
            framebuffer: Framebuffer::new(),
            keypad: Keypad::new(),
            delay_timer: Timer::new(),
            sound_timer: Timer::new(),
            cpu: Cpu::new(options.program_start_address),
            rng: Box::new(ThreadRngSource),
            options,
            cpu_accumulator: 0.0,
            timer_accumulator: 0.0,
            paused: false,
        };
        vm.load_font();
        vm
    }

    /// Replaces the VM's random number source. Intended for hosts (and tests) that need CXKK
    /// to behave deterministically; see [`crate::rng::ScriptedRngSource`].
    pub fn set_rng_source(&mut self, rng: Box<dyn RngSource>) {
        self.rng = rng;
    }

    fn load_font(&mut self) {
        self.memory
            .write_bytes(FONT_START_ADDRESS, &FONT_DATA)
            .expect("font table is a fixed size known to fit in memory");
    }

    /// Restores the VM to its just-constructed state: zeroed memory (with the font reloaded),
    /// zeroed registers and stack, a blank display, both timers at zero, and the program
    /// counter at `program_start_address`.
    pub fn reset(&mut self) {
        self.memory.clear();
        self.framebuffer.clear();
        self.keypad = Keypad::new();
        self.delay_timer = Timer::new();
        self.sound_timer = Timer::new();
        self.cpu.reset();
        self.cpu_accumulator = 0.0;
        self.timer_accumulator = 0.0;
        self.load_font();
        info!("VM reset");
    }

    /// Loads `rom` into memory starting at `options.program_start_address`. Fails with
    /// [ChipError::RomTooLarge] if the ROM would not fit below the top of memory.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), ChipError> {
        let start = self.options.program_start_address;
        if start as usize + rom.len() > MEMORY_SIZE_BYTES {
            return Err(ChipError::RomTooLarge { size: rom.len() });
        }
        self.memory.write_bytes(start, rom)?;
        info!("loaded ROM of {} bytes at {:#06X}", rom.len(), start);
        Ok(())
    }

    /// Advances the VM by `delta_seconds` of wall-clock time: runs as many CPU cycles and
    /// timer ticks as the configured rates dictate, stopping early and returning the first
    /// error encountered (if any) without attempting further cycles in this call.
    ///
    /// Does nothing while [`Vm::pause`]d.
    pub fn step(&mut self, delta_seconds: f64) -> Result<(), ChipError> {
        if self.paused {
            return Ok(());
        }
        let cpu_period = 1.0 / self.options.cpu_hz as f64;
        let timer_period = 1.0 / self.options.timer_hz as f64;
        self.cpu_accumulator += delta_seconds;
        self.timer_accumulator += delta_seconds;

        while self.cpu_accumulator >= cpu_period {
            self.cpu_accumulator -= cpu_period;
            if let Err(err) = self.cpu.cycle(
                &mut self.memory,
                &mut self.framebuffer,
                &mut self.keypad,
                &mut self.delay_timer,
                &mut self.sound_timer,
                self.rng.as_mut(),
            ) {
                debug!("step halted: {}", err);
                return Err(err);
            }
        }
        while self.timer_accumulator >= timer_period {
            self.timer_accumulator -= timer_period;
            self.delay_timer.tick();
            self.sound_timer.tick();
        }
        Ok(())
    }

    /// Pauses [`Vm::step`]; subsequent calls are no-ops until [`Vm::resume`].
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resumes a [`Vm::pause`]d VM.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Returns whether the VM is currently paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns a reference to the framebuffer, for hosts to render.
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Returns a mutable reference to the keypad, for hosts to report key events.
    pub fn keypad_mut(&mut self) -> &mut Keypad {
        &mut self.keypad
    }

    /// Returns the sound timer's current value; hosts use this to gate audio playback.
    pub fn sound_timer_value(&self) -> u8 {
        self.sound_timer.get()
    }

    /// Returns the delay timer's current value.
    pub fn delay_timer_value(&self) -> u8 {
        self.delay_timer.get()
    }
}
