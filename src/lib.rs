//! A CHIP-8 interpreter core: memory, CPU, framebuffer, keypad and timers, with no
//! dependency on any particular windowing, audio or input library. Hosts drive the VM by
//! calling [`Vm::step`] from their own render loop and polling [`Vm::framebuffer`] and
//! [`Vm::sound_timer_value`] in between.

mod cpu;
mod error;
mod font;
mod framebuffer;
mod instruction;
mod keypad;
mod memory;
mod rng;
mod timer;
mod vm;

pub use crate::error::ChipError;
pub use crate::framebuffer::{Framebuffer, HEIGHT, WIDTH};
pub use crate::keypad::Keypad;
pub use crate::memory::{Memory, MEMORY_SIZE_BYTES};
pub use crate::rng::{RngSource, ScriptedRngSource, ThreadRngSource};
pub use crate::timer::Timer;
pub use crate::vm::{
    Options, Vm, DEFAULT_CPU_HZ, DEFAULT_PROGRAM_START_ADDRESS, DEFAULT_TIMER_HZ,
};
