/// The number of keys on the CHIP-8 hex keypad.
const NUMBER_OF_KEYS: usize = 16;

/// An abstraction of the state of the CHIP-8 hex keypad.
///
/// Holds two snapshots: `current`, which the host writes as keys are pressed and released,
/// and `previous`, which the VM captures once per CPU cycle. A key is considered "released
/// this cycle" if it was pressed in `previous` and is no longer pressed in `current` - this
/// is the edge FX0A waits for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keypad {
    current: [bool; NUMBER_OF_KEYS],
    previous: [bool; NUMBER_OF_KEYS],
}

impl Default for Keypad {
    fn default() -> Self {
        Keypad {
            current: [false; NUMBER_OF_KEYS],
            previous: [false; NUMBER_OF_KEYS],
        }
    }
}

impl Keypad {
    /// Constructor that returns a [Keypad] instance with no keys pressed.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Sets the pressed state of the specified key.  Keys outside the valid 0x0-0xF range
    /// are silently ignored, since a host may map physical keys that do not correspond to a
    /// CHIP-8 key ordinal.
    ///
    /// # Arguments
    ///
    /// * `key` - the hex ordinal of the key (valid range 0x0 to 0xF inclusive)
    /// * `pressed` - whether the key is now pressed
    pub fn set(&mut self, key: u8, pressed: bool) {
        if let Some(slot) = self.current.get_mut(key as usize) {
            *slot = pressed;
        }
    }

    /// Returns whether the specified key is currently pressed.  Keys outside the valid range
    /// are treated as not pressed.
    ///
    /// # Arguments
    ///
    /// * `key` - the hex ordinal of the key (valid range 0x0 to 0xF inclusive)
    pub fn is_pressed(&self, key: u8) -> bool {
        self.current.get(key as usize).copied().unwrap_or(false)
    }

    /// Returns whether the specified key was pressed as of the last snapshot and is no longer
    /// pressed now - i.e. it was released during the current cycle.
    ///
    /// # Arguments
    ///
    /// * `key` - the hex ordinal of the key (valid range 0x0 to 0xF inclusive)
    pub(crate) fn was_released(&self, key: u8) -> bool {
        let idx = key as usize;
        match (self.previous.get(idx), self.current.get(idx)) {
            (Some(&was_pressed), Some(&is_pressed)) => was_pressed && !is_pressed,
            _ => false,
        }
    }

    /// Returns the hex ordinal of the first key found to have been released during the
    /// current cycle, if any.
    pub(crate) fn first_released(&self) -> Option<u8> {
        (0..NUMBER_OF_KEYS as u8).find(|&key| self.was_released(key))
    }

    /// Copies `current` into `previous`, establishing the baseline against which the next
    /// cycle's release detection is measured.  Called exactly once per CPU cycle, after the
    /// cycle's opcode has executed.
    pub(crate) fn snapshot(&mut self) {
        self.previous = self.current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pressed() {
        let mut keypad = Keypad::new();
        keypad.set(0x2, true);
        assert!(keypad.is_pressed(0x2));
        assert!(!keypad.is_pressed(0x3));
    }

    #[test]
    fn test_set_out_of_range_is_ignored() {
        let mut keypad = Keypad::new();
        keypad.set(0x20, true);
        assert!(!keypad.is_pressed(0x20));
    }

    #[test]
    fn test_was_released_requires_prior_press() {
        let mut keypad = Keypad::new();
        keypad.set(0x5, true);
        keypad.snapshot();
        keypad.set(0x5, false);
        assert!(keypad.was_released(0x5));
    }

    #[test]
    fn test_was_released_false_if_still_pressed() {
        let mut keypad = Keypad::new();
        keypad.set(0x5, true);
        keypad.snapshot();
        assert!(!keypad.was_released(0x5));
    }

    #[test]
    fn test_was_released_false_if_never_pressed() {
        let keypad = Keypad::new();
        assert!(!keypad.was_released(0x5));
    }

    #[test]
    fn test_first_released() {
        let mut keypad = Keypad::new();
        keypad.set(0x2, true);
        keypad.set(0x7, true);
        keypad.snapshot();
        keypad.set(0x2, false);
        assert_eq!(keypad.first_released(), Some(0x2));
    }

    #[test]
    fn test_first_released_none() {
        let keypad = Keypad::new();
        assert_eq!(keypad.first_released(), None);
    }
}
