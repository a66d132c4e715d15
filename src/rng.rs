use rand::Rng;

/// An abstract source of random bytes, injected into the CPU so that opcode CXKK is
/// deterministic under test.
pub trait RngSource {
    /// Returns the next random byte.
    fn next_byte(&mut self) -> u8;
}

/// An [RngSource] backed by the thread-local generator from the `rand` crate.  This is the
/// production implementation used by [`crate::Vm::new`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngSource;

impl RngSource for ThreadRngSource {
    fn next_byte(&mut self) -> u8 {
        rand::thread_rng().gen()
    }
}

/// An [RngSource] that replays a fixed, pre-scripted sequence of bytes, cycling back to the
/// start once exhausted.  Intended for tests that need CXKK to behave predictably.
#[derive(Clone, Debug)]
pub struct ScriptedRngSource {
    bytes: Vec<u8>,
    next: usize,
}

impl ScriptedRngSource {
    /// Constructor that returns a [ScriptedRngSource] which will yield the supplied bytes in
    /// order, then repeat from the start.
    ///
    /// # Arguments
    ///
    /// * `bytes` - the sequence of bytes to replay; must not be empty
    pub fn new(bytes: Vec<u8>) -> Self {
        assert!(!bytes.is_empty(), "ScriptedRngSource requires at least one byte");
        ScriptedRngSource { bytes, next: 0 }
    }
}

impl RngSource for ScriptedRngSource {
    fn next_byte(&mut self) -> u8 {
        let value = self.bytes[self.next];
        self.next = (self.next + 1) % self.bytes.len();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_rng_cycles() {
        let mut rng = ScriptedRngSource::new(vec![0x1, 0x2, 0x3]);
        assert_eq!(rng.next_byte(), 0x1);
        assert_eq!(rng.next_byte(), 0x2);
        assert_eq!(rng.next_byte(), 0x3);
        assert_eq!(rng.next_byte(), 0x1);
    }

    #[test]
    fn test_thread_rng_produces_a_byte() {
        let mut rng = ThreadRngSource;
        let _ = rng.next_byte();
    }
}
