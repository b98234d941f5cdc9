/// A single decoded bytecode instruction.
///
/// Values are transient: produced by a decode call, optionally retargeted by
/// the caller, and consumed by an encode call. The codec keeps no state
/// between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Operation-identifying byte.
    pub opcode: u8,
    /// Argument value. Logically unsigned, reconstructed from big-endian
    /// ordered extension chunks; stored in a signed container so branch
    /// deltas can be added without casts at every call site.
    pub argument: i32,
    /// Encoded width in bytes, including any extension prefixes consumed
    /// during decode. Zero marks the invalid sentinel.
    pub size: usize,
}

impl Instruction {
    pub fn new(opcode: u8, argument: i32, size: usize) -> Self {
        Self { opcode, argument, size }
    }

    /// The zero sentinel returned for malformed (truncated) input.
    pub const fn invalid() -> Self {
        Self { opcode: 0, argument: 0, size: 0 }
    }

    /// A decode result is only trustworthy when this returns true.
    pub fn is_valid(&self) -> bool {
        self.size != 0
    }
}
