mod factory;
mod instruction;
mod legacy;
mod wordcode;

pub mod opcode;

pub use factory::create_codec;
pub use instruction::Instruction;
pub use legacy::LegacyCodec;
pub use wordcode::WordCodec;

/// One concrete set of encoding rules for a host-interpreter version family.
///
/// Implementations are stateless: every method is a pure transformation over
/// the caller-owned buffer, so a single codec handle may be shared freely
/// across threads. Callers mutating a buffer through `encode` must serialize
/// access themselves; the codec provides no atomicity across a
/// decode/patch/encode cycle.
pub trait BytecodeCodec: Send + Sync {
    /// Decode the instruction starting at `offset`.
    ///
    /// Returns the invalid sentinel (`size == 0`) when too few bytes remain
    /// to decode a complete instruction; callers must check
    /// [`Instruction::is_valid`] before trusting the result.
    fn decode(&self, bytecode: &[u8], offset: usize) -> Instruction;

    /// Encode `instruction` into the buffer starting at `offset`, writing
    /// exactly `instruction.size` bytes.
    ///
    /// The caller guarantees the buffer holds at least
    /// `offset + instruction.size` bytes; a shorter buffer is out of
    /// contract and panics on the slice index.
    fn encode(&self, bytecode: &mut [u8], offset: usize, instruction: &Instruction);

    /// Whether `opcode` carries an argument under this version's rules.
    fn has_argument(&self, opcode: u8) -> bool;

    /// Whether `opcode`'s argument is a relative offset measured from the
    /// end of the instruction, rather than an absolute target.
    fn is_branch_delta(&self, opcode: u8) -> bool;

    /// Absolute target address of a control-flow instruction located at
    /// `offset`. Pure arithmetic; the caller validates the result against
    /// the buffer before indexing with it.
    fn branch_target(&self, offset: i32, instruction: &Instruction) -> i32 {
        if self.is_branch_delta(instruction.opcode) {
            offset + instruction.size as i32 + instruction.argument
        } else {
            instruction.argument
        }
    }
}
