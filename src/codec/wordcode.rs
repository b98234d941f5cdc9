use rustc_hash::FxHashSet;

use crate::codec::opcode::{self, EXTENDED_ARG};
use crate::codec::{BytecodeCodec, Instruction};
use crate::version::InterpreterVersion;

/// Variable-width codec for interpreters that encode every instruction as
/// 2-byte (opcode, argument) units.
///
/// Arguments wider than 8 bits are carried by a chain of `EXTENDED_ARG`
/// prefix units, each contributing the next-most-significant byte in
/// big-endian order. The chain length is part of the instruction's `size`,
/// so a decoded instruction re-encodes to exactly the bytes it came from.
pub struct WordCodec {
    branch_delta: FxHashSet<u8>,
}

impl WordCodec {
    pub fn new(version: InterpreterVersion) -> Self {
        Self {
            branch_delta: opcode::branch_delta_opcodes(version),
        }
    }
}

impl BytecodeCodec for WordCodec {
    fn decode(&self, bytecode: &[u8], offset: usize) -> Instruction {
        if bytecode.len().saturating_sub(offset) < 2 {
            return Instruction::invalid();
        }

        let mut pos = offset;
        let mut argument: u32 = 0;
        let mut size = 0;

        // Fold in extension prefixes until the real opcode is reached.
        while bytecode[pos] == EXTENDED_ARG {
            argument = (argument << 8) | bytecode[pos + 1] as u32;
            pos += 2;
            size += 2;

            if bytecode.len().saturating_sub(pos) < 2 {
                return Instruction::invalid();
            }
        }

        argument = (argument << 8) | bytecode[pos + 1] as u32;
        size += 2;

        Instruction::new(bytecode[pos], argument as i32, size)
    }

    fn encode(&self, bytecode: &mut [u8], offset: usize, instruction: &Instruction) {
        // Write units back-to-front: the last unit carries the real opcode
        // and the low byte, every earlier unit an EXTENDED_ARG prefix and
        // the next byte up.
        let mut argument = instruction.argument as u32;
        let mut pos = instruction.size;
        let mut written = 0;

        while pos >= 2 {
            pos -= 2;
            bytecode[offset + pos] = if written == 0 {
                instruction.opcode
            } else {
                EXTENDED_ARG
            };
            bytecode[offset + pos + 1] = argument as u8;
            argument >>= 8;
            written += 2;
        }
    }

    fn has_argument(&self, opcode: u8) -> bool {
        opcode::has_argument(opcode)
    }

    fn is_branch_delta(&self, opcode: u8) -> bool {
        self.branch_delta.contains(&opcode)
    }
}
