use byteorder::{ByteOrder, LittleEndian};
use rustc_hash::FxHashSet;

use crate::codec::opcode;
use crate::codec::{BytecodeCodec, Instruction};
use crate::version::InterpreterVersion;

/// Fixed-width codec for older hosts: an instruction is a single opcode
/// byte, followed by a 16-bit little-endian argument when the opcode
/// carries one.
pub struct LegacyCodec {
    branch_delta: FxHashSet<u8>,
}

impl LegacyCodec {
    pub fn new(version: InterpreterVersion) -> Self {
        Self {
            branch_delta: opcode::branch_delta_opcodes(version),
        }
    }
}

impl BytecodeCodec for LegacyCodec {
    fn decode(&self, bytecode: &[u8], offset: usize) -> Instruction {
        if offset >= bytecode.len() {
            return Instruction::invalid();
        }

        let opcode = bytecode[offset];
        if !self.has_argument(opcode) {
            return Instruction::new(opcode, 0, 1);
        }

        if offset + 3 > bytecode.len() {
            return Instruction::invalid();
        }

        let argument = LittleEndian::read_u16(&bytecode[offset + 1..offset + 3]);
        Instruction::new(opcode, argument as i32, 3)
    }

    fn encode(&self, bytecode: &mut [u8], offset: usize, instruction: &Instruction) {
        bytecode[offset] = instruction.opcode;

        if self.has_argument(instruction.opcode) {
            LittleEndian::write_u16(
                &mut bytecode[offset + 1..offset + 3],
                instruction.argument as u16,
            );
        }
    }

    fn has_argument(&self, opcode: u8) -> bool {
        opcode::has_argument(opcode)
    }

    fn is_branch_delta(&self, opcode: u8) -> bool {
        self.branch_delta.contains(&opcode)
    }
}
