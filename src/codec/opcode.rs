//! Opcode constants and classification tables for the host instruction set.
//!
//! Numeric values track the host interpreter's published opcode map. Only
//! the opcodes the codec itself must recognize are named here: the
//! extension prefix, the argument-classification boundary, and the
//! control-flow opcodes whose arguments are relative deltas.

use rustc_hash::FxHashSet;

use crate::version::InterpreterVersion;

/// Reserved prefix opcode: the current 2-byte unit contributes the
/// next-most-significant 8 bits of the following instruction's argument.
pub const EXTENDED_ARG: u8 = 0x90;

/// Opcodes at or above this value carry an argument.
pub const HAVE_ARGUMENT: u8 = 90;

// Control-flow opcodes with relative (delta) arguments.
pub const FOR_ITER: u8 = 93;
pub const JUMP_FORWARD: u8 = 110;
pub const SETUP_LOOP: u8 = 120;    // removed in 3.8
pub const SETUP_EXCEPT: u8 = 121;  // removed in 3.8
pub const SETUP_FINALLY: u8 = 122;
pub const SETUP_WITH: u8 = 143;
pub const CALL_FINALLY: u8 = 162;  // added in 3.8, removed in 3.9

/// Whether `opcode` carries an argument. The boundary is stable across the
/// version families this codec supports.
pub fn has_argument(opcode: u8) -> bool {
    opcode >= HAVE_ARGUMENT
}

/// Build the set of opcodes whose argument is a branch delta under
/// `version`'s rules. Opcodes enter and leave this set across releases, so
/// membership is fixed per codec instance at construction time.
pub fn branch_delta_opcodes(version: InterpreterVersion) -> FxHashSet<u8> {
    let mut opcodes: FxHashSet<u8> =
        [FOR_ITER, JUMP_FORWARD, SETUP_FINALLY, SETUP_WITH].into_iter().collect();

    if version < InterpreterVersion::V3_8 {
        opcodes.insert(SETUP_LOOP);
        opcodes.insert(SETUP_EXCEPT);
    }
    if version >= InterpreterVersion::V3_8 && version < InterpreterVersion::V3_9 {
        opcodes.insert(CALL_FINALLY);
    }

    opcodes
}
