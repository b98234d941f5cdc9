use opcodec::codec::opcode::JUMP_FORWARD;
use opcodec::{CodecConfig, InterpreterVersion, create_codec, VERSION};

fn main() {
    println!("Opcodec Instruction Codec v{}", VERSION);

    let config = CodecConfig::from_env();
    let version = InterpreterVersion::V3_10;
    let codec = create_codec(version, &config);
    println!("Selected codec for interpreter version {}", version);

    // A small demo stream: a wide load (extension prefix), a plain load, a
    // forward jump over one instruction, and the two units it can land on.
    let mut bytecode = vec![
        0x90, 0x01, 0x7C, 0x00, // wide load, argument 0x0100
        0x64, 0x2A, // plain load
        JUMP_FORWARD, 0x02, // jumps to offset 10
        0x64, 0x01, // skipped load
        0x53, 0x00, // return
    ];

    println!("\nDecoding demo buffer:");
    let mut offset = 0;
    while offset < bytecode.len() {
        let instruction = codec.decode(&bytecode, offset);
        if !instruction.is_valid() {
            eprintln!("Truncated instruction at offset {}", offset);
            return;
        }

        print!(
            "  offset {:>3}: opcode 0x{:02X} argument {} size {}",
            offset, instruction.opcode, instruction.argument, instruction.size
        );
        if codec.is_branch_delta(instruction.opcode) {
            print!(
                " -> branch target {}",
                codec.branch_target(offset as i32, &instruction)
            );
        }
        println!();

        offset += instruction.size;
    }

    // Retarget the jump and write it back in place.
    println!("\nRetargeting the forward jump...");
    let jump_offset = 6;
    let mut jump = codec.decode(&bytecode, jump_offset);
    jump.argument = 0;
    codec.encode(&mut bytecode, jump_offset, &jump);

    let rewritten = codec.decode(&bytecode, jump_offset);
    println!(
        "  offset {:>3}: opcode 0x{:02X} argument {} -> branch target {}",
        jump_offset,
        rewritten.opcode,
        rewritten.argument,
        codec.branch_target(jump_offset as i32, &rewritten)
    );
}
