// Opcodec - A versioned instruction codec for stack-machine bytecode rewriting

pub mod codec;
pub mod config;
pub mod version;

pub use codec::{BytecodeCodec, Instruction, LegacyCodec, WordCodec, create_codec};
pub use config::CodecConfig;
pub use version::{InterpreterVersion, VersionError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
