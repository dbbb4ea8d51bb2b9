//! OBJ text encoding and decoding.

mod decode;
mod encode;

pub use decode::{decode_obj, DecodeStats, LibraryLoader, LoadedLibrary};
pub use encode::{encode_obj, EncodeStats};
