//! Files written by the generator.

mod cmake_lists;

pub use cmake_lists::{CmakeLists, FILE_NAME};
