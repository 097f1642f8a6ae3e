//! Embedded seed word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/answer_seeds.rs"));
include!(concat!(env!("OUT_DIR"), "/guess_seeds.rs"));
