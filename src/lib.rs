// lib.rs - 库函数

pub mod adapters;
pub mod classify;
pub mod dna;
pub mod driver;
pub mod io;
pub mod record;

pub use adapters::Adapters;
pub use classify::{classify, TrimDecision};
pub use dna::reverse_complement;
pub use driver::{run, RunStats};
pub use record::{ReadRecord, TrimmedRead};
