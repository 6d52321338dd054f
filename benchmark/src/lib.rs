#[macro_use]
extern crate sssp_engine;

pub mod experiments;
pub mod io;
pub mod util;
