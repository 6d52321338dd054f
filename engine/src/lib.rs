//! Single-source shortest path solvers and the tooling to benchmark them.
//!
//! The graph model lives in [`datastr::graph`], the two solvers in [`algo`],
//! the repeated timing harness in [`benchmark`] and the structured run reporting in [`report`].

#[macro_use]
pub mod report;
pub mod algo;
pub mod benchmark;
pub mod cli;
pub mod datastr;

pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
