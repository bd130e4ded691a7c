// src/lib.rs — Library root for sdqr

pub mod cli;
pub mod infra;
pub mod relay;
pub mod util;
