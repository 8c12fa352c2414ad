//! Frame-sink contract and the scripted one-cycle capture driver.

pub mod sink;
