//! Request dispatch

pub mod ports;

pub use ports::Dispatcher;
