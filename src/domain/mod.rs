pub mod catalog;
pub mod credentials;
pub mod order;
pub mod ports;
