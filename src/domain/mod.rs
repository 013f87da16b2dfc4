pub mod interface;
pub mod label;
pub mod models;
pub mod remote;
