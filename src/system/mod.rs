pub mod collector;
pub mod network;
pub mod sysfs;
