pub mod aggregate;

pub use aggregate::{CategoryDescriptor, ServiceCategory};
