pub mod catalog;
pub mod provider;
pub mod relay;
