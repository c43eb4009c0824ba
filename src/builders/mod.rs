//! Builders to construct a [`Pool`](crate::core::Pool) from configuration.

pub mod pool_builder;

pub use pool_builder::PoolBuilder;
