// Application layer - Wiring of ports to adapters

pub mod container;

pub use container::Toolchain;
