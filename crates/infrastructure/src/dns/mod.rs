pub mod wire;

pub use wire::WireResponseDecoder;
