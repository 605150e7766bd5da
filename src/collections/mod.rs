//! Union-find structures used by the solver

pub use self::dsf::Dsf;
pub use self::flip_dsf::FlipDsf;

mod dsf;
mod flip_dsf;
