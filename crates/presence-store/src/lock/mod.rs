//! Per-user lock arena

mod keyed;

pub use keyed::KeyedLocks;
