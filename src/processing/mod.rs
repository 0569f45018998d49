//! Network calculations built on the models.
//!
//! - [`split`] - Splitting a network into equal subnets
//! - [`reserved`] - Private and loopback reference networks

pub mod reserved;
pub mod split;

// Re-export public items
pub use reserved::{is_loopback, is_private, LOOPBACK, PRIVATE_A, PRIVATE_B, PRIVATE_C};
pub use split::{extra_mask_bits, split_network};
