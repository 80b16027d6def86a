//! Lint rule implementations.

mod props_order;
mod props_prefer_shorthand;

pub use props_order::PropsOrder;
pub use props_prefer_shorthand::PropsPreferShorthand;
