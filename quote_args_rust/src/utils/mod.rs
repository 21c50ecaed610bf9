pub mod number_conversion;
pub mod slippage;
mod uint;

pub use uint::mul_div;
