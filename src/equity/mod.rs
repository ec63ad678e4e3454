//! Win-rate estimation.
//!
//! An [`Estimator`] blends a static [`Table`] prior with a Monte Carlo
//! sampled rate and discounts by [`Position`]. Board [`Texture`] is always
//! classified and, depending on [`Blend`], may dampen the result.
pub mod estimator;
pub use estimator::*;

pub mod position;
pub use position::*;

pub mod table;
pub use table::*;

pub mod texture;
pub use texture::*;
