//! gaussian-modes prelude.
//!
//! This module contains the most used types, type aliases, traits and
//! functions that you can import easily as a group.
//!

#[doc(no_inline)]
pub use crate::error::{Error, ParamsError, Result};

#[doc(no_inline)]
pub use crate::traits::*;

#[doc(no_inline)]
pub use crate::param_guard::ParamGuard;

#[doc(no_inline)]
pub use crate::covariance::Variance;

#[doc(no_inline)]
pub use crate::placement::{
    CircularDataset, CircularParams, GridDataset, GridParams, SpiralDataset, SpiralParams,
};

#[doc(no_inline)]
pub use crate::{circular_dataset, grid_dataset, spiral_dataset};
