//! Prelude for the fxtend toolkit
//!
//! Re-exports the container types, error taxonomy and collection helpers so
//! call sites can pull everything in with a single `use fxtend::prelude::*`.

pub use crate::builder::{build_with, FluentBuilder};
pub use crate::collections::{
    concat, filter, filter_mut, filter_then_apply, group_by, keys, map_apply, reverse_map,
    reverse_map_override, to_map, to_map_fn, to_map_override, to_map_override_fn, values,
};
pub use crate::error::{FxError, FxResult};
pub use crate::optional::Optional;
pub use crate::outcome::{flat_map_err, flat_map_err_ctx, Outcome};
pub use crate::signal::Signal;
