//! 🍇欢迎光临🍓
//!
//! 涵盖了本 crate 一系列常用的功能.

pub use crate::{ClassId, Idx3d, Label};

pub use crate::priors::{ColumnLengthMismatch, PriorRecord, PriorTable};

pub use crate::reorg::{self, Bucket, FallbackRule, ReorgError, ReorgSummary, SidednessPolicy};

pub use crate::data::{save_slice_vis, MriVolume, VisWindow, VolumeStats};

pub use crate::consts::fs_label;

pub use crate::dataset::{self, home_priors_dir, home_priors_dir_with};
