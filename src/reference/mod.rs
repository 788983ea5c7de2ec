//! Reference data consumed by the soil engine.
//!
//! Crop requirement rows and the crop/region catalogue. Both are read-only
//! once built and can be shared across requests without locking.

pub mod catalog;
mod requirements;

pub use requirements::{
    default_requirement, CropRequirement, RequirementError, RequirementSource,
    RequirementTable, ResolvedRequirement, MAX_REQUIRED_KG_HA,
};
