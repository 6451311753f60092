//! Label value objects
//!
//! Immutable inputs constructed fresh per render pass from host data.

mod data;
mod policy;
mod rda;
mod value;

pub use data::{CustomNutrient, FoodLabelData, LabelDataSource};
pub use policy::DisplayPolicy;
pub use rda::{CustomRdaValues, RdaReference};
pub use value::NutrientValue;
