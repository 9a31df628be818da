pub mod child;
pub mod levels;
pub mod visit;

pub use child::{Child, Sex};
pub use levels::{NutritionLevel, RiskLevel};
pub use visit::Visit;
