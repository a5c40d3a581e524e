mod clip_line;
pub mod subtract;
pub mod transform;

pub use clip_line::ClipByLine;
pub use subtract::{subtract_triangle, EdgeCounts, Encounter, RankedSide, Situation, Subtract};
pub use transform::{GeneralTransform, Mirror, Rotate, Scale, Translate};
