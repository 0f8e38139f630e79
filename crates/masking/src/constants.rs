/// Binarization threshold on the channel average. Fixed, not configurable.
pub const BINARIZE_THRESHOLD: u8 = 127;

/// Curve flattening tolerance in output pixels.
pub const CURVE_TOLERANCE: f32 = 0.25;

/// Recursion cap for curve subdivision.
pub const MAX_FLATTEN_DEPTH: u32 = 16;

/// Dab spacing as a fraction of the brush radius.
pub const DAB_SPACING: f32 = 0.25;

/// Lower bound on dab spacing in output pixels.
pub const MIN_DAB_SPACING: f32 = 0.25;
