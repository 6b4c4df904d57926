/// Precision factor of fixed-point weights: one percent is this many units.
pub const WEIGHT_PRECISION_FACTOR: i32 = 100;

/// Full allocation of a classification or assignment (basis points: 10000 = 100%).
pub const ONE_HUNDRED_PERCENT: i32 = 100 * WEIGHT_PRECISION_FACTOR;

/// Id of the synthetic classification that collects unclassified vehicles.
pub const UNASSIGNED_ID: &str = "$unassigned$";

/// Separator between classification names in a rendered path.
pub const PATH_SEPARATOR: &str = " » ";

/// Marker inserted where a length-limited path omits names.
pub const PATH_ELLIPSIS: &str = " ... ";
