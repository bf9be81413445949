//! Tolerances shared by the kernel.
//!
//! Policy
//! - One immutable `GeomCfg` is built at startup (defaults or a config file)
//!   and passed by value to every entry point that needs a tolerance.
//! - Defaults are in map units, tuned for level geometry where a unit is
//!   roughly an inch. Unit-scale callers should pass tighter values.
//! - `point_equal_eps` and `zero_tri_area_eps` are deliberately separate knobs
//!   even though they share a default.

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeomCfg {
    /// Edges shorter than this contribute no edge plane; also the slack by
    /// which a point may sit outside an edge plane and still count as inside.
    pub point_equal_eps: f64,
    /// Fan triangles with less area than this cannot define a face normal.
    pub zero_tri_area_eps: f64,
    /// On-plane band used by the winding splitter.
    pub on_eps: f64,
    /// Component-wise slack for point equality and AABB overlap.
    pub equal_eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            point_equal_eps: 0.05,
            zero_tri_area_eps: 0.05,
            on_eps: 0.1,
            equal_eps: 0.001,
        }
    }
}

impl GeomCfg {
    /// Uniformly scaled tolerances, handy for unit-scale geometry.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            point_equal_eps: self.point_equal_eps * factor,
            zero_tri_area_eps: self.zero_tri_area_eps * factor * factor,
            on_eps: self.on_eps * factor,
            equal_eps: self.equal_eps * factor,
        }
    }
}
