//! Built-in reference ramps.
//!
//! The Matplotlib ramps are reduced to five stops (at 0, ¼, ½, ¾ and
//! 1); sampling them interpolates linearly in RGB in between.

use lazy_static::lazy_static;

mod ty;
use ty::RampData;
pub use ty::RampType;

lazy_static! {
    pub(crate) static ref VIRIDIS: RampData = RampData::from_fractions(RampType::Seq, &[
        [0.267004, 0.004874, 0.329415],
        [0.229739, 0.322361, 0.545706],
        [0.127568, 0.566949, 0.550556],
        [0.369214, 0.788888, 0.382914],
        [0.993248, 0.906157, 0.143936],
    ]);

    pub(crate) static ref MAGMA: RampData = RampData::from_fractions(RampType::Seq, &[
        [0.001462, 0.000466, 0.013866],
        [0.316654, 0.071690, 0.485380],
        [0.716387, 0.214982, 0.475290],
        [0.986700, 0.535582, 0.382210],
        [0.987053, 0.991438, 0.749504],
    ]);

    pub(crate) static ref INFERNO: RampData = RampData::from_fractions(RampType::Seq, &[
        [0.001462, 0.000466, 0.013866],
        [0.341500, 0.062325, 0.429425],
        [0.735683, 0.215906, 0.330245],
        [0.978422, 0.557937, 0.034931],
        [0.988362, 0.998364, 0.644924],
    ]);

    pub(crate) static ref PLASMA: RampData = RampData::from_fractions(RampType::Seq, &[
        [0.050383, 0.029803, 0.527975],
        [0.494877, 0.011990, 0.657865],
        [0.798216, 0.280197, 0.469538],
        [0.973416, 0.585761, 0.251540],
        [0.940015, 0.975158, 0.131326],
    ]);

    /// Moreland's diverging blue–red ramp.
    pub(crate) static ref COOLWARM: RampData = RampData::from_fractions(RampType::Div, &[
        [0.229806, 0.298718, 0.753683],
        [0.865003, 0.865003, 0.865003],
        [0.705673, 0.015556, 0.150233],
    ]);

    pub(crate) static ref GREYS: RampData = RampData::from_fractions(RampType::Seq, &[
        [0., 0., 0.],
        [1., 1., 1.],
    ]);

    pub(crate) static ref ALL_RAMPS: Vec<(&'static str, &'static RampData)> = vec![
        ("viridis", &*VIRIDIS),
        ("magma", &*MAGMA),
        ("inferno", &*INFERNO),
        ("plasma", &*PLASMA),
        ("coolwarm", &*COOLWARM),
        ("greys", &*GREYS),
    ];
}

pub(crate) fn lookup(name: &str) -> Option<&'static RampData> {
    ALL_RAMPS.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|(_, d)| *d)
}
