mod file;
mod schedule;
mod slab;

pub use self::{schedule::TariffSchedule, slab::TariffSlab};

/// Low-rate bands, charged telescopically up to 250 units.
pub const TELESCOPIC_SLABS: [TariffSlab; 5] = [
    TariffSlab::bounded(0.0, 50.0, 3.35),
    TariffSlab::bounded(51.0, 100.0, 4.25),
    TariffSlab::bounded(101.0, 150.0, 5.35),
    TariffSlab::bounded(151.0, 200.0, 7.2),
    TariffSlab::bounded(201.0, 250.0, 8.5),
];

/// Higher-rate bands: all units at the rate of the band containing the total.
pub const NON_TELESCOPIC_SLABS: [TariffSlab; 5] = [
    TariffSlab::bounded(0.0, 300.0, 6.75),
    TariffSlab::bounded(301.0, 350.0, 7.6),
    TariffSlab::bounded(351.0, 400.0, 7.95),
    TariffSlab::bounded(401.0, 500.0, 8.25),
    TariffSlab::unbounded(501.0, 9.2),
];

/// KSEB progressive bands for today's cost and the monthly projection:
/// first 300 units, next 50, next 50, next 100, and the rest.
pub const PROGRESSIVE_SLABS: [TariffSlab; 5] = [
    TariffSlab::bounded(0.0, 299.0, 6.40),
    TariffSlab::bounded(300.0, 349.0, 7.25),
    TariffSlab::bounded(350.0, 399.0, 7.60),
    TariffSlab::bounded(400.0, 499.0, 7.90),
    TariffSlab::unbounded(500.0, 8.80),
];

/// Weekly summary estimate. Same bands as [`PROGRESSIVE_SLABS`], kept separate so either can be
/// overridden on its own.
pub const WEEKLY_SLABS: [TariffSlab; 5] = PROGRESSIVE_SLABS;

/// All rate schedules in use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tariffs {
    pub telescopic: TariffSchedule,
    pub non_telescopic: TariffSchedule,
    pub progressive: TariffSchedule,
    pub weekly: TariffSchedule,
}

impl Default for Tariffs {
    fn default() -> Self {
        Self {
            telescopic: TariffSchedule::from_static(&TELESCOPIC_SLABS),
            non_telescopic: TariffSchedule::from_static(&NON_TELESCOPIC_SLABS),
            progressive: TariffSchedule::from_static(&PROGRESSIVE_SLABS),
            weekly: TariffSchedule::from_static(&WEEKLY_SLABS),
        }
    }
}
