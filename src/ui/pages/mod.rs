pub mod home;
pub mod unit_detail;
pub mod units;

pub use home::HomePage;
pub use unit_detail::UnitDetailPage;
pub use units::UnitsPage;
