mod classification;
mod components;
mod estimation;
mod landing;
mod regression;
mod rmse;

pub use classification::ClassificationView;
pub use estimation::EstimationStationView;
pub use landing::LandingView;
pub use regression::RegressionView;
pub use rmse::RmseTutorialView;

#[cfg(test)]
pub(crate) mod test_harness;
#[cfg(test)]
mod view_smoke;
