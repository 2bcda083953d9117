mod detector;
mod feedback;
mod ui;

pub use detector::RxingStillImageDetector;
pub use feedback::LoggingHaptics;
pub use ui::HeadlessScannerUi;
