pub mod copy_from_history;
pub mod import_photo_scan;
pub mod intake_scan;

pub use copy_from_history::CopyFromHistory;
pub use import_photo_scan::ImportPhotoScan;
pub use intake_scan::IntakeScan;
