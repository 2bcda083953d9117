use std::path::PathBuf;

/// Per-user application directories, as resolved by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_dirs_is_pure_fact_container() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/barcode-copier"),
        };
        assert!(dirs.app_data_root.ends_with("barcode-copier"));
    }
}
