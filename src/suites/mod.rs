//! Built-in test suites run by the `zedcheck` binary

pub mod ksx1001;
pub mod qr;

use crate::runner::TestFunction;

/// Every registered test function, in run order.
pub fn all() -> Vec<TestFunction> {
    ksx1001::FUNCS.iter().chain(qr::FUNCS.iter()).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique() {
        let funcs = all();
        let names: HashSet<_> = funcs.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), funcs.len());
        assert!(names.contains("test_u_ksx1001_int"));
        assert!(names.contains("test_encode"));
    }
}
