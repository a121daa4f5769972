//! Property-based tests for the KS X 1001 mappers and module matrices
//!
//! The production mapper and the reference table scan must agree on every
//! scalar value, and module comparison must locate injected differences.

use crate::ksx1001::{u_ksx1001_int, u_ksx1001_int2, utf8_to_euc_kr, KsxCode};
use crate::modules::{modules_cmp, modules_print, ModuleMatrix, ModulesMismatch};
use encoding_rs::EUC_KR;
use proptest::prelude::*;

/// Random module matrix up to 40x40
fn matrix_strategy() -> impl Strategy<Value = ModuleMatrix> {
    (1usize..40, 1usize..40).prop_flat_map(|(rows, width)| {
        proptest::collection::vec(any::<bool>(), rows * width).prop_map(move |modules| {
            ModuleMatrix::from_modules(rows, width, modules).unwrap()
        })
    })
}

fn fixture(matrix: &ModuleMatrix) -> String {
    modules_print(matrix, "    ", "\n")
}

proptest! {
    #[test]
    fn prop_mappers_agree(u in 0u32..0x1_0000) {
        prop_assert_eq!(u_ksx1001_int(u), u_ksx1001_int2(u), "U+{:04X}", u);
    }

    #[test]
    fn prop_hangul_mappers_agree(u in 0xAC00u32..=0xD7A3) {
        prop_assert_eq!(u_ksx1001_int(u), u_ksx1001_int2(u), "U+{:04X}", u);
    }

    #[test]
    fn prop_ascii_identity(b in 0u8..0x80) {
        prop_assert_eq!(u_ksx1001_int(b as u32), KsxCode::Single(b));
    }

    #[test]
    fn prop_euc_kr_decodes_back(s in "[\u{AC00}-\u{D7A3}A-Za-z0-9 ]{0,20}") {
        match utf8_to_euc_kr(&s) {
            Ok(bytes) => {
                let (decoded, had_errors) = EUC_KR.decode_without_bom_handling(&bytes);
                prop_assert!(!had_errors);
                prop_assert_eq!(decoded, s.as_str());
            }
            Err(e) => {
                let ch = s.chars().nth(e.position - 1).unwrap();
                prop_assert_eq!(ch, e.ch);
                prop_assert_eq!(u_ksx1001_int(ch as u32), KsxCode::Unmappable);
            }
        }
    }

    #[test]
    fn prop_matrix_matches_own_fixture(matrix in matrix_strategy()) {
        prop_assert_eq!(modules_cmp(&matrix, &fixture(&matrix)), Ok(()));
        prop_assert_eq!(ModuleMatrix::parse(&fixture(&matrix)), Ok(matrix));
    }

    #[test]
    fn prop_first_divergence_found(matrix in matrix_strategy(), r in any::<prop::sample::Index>(), c in any::<prop::sample::Index>()) {
        let (row, column) = (r.index(matrix.rows()), c.index(matrix.width()));
        let mut flipped = matrix.clone();
        flipped.set(row, column, !matrix.get(row, column));

        let expected = !matrix.get(row, column);
        prop_assert_eq!(
            modules_cmp(&matrix, &fixture(&flipped)),
            Err(ModulesMismatch::Module { row, column, expected })
        );
        prop_assert_eq!(
            matrix.first_divergence(&flipped).map(|m| m.location()),
            Some((row, column))
        );
    }

    #[test]
    fn prop_width_change_detected(matrix in matrix_strategy()) {
        let mut text = fixture(&matrix);
        // Widen the last row by one module
        text.insert(text.len() - 1, '0');
        let last = matrix.rows() - 1;
        prop_assert_eq!(
            modules_cmp(&matrix, &text),
            Err(ModulesMismatch::Width { row: last, actual: matrix.width(), expected: matrix.width() + 1 })
        );
    }
}
