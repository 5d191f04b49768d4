//! Proptest strategies for validation testing.
//!
//! These generate random but reproducible object names, ancestor chains,
//! and field values for property-based tests.

use proptest::prelude::*;
use vet_core::math::Vec3;

/// Generate a scene-node display name.
///
/// Printable, non-empty, no `/` (the path separator).
pub fn arb_node_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_ ]{0,11}"
}

/// Generate a linear ancestor chain of names, root first.
///
/// Length: 1 to `max_depth`.
pub fn arb_chain(max_depth: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(arb_node_name(), 1..=max_depth)
}

/// Generate a vector with small integer-ish components.
pub fn arb_vec3() -> impl Strategy<Value = Vec3> {
    let component = -100i32..100i32;
    (component.clone(), component.clone(), component)
        .prop_map(|(x, y, z)| Vec3::new(x as f32, y as f32, z as f32))
}

/// Generate a vector guaranteed not to be the zero vector.
pub fn arb_nonzero_vec3() -> impl Strategy<Value = Vec3> {
    arb_vec3().prop_filter("vector must be non-zero", |v| *v != Vec3::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_node_names_are_path_safe(name in arb_node_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains('/'));
        }

        #[test]
        fn test_chain_respects_bounds(chain in arb_chain(8)) {
            prop_assert!(!chain.is_empty());
            prop_assert!(chain.len() <= 8);
        }

        #[test]
        fn test_nonzero_vec3_is_nonzero(v in arb_nonzero_vec3()) {
            prop_assert!(v != Vec3::ZERO);
        }
    }
}
