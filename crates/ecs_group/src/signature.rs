//! Component signatures for groups.
//!
//! A signature names the component types a group is *meant* to hold, e.g.
//! "entities with a position and a velocity". It is recorded on the group
//! for logs and diagnostics and is never checked: membership is whatever the
//! caller puts in the group.

use ecs_component::{Component, ComponentTypeId};

/// A tuple of component types describing a group.
///
/// Implemented for `()` and for tuples of up to eight components.
pub trait Signature {
    /// Type identifiers of the components in the signature.
    fn type_ids() -> Vec<ComponentTypeId>;
    /// Human-readable type names of the components in the signature.
    fn type_names() -> Vec<&'static str>;
}

impl Signature for () {
    fn type_ids() -> Vec<ComponentTypeId> {
        Vec::new()
    }

    fn type_names() -> Vec<&'static str> {
        Vec::new()
    }
}

macro_rules! impl_signature {
    ($($T:ident),+) => {
        impl<$($T: Component),+> Signature for ($($T,)+) {
            fn type_ids() -> Vec<ComponentTypeId> {
                vec![$(ComponentTypeId::of::<$T>()),+]
            }

            fn type_names() -> Vec<&'static str> {
                vec![$(<$T as Component>::type_name()),+]
            }
        }
    };
}

impl_signature!(A);
impl_signature!(A, B);
impl_signature!(A, B, C);
impl_signature!(A, B, C, D);
impl_signature!(A, B, C, D, E);
impl_signature!(A, B, C, D, E, F);
impl_signature!(A, B, C, D, E, F, G);
impl_signature!(A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
    use super::*;

    struct Position;
    struct Velocity;

    #[test]
    fn test_empty_signature() {
        assert!(<() as Signature>::type_ids().is_empty());
        assert!(<() as Signature>::type_names().is_empty());
    }

    #[test]
    fn test_tuple_signature_preserves_order() {
        let ids = <(Position, Velocity) as Signature>::type_ids();
        assert_eq!(
            ids,
            vec![ComponentTypeId::of::<Position>(), ComponentTypeId::of::<Velocity>()]
        );

        let names = <(Position, Velocity) as Signature>::type_names();
        assert!(names[0].ends_with("Position"));
        assert!(names[1].ends_with("Velocity"));
    }
}
