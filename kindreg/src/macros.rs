//! Declarative registration sugar.

/// Declare a kind and its options in one block.
///
/// Each option is `"name": Type` or `"name": Type = default`, where
/// `Type` implements [`AttrType`](crate::AttrType). Options are added in
/// the order written. Evaluates to `Result<(), RegistryError>`.
///
/// ```
/// use kindreg::{Registry, declare_kind};
///
/// # fn main() -> Result<(), kindreg::RegistryError> {
/// let mut registry = Registry::new("executor");
/// declare_kind!(registry, "graph", {
///     "link-params": bool = false,
/// })?;
/// assert_eq!(registry.list_options("graph")?, vec![("link-params", "IntImm")]);
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! declare_kind {
    (@option $builder:expr, $attr:tt, $ty:ty) => {
        $builder.add_attr_option::<$ty>($attr)
    };
    (@option $builder:expr, $attr:tt, $ty:ty, $default:expr) => {
        $builder.add_attr_option_with_default::<$ty>($attr, $default)
    };
    ($registry:expr, $kind:expr, { $($attr:literal : $ty:ty $(= $default:expr)?),* $(,)? }) => {
        ::core::result::Result::<_, $crate::RegistryError>::Ok($registry.declare($kind))
            $(.and_then(|builder| $crate::declare_kind!(@option builder, $attr, $ty $(, $default)?)))*
            .map(|_| ())
    };
}
