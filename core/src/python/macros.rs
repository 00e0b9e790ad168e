//! Glue between the `#[pyclass]` wrappers and the core value types they hold

/// Connects wrappers to the `Copy` core value stored in their `inner` field
///
/// For each `Wrapper => CoreType` pair this generates `From` in both
/// directions, `From<&Wrapper>` for borrowed arguments, and a `core()`
/// accessor used when extracting arguments from Python objects.
macro_rules! wrap_core_values {
    ($($wrapper:ident => $core:ty),+ $(,)?) => {
        $(
            impl $wrapper {
                pub(crate) fn core(&self) -> $core {
                    self.inner
                }
            }

            impl From<$core> for $wrapper {
                fn from(inner: $core) -> Self {
                    Self { inner }
                }
            }

            impl From<$wrapper> for $core {
                fn from(wrapper: $wrapper) -> Self {
                    wrapper.core()
                }
            }

            impl From<&$wrapper> for $core {
                fn from(wrapper: &$wrapper) -> Self {
                    wrapper.core()
                }
            }
        )+
    };
}

pub(crate) use wrap_core_values;
