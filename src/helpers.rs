//! Small conveniences for building children.

/// Conditional value: `vif!(c1, v1, c2, v2, ..., default)` is the
/// value after the first true condition, else `default`, else empty.
/// Values are converted to `Content`, so branches may differ in type.
#[macro_export]
macro_rules! vif {
    () => {
        $crate::Content::Empty
    };
    ($default:expr $(,)?) => {
        $crate::Content::from($default)
    };
    ($cond:expr, $val:expr $(, $rest:expr)* $(,)?) => {
        if $cond {
            $crate::Content::from($val)
        } else {
            $crate::vif!($($rest),*)
        }
    };
}

/// Lazy `vif!`: conditions and values are closures, only the ones
/// needed are called.
#[macro_export]
macro_rules! lif {
    () => {
        $crate::Content::Empty
    };
    ($default:expr $(,)?) => {
        $crate::Content::from(($default)())
    };
    ($cond:expr, $val:expr $(, $rest:expr)* $(,)?) => {
        if ($cond)() {
            $crate::Content::from(($val)())
        } else {
            $crate::lif!($($rest),*)
        }
    };
}

/// `n` non-breaking spaces as entities.
pub fn nbsp(n: usize) -> String {
    "&nbsp;".repeat(n)
}
