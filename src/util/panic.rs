/// Asserts that the provided block panics. With `contains "..."`, the panic message is also checked
/// for the given text.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            "assertion failed to panic"
        );
    };
    ($run:block, contains $msg:literal) => {
        let Err(payload) = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) else {
            panic!("assertion failed to panic");
        };
        let message = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();
        assert!(
            message.contains($msg),
            "panic message {:?} should contain {:?}", message, $msg
        );
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
