/// Returns an error with a formatted message, recording the call stack at the
/// point it was invoked.
///
/// ```
/// let error = errchain::errorf!("unexpected byte {:#x}", 0xff);
///
/// assert_eq!(error.to_string(), "unexpected byte 0xff");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::new(::std::format!($($arg)+))
    };
}

/// Annotates an error with a formatted message and the call stack at the
/// point it was invoked.
///
/// ```
/// let error = errchain::wrapf!(errchain::new("EOF"), "read frame {}", 3);
///
/// assert_eq!(error.to_string(), "read frame 3: EOF");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($cause:expr, $($arg:tt)+) => {
        $crate::wrap($cause, ::std::format!($($arg)+))
    };
}

/// Annotates an error with a formatted message, without recording a call
/// stack.
///
/// ```
/// let error = errchain::with_messagef!(errchain::new("EOF"), "read frame {}", 3);
///
/// assert_eq!(error.to_string(), "read frame 3: EOF");
/// ```
#[macro_export]
macro_rules! with_messagef {
    ($cause:expr, $($arg:tt)+) => {
        $crate::with_message($cause, ::std::format!($($arg)+))
    };
}

/// Annotates an error with any number of opaque values, in order.
///
/// ```
/// let error = errchain::with_details!(errchain::new("EOF"), "whoops", 1, 2.2);
///
/// let details = errchain::details(&error).unwrap();
/// assert_eq!(details.len(), 3);
/// assert_eq!(details[1].downcast_ref::<i32>(), Some(&1));
/// ```
#[macro_export]
macro_rules! with_details {
    ($cause:expr $(, $detail:expr)* $(,)?) => {
        $crate::with_details($cause, ::std::vec![$($crate::detail($detail)),*])
    };
}
