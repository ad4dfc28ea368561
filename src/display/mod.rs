//! Display support.

mod config;
mod error;
mod writer;

pub(crate) use self::error::write_line;

pub use self::config::{
    config, set_options, with_func_sep, with_msg_sep, with_stack_sep, RenderConfig, RenderOption,
};
pub use self::error::ErrorDisplay;
