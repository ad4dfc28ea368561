use std::borrow::Cow;
use std::sync::Arc;

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;

static GLOBAL: Lazy<ArcSwap<RenderConfig>> = Lazy::new(|| ArcSwap::from_pointee(RenderConfig::new()));

/// Separators used when rendering an error chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    func_sep: Cow<'static, str>,
    stack_sep: Cow<'static, str>,
    msg_sep: Cow<'static, str>,
}

impl RenderConfig {
    /// Create a `RenderConfig` with the default separators.
    ///
    /// - `func_sep`: `"\t"`
    /// - `stack_sep`: `"\n"`
    /// - `msg_sep`: `" : "`
    pub const fn new() -> Self {
        Self {
            func_sep: Cow::Borrowed("\t"),
            stack_sep: Cow::Borrowed("\n"),
            msg_sep: Cow::Borrowed(" : "),
        }
    }

    /// Returns `self` with an option applied.
    #[must_use]
    pub fn with(mut self, option: RenderOption) -> Self {
        option.apply(&mut self);
        self
    }

    /// Written between a function name and its `file:line` in a frame line.
    pub fn func_sep(&self) -> &str {
        &self.func_sep
    }

    /// Written between the blocks of an extended render.
    pub fn stack_sep(&self) -> &str {
        &self.stack_sep
    }

    /// Written between a message and the stack following it.
    pub fn msg_sep(&self) -> &str {
        &self.msg_sep
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A single-field change to a [`RenderConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOption {
    /// Sets [`RenderConfig::func_sep`].
    FuncSep(Cow<'static, str>),
    /// Sets [`RenderConfig::stack_sep`].
    StackSep(Cow<'static, str>),
    /// Sets [`RenderConfig::msg_sep`].
    MsgSep(Cow<'static, str>),
}

impl RenderOption {
    /// Apply the change to a config.
    pub fn apply(&self, config: &mut RenderConfig) {
        match self {
            Self::FuncSep(sep) => config.func_sep = sep.clone(),
            Self::StackSep(sep) => config.stack_sep = sep.clone(),
            Self::MsgSep(sep) => config.msg_sep = sep.clone(),
        }
    }
}

/// Returns a [`RenderOption`] setting the function separator.
pub fn with_func_sep(sep: impl Into<Cow<'static, str>>) -> RenderOption {
    RenderOption::FuncSep(sep.into())
}

/// Returns a [`RenderOption`] setting the block separator.
pub fn with_stack_sep(sep: impl Into<Cow<'static, str>>) -> RenderOption {
    RenderOption::StackSep(sep.into())
}

/// Returns a [`RenderOption`] setting the message separator.
pub fn with_msg_sep(sep: impl Into<Cow<'static, str>>) -> RenderOption {
    RenderOption::MsgSep(sep.into())
}

/// A snapshot of the process-wide [`RenderConfig`].
///
/// Used whenever an error is rendered without an explicit config.
pub fn config() -> Arc<RenderConfig> {
    GLOBAL.load_full()
}

/// Apply options to the process-wide [`RenderConfig`].
///
/// All options are applied together: a concurrent render sees either none or
/// all of them. Every render started afterwards uses the new separators,
/// including renders of errors constructed before the change.
pub fn set_options<I>(options: I)
where
    I: IntoIterator<Item = RenderOption>,
{
    let options: Vec<RenderOption> = options.into_iter().collect();
    let installed = update(&options);
    #[cfg(feature = "tracing")]
    tracing::debug!(
        func_sep = ?installed.func_sep(),
        stack_sep = ?installed.stack_sep(),
        msg_sep = ?installed.msg_sep(),
        changed = options.len(),
        "render options updated"
    );
    #[cfg(not(feature = "tracing"))]
    drop(installed);
}

/// Applies `options` over the current config and returns the config stored.
fn update(options: &[RenderOption]) -> Arc<RenderConfig> {
    let mut installed = None;
    let _previous = GLOBAL.rcu(|current| {
        let mut next = RenderConfig::clone(current);
        for option in options {
            option.apply(&mut next);
        }
        let next = Arc::new(next);
        installed = Some(Arc::clone(&next));
        next
    });
    // `rcu` runs the closure at least once.
    installed.unwrap_or_else(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.func_sep(), "\t");
        assert_eq!(config.stack_sep(), "\n");
        assert_eq!(config.msg_sep(), " : ");
    }

    #[test]
    fn test_options_apply_in_order() {
        let config = RenderConfig::new()
            .with(with_msg_sep(""))
            .with(with_stack_sep(String::from("\n\n")))
            .with(with_msg_sep(" | "));
        assert_eq!(config.func_sep(), "\t");
        assert_eq!(config.stack_sep(), "\n\n");
        assert_eq!(config.msg_sep(), " | ");
    }

    #[test]
    fn test_update_returns_stored_config() {
        let installed = update(&[with_func_sep(" @ ")]);
        assert_eq!(installed.func_sep(), " @ ");
        assert!(Arc::ptr_eq(&installed, &config()));

        let installed = update(&[with_func_sep("\t")]);
        assert_eq!(*installed, RenderConfig::default());
        assert!(Arc::ptr_eq(&installed, &config()));
    }
}
