use super::RouterError;
use crate::matcher::MatchOrder;
use crate::path::normalize_prefix;
use crate::registry::{BuildOptions, RouteInstance};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterConfig {
    /// Applied to every route path and to every navigated path.
    pub prefix: String,
    pub default_target: Option<String>,
    pub match_order: MatchOrder,
    /// Drop render output whose resolution has been superseded.
    pub discard_stale_renders: bool,
    pub intercept_links: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            default_target: None,
            match_order: MatchOrder::default(),
            discard_stale_renders: true,
            intercept_links: true,
        }
    }
}

impl RouterConfig {
    pub fn builder() -> RouterConfigBuilder {
        RouterConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterConfigError> {
        if normalize_prefix(&self.prefix).is_err() {
            return Err(RouterConfigError::InvalidPrefix {
                prefix: self.prefix.clone(),
            });
        }
        if self
            .default_target
            .as_ref()
            .is_some_and(|target| target.trim().is_empty())
        {
            return Err(RouterConfigError::EmptyDefaultTarget);
        }
        Ok(())
    }

    pub(crate) fn build_options(&self) -> BuildOptions {
        BuildOptions {
            prefix: self.prefix.clone(),
            default_target: self.default_target.clone(),
        }
    }

    /// The prefix in normalized form; empty when unset or invalid.
    pub(crate) fn normalized_prefix(&self) -> String {
        normalize_prefix(&self.prefix).unwrap_or_default()
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterConfigBuilder {
    config: RouterConfig,
}

impl RouterConfigBuilder {
    pub fn prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    pub fn default_target<S: Into<String>>(mut self, target: S) -> Self {
        self.config.default_target = Some(target.into());
        self
    }

    pub fn match_order(mut self, value: MatchOrder) -> Self {
        self.config.match_order = value;
        self
    }

    pub fn discard_stale_renders(mut self, value: bool) -> Self {
        self.config.discard_stale_renders = value;
        self
    }

    pub fn intercept_links(mut self, value: bool) -> Self {
        self.config.intercept_links = value;
        self
    }

    pub fn build(self) -> Result<RouterConfig, RouterConfigError> {
        let config = self.config;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouterConfigError {
    #[error("prefix '{prefix}' must start with '/' and name at least one segment")]
    InvalidPrefix { prefix: String },
    #[error("default mount target must not be empty")]
    EmptyDefaultTarget,
}

/// Returning `false` cancels the resolution without rendering.
pub type BeforeResolve<V> = Rc<dyn Fn(&RouteInstance<V>) -> bool>;
pub type ErrorHandler = Rc<dyn Fn(&RouterError)>;

/// Everything captured at registration time: plain configuration plus the
/// optional guard and error hooks.
pub struct NavigationOptions<V> {
    pub config: RouterConfig,
    pub before_resolve: Option<BeforeResolve<V>>,
    pub on_error: Option<ErrorHandler>,
}

impl<V> NavigationOptions<V> {
    pub fn builder() -> NavigationOptionsBuilder<V> {
        NavigationOptionsBuilder::default()
    }
}

impl<V> Default for NavigationOptions<V> {
    fn default() -> Self {
        Self {
            config: RouterConfig::default(),
            before_resolve: None,
            on_error: None,
        }
    }
}

impl<V> Clone for NavigationOptions<V> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            before_resolve: self.before_resolve.clone(),
            on_error: self.on_error.clone(),
        }
    }
}

impl<V> From<RouterConfig> for NavigationOptions<V> {
    fn from(config: RouterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}

impl<V> fmt::Debug for NavigationOptions<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationOptions")
            .field("config", &self.config)
            .field("before_resolve", &self.before_resolve.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

pub struct NavigationOptionsBuilder<V> {
    config: RouterConfigBuilder,
    before_resolve: Option<BeforeResolve<V>>,
    on_error: Option<ErrorHandler>,
}

impl<V> Default for NavigationOptionsBuilder<V> {
    fn default() -> Self {
        Self {
            config: RouterConfigBuilder::default(),
            before_resolve: None,
            on_error: None,
        }
    }
}

impl<V> NavigationOptionsBuilder<V> {
    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = RouterConfigBuilder { config };
        self
    }

    pub fn prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.config = self.config.prefix(prefix);
        self
    }

    pub fn default_target<S: Into<String>>(mut self, target: S) -> Self {
        self.config = self.config.default_target(target);
        self
    }

    pub fn match_order(mut self, value: MatchOrder) -> Self {
        self.config = self.config.match_order(value);
        self
    }

    pub fn discard_stale_renders(mut self, value: bool) -> Self {
        self.config = self.config.discard_stale_renders(value);
        self
    }

    pub fn intercept_links(mut self, value: bool) -> Self {
        self.config = self.config.intercept_links(value);
        self
    }

    pub fn before_resolve<F>(mut self, guard: F) -> Self
    where
        F: Fn(&RouteInstance<V>) -> bool + 'static,
    {
        self.before_resolve = Some(Rc::new(guard));
        self
    }

    pub fn on_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(&RouterError) + 'static,
    {
        self.on_error = Some(Rc::new(handler));
        self
    }

    pub fn build(self) -> Result<NavigationOptions<V>, RouterConfigError> {
        Ok(NavigationOptions {
            config: self.config.build()?,
            before_resolve: self.before_resolve,
            on_error: self.on_error,
        })
    }
}
