//! Callback resolution for chapter steps.
//!
//! Configured callbacks are dotted `handle.method` names. One handle is the
//! built-in track animator; everything else is resolved against explicitly
//! registered host callbacks. Nothing is looked up by reflection.

use core::fmt;

use hashbrown::HashMap;
use serde_json::Value;

/// Track animator methods addressable from chapter steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnimatorMethod {
    Start,
    Pause,
    Resume,
    Reset,
}

type CustomCallback = Box<dyn FnMut(&Value) + Send>;

/// Explicit registry of callback targets.
///
/// Custom callbacks are keyed by their full dotted name and take precedence
/// over the animator handle, so a host can shadow it if it must.
pub struct CallbackRegistry {
    animator_handle: String,
    custom: HashMap<String, CustomCallback>,
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self {
            animator_handle: "trackAnimation".to_string(),
            custom: HashMap::new(),
        }
    }
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the handle the built-in animator answers to.
    pub fn with_animator_handle(mut self, handle: impl Into<String>) -> Self {
        self.animator_handle = handle.into();
        self
    }

    /// Register a host callback under its full dotted name.
    pub fn register(&mut self, name: impl Into<String>, callback: impl FnMut(&Value) + Send + 'static) {
        self.custom.insert(name.into(), Box::new(callback));
    }

    /// Invoke a registered custom callback. Returns false when the name is
    /// not registered.
    pub fn invoke_custom(&mut self, name: &str, options: &Value) -> bool {
        if let Some(callback) = self.custom.get_mut(name) {
            callback(options);
            true
        } else {
            false
        }
    }

    /// Animator method addressed by a dotted callback name, if the handle
    /// matches and the method is known.
    pub fn animator_method(&self, name: &str) -> Option<AnimatorMethod> {
        let (handle, method) = name.split_once('.')?;
        if handle != self.animator_handle {
            return None;
        }
        match method {
            "start" => Some(AnimatorMethod::Start),
            "pause" => Some(AnimatorMethod::Pause),
            "resume" => Some(AnimatorMethod::Resume),
            "reset" => Some(AnimatorMethod::Reset),
            _ => None,
        }
    }
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.custom.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("CallbackRegistry")
            .field("animator_handle", &self.animator_handle)
            .field("custom", &names)
            .finish()
    }
}
