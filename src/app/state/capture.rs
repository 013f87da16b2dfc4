/// Identity of a key hook. Installing or removing the same id twice is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookId(u64);

/// Global key listeners, the terminal counterpart of window-level keydown handlers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyHooks {
    installed: Vec<HookId>,
    next_id: u64,
}

impl KeyHooks {
    pub fn allocate(&mut self) -> HookId {
        let id = HookId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Returns `false` if the hook was already installed.
    pub fn install(&mut self, id: HookId) -> bool {
        if self.installed.contains(&id) {
            return false;
        }
        self.installed.push(id);
        true
    }

    /// Returns `false` if the hook was not installed.
    pub fn remove(&mut self, id: HookId) -> bool {
        let before = self.installed.len();
        self.installed.retain(|h| *h != id);
        before != self.installed.len()
    }

    #[must_use]
    pub fn is_installed(&self, id: HookId) -> bool {
        self.installed.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.installed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.installed.is_empty()
    }
}

pub const LABEL_IDLE: &str = "Click to capture keyboard";
pub const LABEL_CAPTURING: &str = "Click to STOP";

/// Owns the single hook used while the keyboard is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureController {
    hook: HookId,
}

impl CaptureController {
    pub fn new(hooks: &mut KeyHooks) -> Self {
        Self {
            hook: hooks.allocate(),
        }
    }

    #[must_use]
    pub fn hook(&self) -> HookId {
        self.hook
    }

    /// Forces the capture state, or flips it when `force` is `None`, and
    /// installs or removes the hook to match. Returns the new state.
    pub fn apply(&self, captured: &mut bool, force: Option<bool>, hooks: &mut KeyHooks) -> bool {
        *captured = force.unwrap_or(!*captured);
        if *captured {
            hooks.install(self.hook);
        } else {
            hooks.remove(self.hook);
        }
        *captured
    }

    #[must_use]
    pub fn is_capturing(&self, hooks: &KeyHooks) -> bool {
        hooks.is_installed(self.hook)
    }
}

#[must_use]
pub fn capture_label(captured: bool) -> &'static str {
    if captured {
        LABEL_CAPTURING
    } else {
        LABEL_IDLE
    }
}
