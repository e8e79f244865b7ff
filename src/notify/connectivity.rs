use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Reports whether the client currently has network access.
pub trait Connectivity: Send + Sync {
    fn is_online(&self) -> bool;
}

/// Shared flag maintained by whoever watches the network.
///
/// Clones observe the same underlying value.
#[derive(Debug, Clone)]
pub struct ConnectivityFlag {
    online: Arc<AtomicBool>,
}

impl ConnectivityFlag {
    pub fn new(online: bool) -> Self {
        Self {
            online: Arc::new(AtomicBool::new(online)),
        }
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }
}

impl Default for ConnectivityFlag {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Connectivity for ConnectivityFlag {
    fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}
