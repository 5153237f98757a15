//! Process-wide secp256k1 context
//!
//! Building a context precomputes signing and verification tables, so it is
//! done once and shared. [init] is idempotent and safe to race: concurrent
//! first callers get the same context. [teardown] drops the process handle;
//! contexts already handed out stay valid and the next [context] call builds
//! a fresh one.

use secp256k1::{All, Secp256k1};
use std::sync::{Arc, PoisonError, RwLock};

pub type Context = Arc<Secp256k1<All>>;

static CONTEXT: RwLock<Option<Context>> = RwLock::new(None);

/// Builds the shared context unless it already exists
pub fn init() -> Context {
    if let Some(context) = CONTEXT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
    {
        return context.clone();
    }

    let mut guard = CONTEXT.write().unwrap_or_else(PoisonError::into_inner);
    guard
        .get_or_insert_with(|| {
            log::debug!("Initializing secp256k1 context");
            Arc::new(Secp256k1::new())
        })
        .clone()
}

/// Shared context, initialized on first use
pub fn context() -> Context {
    init()
}

pub fn is_initialized() -> bool {
    CONTEXT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Drops the shared context, returns whether there was one
pub fn teardown() -> bool {
    let dropped = CONTEXT
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
        .is_some();

    if dropped {
        log::debug!("Dropped secp256k1 context");
    }
    dropped
}
