use domain_shared::discord::UserId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tracing::instrument;

/// Serializes work on the same member while leaving different members independent.
#[derive(Default)]
pub(crate) struct MemberLocks {
    locks: Mutex<HashMap<UserId, Arc<AsyncMutex<()>>>>,
}

pub(crate) struct MemberGuard<'a> {
    locks: &'a MemberLocks,
    user_id: UserId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl MemberLocks {
    #[instrument(level = "trace", skip(self))]
    pub(crate) async fn lock(&self, user_id: UserId) -> MemberGuard<'_> {
        let lock = self
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(user_id)
            .or_default()
            .clone();

        let guard = lock.lock_owned().await;

        MemberGuard {
            locks: self,
            user_id,
            guard: Some(guard),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Drop for MemberGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());

        let mut locks = self
            .locks
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // Only the registry still holds the lock, so nobody is waiting for this member.
        if locks
            .get(&self.user_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&self.user_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn same_member_waits() {
        let locks = MemberLocks::default();

        let guard = locks.lock(UserId(1)).await;
        let second = timeout(Duration::from_millis(20), locks.lock(UserId(1))).await;
        assert!(second.is_err());

        drop(guard);
        let second = timeout(Duration::from_millis(20), locks.lock(UserId(1))).await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn different_members_do_not_wait() {
        let locks = MemberLocks::default();

        let _first = locks.lock(UserId(1)).await;
        let second = timeout(Duration::from_millis(20), locks.lock(UserId(2))).await;

        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn released_locks_are_forgotten() {
        let locks = MemberLocks::default();

        {
            let _first = locks.lock(UserId(1)).await;
            let _second = locks.lock(UserId(2)).await;
            assert_eq!(locks.len(), 2);
        }

        assert_eq!(locks.len(), 0);
    }
}
