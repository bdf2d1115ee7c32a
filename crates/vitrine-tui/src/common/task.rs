use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// The simulated-delay tasks this flow can have in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    SignIn,
    ProfileSave,
    SaveNotice,
}

impl TaskKind {
    pub fn all() -> &'static [TaskKind] {
        &[TaskKind::SignIn, TaskKind::ProfileSave, TaskKind::SaveNotice]
    }
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: Option<CancellationToken>,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in AppState, mutated only by reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
        self.cancel = started.cancel.clone();
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
            self.cancel = None;
        }
        ok
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.cancel = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub sign_in: TaskState,
    pub profile_save: TaskState,
    pub save_notice: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::SignIn => &self.sign_in,
            TaskKind::ProfileSave => &self.profile_save,
            TaskKind::SaveNotice => &self.save_notice,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::SignIn => &mut self.sign_in,
            TaskKind::ProfileSave => &mut self.profile_save,
            TaskKind::SaveNotice => &mut self.save_notice,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.sign_in.is_running() || self.profile_save.is_running() || self.save_notice.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_is_gated_by_active_id() {
        let mut state = TaskState::default();
        let started = TaskStarted {
            id: TaskId(3),
            cancel: None,
        };
        state.on_started(&started);

        assert!(!state.finish_if_active(TaskId(2)));
        assert!(state.is_running());

        assert!(state.finish_if_active(TaskId(3)));
        assert!(!state.is_running());
    }

    #[test]
    fn clear_drops_a_stale_completion() {
        let mut state = TaskState::default();
        state.on_started(&TaskStarted {
            id: TaskId(7),
            cancel: Some(CancellationToken::new()),
        });
        state.clear();
        assert!(!state.finish_if_active(TaskId(7)));
    }

    #[test]
    fn task_seq_is_monotonic() {
        let mut seq = TaskSeq::default();
        let a = seq.next_id();
        let b = seq.next_id();
        assert_ne!(a, b);
    }
}
