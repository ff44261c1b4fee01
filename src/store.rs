use crate::domain::project::{Project, ProjectId, ProjectStatus};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};
use tracing::{debug, trace};

/// Change listener: receives an independently owned snapshot of the full
/// project collection after every accepted mutation.
pub type Listener = Box<dyn FnMut(Vec<Project>) + Send>;

/// Token returned from [`ProjectStore::add_listener`], used to detach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct RegisteredListener {
    id: ListenerId,
    callback: Listener,
}

/// The shared mutable project collection.
///
/// Owns an ordered sequence of projects (insertion order is display order
/// within a status bucket) and the registered change listeners. Every
/// mutation that changes the visible collection notifies every listener,
/// in registration order, before the mutating call returns.
///
/// Construct independent instances with [`ProjectStore::new`] (tests do),
/// or use [`global`] for the one process-wide store.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<RegisteredListener>,
    next_listener_id: u64,
}

impl ProjectStore {
    /// Creates an empty store with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of projects currently tracked
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Looks up a project by id
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| &project.id == id)
    }

    /// Returns an owned copy of the full collection, in insertion order
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Returns the projects in one status bucket, in insertion order.
    ///
    /// This is the filter the list views apply to each snapshot.
    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|project| project.status == status)
            .cloned()
            .collect()
    }

    /// Creates a new active project and notifies all listeners.
    ///
    /// Inputs are trusted; validation happens in the submission layer
    /// before this is called. Always succeeds.
    pub fn add_project(&mut self, title: &str, description: &str, people: u32) -> ProjectId {
        let project = Project::new(title.to_string(), description.to_string(), people);
        let id = project.id.clone();
        debug!(id = %id, title, people, "project added");
        self.projects.push(project);
        self.notify_listeners();
        id
    }

    /// Moves a project to another status bucket and notifies all listeners.
    ///
    /// Silent no-op when the id is unknown (a stale drag payload is not an
    /// error) or when the project is already in the target bucket, so
    /// listeners never see a notification that changes nothing.
    pub fn move_project(&mut self, id: &ProjectId, new_status: ProjectStatus) {
        let Some(pos) = self.projects.iter().position(|project| &project.id == id) else {
            debug!(id = %id, "move ignored: no such project");
            return;
        };
        if self.projects[pos].status == new_status {
            trace!(id = %id, status = %new_status, "move ignored: already in target bucket");
            return;
        }
        debug!(id = %id, from = %self.projects[pos].status, to = %new_status, "project moved");
        self.projects[pos].set_status(new_status);
        self.notify_listeners();
    }

    /// Registers a change listener and returns its detach token.
    ///
    /// The listener sees only future mutations; current state is not
    /// replayed. Fan-out is not isolated: a panicking listener propagates
    /// to the mutating caller and later listeners are not invoked.
    pub fn add_listener(&mut self, listener: impl FnMut(Vec<Project>) + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push(RegisteredListener {
            id,
            callback: Box::new(listener),
        });
        id
    }

    /// Detaches a listener; returns false if the token is unknown
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|registered| registered.id != id);
        self.listeners.len() != before
    }

    fn notify_listeners(&mut self) {
        for registered in &mut self.listeners {
            trace!(listener = registered.id.0, "notifying listener");
            // Fresh copy per listener so no callback can observe another's
            // (or the store's) later mutations.
            (registered.callback)(self.projects.clone());
        }
    }
}

/// Cloneable handle to a store shared across threads.
///
/// Wraps the store in a mutex so add/move/notify execute under a single
/// mutual-exclusion boundary; listeners run synchronously while the lock
/// is held.
#[derive(Clone, Default)]
pub struct SharedProjectStore {
    inner: Arc<Mutex<ProjectStore>>,
}

impl SharedProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`ProjectStore::add_project`]
    pub fn add_project(&self, title: &str, description: &str, people: u32) -> ProjectId {
        self.lock().add_project(title, description, people)
    }

    /// See [`ProjectStore::move_project`]
    pub fn move_project(&self, id: &ProjectId, new_status: ProjectStatus) {
        self.lock().move_project(id, new_status);
    }

    /// See [`ProjectStore::add_listener`]
    pub fn add_listener(
        &self,
        listener: impl FnMut(Vec<Project>) + Send + 'static,
    ) -> ListenerId {
        self.lock().add_listener(listener)
    }

    /// See [`ProjectStore::remove_listener`]
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.lock().remove_listener(id)
    }

    pub fn snapshot(&self) -> Vec<Project> {
        self.lock().snapshot()
    }

    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.lock().projects_with_status(status)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ProjectStore> {
        // A panicking listener poisons the lock; the store data itself is
        // never left mid-mutation, so recover the guard.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

static GLOBAL_STORE: Lazy<SharedProjectStore> = Lazy::new(SharedProjectStore::new);

/// The process-wide store, created lazily on first access.
///
/// Application wiring registers its view listeners against this once at
/// startup; tests should build their own [`ProjectStore`] instead.
pub fn global() -> &'static SharedProjectStore {
    &GLOBAL_STORE
}
