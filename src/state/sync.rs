//! Synchronization between the remote users collection and the local form
//!
//! [`UserSync`] owns the collection mirror, the loading flag and the draft.
//! Every remote call is split into a [`Request`] taken from the current state
//! and a [`Completion`] applied once the call resolves, so the UI can keep
//! several calls in flight and apply them in whatever order they finish.

use super::field_path::FieldPath;
use super::record::User;
use crate::api::{ApiError, UsersApi};

/// A remote call derived from the current state
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Fetch the whole collection
    Load,
    /// Store a new user built from the draft
    Create(User),
    /// Overwrite member `id` with the draft as it was when submitted
    Update { id: u64, draft: User },
    /// Remove member `id`
    Delete(u64),
}

/// The resolved result of a [`Request`]
#[derive(Debug)]
pub enum Completion {
    Loaded(Result<Vec<User>, ApiError>),
    Created(Result<User, ApiError>),
    Updated {
        draft: User,
        result: Result<(), ApiError>,
    },
    Deleted {
        id: u64,
        result: Result<(), ApiError>,
    },
}

impl Request {
    /// Run the call against `api`
    pub async fn execute(self, api: &dyn UsersApi) -> Completion {
        match self {
            Request::Load => Completion::Loaded(api.list_users().await),
            Request::Create(draft) => Completion::Created(api.create_user(&draft).await),
            Request::Update { id, draft } => {
                let result = api.update_user(id, &draft).await;
                Completion::Updated { draft, result }
            }
            Request::Delete(id) => Completion::Deleted {
                id,
                result: api.delete_user(id).await,
            },
        }
    }
}

impl Completion {
    /// Whether the remote call succeeded
    pub fn is_success(&self) -> bool {
        match self {
            Completion::Loaded(result) => result.is_ok(),
            Completion::Created(result) => result.is_ok(),
            Completion::Updated { result, .. } | Completion::Deleted { result, .. } => {
                result.is_ok()
            }
        }
    }
}

/// Collection mirror, loading flag and draft of the users screen
#[derive(Debug, Clone)]
pub struct UserSync {
    users: Vec<User>,
    loading: bool,
    draft: User,
}

impl Default for UserSync {
    fn default() -> Self {
        Self::new()
    }
}

impl UserSync {
    /// Fresh state: empty collection, loading until the first load resolves
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            loading: true,
            draft: User::empty(),
        }
    }

    /// Current collection in display order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The record backing the form
    pub fn draft(&self) -> &User {
        &self.draft
    }

    /// Edit mode is inferred from the draft having an id
    pub fn is_editing(&self) -> bool {
        self.draft.id.is_some()
    }

    /// Mark the collection as loading and produce the fetch request
    pub fn begin_load(&mut self) -> Request {
        self.loading = true;
        Request::Load
    }

    /// Copy `user` into the draft, switching the form to edit mode
    pub fn begin_edit(&mut self, user: &User) {
        tracing::debug!("Editing user {:?}", user.id);
        self.draft = user.clone();
    }

    /// Change one leaf of the draft; the rest of its group is kept
    pub fn update_field(&mut self, path: &FieldPath, value: impl Into<String>) {
        path.set(&mut self.draft, value.into());
    }

    /// Change a draft leaf addressed by its form name (`"address.city"`).
    ///
    /// Returns `false` when the name does not address an editable leaf.
    pub fn update_field_named(&mut self, name: &str, value: impl Into<String>) -> bool {
        match FieldPath::parse(name) {
            Some(path) => {
                self.update_field(&path, value);
                true
            }
            None => {
                tracing::warn!("Ignoring edit of non-editable field {name:?}");
                false
            }
        }
    }

    /// Throw away the draft and return to create mode
    pub fn reset_draft(&mut self) {
        self.draft = User::empty();
    }

    /// Request that stores the draft: an update when it has an id, else a create
    pub fn prepare_submit(&self) -> Request {
        match self.draft.id {
            Some(id) => Request::Update {
                id,
                draft: self.draft.clone(),
            },
            None => Request::Create(self.draft.clone()),
        }
    }

    /// Request that removes member `id`
    pub fn prepare_delete(&self, id: u64) -> Request {
        Request::Delete(id)
    }

    /// Fold a resolved call into the state.
    ///
    /// Failures are logged and leave collection and draft untouched; a failed
    /// load only clears the loading flag.
    pub fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::Loaded(Ok(users)) => {
                tracing::info!("Loaded {} users", users.len());
                self.users = users;
                self.loading = false;
            }
            Completion::Loaded(Err(err)) => {
                tracing::error!("Error fetching users: {err}");
                self.loading = false;
            }
            Completion::Created(Ok(user)) => {
                match user.id {
                    Some(id) if self.users.iter().any(|u| u.id == Some(id)) => {
                        tracing::warn!("Server assigned id {id} which is already listed");
                    }
                    None => tracing::warn!("Server returned a created user without an id"),
                    _ => {}
                }
                tracing::info!("Added user {:?}", user.id);
                self.users.push(user);
                self.reset_draft();
            }
            Completion::Created(Err(err)) => {
                tracing::error!("Error adding user: {err}");
            }
            Completion::Updated { draft, result: Ok(()) } => {
                let id = draft.id;
                for user in self.users.iter_mut().filter(|u| u.id == id) {
                    *user = draft.clone();
                }
                tracing::info!("Updated user {id:?}");
                self.reset_draft();
            }
            Completion::Updated { draft, result: Err(err) } => {
                tracing::error!("Error updating user {:?}: {err}", draft.id);
            }
            Completion::Deleted { id, result: Ok(()) } => {
                self.users.retain(|u| u.id != Some(id));
                tracing::info!("Deleted user {id}");
            }
            Completion::Deleted { id, result: Err(err) } => {
                tracing::error!("Error deleting user {id}: {err}");
            }
        }
    }

    /// Fetch the collection and apply the result
    pub async fn load(&mut self, api: &dyn UsersApi) {
        let request = self.begin_load();
        let completion = request.execute(api).await;
        self.apply(completion);
    }

    /// Store the draft and apply the result
    pub async fn submit(&mut self, api: &dyn UsersApi) {
        let completion = self.prepare_submit().execute(api).await;
        self.apply(completion);
    }

    /// Delete member `id` and apply the result
    pub async fn delete(&mut self, api: &dyn UsersApi, id: u64) {
        let completion = self.prepare_delete(id).execute(api).await;
        self.apply(completion);
    }

    #[cfg(test)]
    pub(crate) fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            loading: false,
            draft: User::empty(),
        }
    }
}
