//! Client-side state of the user settings table.
//!
//! `UserList` owns the roster, the inline group editor, the add-user draft and the staged
//! deletion. Every network operation is split into a `begin_*` step that validates and
//! produces the request and a `finish_*` step that applies the response, so the page can
//! keep the state in a signal without holding a borrow across an await. The async
//! operations (`load_users`, `add_user`, `save_edit`, `confirm_delete`) compose both steps
//! around a [`UserApi`].
//!
//! Responses that arrive after [`UserList::unmount`] are dropped without touching state.

use crate::{
    client::model::error::{ApiError, RosterError},
    model::user::{CreateUserDto, UserDto},
};

/// Remote user API as consumed by the settings page.
#[allow(async_fn_in_trait)]
pub trait UserApi {
    async fn list_users(&self) -> Result<Vec<UserDto>, ApiError>;
    async fn create_user(&self, payload: &CreateUserDto) -> Result<(), ApiError>;
    /// Returns the user as stored by the server.
    async fn update_user(&self, user: &UserDto) -> Result<UserDto, ApiError>;
    async fn delete_user(&self, id: i32) -> Result<(), ApiError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message for the toast layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    fn success(message: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.to_string(),
        }
    }

    fn error(message: &str) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.to_string(),
        }
    }
}

pub const MSG_FETCH_FAILED: &str = "Users could not be fetched.";
pub const MSG_CREATED: &str = "User created";
pub const MSG_ALREADY_EXISTS: &str = "User already exists";
pub const MSG_CREATE_FAILED: &str = "User could not be created";
pub const MSG_SAVE_FAILED: &str = "Failed to save";
pub const MSG_DELETED: &str = "User deleted";
pub const MSG_DELETE_FAILED: &str = "Could not delete user";

/// Progress of the initial roster fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    NotFetched,
    Loading,
    Fetched,
    Error(RosterError),
}

/// The single row in edit mode, if any.
#[derive(Clone, Debug, Default, PartialEq)]
struct EditRow {
    row: Option<usize>,
    /// Id of the user at `row` when editing started, used to follow the row
    /// when the roster changes underneath it.
    user_id: Option<i32>,
    groups: Vec<String>,
    saving: bool,
}

/// Unsaved add-user form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewUserForm {
    pub username: String,
    pub groups: Vec<String>,
}

/// An update in flight, produced by [`UserList::begin_save`].
#[derive(Clone, Debug, PartialEq)]
pub struct SaveRequest {
    pub row: usize,
    pub user: UserDto,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UserList {
    users: Vec<UserDto>,
    load: LoadState,
    edit: EditRow,
    draft: NewUserForm,
    pending_delete: Option<UserDto>,
    deleting: bool,
    notifications: Vec<Notification>,
    mounted: bool,
}

impl Default for UserList {
    fn default() -> Self {
        Self::new()
    }
}

impl UserList {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            load: LoadState::NotFetched,
            edit: EditRow::default(),
            draft: NewUserForm::default(),
            pending_delete: None,
            deleting: false,
            notifications: Vec::new(),
            mounted: true,
        }
    }

    pub fn users(&self) -> &[UserDto] {
        &self.users
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn draft(&self) -> &NewUserForm {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut NewUserForm {
        &mut self.draft
    }

    pub fn editing_row(&self) -> Option<usize> {
        self.edit.row
    }

    pub fn edit_groups(&self) -> &[String] {
        &self.edit.groups
    }

    pub fn set_edit_groups(&mut self, groups: Vec<String>) {
        if self.edit.row.is_some() && !self.edit.saving {
            self.edit.groups = groups;
        }
    }

    pub fn is_saving(&self) -> bool {
        self.edit.saving
    }

    pub fn pending_delete(&self) -> Option<&UserDto> {
        self.pending_delete.as_ref()
    }

    /// The confirmation dialog is open exactly while a deletion is staged.
    pub fn is_delete_dialog_open(&self) -> bool {
        self.pending_delete.is_some()
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Drains queued notifications in the order they were raised.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Marks the owning view as torn down. Later `finish_*` calls are ignored.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    // Loading

    /// Returns `false` if the roster was already requested on this mount.
    pub fn begin_load(&mut self) -> bool {
        if self.load != LoadState::NotFetched {
            return false;
        }
        self.load = LoadState::Loading;
        true
    }

    pub fn finish_load(&mut self, result: Result<Vec<UserDto>, ApiError>) -> Result<(), RosterError> {
        if !self.mounted {
            return Ok(());
        }

        match result {
            Ok(users) => {
                self.replace_users(users);
                self.load = LoadState::Fetched;
                Ok(())
            }
            Err(err) => {
                let err = RosterError::from(err);
                self.notifications.push(Notification::error(MSG_FETCH_FAILED));
                self.load = LoadState::Error(err.clone());
                Err(err)
            }
        }
    }

    pub async fn load_users(&mut self, api: &impl UserApi) -> Result<(), RosterError> {
        if !self.begin_load() {
            return Ok(());
        }
        let result = api.list_users().await;
        self.finish_load(result)
    }

    // Editing

    /// Puts `row` into edit mode, discarding any unsaved edit of another row.
    pub fn begin_edit(&mut self, row: usize) -> Result<(), RosterError> {
        if self.edit.saving {
            return Err(RosterError::SaveInProgress);
        }
        let user = self.users.get(row).ok_or(RosterError::RowOutOfRange(row))?;

        self.edit = EditRow {
            row: Some(row),
            user_id: Some(user.id),
            groups: user.data.groups.clone(),
            saving: false,
        };
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        if !self.edit.saving {
            self.edit = EditRow::default();
        }
    }

    /// Returns `Ok(None)` when no row is being edited.
    ///
    /// The roster is left untouched until the server confirms the update.
    pub fn begin_save(&mut self) -> Result<Option<SaveRequest>, RosterError> {
        let Some(row) = self.edit.row else {
            return Ok(None);
        };
        if self.edit.saving {
            return Err(RosterError::SaveInProgress);
        }
        let Some(user) = self.users.get(row) else {
            self.edit = EditRow::default();
            return Err(RosterError::RowOutOfRange(row));
        };

        let mut user = user.clone();
        user.data.groups = self.edit.groups.clone();
        self.edit.saving = true;

        Ok(Some(SaveRequest { row, user }))
    }

    pub fn finish_save(
        &mut self,
        request: SaveRequest,
        result: Result<UserDto, ApiError>,
    ) -> Result<(), RosterError> {
        if !self.mounted {
            return Ok(());
        }

        // The edit session ends whatever the outcome.
        self.edit = EditRow::default();

        match result {
            Ok(saved) => {
                let index = match self.users.get(request.row) {
                    Some(user) if user.id == request.user.id => Some(request.row),
                    _ => self.users.iter().position(|u| u.id == request.user.id),
                };
                if let Some(index) = index {
                    self.users[index] = saved;
                }
                Ok(())
            }
            Err(err) => {
                self.notifications.push(Notification::error(MSG_SAVE_FAILED));
                Err(err.into())
            }
        }
    }

    pub async fn save_edit(&mut self, api: &impl UserApi) -> Result<(), RosterError> {
        let Some(request) = self.begin_save()? else {
            return Ok(());
        };
        let result = api.update_user(&request.user).await;
        self.finish_save(request, result)
    }

    // Adding

    pub fn begin_add(&self, username: &str, groups: &[String]) -> Result<CreateUserDto, RosterError> {
        if username.trim().is_empty() {
            return Err(RosterError::EmptyUsername);
        }
        Ok(CreateUserDto {
            username: username.to_string(),
            groups: groups.to_vec(),
        })
    }

    /// Applies the create response. On success the caller re-fetches the roster and
    /// passes the result to [`UserList::finish_refresh`].
    pub fn finish_create(&mut self, result: Result<(), ApiError>) -> Result<(), RosterError> {
        if !self.mounted {
            return Ok(());
        }

        match result.map_err(RosterError::from) {
            Ok(()) => {
                self.notifications.push(Notification::success(MSG_CREATED));
                self.draft = NewUserForm::default();
                Ok(())
            }
            Err(RosterError::Conflict) => {
                self.notifications.push(Notification::error(MSG_ALREADY_EXISTS));
                Err(RosterError::Conflict)
            }
            Err(err) => {
                self.notifications.push(Notification::error(MSG_CREATE_FAILED));
                Err(err)
            }
        }
    }

    /// Replaces the roster wholesale with a fresh listing.
    pub fn finish_refresh(&mut self, result: Result<Vec<UserDto>, ApiError>) -> Result<(), RosterError> {
        if !self.mounted {
            return Ok(());
        }

        match result {
            Ok(users) => {
                self.replace_users(users);
                Ok(())
            }
            Err(err) => {
                self.notifications.push(Notification::error(MSG_FETCH_FAILED));
                Err(err.into())
            }
        }
    }

    pub async fn add_user(
        &mut self,
        api: &impl UserApi,
        username: &str,
        groups: &[String],
    ) -> Result<(), RosterError> {
        let payload = self.begin_add(username, groups)?;

        let result = api.create_user(&payload).await;
        self.finish_create(result)?;
        if !self.mounted {
            return Ok(());
        }

        let users = api.list_users().await;
        self.finish_refresh(users)
    }

    /// Submits the add-user draft.
    pub async fn submit_draft(&mut self, api: &impl UserApi) -> Result<(), RosterError> {
        let NewUserForm { username, groups } = self.draft.clone();
        self.add_user(api, &username, &groups).await
    }

    // Deleting

    /// Stages `user` for deletion and opens the confirmation dialog.
    pub fn request_delete(&mut self, user: UserDto) {
        if !self.deleting {
            self.pending_delete = Some(user);
        }
    }

    pub fn close_delete(&mut self) {
        if !self.deleting {
            self.pending_delete = None;
        }
    }

    /// Returns the id to delete. Fails without a staged user.
    pub fn begin_delete(&mut self) -> Result<i32, RosterError> {
        if self.deleting {
            return Err(RosterError::DeleteInProgress);
        }
        let Some(id) = self.pending_delete.as_ref().map(|user| user.id) else {
            self.notifications.push(Notification::error(MSG_DELETE_FAILED));
            return Err(RosterError::MissingUserId);
        };
        self.deleting = true;
        Ok(id)
    }

    pub fn finish_delete(&mut self, id: i32, result: Result<(), ApiError>) -> Result<(), RosterError> {
        if !self.mounted {
            return Ok(());
        }

        self.deleting = false;

        match result {
            Ok(()) => {
                self.users.retain(|user| user.id != id);
                self.follow_edit_row();
                self.pending_delete = None;
                self.notifications.push(Notification::success(MSG_DELETED));
                Ok(())
            }
            Err(err) => {
                self.notifications.push(Notification::error(MSG_DELETE_FAILED));
                Err(err.into())
            }
        }
    }

    pub async fn confirm_delete(&mut self, api: &impl UserApi) -> Result<(), RosterError> {
        let id = self.begin_delete()?;
        let result = api.delete_user(id).await;
        self.finish_delete(id, result)
    }

    fn replace_users(&mut self, users: Vec<UserDto>) {
        self.users = users;
        self.follow_edit_row();
    }

    /// Keeps the edit row pointing at the same user after the roster changed, or leaves
    /// edit mode if that user is gone.
    fn follow_edit_row(&mut self) {
        let (Some(row), Some(user_id)) = (self.edit.row, self.edit.user_id) else {
            return;
        };
        if self.users.get(row).is_some_and(|user| user.id == user_id) {
            return;
        }
        match self.users.iter().position(|user| user.id == user_id) {
            Some(index) => self.edit.row = Some(index),
            None if !self.edit.saving => self.edit = EditRow::default(),
            None => {}
        }
    }
}

/// Whether the delete action is offered for `user`. The signed-in account cannot
/// delete itself; the server enforces the same rule.
pub fn can_delete(user: &UserDto, current_username: Option<&str>) -> bool {
    !matches!(current_username, Some(name) if name == user.username)
}
