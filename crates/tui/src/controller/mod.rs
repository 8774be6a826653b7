//! Item manager state and its transitions.
//!
//! User actions arrive as [`Command`]s. [`dispatch`] applies the local part
//! of a command and returns the [`Request`] to send, if any. The result of
//! that request comes back as an [`Outcome`] and is projected onto the state
//! by [`apply`]. The collection is only ever changed by these projections,
//! never by a blind re-fetch.

use api_types::item::{Item, ItemDraft, ItemId};

use crate::client::{ClientError, ItemStore};

/// Form mode, derived from the item being edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Create,
    Update(ItemId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Description => "Description",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Mirror of the remote collection, in server order.
    pub items: Vec<Item>,
    pub draft: ItemDraft,
    pub mode: Mode,
}

impl ViewState {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.draft.name,
            Field::Description => &self.draft.description,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Initialize,
    EditField(Field, String),
    /// Form submission; routed by the current mode.
    Submit,
    SubmitCreate,
    SubmitUpdate,
    BeginEdit(Item),
    CancelEdit,
    DeleteItem(ItemId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    ListAll,
    Create(ItemDraft),
    Replace(ItemId, ItemDraft),
    Delete(ItemId),
}

#[derive(Debug)]
pub enum Outcome {
    Listed(Result<Vec<Item>, ClientError>),
    Created(Result<Item, ClientError>),
    Replaced(ItemId, Result<Item, ClientError>),
    Deleted(ItemId, Result<(), ClientError>),
}

pub fn dispatch(mut state: ViewState, command: Command) -> (ViewState, Option<Request>) {
    match command {
        Command::Initialize => (state, Some(Request::ListAll)),
        Command::EditField(field, value) => {
            match field {
                Field::Name => state.draft.name = value,
                Field::Description => state.draft.description = value,
            }
            (state, None)
        }
        Command::Submit => match state.mode {
            Mode::Create => dispatch(state, Command::SubmitCreate),
            Mode::Update(_) => dispatch(state, Command::SubmitUpdate),
        },
        Command::SubmitCreate => {
            if !state.draft.is_complete() {
                return (state, None);
            }
            if let Mode::Update(id) = &state.mode {
                tracing::debug!("ignoring create while editing item {id}");
                return (state, None);
            }
            let request = Request::Create(state.draft.clone());
            (state, Some(request))
        }
        Command::SubmitUpdate => {
            if !state.draft.is_complete() {
                return (state, None);
            }
            let Mode::Update(id) = &state.mode else {
                tracing::debug!("ignoring update without an item being edited");
                return (state, None);
            };
            let request = Request::Replace(id.clone(), state.draft.clone());
            (state, Some(request))
        }
        Command::BeginEdit(item) => {
            state.draft = item.draft();
            state.mode = Mode::Update(item.id);
            (state, None)
        }
        Command::CancelEdit => {
            if state.mode != Mode::Create {
                state.mode = Mode::Create;
                state.draft = ItemDraft::default();
            }
            (state, None)
        }
        Command::DeleteItem(id) => (state, Some(Request::Delete(id))),
    }
}

/// Projects the result of a request onto the state.
///
/// Failures are logged and leave the state untouched.
pub fn apply(mut state: ViewState, outcome: Outcome) -> ViewState {
    match outcome {
        Outcome::Listed(Ok(items)) => {
            state.items = items;
        }
        Outcome::Listed(Err(err)) => {
            tracing::error!("error fetching items: {err}");
        }
        Outcome::Created(Ok(item)) => {
            state.items.push(item);
            state.draft = ItemDraft::default();
        }
        Outcome::Created(Err(err)) => {
            tracing::error!("error adding item: {err}");
        }
        Outcome::Replaced(id, Ok(updated)) => {
            for item in state.items.iter_mut().filter(|item| item.id == id) {
                *item = updated.clone();
            }
            state.mode = Mode::Create;
            state.draft = ItemDraft::default();
        }
        Outcome::Replaced(id, Err(err)) => {
            tracing::error!("error updating item {id}: {err}");
        }
        Outcome::Deleted(id, Ok(())) => {
            state.items.retain(|item| item.id != id);
        }
        Outcome::Deleted(id, Err(err)) => {
            tracing::error!("error deleting item {id}: {err}");
        }
    }
    state
}

/// Performs one round trip against the store.
pub async fn execute<S: ItemStore>(store: &S, request: Request) -> Outcome {
    match request {
        Request::ListAll => Outcome::Listed(store.list_all().await),
        Request::Create(draft) => Outcome::Created(store.create(&draft).await),
        Request::Replace(id, draft) => {
            let result = store.replace(&id, &draft).await;
            Outcome::Replaced(id, result)
        }
        Request::Delete(id) => {
            let result = store.delete(&id).await;
            Outcome::Deleted(id, result)
        }
    }
}
