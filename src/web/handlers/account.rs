//! Account handlers.

use axum::extract::State;
use std::sync::Arc;

use crate::service::{
    CreateAccountRequest, CreateAccountResponse, DeleteAccountRequest, DeleteAccountResponse,
    ListAccountsRequest, ListAccountsResponse, LoginRequest, LoginResponse,
};
use crate::web::error::ApiReply;
use crate::web::extract::RequestJson;
use crate::web::handlers::AppState;

/// POST /api/create_account - Register a new account.
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    RequestJson(request): RequestJson<CreateAccountRequest>,
) -> ApiReply<CreateAccountResponse> {
    ApiReply(state.service.create_account(&request).await)
}

/// POST /api/login - Check credentials and report unread count.
pub async fn login(
    State(state): State<Arc<AppState>>,
    RequestJson(request): RequestJson<LoginRequest>,
) -> ApiReply<LoginResponse> {
    ApiReply(state.service.login(&request).await)
}

/// POST /api/list_accounts - Search usernames.
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
    RequestJson(request): RequestJson<ListAccountsRequest>,
) -> ApiReply<ListAccountsResponse> {
    ApiReply(state.service.list_accounts(&request).await)
}

/// POST /api/delete_account - Remove an account and its mailbox.
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    RequestJson(request): RequestJson<DeleteAccountRequest>,
) -> ApiReply<DeleteAccountResponse> {
    ApiReply(state.service.delete_account(&request).await)
}
