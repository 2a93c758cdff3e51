//! Message handlers.

use axum::extract::State;
use std::sync::Arc;

use crate::service::{
    DeleteMessagesRequest, DeleteMessagesResponse, ListMessagesRequest, ListMessagesResponse,
    ReadNewMessagesRequest, ReadNewMessagesResponse, SendMessageRequest, SendMessageResponse,
};
use crate::web::error::ApiReply;
use crate::web::extract::RequestJson;
use crate::web::handlers::AppState;

/// POST /api/send_message - Deliver a message.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    RequestJson(request): RequestJson<SendMessageRequest>,
) -> ApiReply<SendMessageResponse> {
    ApiReply(state.service.send_message(&request).await)
}

/// POST /api/read_new_messages - Read the oldest unread messages.
pub async fn read_new_messages(
    State(state): State<Arc<AppState>>,
    RequestJson(request): RequestJson<ReadNewMessagesRequest>,
) -> ApiReply<ReadNewMessagesResponse> {
    ApiReply(state.service.read_new_messages(&request).await)
}

/// POST /api/list_messages - List read messages.
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    RequestJson(request): RequestJson<ListMessagesRequest>,
) -> ApiReply<ListMessagesResponse> {
    ApiReply(state.service.list_messages(&request).await)
}

/// POST /api/delete_messages - Delete messages by mailbox position.
pub async fn delete_messages(
    State(state): State<Arc<AppState>>,
    RequestJson(request): RequestJson<DeleteMessagesRequest>,
) -> ApiReply<DeleteMessagesResponse> {
    ApiReply(state.service.delete_messages(&request).await)
}
