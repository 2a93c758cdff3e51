//! Request/response contract for Postbox.
//!
//! One request struct in, one response struct out per operation,
//! independent of any wire format.

mod chat;
pub mod request;
pub mod response;

pub use chat::ChatService;
pub use request::{
    CreateAccountRequest, DeleteAccountRequest, DeleteMessagesRequest, ListAccountsRequest,
    ListMessagesRequest, LoginRequest, ReadNewMessagesRequest, SendMessageRequest,
};
pub use response::{
    CreateAccountResponse, DeleteAccountResponse, DeleteMessagesResponse, ListAccountsResponse,
    ListMessagesResponse, LoginResponse, MessagesResponse, ReadNewMessagesResponse,
    SendMessageResponse, StatusResponse,
};
