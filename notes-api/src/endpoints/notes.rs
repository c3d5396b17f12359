use super::{MessageResponse, NoteId};
use crate::macros::setter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

// Common

/// A note as stored by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct AddNote {
    title: String,
    content: String,
}

impl AddNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

impl Request for AddNote {
    type Data = Self;
    type Response = NoteMutationResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/v1/note/add-note".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

#[derive(Default, Debug, Clone)]
pub struct ListNotes;

impl ListNotes {
    pub fn new() -> Self {
        Self
    }
}

impl Request for ListNotes {
    type Data = ();
    type Response = NotesResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/v1/note/get-notes".into()
    }
}

#[derive(Default, Debug, Clone, Serialize)]
pub struct UpdateNote {
    #[serde(skip)]
    id: NoteId,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

impl UpdateNote {
    pub fn new(id: NoteId) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    setter!(opt title: String);
    setter!(opt content: String);
}

impl Request for UpdateNote {
    type Data = Self;
    type Response = NoteMutationResponse;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/v1/note/update-note/{}", self.id).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

#[derive(Default, Debug, Clone)]
pub struct DeleteNote {
    id: NoteId,
}

impl DeleteNote {
    pub fn new(id: NoteId) -> Self {
        Self { id }
    }
}

impl Request for DeleteNote {
    type Data = ();
    type Response = MessageResponse;
    const METHOD: Method = Method::DELETE;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/v1/note/delete-note/{}", self.id).into()
    }
}

// Responses

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Vec<Note>,
}

/// Response to add/update. Servers that echo the stored note put it in
/// `data`; others only send a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteMutationResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Note>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_endpoints_embed_the_id() {
        let id = NoteId::from("665f1c2ab3e4");
        assert_eq!(
            UpdateNote::new(id.clone()).endpoint(),
            "/api/v1/note/update-note/665f1c2ab3e4"
        );
        assert_eq!(
            DeleteNote::new(id).endpoint(),
            "/api/v1/note/delete-note/665f1c2ab3e4"
        );
        assert_eq!(ListNotes::new().endpoint(), "/api/v1/note/get-notes");
        assert_eq!(AddNote::new("t", "c").endpoint(), "/api/v1/note/add-note");
    }

    #[test]
    fn update_body_only_carries_set_fields() {
        let req = UpdateNote::new(NoteId::from("n1")).title("New title");
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "New title" }));
    }

    #[test]
    fn notes_response_decodes_server_timestamps() {
        let json = r#"{
            "success": true,
            "data": [{
                "_id": "n1",
                "title": "Groceries",
                "content": "Milk, eggs",
                "userId": "u1",
                "createdAt": "2024-05-01T10:00:00.000Z",
                "updatedAt": "2024-05-02T08:30:00.000Z",
                "__v": 0
            }]
        }"#;
        let resp: NotesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.len(), 1);
        let note = &resp.data[0];
        assert_eq!(note.id, "n1");
        assert_eq!(note.title, "Groceries");
        assert!(note.updated_at > note.created_at);
    }

    #[test]
    fn mutation_response_without_echo() {
        let resp: NoteMutationResponse =
            serde_json::from_str(r#"{"success":true,"message":"Note created"}"#).unwrap();
        assert!(resp.data.is_none());
        assert_eq!(resp.message.as_deref(), Some("Note created"));
    }
}
