use crate::endpoints::{
    NoteId,
    notes::{AddNote, DeleteNote, ListNotes, UpdateNote},
    users::{SendOtp, Signin, Signout, Signup},
};

pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn send_otp(&self, email: impl Into<String>) -> SendOtp {
        SendOtp::new(email)
    }

    pub fn signup(
        &self,
        full_name: impl Into<String>,
        email: impl Into<String>,
        otp: impl Into<String>,
        dob: impl Into<String>,
    ) -> Signup {
        Signup::new(email, otp).full_name(full_name).dob(dob)
    }

    pub fn signin(&self, email: impl Into<String>, otp: impl Into<String>) -> Signin {
        Signin::new(email, otp)
    }

    pub fn signout(&self) -> Signout {
        Signout::new()
    }
}

pub struct NoteRepository;

impl NoteRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn add(&self, title: impl Into<String>, content: impl Into<String>) -> AddNote {
        AddNote::new(title, content)
    }

    pub fn list(&self) -> ListNotes {
        ListNotes::new()
    }

    pub fn update(&self, id: NoteId) -> UpdateNote {
        UpdateNote::new(id)
    }

    pub fn delete(&self, id: NoteId) -> DeleteNote {
        DeleteNote::new(id)
    }
}
