use super::MessageResponse;
use crate::macros::setter;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct SendOtp {
    email: String,
}

impl SendOtp {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl Request for SendOtp {
    type Data = Self;
    type Response = MessageResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/v1/user/send-otp".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

#[derive(Default, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signup {
    full_name: String,
    email: String,
    otp: String,
    dob: String,
}

impl Signup {
    pub fn new(email: impl Into<String>, otp: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            otp: otp.into(),
            ..Default::default()
        }
    }

    setter!(full_name: String);
    setter!(dob: String);
}

impl Request for Signup {
    type Data = Self;
    type Response = MessageResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/v1/user/signup".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

#[derive(Default, Debug, Clone, Serialize)]
pub struct Signin {
    email: String,
    otp: String,
}

impl Signin {
    pub fn new(email: impl Into<String>, otp: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            otp: otp.into(),
        }
    }
}

impl Request for Signin {
    type Data = Self;
    type Response = SigninResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/v1/user/signin".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

#[derive(Default, Debug, Clone)]
pub struct Signout;

impl Signout {
    pub fn new() -> Self {
        Self
    }
}

impl Request for Signout {
    type Data = ();
    type Response = MessageResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/v1/user/signout".into()
    }
}

// Responses

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub data: SigninData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninData {
    pub user: User,
    /// Present when the backend issues bearer tokens instead of (or in
    /// addition to) a session cookie.
    #[serde(default, alias = "accessToken")]
    pub token: Option<String>,
}
