use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Claims carried by a bearer token.
///
/// Tokens issued at registration carry the administrator's full name, tokens
/// issued at login do not. The `kind` tag keeps the two payloads apart so a
/// handler never reads a field the token was not issued with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Claims {
    Admin(AdminClaims),
    Session(SessionClaims),
}

/// Issued by `POST /register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminClaims {
    pub full_name: String,
    pub email: String,
    pub id: i64,
    pub iat: i64,
}

/// Issued by `POST /login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub email: String,
    pub id: i64,
    pub iat: i64,
}

impl AdminClaims {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>, id: i64) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            id,
            iat: Utc::now().timestamp(),
        }
    }
}

impl SessionClaims {
    pub fn new(email: impl Into<String>, id: i64) -> Self {
        Self {
            email: email.into(),
            id,
            iat: Utc::now().timestamp(),
        }
    }
}

impl Claims {
    pub fn email(&self) -> &str {
        match self {
            Claims::Admin(claims) => &claims.email,
            Claims::Session(claims) => &claims.email,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Claims::Admin(claims) => claims.id,
            Claims::Session(claims) => claims.id,
        }
    }

    /// Only registration tokens carry a name
    pub fn full_name(&self) -> Option<&str> {
        match self {
            Claims::Admin(claims) => Some(&claims.full_name),
            Claims::Session(_) => None,
        }
    }
}

impl From<AdminClaims> for Claims {
    fn from(claims: AdminClaims) -> Self {
        Claims::Admin(claims)
    }
}

impl From<SessionClaims> for Claims {
    fn from(claims: SessionClaims) -> Self {
        Claims::Session(claims)
    }
}
