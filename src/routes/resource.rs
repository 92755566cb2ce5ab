use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Entity type addressed by a request. Resolved once at the router boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Users,
    Jobs,
    Applications,
    Messages,
    Interviews,
    Responses,
    Login,
}

impl Resource {
    /// `None` and blank names select users.
    pub fn from_param(name: Option<&str>) -> Result<Self, Error> {
        match name.map(str::trim) {
            None | Some("") => Ok(Resource::Users),
            Some(name) => name.parse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Jobs => "jobs",
            Resource::Applications => "applications",
            Resource::Messages => "messages",
            Resource::Interviews => "interviews",
            Resource::Responses => "responses",
            Resource::Login => "login",
        }
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "users" => Ok(Resource::Users),
            "jobs" => Ok(Resource::Jobs),
            "applications" => Ok(Resource::Applications),
            "messages" => Ok(Resource::Messages),
            "interviews" => Ok(Resource::Interviews),
            "responses" => Ok(Resource::Responses),
            "login" => Ok(Resource::Login),
            _ => Err(Error::NotFound(format!("Resource not found: {}", s))),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
