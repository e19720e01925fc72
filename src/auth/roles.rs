//! Role codes shared by organization, team, and project memberships.

/// Role code as issued by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrgRole {
    Admin,
    Member,
    Observer,
}

impl OrgRole {
    /// Parse a role code. Unknown codes fall back to `Observer`, the least
    /// privileged role.
    pub fn from_code(code: &str) -> Self {
        match code {
            "admin" => Self::Admin,
            "member" => Self::Member,
            _ => Self::Observer,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Observer => "observer",
        }
    }
}

#[cfg(test)]
#[path = "roles_test.rs"]
mod tests;
