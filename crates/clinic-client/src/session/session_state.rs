use crate::Credential;

/// What the session currently knows about the user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Credential),
}

impl SessionState {
    pub fn from_credential(credential: Option<Credential>) -> Self {
        match credential {
            Some(credential) => Self::Authenticated(credential),
            None => Self::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn credential(&self) -> Option<&Credential> {
        match self {
            Self::Authenticated(credential) => Some(credential),
            Self::Anonymous => None,
        }
    }
}
