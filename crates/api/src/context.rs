/// Admin context for a request on the price panel.
///
/// Inserted by the auth middleware once the bearer token checks out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminContext {
    username: String,
}

impl AdminContext {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
