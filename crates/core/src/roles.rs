//! Well-known role name constants.
//!
//! Tokens are issued by the external account service; the role claim must
//! carry one of these names.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
