mod meta;
pub use self::meta::{ApiResponse, ErrorBody};

mod user;
pub use self::user::{AuthResponse, IdentifierKind, LoginRequest, RegisterRequest};
