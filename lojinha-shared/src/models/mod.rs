pub mod catalog;
pub mod errors;
pub mod user;

pub use catalog::{Category, Product};
pub use errors::ErrorResponse;
pub use user::{
    ForgotPasswordRequest, ForgotPasswordResponse, LoginRequest, LoginResponse, MfaRequest,
    MfaResponse, RecoveryCodeRequest, RecoveryCodeResponse, ResetPasswordRequest, SessionResponse,
    SignupRequest, UpdateUserRequest, User, UserRole,
};
