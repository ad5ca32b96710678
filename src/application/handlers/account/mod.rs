//! Account handlers: sign-up, sign-in, password reset and account status.

mod get_account;
mod password_reset;
mod sign_in;
mod sign_up;

pub use get_account::{AccountView, GetAccountHandler};
pub use password_reset::{
    ForgotPasswordCommand, ForgotPasswordHandler, ResetPasswordCommand, ResetPasswordHandler,
};
pub use sign_in::{SignInCommand, SignInHandler};
pub use sign_up::{SignUpCommand, SignUpHandler, SignUpResult};
