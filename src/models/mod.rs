// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::UploadedFile;
pub use requests::{AuthRequest, QuestionRequest, SymptomRequest};
pub use responses::{
    AuthResponse, ErrorResponse, QuestionResponse, SignupResponse, StatusResponse,
    SymptomResponse, UploadResponse,
};
