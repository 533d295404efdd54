pub mod upload_policy;

pub use upload_policy::UploadPolicy;
