pub mod dispatch;
pub mod error;
pub mod handler;
pub mod kind;
pub mod render;
pub mod schema;
pub mod submission;
pub mod text;
pub mod value;

pub use dispatch::{Dispatcher, BACK_TO_FORM};
pub use error::{HandlerError, SchemaError, SchemaResult};
pub use handler::{CallArgs, FormHandler, HandlerFn, HandlerResult, Outcome};
pub use kind::{FieldKind, KindConfig, KindDecl, KindMap};
pub use schema::{extract_schema, FieldSpec, FormSchema, Signature};
pub use submission::{FieldValue, MemorySubmission, MemoryUpload, Submission, UploadedFile};
pub use value::{Record, ReturnValue, Scalar};
