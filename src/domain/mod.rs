pub mod contact_email;
pub mod contact_form;
pub mod notification;
pub mod submission;
pub mod topic_arn;

pub use contact_email::ContactEmail;
pub use contact_form::ContactForm;
pub use notification::{NotificationMessage, SubmittedAt};
pub use submission::{Submission, SubmissionError};
pub use topic_arn::TopicArn;
