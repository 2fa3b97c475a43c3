/*
 * Responsibility
 * - Create-note request built from form values
 * - Only presence is checked; empty strings are accepted
 */
use crate::api::extractors::FormValues;
use crate::error::AppError;
use crate::models::Note;

#[derive(Debug, PartialEq, Eq)]
pub struct CreateNoteRequest {
    pub text: String,
    pub user: String,
}

impl CreateNoteRequest {
    pub fn from_form(form: &FormValues) -> Result<Self, AppError> {
        let text = form.first("text").ok_or(AppError::MissingField("text"))?;
        let user = form.first("user").ok_or(AppError::MissingField("user"))?;

        Ok(Self {
            text: text.to_owned(),
            user: user.to_owned(),
        })
    }

    /// The server assigns `when`; clients never supply it.
    pub fn into_note(self) -> Note {
        Note::new(self.text, self.user)
    }
}
