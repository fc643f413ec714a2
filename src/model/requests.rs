/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/
use crate::constants::{
    DEFAULT_BIRTH_DATE, DEFAULT_ENABLED, DEFAULT_FIRST_NAME, DEFAULT_HINT_QUESTION, DEFAULT_LAST_NAME,
    DEFAULT_SEX,
};
use crate::utils::password::random_hint_answer;
use serde::{Deserialize, Serialize};

/// Profile fields for editing an existing mailbox
///
/// All fields are optional; only the set ones are sent to
/// `/api2/admin/email/add`'s sibling endpoint `/api2/admin/email/edit`.
/// When the edit is performed with autofill enabled, unset profile fields
/// are replaced by fixed placeholder values so the API accepts the record
/// (see [`MailboxEditRequest::into_params`]).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MailboxEditRequest {
    /// New mailbox password
    pub password: Option<String>,
    /// First name, wire field `iname`
    #[serde(rename = "iname")]
    pub first_name: Option<String>,
    /// Last name, wire field `fname`
    #[serde(rename = "fname")]
    pub last_name: Option<String>,
    /// Mailbox status, `"yes"` or `"no"`
    pub enabled: Option<String>,
    /// Date of birth, `YYYY-MM-DD`
    pub birth_date: Option<String>,
    /// Gender code, `"1"` male / `"2"` female
    pub sex: Option<String>,
    /// Secret question, wire field `hintq`
    #[serde(rename = "hintq")]
    pub hint_question: Option<String>,
    /// Answer to the secret question, wire field `hinta`
    #[serde(rename = "hinta")]
    pub hint_answer: Option<String>,
}

impl MailboxEditRequest {
    /// Creates an empty edit request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the new password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the first name
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the last name
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set the mailbox status
    pub fn with_enabled(mut self, enabled: impl Into<String>) -> Self {
        self.enabled = Some(enabled.into());
        self
    }

    /// Set the date of birth
    pub fn with_birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.birth_date = Some(birth_date.into());
        self
    }

    /// Set the gender code
    pub fn with_sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = Some(sex.into());
        self
    }

    /// Set the secret question
    pub fn with_hint_question(mut self, hint_question: impl Into<String>) -> Self {
        self.hint_question = Some(hint_question.into());
        self
    }

    /// Set the answer to the secret question
    pub fn with_hint_answer(mut self, hint_answer: impl Into<String>) -> Self {
        self.hint_answer = Some(hint_answer.into());
        self
    }

    /// Flattens the request into post parameters for the edit endpoint
    ///
    /// With `autofill` disabled only the fields that were set are emitted.
    /// With `autofill` enabled every profile field is emitted, unset ones
    /// taking the fixed placeholder defaults; the secret answer default is
    /// freshly generated per call and always starts with `3_`.
    ///
    /// # Arguments
    ///
    /// * `domain` - Domain that owns the mailbox
    /// * `login` - Mailbox login inside the domain
    /// * `autofill` - Whether to substitute defaults for unset profile fields
    ///
    /// # Returns
    ///
    /// Post parameters in wire naming (`iname`, `fname`, `hintq`, `hinta`)
    pub fn into_params(self, domain: &str, login: &str, autofill: bool) -> Vec<(&'static str, String)> {
        let mut params: Vec<(&'static str, String)> = vec![
            ("domain", domain.to_string()),
            ("login", login.to_string()),
        ];
        if let Some(password) = self.password {
            params.push(("password", password));
        }
        if autofill {
            params.push((
                "iname",
                self.first_name.unwrap_or_else(|| DEFAULT_FIRST_NAME.to_string()),
            ));
            params.push((
                "fname",
                self.last_name.unwrap_or_else(|| DEFAULT_LAST_NAME.to_string()),
            ));
            params.push((
                "enabled",
                self.enabled.unwrap_or_else(|| DEFAULT_ENABLED.to_string()),
            ));
            params.push((
                "birth_date",
                self.birth_date.unwrap_or_else(|| DEFAULT_BIRTH_DATE.to_string()),
            ));
            params.push(("sex", self.sex.unwrap_or_else(|| DEFAULT_SEX.to_string())));
            params.push((
                "hintq",
                self.hint_question
                    .unwrap_or_else(|| DEFAULT_HINT_QUESTION.to_string()),
            ));
            params.push(("hinta", self.hint_answer.unwrap_or_else(random_hint_answer)));
        } else {
            if let Some(first_name) = self.first_name {
                params.push(("iname", first_name));
            }
            if let Some(last_name) = self.last_name {
                params.push(("fname", last_name));
            }
            if let Some(enabled) = self.enabled {
                params.push(("enabled", enabled));
            }
            if let Some(birth_date) = self.birth_date {
                params.push(("birth_date", birth_date));
            }
            if let Some(sex) = self.sex {
                params.push(("sex", sex));
            }
            if let Some(hint_question) = self.hint_question {
                params.push(("hintq", hint_question));
            }
            if let Some(hint_answer) = self.hint_answer {
                params.push(("hinta", hint_answer));
            }
        }
        params
    }
}
