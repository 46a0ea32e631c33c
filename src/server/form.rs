//! Form decoding shared by every evaluate route.
//!
//! Field policy, identical for all deployments: an absent or blank field reads as zero,
//! surrounding whitespace is ignored, and any other text that does not parse as the
//! expected number type is rejected with `CalcError::InvalidField`.

use super::error::ApiError;
use crate::error::CalcError;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, async_trait};
use std::collections::HashMap;
use std::str::FromStr;

/// Text fields of a submitted form, first value per name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Reads a real-valued field.
    pub fn real(&self, name: &str) -> Result<f64, CalcError> {
        parse_field(name, self.get(name))
    }

    /// Reads an integer field.
    pub fn whole(&self, name: &str) -> Result<i64, CalcError> {
        parse_field(name, self.get(name))
    }
}

/// Applies the field policy to one raw value.
pub fn parse_field<T>(name: &str, raw: Option<&str>) -> Result<T, CalcError>
where
    T: FromStr + Default,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(text) => text.parse().map_err(|_| CalcError::InvalidField {
            field: name.to_string(),
            value: text.to_string(),
        }),
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::malformed(rejection.to_string()))?;

            let mut fields = HashMap::new();
            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(|e| ApiError::malformed(e.to_string()))?
            {
                let Some(name) = field.name().map(str::to_owned) else {
                    continue;
                };
                // Uploaded files are not form values.
                if field.file_name().is_some() {
                    continue;
                }
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::malformed(e.to_string()))?;
                fields.entry(name).or_insert(value);
            }
            Ok(Self(fields))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::malformed(rejection.to_string()))?;

            let mut fields = HashMap::new();
            for (name, value) in pairs {
                fields.entry(name).or_insert(value);
            }
            Ok(Self(fields))
        } else {
            Err(ApiError::malformed(format!(
                "unsupported content type '{content_type}'"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_blank_fields_read_as_zero() {
        let fields = FormFields::from_pairs([("ash", ""), ("sulfur", "   ")]);
        assert_eq!(fields.real("ash").unwrap(), 0.0);
        assert_eq!(fields.real("sulfur").unwrap(), 0.0);
        assert_eq!(fields.real("nitrogen").unwrap(), 0.0);
        assert_eq!(fields.whole("t110Q").unwrap(), 0);
    }

    #[test]
    fn test_numbers_parse_with_surrounding_whitespace() {
        let fields = FormFields::from_pairs([("carbon", " 52.5 "), ("t110Q", "3"), ("pm", "-1e3")]);
        assert_eq!(fields.real("carbon").unwrap(), 52.5);
        assert_eq!(fields.whole("t110Q").unwrap(), 3);
        assert_eq!(fields.real("pm").unwrap(), -1000.0);
    }

    #[test]
    fn test_garbage_is_rejected_with_field_name() {
        let fields = FormFields::from_pairs([("carbon", "fifty")]);
        let err = fields.real("carbon").unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidField { ref field, ref value } if field == "carbon" && value == "fifty"
        ));
    }

    #[test]
    fn test_fractional_count_is_rejected() {
        let fields = FormFields::from_pairs([("t110Q", "1.5")]);
        assert!(fields.whole("t110Q").is_err());
    }
}
