use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub date: NaiveDate,
    pub time: String,
    pub client_name: String,
    pub client_phone: String,
    pub service: String,
    pub created_at: NaiveDateTime,
}

/// Raw booking form as submitted by the site widget. Validated into a
/// `NewBooking` before anything touches the schedule or the database.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_phone: String,
    #[serde(default)]
    pub service: String,
}

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub date: NaiveDate,
    pub time: String,
    pub client_name: String,
    pub client_phone: String,
    pub service: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

fn field_error(field: &'static str, message: &'static str) -> FieldError {
    FieldError { field, message }
}

impl BookingRequest {
    /// One error per offending field, first failing rule wins.
    pub fn validate(&self) -> Result<NewBooking, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.client_name.trim();
        let name_len = name.chars().count();
        if name_len < 3 {
            errors.push(field_error("client_name", "Nome deve ter no mínimo 3 caracteres"));
        } else if name_len > 100 {
            errors.push(field_error("client_name", "Nome deve ter no máximo 100 caracteres"));
        } else if !name.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
            errors.push(field_error("client_name", "Nome deve conter apenas letras"));
        }

        let phone = self.client_phone.trim();
        let phone_len = phone.chars().count();
        if !(10..=15).contains(&phone_len) {
            errors.push(field_error("client_phone", "Telefone inválido"));
        } else if !phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
        {
            errors.push(field_error(
                "client_phone",
                "Telefone deve conter apenas números e símbolos",
            ));
        }

        if self.service.is_empty() {
            errors.push(field_error("service", "Selecione um serviço"));
        } else if crate::models::service::find(&self.service).is_none() {
            errors.push(field_error("service", "Serviço inválido"));
        }

        let date = if self.date.is_empty() {
            errors.push(field_error("date", "Selecione uma data"));
            None
        } else {
            match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
                Ok(d) => Some(d),
                Err(_) => {
                    errors.push(field_error("date", "Data inválida"));
                    None
                }
            }
        };

        if self.time.is_empty() {
            errors.push(field_error("time", "Selecione um horário"));
        }

        let date = match date {
            Some(d) if errors.is_empty() => d,
            _ => return Err(errors),
        };

        Ok(NewBooking {
            date,
            time: self.time.clone(),
            client_name: name.to_string(),
            client_phone: phone.to_string(),
            service: self.service.clone(),
        })
    }
}
