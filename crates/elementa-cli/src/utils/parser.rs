use elementa::workflows::mix::Portion;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid portion '{0}'. Expected 'id' or 'id:concentration' (e.g. 'hcl:0.5').")]
    InvalidPortionFormat(String),

    #[error("Invalid concentration '{value}' in portion '{portion}'.")]
    InvalidConcentration { portion: String, value: String },

    #[error("Component '{component}' cannot be empty in '{input}'.")]
    EmptyComponent {
        component: &'static str,
        input: String,
    },
}

/// Parses `id` or `id:concentration`.
pub fn parse_portion(input: &str) -> Result<Portion, ParseError> {
    let trimmed = input.trim();
    let mut parts = trimmed.split(':');
    let id = parts.next().unwrap_or_default().trim();
    let concentration = parts.next().map(str::trim);
    if parts.next().is_some() {
        return Err(ParseError::InvalidPortionFormat(input.to_string()));
    }
    if id.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "id",
            input: input.to_string(),
        });
    }

    match concentration {
        None => Ok(Portion::new(id)),
        Some("") => Err(ParseError::EmptyComponent {
            component: "concentration",
            input: input.to_string(),
        }),
        Some(value) => value
            .parse::<f64>()
            .ok()
            .filter(|c| !c.is_nan())
            .map(|c| Portion::with_concentration(id, c))
            .ok_or_else(|| ParseError::InvalidConcentration {
                portion: input.to_string(),
                value: value.to_string(),
            }),
    }
}

pub fn parse_portions(inputs: &[String]) -> Result<Vec<Portion>, ParseError> {
    inputs.iter().map(|s| parse_portion(s)).collect()
}

/// Interprets a query as an atomic number when it is all digits, otherwise as a symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementQuery<'a> {
    Number(u8),
    Symbol(&'a str),
}

pub fn parse_element_query(input: &str) -> ElementQuery<'_> {
    let trimmed = input.trim();
    match trimmed.parse::<u8>() {
        Ok(n) => ElementQuery::Number(n),
        Err(_) => ElementQuery::Symbol(trimmed),
    }
}
